//! # Clock Face Core Library
//!
//! Geometry for a decorative analog clock with an optional digital readout.
//! The library owns no drawing surface: it turns a configuration and a
//! wall-clock instant into angles, radii and text positions, and leaves the
//! drawing to a host.
//!
//! ## Redraw Cycle
//! 1. **Setup**: [`ClockModel::configure`] validates options, then
//!    [`ClockModel::static_geometry`] yields the bezel, ticks, numerals and
//!    highlighted ranges, drawn once
//! 2. **Every second**: [`ClockModel::tick`] yields fresh hand angles and, in
//!    digital mode, the formatted time
//! 3. **Shutdown**: the host stops ticking; the model holds no resources
//!
//! ## Front-ends
//! - [`renderer`]: `embedded-graphics` targets (e-ink panels, mock displays)
//!   and an ASCII preview for terminals
//! - [`svg`]: the widget's SVG markup for one frame
//!
//! # Example
//! ```
//! use chrono::NaiveDate;
//! use clock_face_lib::{ClockConfig, ClockModel, Range};
//!
//! let config = ClockConfig::default()
//!     .with_size(300.0, 300.0)
//!     .with_range(Range::new("06:00", "12:00").with_label("Morning"));
//! let mut model = ClockModel::configure(&config)?.enable_digital_caption();
//!
//! let face = model.static_geometry();
//! assert_eq!(face.radius, 145.0);
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 30)
//!     .unwrap();
//! let frame = model.tick(now);
//! assert!((frame.hands.second_rad - std::f64::consts::PI).abs() < 1e-12);
//! assert_eq!(frame.digital_text.as_deref(), Some("00:00:30"));
//! # Ok::<(), clock_face_lib::ClockError>(())
//! ```

use thiserror::Error;

pub mod clock;
pub mod config;
pub mod geometry;
pub mod renderer;
pub mod svg;
pub mod time_of_day;
pub mod time_source;

#[cfg(test)]
mod tests;

pub use clock::{ClockModel, ClockPhase, ClockState};
pub use config::{ClockConfig, Range, Variant};
pub use geometry::{HandAngles, StaticGeometry, TickFrame};
pub use time_of_day::TimeOfDay;
pub use time_source::{FixedClock, ManualClock, SystemClock, TimeSource};

/// Errors raised while configuring a clock.
///
/// Both are reported synchronously by
/// [`ClockModel::configure`] and [`ClockModel::reconfigure`]; nothing after
/// configuration can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClockError {
    /// Dimensions, labels, format pattern or arc styling are unusable
    #[error("invalid clock configuration: {0}")]
    InvalidConfig(String),

    /// A highlighted range bound is not `HH:MM` or `HH:MM:SS`
    #[error("invalid time of day {value:?}, expected HH:MM or HH:MM:SS")]
    InvalidRangeFormat { value: String },
}
