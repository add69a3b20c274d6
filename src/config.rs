//! # Configuration Management
//!
//! Two layers live here:
//! - [`ClockConfig`] and [`Range`]: the options a host passes to
//!   [`ClockModel::configure`](crate::clock::ClockModel::configure). Every field is
//!   optional; the selected [`Variant`] supplies the defaults.
//! - [`Config`]: the application file `clock-config.toml`, which wraps a
//!   `ClockConfig` together with runtime settings for the host loop.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "clock-config.toml";

/// Default digital readout pattern (chrono strftime syntax).
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Default range arc colour when a range does not name one.
pub const DEFAULT_RANGE_COLOR: &str = "orange";

/// Default range arc opacity.
pub const DEFAULT_RANGE_OPACITY: f64 = 0.5;

/// Default radial thickness of a range arc in pixels.
pub const DEFAULT_RANGE_WIDTH_PX: f64 = 10.0;

/// Widget generation whose defaults should apply to unset options.
///
/// The legacy widget sized itself to a 200px box and drew a bare dial; the
/// current one uses a 300px box with the bezel and numerals on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Legacy,
    #[default]
    Current,
}

impl Variant {
    /// Face width and height used when none is configured.
    pub fn default_face_size(self) -> f64 {
        match self {
            Variant::Legacy => 200.0,
            Variant::Current => 300.0,
        }
    }

    pub fn default_show_main_circle(self) -> bool {
        matches!(self, Variant::Current)
    }

    pub fn default_show_hours(self) -> bool {
        matches!(self, Variant::Current)
    }
}

/// A highlighted interval on the dial, e.g. office hours.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Range {
    /// Start time, `HH:MM` or `HH:MM:SS`
    pub start: String,
    /// End time, `HH:MM` or `HH:MM:SS`
    pub end: String,
    /// Tooltip text shown by the host on hover
    pub label: Option<String>,
    pub color: Option<String>,
    /// Fill opacity in `[0, 1]`
    pub opacity: Option<f64>,
    /// Radial thickness in pixels
    pub width_px: Option<f64>,
}

impl Range {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_width_px(mut self, width_px: f64) -> Self {
        self.width_px = Some(width_px);
        self
    }
}

/// Options accepted by the clock model.
///
/// Unset or zero dimensions fall back to the variant's face size. Flags left
/// unset take the variant default.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClockConfig {
    pub variant: Variant,
    /// Drawing surface width in pixels
    pub face_width: Option<f64>,
    /// Drawing surface height in pixels
    pub face_height: Option<f64>,
    /// Draw the bezel circle
    pub show_main_circle: Option<bool>,
    /// Draw the hour numerals
    pub show_hours: Option<bool>,
    /// Exactly twelve labels, starting at the 12 o'clock position
    pub hour_labels: Option<Vec<String>>,
    /// strftime pattern for the digital readout
    pub time_format: Option<String>,
    pub highlighted_ranges: Vec<Range>,
}

impl ClockConfig {
    /// Defaults of the given widget generation, nothing overridden.
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.face_width = Some(width);
        self.face_height = Some(height);
        self
    }

    pub fn with_main_circle(mut self, show: bool) -> Self {
        self.show_main_circle = Some(show);
        self
    }

    pub fn with_hours(mut self, show: bool) -> Self {
        self.show_hours = Some(show);
        self
    }

    pub fn with_hour_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hour_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = Some(format.into());
        self
    }

    pub fn with_range(mut self, range: Range) -> Self {
        self.highlighted_ranges.push(range);
        self
    }
}

/// Default hour numerals: 12 at the top, then 1 through 11 clockwise.
pub fn default_hour_labels() -> Vec<String> {
    std::iter::once(12)
        .chain(1..12)
        .map(|h| h.to_string())
        .collect()
}

/// Application configuration loaded from clock-config.toml
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Clock face options
    pub clock: ClockConfig,
    /// Host loop settings
    pub runtime: RuntimeConfig,
}

/// Host loop configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Redraw period in milliseconds
    pub tick_interval_ms: u64,
    /// Turn the digital readout on at startup
    pub digital_caption: bool,
    /// Static caption drawn when the digital readout is off
    pub caption: Option<String>,
    /// Hyperlink attached to the static caption
    pub caption_link: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            tick_interval_ms: 1000,
            digital_caption: false,
            caption: None,
            caption_link: None,
        }
    }
}

impl Config {
    /// Load configuration from clock-config.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    log::info!(
                        "Loaded clock configuration from {} ({} highlighted ranges)",
                        path.display(),
                        config.clock.highlighted_ranges.len()
                    );
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config file format in {}: {}", path.display(), e);
                    log::warn!("Using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!(
                    "No config file found at {}, using default configuration",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Save current configuration to the given path
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        log::info!("Configuration saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Save current configuration to clock-config.toml
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(CONFIG_FILE)
    }
}
