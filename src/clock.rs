//! # Clock Model
//!
//! Maps wall-clock time onto dial geometry. A host configures the model once,
//! asks for [`StaticGeometry`] to draw the parts that never move, then calls
//! [`ClockModel::tick`] every second and redraws the hands from the returned
//! [`TickFrame`].
//!
//! ## Angle Conventions
//! - **Second hand**: the 60 seconds of the current minute span `[0, 2π)`
//! - **Minute hand**: the 3600 seconds of the current hour span `[0, 2π)`
//! - **Hour hand**: the 86400 seconds of the day span `[0, 4π)`, so the hand
//!   goes round twice a day and the angle keeps growing through noon
//! - **Range arcs** use the same 4π/24h scale as the hour hand
//!
//! ## Failure Semantics
//! [`ClockModel::configure`] and [`ClockModel::reconfigure`] validate
//! everything up front. Reconfiguration is atomic: a rejected config leaves
//! the model exactly as it was. [`ClockModel::tick`] cannot fail.

use crate::config::{
    default_hour_labels, ClockConfig, Range, DEFAULT_RANGE_COLOR, DEFAULT_RANGE_OPACITY,
    DEFAULT_RANGE_WIDTH_PX, DEFAULT_TIME_FORMAT,
};
use crate::geometry::{
    polar, CaptionLayout, CaptionSlot, HandAngles, HandGeometry, HandKind, HourLabel, Point2,
    RangeArc, StaticGeometry, Tick, TickFrame, TickKind,
};
use crate::time_of_day::TimeOfDay;
use crate::time_source::TimeSource;
use crate::ClockError;
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use std::f64::consts::TAU;
use std::fmt::Write;

/// Gap between the face edge and the bezel, in pixels.
pub const FACE_MARGIN: f64 = 5.0;

/// Radius of the dot covering the hand pivot.
pub const CENTER_RADIUS: f64 = 7.0;

/// Hour ticks at 12, 3, 6 and 9 o'clock reach this far in from the bezel.
const CARDINAL_TICK_LENGTH: f64 = 30.0;
const HOUR_TICK_LENGTH: f64 = 20.0;
const MINUTE_TICK_LENGTH: f64 = 10.0;

/// Vertical nudge that centers a numeral's baseline on its tick.
const HOUR_LABEL_BASELINE_OFFSET: f64 = 6.0;

/// Lifecycle of a model instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockPhase {
    /// Configured but not ticked yet
    Configured,
    /// At least one tick has been computed
    Running,
}

/// A validated highlighted range.
#[derive(Clone, Debug, PartialEq)]
struct ResolvedRange {
    start: TimeOfDay,
    end: TimeOfDay,
    label: Option<String>,
    color: String,
    opacity: f64,
    width_px: f64,
}

/// Configuration after defaults and validation.
#[derive(Clone, Debug, PartialEq)]
struct FaceSettings {
    width: f64,
    height: f64,
    show_main_circle: bool,
    show_hours: bool,
    hour_labels: Vec<String>,
    time_format: String,
    ranges: Vec<ResolvedRange>,
}

/// Mutable per-instance state.
#[derive(Clone, Debug, PartialEq)]
pub struct ClockState {
    radius: f64,
    center_radius: f64,
    digit_mode_enabled: bool,
    caption_text: Option<String>,
    caption_link: Option<String>,
    ticks_seen: u64,
}

impl ClockState {
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center_radius(&self) -> f64 {
        self.center_radius
    }

    pub fn digit_mode_enabled(&self) -> bool {
        self.digit_mode_enabled
    }

    pub fn caption_text(&self) -> Option<&str> {
        self.caption_text.as_deref()
    }

    pub fn caption_link(&self) -> Option<&str> {
        self.caption_link.as_deref()
    }

    /// Number of redraw steps computed so far.
    pub fn ticks_seen(&self) -> u64 {
        self.ticks_seen
    }
}

/// Clock face model: configuration plus tick-driven state.
#[derive(Clone, Debug)]
pub struct ClockModel {
    settings: FaceSettings,
    state: ClockState,
}

impl ClockModel {
    /// Validate `config`, apply variant defaults and build a model.
    ///
    /// # Errors
    /// - [`ClockError::InvalidConfig`] for negative or non-finite dimensions,
    ///   a face whose radius is shorter than the longest hour tick, a label list that is not
    ///   twelve long, an unusable time format, or out-of-range arc styling
    /// - [`ClockError::InvalidRangeFormat`] for a range bound that is not
    ///   `HH:MM` or `HH:MM:SS`
    pub fn configure(config: &ClockConfig) -> Result<Self, ClockError> {
        let settings = resolve(config)?;
        let state = ClockState {
            radius: face_radius(settings.width, settings.height),
            center_radius: CENTER_RADIUS,
            digit_mode_enabled: false,
            caption_text: None,
            caption_link: None,
            ticks_seen: 0,
        };
        log::debug!(
            "Configured {}x{} clock face (radius {}, {} ranges)",
            settings.width,
            settings.height,
            state.radius,
            settings.ranges.len()
        );
        Ok(Self { settings, state })
    }

    /// Replace the configuration in place. On error nothing changes.
    ///
    /// Caption and digital mode carry over; the radius is recomputed.
    pub fn reconfigure(&mut self, config: &ClockConfig) -> Result<(), ClockError> {
        let settings = resolve(config)?;
        self.state.radius = face_radius(settings.width, settings.height);
        self.settings = settings;
        Ok(())
    }

    /// Turn on the tick-driven digital readout.
    pub fn enable_digital_caption(mut self) -> Self {
        self.show_digital_caption();
        self
    }

    /// Record a static caption. An empty `link` means no hyperlink.
    pub fn set_caption(mut self, text: impl Into<String>, link: impl Into<String>) -> Self {
        self.replace_caption(text, link);
        self
    }

    /// In-place form of [`enable_digital_caption`](Self::enable_digital_caption).
    pub fn show_digital_caption(&mut self) {
        self.state.digit_mode_enabled = true;
    }

    /// In-place form of [`set_caption`](Self::set_caption).
    pub fn replace_caption(&mut self, text: impl Into<String>, link: impl Into<String>) {
        let link = link.into();
        self.state.caption_text = Some(text.into());
        self.state.caption_link = (!link.is_empty()).then_some(link);
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn phase(&self) -> ClockPhase {
        if self.state.ticks_seen == 0 {
            ClockPhase::Configured
        } else {
            ClockPhase::Running
        }
    }

    pub fn radius(&self) -> f64 {
        self.state.radius
    }

    pub fn width(&self) -> f64 {
        self.settings.width
    }

    pub fn height(&self) -> f64 {
        self.settings.height
    }

    pub fn time_format(&self) -> &str {
        &self.settings.time_format
    }

    /// Bezel, ticks, numerals and range arcs. Depends only on configuration.
    pub fn static_geometry(&self) -> StaticGeometry {
        let radius = self.state.radius;

        let hour_inner = |index: usize| {
            if index % 3 == 0 {
                radius - CARDINAL_TICK_LENGTH
            } else {
                radius - HOUR_TICK_LENGTH
            }
        };

        let mut ticks = Vec::with_capacity(72);
        for index in 0..12 {
            let inner_radius = hour_inner(index);
            ticks.push(Tick {
                kind: TickKind::Hour,
                angle_rad: degrees(index as f64 * 30.0),
                inner_radius,
                length_ratio: inner_radius / radius,
                stroke_width: 3.0,
            });
        }
        for index in 0..60 {
            let inner_radius = radius - MINUTE_TICK_LENGTH;
            ticks.push(Tick {
                kind: TickKind::Minute,
                angle_rad: degrees(index as f64 * 6.0),
                inner_radius,
                length_ratio: inner_radius / radius,
                stroke_width: 1.0,
            });
        }

        let hour_labels = self.settings.show_hours.then(|| {
            self.settings
                .hour_labels
                .iter()
                .enumerate()
                .map(|(index, label)| {
                    let angle_rad = degrees(index as f64 * 30.0);
                    let inner = hour_inner(index);
                    let anchor = polar(inner * inner / radius, angle_rad);
                    HourLabel {
                        angle_rad,
                        label: label.clone(),
                        position: Point2::new(anchor.x, anchor.y + HOUR_LABEL_BASELINE_OFFSET),
                    }
                })
                .collect()
        });

        let range_arcs = self
            .settings
            .ranges
            .iter()
            .map(|range| range_arc(range, radius))
            .collect();

        StaticGeometry {
            width: self.settings.width,
            height: self.settings.height,
            radius,
            bezel_radius: self.settings.show_main_circle.then_some(radius),
            center_radius: self.state.center_radius,
            ticks,
            hour_labels,
            range_arcs,
        }
    }

    /// Compute hand angles for `now` and, in digital mode, the readout text.
    pub fn tick(&mut self, now: NaiveDateTime) -> TickFrame {
        let hands = hand_angles(now);
        let digital_text = if self.state.digit_mode_enabled {
            format_time(now, &self.settings.time_format)
        } else {
            None
        };
        self.state.ticks_seen += 1;
        TickFrame {
            hands,
            digital_text,
        }
    }

    /// [`tick`](Self::tick) with the instant taken from `source`.
    pub fn tick_from(&mut self, source: &dyn TimeSource) -> TickFrame {
        self.tick(source.now())
    }

    /// Radial segments for the hour, minute and second hands, in draw order.
    pub fn hand_geometry(&self, hands: &HandAngles) -> [HandGeometry; 3] {
        let radius = self.state.radius;
        let inner_radius = self.state.center_radius;
        [
            HandGeometry {
                kind: HandKind::Hour,
                angle_rad: hands.hour_rad,
                inner_radius,
                outer_radius: radius / 2.3,
                stroke_width: 5.0,
                accent: false,
            },
            HandGeometry {
                kind: HandKind::Minute,
                angle_rad: hands.minute_rad,
                inner_radius,
                outer_radius: radius / 1.5,
                stroke_width: 3.0,
                accent: false,
            },
            HandGeometry {
                kind: HandKind::Second,
                angle_rad: hands.second_rad,
                inner_radius,
                outer_radius: radius / 1.2,
                stroke_width: 1.0,
                accent: true,
            },
        ]
    }

    /// Captions to draw alongside `frame`: the static caption if one was
    /// set, then the digital readout if the frame carries one.
    pub fn caption_layout(&self, frame: &TickFrame) -> Vec<CaptionLayout> {
        let x = self.settings.width / 2.0;
        let radius = self.state.radius;
        let mut captions = Vec::with_capacity(2);

        if let Some(text) = &self.state.caption_text {
            captions.push(CaptionLayout {
                slot: CaptionSlot::ClockLink,
                text: text.clone(),
                link: self.state.caption_link.clone(),
                x,
                baseline_y: radius / 1.5,
                interactive: self.state.caption_link.is_some(),
            });
        }

        if let Some(text) = &frame.digital_text {
            captions.push(CaptionLayout {
                slot: CaptionSlot::DigitClock,
                text: text.clone(),
                link: None,
                x,
                baseline_y: radius * 1.5,
                interactive: false,
            });
        }

        captions
    }
}

/// Hand angles for a wall-clock instant.
pub fn hand_angles(now: NaiveDateTime) -> HandAngles {
    // Leap seconds report nanoseconds past 1e9; keep the hand inside the minute.
    let fraction = now.nanosecond().min(999_999_999) as f64 / 1e9;
    let second = now.second() as f64 + fraction;
    let second_of_hour = now.minute() as f64 * 60.0 + second;
    let second_of_day = now.hour() as f64 * 3600.0 + second_of_hour;

    HandAngles {
        second_rad: TAU * second / 60.0,
        minute_rad: TAU * second_of_hour / 3600.0,
        hour_rad: 2.0 * TAU * second_of_day / 86_400.0,
    }
}

fn degrees(deg: f64) -> f64 {
    deg.to_radians()
}

fn face_radius(width: f64, height: f64) -> f64 {
    width.min(height) / 2.0 - FACE_MARGIN
}

fn format_time(now: NaiveDateTime, pattern: &str) -> Option<String> {
    let mut text = String::new();
    write!(text, "{}", now.format(pattern)).ok()?;
    Some(text)
}

fn range_arc(range: &ResolvedRange, radius: f64) -> RangeArc {
    let start_rad = range.start.dial_angle();
    let mut end_rad = range.end.dial_angle();
    // A range that crosses midnight continues on past the end of the day.
    if end_rad < start_rad {
        end_rad += 2.0 * TAU;
    }
    RangeArc {
        start_rad,
        end_rad,
        inner_radius: radius - range.width_px,
        outer_radius: radius,
        color: range.color.clone(),
        opacity: range.opacity,
        label: range.label.clone(),
    }
}

fn resolve(config: &ClockConfig) -> Result<FaceSettings, ClockError> {
    let variant = config.variant;
    let width = dimension("face_width", config.face_width, variant.default_face_size())?;
    let height = dimension("face_height", config.face_height, variant.default_face_size())?;

    let radius = face_radius(width, height);
    if radius < CARDINAL_TICK_LENGTH {
        return Err(ClockError::InvalidConfig(format!(
            "face {width}x{height} leaves radius {radius}, need at least {CARDINAL_TICK_LENGTH} for the hour ticks"
        )));
    }

    let hour_labels = match &config.hour_labels {
        Some(labels) if labels.len() != 12 => {
            return Err(ClockError::InvalidConfig(format!(
                "expected 12 hour labels, got {}",
                labels.len()
            )))
        }
        Some(labels) => labels.clone(),
        None => default_hour_labels(),
    };

    let time_format = config
        .time_format
        .clone()
        .unwrap_or_else(|| DEFAULT_TIME_FORMAT.to_string());
    validate_time_format(&time_format)?;

    let ranges = config
        .highlighted_ranges
        .iter()
        .map(|range| resolve_range(range, radius))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FaceSettings {
        width,
        height,
        show_main_circle: config
            .show_main_circle
            .unwrap_or(variant.default_show_main_circle()),
        show_hours: config.show_hours.unwrap_or(variant.default_show_hours()),
        hour_labels,
        time_format,
        ranges,
    })
}

fn dimension(name: &str, value: Option<f64>, default: f64) -> Result<f64, ClockError> {
    match value {
        None => Ok(default),
        Some(v) if v == 0.0 => Ok(default),
        Some(v) if !v.is_finite() || v < 0.0 => Err(ClockError::InvalidConfig(format!(
            "{name} must be a positive number, got {v}"
        ))),
        Some(v) => Ok(v),
    }
}

fn validate_time_format(pattern: &str) -> Result<(), ClockError> {
    let invalid = || ClockError::InvalidConfig(format!("unusable time format {pattern:?}"));

    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    // Specifiers such as %z parse but cannot be rendered for naive wall time.
    let probe = NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(invalid)?;
    format_time(probe, pattern).map(|_| ()).ok_or_else(invalid)
}

fn resolve_range(range: &Range, radius: f64) -> Result<ResolvedRange, ClockError> {
    let start: TimeOfDay = range.start.parse()?;
    let end: TimeOfDay = range.end.parse()?;

    let opacity = range.opacity.unwrap_or(DEFAULT_RANGE_OPACITY);
    if !(0.0..=1.0).contains(&opacity) {
        return Err(ClockError::InvalidConfig(format!(
            "range {}-{} opacity must be within 0..1, got {opacity}",
            range.start, range.end
        )));
    }

    let width_px = range.width_px.unwrap_or(DEFAULT_RANGE_WIDTH_PX);
    if !width_px.is_finite() || width_px <= 0.0 || width_px > radius {
        return Err(ClockError::InvalidConfig(format!(
            "range {}-{} width must be within (0, {radius}], got {width_px}",
            range.start, range.end
        )));
    }

    Ok(ResolvedRange {
        start,
        end,
        label: range.label.clone(),
        color: range
            .color
            .clone()
            .unwrap_or_else(|| DEFAULT_RANGE_COLOR.to_string()),
        opacity,
        width_px,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use std::f64::consts::PI;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_radius_from_face() {
        let model = ClockModel::configure(&ClockConfig::default().with_size(300.0, 220.0)).unwrap();
        assert_eq!(model.radius(), 105.0);
        assert_eq!(model.state().center_radius(), CENTER_RADIUS);
    }

    #[test]
    fn test_zero_dimensions_use_variant_default() {
        let legacy = ClockModel::configure(
            &ClockConfig::for_variant(Variant::Legacy).with_size(0.0, 0.0),
        )
        .unwrap();
        assert_eq!(legacy.width(), 200.0);
        assert_eq!(legacy.radius(), 95.0);

        let current = ClockModel::configure(&ClockConfig::default()).unwrap();
        assert_eq!(current.height(), 300.0);
        assert_eq!(current.radius(), 145.0);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        for config in [
            ClockConfig::default().with_size(-10.0, 200.0),
            ClockConfig::default().with_size(200.0, f64::NAN),
            ClockConfig::default().with_size(8.0, 8.0),
            ClockConfig::default().with_size(40.0, 40.0),
        ] {
            assert!(matches!(
                ClockModel::configure(&config),
                Err(ClockError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_smallest_face_keeps_ticks_outside_center() {
        let model = ClockModel::configure(&ClockConfig::default().with_size(70.0, 70.0)).unwrap();
        assert_eq!(model.radius(), CARDINAL_TICK_LENGTH);
        for tick in &model.static_geometry().ticks {
            assert!(tick.inner_radius >= 0.0, "tick crosses center: {tick:?}");
            assert!((0.0..=1.0).contains(&tick.length_ratio));
        }
        assert!(ClockModel::configure(&ClockConfig::default().with_size(69.0, 70.0)).is_err());
    }

    #[test]
    fn test_rejects_wrong_label_count() {
        let config = ClockConfig::default().with_hour_labels(["XII", "I", "II"]);
        assert!(matches!(
            ClockModel::configure(&config),
            Err(ClockError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_unusable_time_format() {
        let config = ClockConfig::default().with_time_format("%H:%M %z");
        assert!(matches!(
            ClockModel::configure(&config),
            Err(ClockError::InvalidConfig(_))
        ));
        let config = ClockConfig::default().with_time_format("%Q");
        assert!(ClockModel::configure(&config).is_err());
    }

    #[test]
    fn test_rejects_bad_range_styling() {
        let config =
            ClockConfig::default().with_range(Range::new("06:00", "07:00").with_opacity(1.5));
        assert!(matches!(
            ClockModel::configure(&config),
            Err(ClockError::InvalidConfig(_))
        ));
        let config =
            ClockConfig::default().with_range(Range::new("06:00", "07:00").with_width_px(0.0));
        assert!(ClockModel::configure(&config).is_err());
    }

    #[test]
    fn test_tick_layout() {
        let model = ClockModel::configure(&ClockConfig::default()).unwrap();
        let geometry = model.static_geometry();
        let hours: Vec<_> = geometry.hour_ticks().collect();
        assert_eq!(hours.len(), 12);
        assert_eq!(geometry.minute_ticks().count(), 60);

        for (index, tick) in hours.iter().enumerate() {
            let expected = if index % 3 == 0 { 30.0 } else { 20.0 };
            assert_eq!(geometry.radius - tick.inner_radius, expected);
            assert!(close(tick.angle_rad, (index as f64 * 30.0).to_radians()));
        }
        for tick in geometry.minute_ticks() {
            assert_eq!(geometry.radius - tick.inner_radius, 10.0);
            assert!(close(tick.length_ratio, tick.inner_radius / geometry.radius));
        }
    }

    #[test]
    fn test_hour_labels_follow_flag() {
        let shown = ClockModel::configure(&ClockConfig::default().with_hours(true)).unwrap();
        let labels = shown.static_geometry().hour_labels.unwrap();
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0].label, "12");

        // 12 o'clock numeral sits straight above the center, pulled in and nudged down.
        let radius = shown.radius();
        let inner = radius - 30.0;
        assert!(close(labels[0].position.x, 0.0));
        assert!(close(labels[0].position.y, -(inner * inner / radius) + 6.0));

        let hidden = ClockModel::configure(&ClockConfig::default().with_hours(false)).unwrap();
        assert!(hidden.static_geometry().hour_labels.is_none());
    }

    #[test]
    fn test_bezel_follows_flag() {
        let legacy = ClockModel::configure(&ClockConfig::for_variant(Variant::Legacy)).unwrap();
        assert!(legacy.static_geometry().bezel_radius.is_none());

        let current = ClockModel::configure(&ClockConfig::default()).unwrap();
        assert_eq!(current.static_geometry().bezel_radius, Some(145.0));
    }

    #[test]
    fn test_range_arc_defaults() {
        let model =
            ClockModel::configure(&ClockConfig::default().with_range(Range::new("09:00", "10:00")))
                .unwrap();
        let arc = &model.static_geometry().range_arcs[0];
        assert_eq!(arc.color, DEFAULT_RANGE_COLOR);
        assert_eq!(arc.opacity, DEFAULT_RANGE_OPACITY);
        assert_eq!(arc.outer_radius - arc.inner_radius, DEFAULT_RANGE_WIDTH_PX);
        assert!(arc.label.is_none());
    }

    #[test]
    fn test_range_across_midnight() {
        let model =
            ClockModel::configure(&ClockConfig::default().with_range(Range::new("22:00", "02:00")))
                .unwrap();
        let arc = &model.static_geometry().range_arcs[0];
        assert!(close(arc.span(), 4.0 * PI * 4.0 / 24.0));
    }

    #[test]
    fn test_hand_angles_quarter_past_three() {
        let hands = hand_angles(at(3, 15, 45));
        assert!(close(hands.second_rad, TAU * 45.0 / 60.0));
        assert!(close(hands.minute_rad, TAU * (15.0 * 60.0 + 45.0) / 3600.0));
        let day_fraction = (3.0 * 3600.0 + 15.0 * 60.0 + 45.0) / 86_400.0;
        assert!(close(hands.hour_rad, 2.0 * TAU * day_fraction));
    }

    #[test]
    fn test_hour_hand_second_lap_in_afternoon() {
        let morning = hand_angles(at(3, 0, 0));
        let afternoon = hand_angles(at(15, 0, 0));
        assert!(close(morning.hour_rad, PI / 2.0));
        assert!(close(afternoon.hour_rad, PI / 2.0 + TAU));
        // Same dial position once the extra lap is removed
        assert!(close(afternoon.hour_rad.rem_euclid(TAU), morning.hour_rad));
    }

    #[test]
    fn test_hour_hand_keeps_rising_through_noon() {
        let before = hand_angles(at(11, 59, 59)).hour_rad;
        let noon = hand_angles(at(12, 0, 0)).hour_rad;
        let after = hand_angles(at(12, 0, 1)).hour_rad;
        assert!(before < noon && noon < after, "{before} {noon} {after}");
        assert!(close(noon, TAU));
    }

    #[test]
    fn test_sub_second_precision() {
        let now = at(0, 0, 10) + chrono::Duration::milliseconds(500);
        let hands = hand_angles(now);
        assert!(close(hands.second_rad, TAU * 10.5 / 60.0));
    }

    #[test]
    fn test_digital_text_only_in_digit_mode() {
        let mut plain = ClockModel::configure(&ClockConfig::default()).unwrap();
        assert!(plain.tick(at(8, 5, 3)).digital_text.is_none());

        let mut digital = ClockModel::configure(&ClockConfig::default())
            .unwrap()
            .enable_digital_caption();
        assert_eq!(
            digital.tick(at(8, 5, 3)).digital_text.as_deref(),
            Some("08:05:03")
        );

        let mut custom = ClockModel::configure(&ClockConfig::default().with_time_format("%H:%M"))
            .unwrap()
            .enable_digital_caption();
        assert_eq!(custom.tick(at(8, 5, 3)).digital_text.as_deref(), Some("08:05"));
    }

    #[test]
    fn test_phase_transitions() {
        let mut model = ClockModel::configure(&ClockConfig::default()).unwrap();
        assert_eq!(model.phase(), ClockPhase::Configured);
        model.tick(at(0, 0, 0));
        assert_eq!(model.phase(), ClockPhase::Running);
        assert_eq!(model.state().ticks_seen(), 1);
    }

    #[test]
    fn test_caption_builder() {
        let model = ClockModel::configure(&ClockConfig::default())
            .unwrap()
            .set_caption("Docs", "https://example.com")
            .enable_digital_caption();
        assert_eq!(model.state().caption_text(), Some("Docs"));
        assert_eq!(model.state().caption_link(), Some("https://example.com"));
        assert!(model.state().digit_mode_enabled());

        let unlinked = ClockModel::configure(&ClockConfig::default())
            .unwrap()
            .set_caption("Home", "");
        assert!(unlinked.state().caption_link().is_none());
    }

    #[test]
    fn test_caption_layout() {
        let mut model = ClockModel::configure(&ClockConfig::default())
            .unwrap()
            .set_caption("Home", "");
        let frame = model.tick(at(12, 0, 0));
        let captions = model.caption_layout(&frame);
        assert_eq!(captions.len(), 1);
        assert_eq!(captions[0].slot, CaptionSlot::ClockLink);
        assert!(!captions[0].interactive);
        assert!(close(captions[0].baseline_y, 145.0 / 1.5));
        assert_eq!(captions[0].x, 150.0);

        model.show_digital_caption();
        let frame = model.tick(at(12, 0, 0));
        let captions = model.caption_layout(&frame);
        assert_eq!(captions.len(), 2);
        assert_eq!(captions[1].slot, CaptionSlot::DigitClock);
        assert!(close(captions[1].baseline_y, 145.0 * 1.5));
    }

    #[test]
    fn test_hand_geometry_lengths() {
        let model = ClockModel::configure(&ClockConfig::default()).unwrap();
        let [hour, minute, second] = model.hand_geometry(&HandAngles::default());
        assert!(close(hour.outer_radius, 145.0 / 2.3));
        assert!(close(minute.outer_radius, 145.0 / 1.5));
        assert!(close(second.outer_radius, 145.0 / 1.2));
        assert_eq!(hour.inner_radius, CENTER_RADIUS);
        assert!(second.accent && !minute.accent);
    }

    #[test]
    fn test_reconfigure_keeps_caption() {
        let mut model = ClockModel::configure(&ClockConfig::default())
            .unwrap()
            .set_caption("Home", "")
            .enable_digital_caption();
        model
            .reconfigure(&ClockConfig::default().with_size(200.0, 200.0))
            .unwrap();
        assert_eq!(model.radius(), 95.0);
        assert_eq!(model.state().caption_text(), Some("Home"));
        assert!(model.state().digit_mode_enabled());
    }
}
