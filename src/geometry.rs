//! # Clock Face Geometry
//!
//! Plain values produced by [`ClockModel`](crate::clock::ClockModel) and consumed
//! by a renderer. Coordinates are relative to the face center with `y`
//! growing downwards, as on a screen. Angles are radians measured clockwise
//! from 12 o'clock, so a point at angle `a` and distance `r` sits at
//! `(r·sin a, −r·cos a)`.

use serde::Serialize;

/// A point relative to the face center, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Point at `radius` from the center along the dial angle `angle_rad`.
pub fn polar(radius: f64, angle_rad: f64) -> Point2 {
    Point2 {
        x: radius * angle_rad.sin(),
        y: -radius * angle_rad.cos(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickKind {
    Hour,
    Minute,
}

/// A radial mark running from `inner_radius` out to the bezel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Tick {
    pub kind: TickKind,
    pub angle_rad: f64,
    pub inner_radius: f64,
    /// `inner_radius / radius`
    pub length_ratio: f64,
    pub stroke_width: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HourLabel {
    pub angle_rad: f64,
    pub label: String,
    /// Text anchor position, vertically nudged to sit centered on the tick
    pub position: Point2,
}

/// Angular band highlighting a time-of-day interval.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RangeArc {
    pub start_rad: f64,
    pub end_rad: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub color: String,
    pub opacity: f64,
    pub label: Option<String>,
}

impl RangeArc {
    pub fn span(&self) -> f64 {
        self.end_rad - self.start_rad
    }
}

/// Everything on the face that does not move.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StaticGeometry {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    /// Present only when the bezel circle is enabled
    pub bezel_radius: Option<f64>,
    pub center_radius: f64,
    pub ticks: Vec<Tick>,
    /// Present only when hour numerals are enabled
    pub hour_labels: Option<Vec<HourLabel>>,
    pub range_arcs: Vec<RangeArc>,
}

impl StaticGeometry {
    pub fn hour_ticks(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.iter().filter(|t| t.kind == TickKind::Hour)
    }

    pub fn minute_ticks(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.iter().filter(|t| t.kind == TickKind::Minute)
    }
}

/// Hand angles for one instant. Second and minute lie in `[0, 2π)`; the
/// hour hand laps twice a day and lies in `[0, 4π)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct HandAngles {
    pub second_rad: f64,
    pub minute_rad: f64,
    pub hour_rad: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

/// A hand drawn as a radial segment from the center dot outwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HandGeometry {
    pub kind: HandKind,
    pub angle_rad: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub stroke_width: f64,
    /// Second hand is drawn in the accent colour
    pub accent: bool,
}

impl HandGeometry {
    pub fn start(&self) -> Point2 {
        polar(self.inner_radius, self.angle_rad)
    }

    pub fn tip(&self) -> Point2 {
        polar(self.outer_radius, self.angle_rad)
    }
}

/// Result of one redraw step.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TickFrame {
    pub hands: HandAngles,
    /// Formatted time, present only in digital caption mode
    pub digital_text: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptionSlot {
    /// Tick-driven digital readout below the center
    DigitClock,
    /// Static caption above the center
    ClockLink,
}

/// Where and how a caption is drawn. Unlike the rest of this module the
/// position is in face coordinates, origin at the top-left corner.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CaptionLayout {
    pub slot: CaptionSlot,
    pub text: String,
    pub link: Option<String>,
    /// Horizontal text center
    pub x: f64,
    /// Text baseline
    pub baseline_y: f64,
    /// Only linked captions react to pointer events
    pub interactive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_polar_cardinal_points() {
        let top = polar(10.0, 0.0);
        assert!(close(top.x, 0.0) && close(top.y, -10.0));

        let right = polar(10.0, PI / 2.0);
        assert!(close(right.x, 10.0) && close(right.y, 0.0));

        let bottom = polar(10.0, PI);
        assert!(close(bottom.x, 0.0) && close(bottom.y, 10.0));
    }

    #[test]
    fn test_hand_endpoints() {
        let hand = HandGeometry {
            kind: HandKind::Minute,
            angle_rad: PI / 2.0,
            inner_radius: 7.0,
            outer_radius: 90.0,
            stroke_width: 3.0,
            accent: false,
        };
        assert!(close(hand.start().x, 7.0));
        assert!(close(hand.tip().x, 90.0));
        assert!(close(hand.tip().y, 0.0));
    }
}
