//! SVG markup for one clock frame.
//!
//! Emits the fixed element set of the widget and nothing else: an `<svg>`
//! root with id `clock-d3js`, the `main-circle` and `center-circle` circles,
//! tick lines, range-arc paths with a `<title>` tooltip, the `hour`,
//! `minute` and `second` hands, and the `clock-link` / `digit-clock`
//! captions wrapped in anchors.

use crate::clock::ClockModel;
use crate::geometry::{
    polar, CaptionSlot, HandKind, Point2, RangeArc, StaticGeometry, TickFrame, TickKind,
};
use html_escaper::Escape;
use std::f64::consts::{PI, TAU};
use std::fmt::{self, Display, Formatter, Write};

const STROKE: &str = "black";
const ACCENT: &str = "red";

/// Text and attribute values with markup characters escaped.
struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.0.escape(f, false)
    }
}

fn hand_class(kind: HandKind) -> &'static str {
    match kind {
        HandKind::Hour => "hour",
        HandKind::Minute => "minute",
        HandKind::Second => "second",
    }
}

fn caption_class(slot: CaptionSlot) -> &'static str {
    match slot {
        CaptionSlot::DigitClock => "digit-clock",
        CaptionSlot::ClockLink => "clock-link",
    }
}

/// Path data for an annular sector between two dial angles.
fn sector_path(center: Point2, arc: &RangeArc) -> String {
    let at = |radius: f64, angle: f64| {
        let p = polar(radius, angle);
        (center.x + p.x, center.y + p.y)
    };
    let (outer, inner) = (arc.outer_radius, arc.inner_radius);

    if arc.span() >= TAU {
        // A whole turn cannot be expressed as a single SVG arc command.
        let (ox0, oy0) = at(outer, 0.0);
        let (ox1, oy1) = at(outer, PI);
        let (ix0, iy0) = at(inner, 0.0);
        let (ix1, iy1) = at(inner, PI);
        return format!(
            "M{ox0:.2},{oy0:.2}A{outer:.2},{outer:.2} 0 1 1 {ox1:.2},{oy1:.2}\
             A{outer:.2},{outer:.2} 0 1 1 {ox0:.2},{oy0:.2}Z\
             M{ix0:.2},{iy0:.2}A{inner:.2},{inner:.2} 0 1 0 {ix1:.2},{iy1:.2}\
             A{inner:.2},{inner:.2} 0 1 0 {ix0:.2},{iy0:.2}Z"
        );
    }

    let large = u8::from(arc.span() > PI);
    let (ox0, oy0) = at(outer, arc.start_rad);
    let (ox1, oy1) = at(outer, arc.end_rad);
    let (ix1, iy1) = at(inner, arc.end_rad);
    let (ix0, iy0) = at(inner, arc.start_rad);
    format!(
        "M{ox0:.2},{oy0:.2}A{outer:.2},{outer:.2} 0 {large} 1 {ox1:.2},{oy1:.2}\
         L{ix1:.2},{iy1:.2}A{inner:.2},{inner:.2} 0 {large} 0 {ix0:.2},{iy0:.2}Z"
    )
}

fn write_document(
    out: &mut String,
    model: &ClockModel,
    geometry: &StaticGeometry,
    frame: &TickFrame,
) -> fmt::Result {
    let center = Point2::new(geometry.width / 2.0, geometry.height / 2.0);
    let point = |offset: Point2| (center.x + offset.x, center.y + offset.y);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="clock-d3js" width="{}" height="{}"><g>"#,
        geometry.width, geometry.height
    )?;

    for arc in &geometry.range_arcs {
        write!(
            out,
            r#"<path class="range" d="{}" fill="{}" fill-opacity="{}" fill-rule="evenodd">"#,
            sector_path(center, arc),
            Escaped(&arc.color),
            arc.opacity
        )?;
        if let Some(label) = &arc.label {
            write!(out, "<title>{}</title>", Escaped(label))?;
        }
        writeln!(out, "</path>")?;
    }

    if let Some(bezel) = geometry.bezel_radius {
        writeln!(
            out,
            r#"<circle class="main-circle" cx="{}" cy="{}" r="{bezel}" stroke="{STROKE}" fill="none"/>"#,
            center.x, center.y
        )?;
    }
    writeln!(
        out,
        r#"<circle class="center-circle" cx="{}" cy="{}" r="{}" stroke="{STROKE}" fill="none"/>"#,
        center.x, center.y, geometry.center_radius
    )?;

    for tick in &geometry.ticks {
        let (x1, y1) = point(polar(tick.inner_radius, tick.angle_rad));
        let (x2, y2) = point(polar(geometry.radius, tick.angle_rad));
        writeln!(
            out,
            r#"<line class="{}-tick" x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{STROKE}" stroke-width="{}px"/>"#,
            match tick.kind {
                TickKind::Hour => "hour",
                TickKind::Minute => "minute",
            },
            tick.stroke_width
        )?;
    }

    if let Some(labels) = &geometry.hour_labels {
        for label in labels {
            let (x, y) = point(label.position);
            writeln!(
                out,
                r#"<text class="hour-label" x="{x:.2}" y="{y:.2}" text-anchor="middle">{}</text>"#,
                Escaped(&label.label)
            )?;
        }
    }

    for hand in model.hand_geometry(&frame.hands) {
        let (x1, y1) = point(hand.start());
        let (x2, y2) = point(hand.tip());
        writeln!(
            out,
            r#"<line class="{}" x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{}" stroke-width="{}px"/>"#,
            hand_class(hand.kind),
            if hand.accent { ACCENT } else { STROKE },
            hand.stroke_width
        )?;
    }

    for caption in model.caption_layout(frame) {
        writeln!(
            out,
            r#"<a class="{}" href="{}" target="_blank" pointer-events="{}"><text x="{}" y="{:.2}" text-anchor="middle" cursor="pointer">{}</text></a>"#,
            caption_class(caption.slot),
            Escaped(caption.link.as_deref().unwrap_or("")),
            if caption.interactive { "auto" } else { "none" },
            caption.x,
            caption.baseline_y,
            Escaped(&caption.text)
        )?;
    }

    writeln!(out, "</g></svg>")
}

/// Render one frame as a standalone SVG document.
pub fn render_svg(model: &ClockModel, geometry: &StaticGeometry, frame: &TickFrame) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let written = write_document(&mut out, model, geometry, frame);
    debug_assert!(written.is_ok(), "formatting into a String failed");
    out
}
