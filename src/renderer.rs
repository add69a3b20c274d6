//! # Clock Face Rendering
//!
//! Draws a configured clock onto monochrome `embedded-graphics` targets (the
//! e-ink panel, or `MockDisplay` in tests) and onto a character grid for the
//! terminal development mode.
//!
//! Both renderers take the static geometry computed once at setup and the
//! [`TickFrame`] of the current second, so a host loop only recomputes what
//! moves.

use crate::clock::ClockModel;
use crate::geometry::{polar, CaptionLayout, Point2, StaticGeometry, TickFrame, TickKind};
use embedded_graphics::{
    geometry::AngleUnit,
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Arc, Circle, Line, PrimitiveStyle},
    text::{Alignment, Text},
};
use std::f64::consts::FRAC_PI_2;

/// Range arcs at or above this opacity are drawn solid on binary panels;
/// fainter ones are reduced to their inner edge.
const SOLID_OPACITY: f64 = 0.5;

fn to_pixel(center: Point2, offset: Point2) -> Point {
    Point::new(
        (center.x + offset.x).round() as i32,
        (center.y + offset.y).round() as i32,
    )
}

fn diameter(radius: f64) -> u32 {
    (radius * 2.0).round().max(1.0) as u32
}

/// Draw one full frame of the clock onto a monochrome display.
///
/// Draw order: range arcs, bezel, ticks, numerals, hands, center dot,
/// captions.
pub fn draw_clock<D>(
    display: &mut D,
    model: &ClockModel,
    geometry: &StaticGeometry,
    frame: &TickFrame,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let center = Point2::new(geometry.width / 2.0, geometry.height / 2.0);
    let center_px = to_pixel(center, Point2::new(0.0, 0.0));
    let text_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

    for arc in &geometry.range_arcs {
        // embedded-graphics measures angles from 3 o'clock, the dial from 12.
        let start = (arc.start_rad - FRAC_PI_2) as f32;
        let sweep = arc.span() as f32;
        if arc.opacity >= SOLID_OPACITY {
            let thickness = (arc.outer_radius - arc.inner_radius).round().max(1.0) as u32;
            Arc::with_center(
                center_px,
                diameter((arc.outer_radius + arc.inner_radius) / 2.0),
                start.rad(),
                sweep.rad(),
            )
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, thickness))
            .draw(display)?;
        } else {
            Arc::with_center(center_px, diameter(arc.inner_radius), start.rad(), sweep.rad())
                .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
                .draw(display)?;
        }
    }

    if let Some(bezel) = geometry.bezel_radius {
        Circle::with_center(center_px, diameter(bezel))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(display)?;
    }

    for tick in &geometry.ticks {
        Line::new(
            to_pixel(center, polar(tick.inner_radius, tick.angle_rad)),
            to_pixel(center, polar(geometry.radius, tick.angle_rad)),
        )
        .into_styled(PrimitiveStyle::with_stroke(
            BinaryColor::On,
            tick.stroke_width as u32,
        ))
        .draw(display)?;
    }

    if let Some(labels) = &geometry.hour_labels {
        for label in labels {
            Text::with_alignment(
                &label.label,
                to_pixel(center, label.position),
                text_style,
                Alignment::Center,
            )
            .draw(display)?;
        }
    }

    for hand in model.hand_geometry(&frame.hands) {
        Line::new(to_pixel(center, hand.start()), to_pixel(center, hand.tip()))
            .into_styled(PrimitiveStyle::with_stroke(
                BinaryColor::On,
                hand.stroke_width as u32,
            ))
            .draw(display)?;
    }

    Circle::with_center(center_px, diameter(geometry.center_radius))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(display)?;

    for caption in model.caption_layout(frame) {
        Text::with_alignment(
            &caption.text,
            Point::new(caption.x.round() as i32, caption.baseline_y.round() as i32),
            text_style,
            Alignment::Center,
        )
        .draw(display)?;
    }

    Ok(())
}

/// Terminal preview canvas. Face pixels are scaled onto cells; cells are
/// about twice as tall as wide, so the default grid has half as many rows.
struct AsciiCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<Vec<char>>,
    scale_x: f64,
    scale_y: f64,
    center: Point2,
}

impl AsciiCanvas {
    fn new(geometry: &StaticGeometry, cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![vec![' '; cols]; rows],
            scale_x: cols as f64 / geometry.width,
            scale_y: rows as f64 / geometry.height,
            center: Point2::new(geometry.width / 2.0, geometry.height / 2.0),
        }
    }

    fn cell(&self, offset: Point2) -> Option<(usize, usize)> {
        let col = ((self.center.x + offset.x) * self.scale_x).floor();
        let row = ((self.center.y + offset.y) * self.scale_y).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f64 || row >= self.rows as f64 {
            return None;
        }
        Some((col as usize, row as usize))
    }

    fn plot(&mut self, offset: Point2, ch: char) {
        if let Some((col, row)) = self.cell(offset) {
            self.cells[row][col] = ch;
        }
    }

    fn segment(&mut self, from: Point2, to: Point2, ch: char) {
        let span_cells = ((to.x - from.x) * self.scale_x)
            .abs()
            .max(((to.y - from.y) * self.scale_y).abs());
        let steps = (span_cells * 2.0).ceil().max(1.0) as usize;
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            self.plot(
                Point2::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t),
                ch,
            );
        }
    }

    fn arc(&mut self, radius: f64, start_rad: f64, end_rad: f64, ch: char) {
        let steps = ((end_rad - start_rad).abs() * radius * self.scale_x * 2.0)
            .ceil()
            .max(1.0) as usize;
        for step in 0..=steps {
            let angle = start_rad + (end_rad - start_rad) * step as f64 / steps as f64;
            self.plot(polar(radius, angle), ch);
        }
    }

    fn text(&mut self, anchor: Point2, text: &str) {
        let Some((col, row)) = self.cell(anchor) else {
            return;
        };
        let len = text.chars().count();
        let start = col.saturating_sub(len / 2);
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cells[row].get_mut(start + i) {
                *cell = ch;
            }
        }
    }

    fn into_string(self) -> String {
        self.cells
            .into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render a frame as text, `cols` characters wide.
///
/// Minute ticks are omitted; at terminal resolution they merge into the
/// bezel.
pub fn render_ascii(
    model: &ClockModel,
    geometry: &StaticGeometry,
    frame: &TickFrame,
    cols: usize,
) -> String {
    let rows = (cols / 2).max(1);
    let mut canvas = AsciiCanvas::new(geometry, cols.max(1), rows);

    for arc in &geometry.range_arcs {
        let mid = (arc.inner_radius + arc.outer_radius) / 2.0;
        canvas.arc(mid, arc.start_rad, arc.end_rad, '~');
    }

    if let Some(bezel) = geometry.bezel_radius {
        canvas.arc(bezel, 0.0, std::f64::consts::TAU, '.');
    }

    for tick in geometry.ticks.iter().filter(|t| t.kind == TickKind::Hour) {
        canvas.segment(
            polar(tick.inner_radius, tick.angle_rad),
            polar(geometry.radius, tick.angle_rad),
            '+',
        );
    }

    if let Some(labels) = &geometry.hour_labels {
        for label in labels {
            canvas.text(label.position, &label.label);
        }
    }

    for (hand, ch) in model.hand_geometry(&frame.hands).iter().zip(['H', 'M', 's']) {
        canvas.segment(hand.start(), hand.tip(), ch);
    }
    canvas.plot(Point2::new(0.0, 0.0), 'O');

    let mut out = canvas.into_string();
    for caption in model.caption_layout(frame) {
        out.push('\n');
        out.push_str(&caption_line(&caption, cols));
    }
    out
}

fn caption_line(caption: &CaptionLayout, cols: usize) -> String {
    let text = match &caption.link {
        Some(link) => format!("{} <{}>", caption.text, link),
        None => caption.text.clone(),
    };
    format!("{:^width$}", text, width = cols)
        .trim_end()
        .to_string()
}

/// Print a frame to the terminal.
pub fn draw_ascii(model: &ClockModel, geometry: &StaticGeometry, frame: &TickFrame) {
    println!("{}", render_ascii(model, geometry, frame, 48));
}
