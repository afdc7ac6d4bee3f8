// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Serializes a [`Diagram`] back into an SVG document.
//!
//! The original writer (`svgtiny_writer.c`) is a two-pass
//! measure-then-write design with a *buffer-too-small* failure path.
//! Per Design Notes §9 ("Two-pass emission"), this builds into a single
//! growable `xmlwriter::XmlWriter` buffer instead — the same crate
//! `usvg::export` uses for `Tree::to_string` — so there is nothing for a
//! capacity check to guard.

use std::fmt::Write as _;

use xmlwriter::{Options, XmlWriter};

use crate::color::{Color, Paint};
use crate::diagram::{Diagram, Shape};
use crate::pathdata::PathSegment;

impl Diagram {
    /// Renders this diagram as a standalone SVG 1.1 document.
    pub fn to_svg_string(&self) -> String {
        let opt = Options { use_single_quote: false, ..Options::default() };
        let mut w = XmlWriter::new(opt);

        w.start_element("svg");
        w.write_attribute("xmlns", "http://www.w3.org/2000/svg");
        w.write_attribute_fmt("width", format_args!("{}px", format_number(self.width)));
        w.write_attribute_fmt("height", format_args!("{}px", format_number(self.height)));
        w.write_attribute_fmt(
            "viewbox",
            format_args!("0 0 {} {}", format_number(self.width), format_number(self.height)),
        );

        for shape in &self.shapes {
            match shape {
                Shape::Path { path_data, fill, stroke, stroke_width } => {
                    w.start_element("path");
                    write_style(&mut w, *fill, *stroke, *stroke_width);
                    w.write_attribute("d", &path_tape_text(path_data));
                    w.end_element();
                }
                Shape::Text { content, x, y, fill, stroke, stroke_width } => {
                    w.start_element("text");
                    w.write_attribute_fmt("x", format_args!("{}", format_number(*x)));
                    w.write_attribute_fmt("y", format_args!("{}", format_number(*y)));
                    write_style(&mut w, *fill, *stroke, *stroke_width);
                    w.write_text(content);
                    w.end_element();
                }
            }
        }

        w.end_document()
    }

    /// The byte length of [`Self::to_svg_string`]. A thin wrapper kept
    /// only for API-shape fidelity with the original's `length()`
    /// operation — there's no separate measuring pass behind it.
    pub fn svg_len(&self) -> usize {
        self.to_svg_string().len()
    }
}

fn path_tape_text(path_data: &crate::pathdata::PathData) -> String {
    let mut s = String::new();
    for seg in path_data.segments() {
        match seg {
            PathSegment::MoveTo { x, y } => {
                let _ = write!(s, "M {} {} ", format_number(*x), format_number(*y));
            }
            PathSegment::LineTo { x, y } => {
                let _ = write!(s, "L {} {} ", format_number(*x), format_number(*y));
            }
            PathSegment::CurveTo { x1, y1, x2, y2, x, y } => {
                let _ = write!(
                    s,
                    "C {} {} {} {} {} {} ",
                    format_number(*x1),
                    format_number(*y1),
                    format_number(*x2),
                    format_number(*y2),
                    format_number(*x),
                    format_number(*y)
                );
            }
            PathSegment::ClosePath => {
                s.push_str("Z ");
            }
        }
    }
    s.truncate(s.trim_end().len());
    s
}

fn write_style(w: &mut XmlWriter, fill: Paint, stroke: Paint, stroke_width: f64) {
    if let Some((color, opacity)) = paint_color(fill) {
        w.write_attribute("fill", &format_hex(color));
        if let Some(a) = opacity {
            w.write_attribute_fmt("fill-opacity", format_args!("{}", format_number(a)));
        }
    }
    if let Some((color, opacity)) = paint_color(stroke) {
        w.write_attribute("stroke", &format_hex(color));
        w.write_attribute_fmt("stroke-width", format_args!("{}", format_number(stroke_width)));
        if let Some(a) = opacity {
            w.write_attribute_fmt("stroke-opacity", format_args!("{}", format_number(a)));
        }
    }
}

/// Returns `(color, opacity)` for a paint that should be emitted at all:
/// transparent colors and the gradient-reference sentinel are skipped
/// entirely, matching the original writer's `IsTransparent` check
/// (extended here to also suppress `LinearGradientRef`, since this port
/// doesn't emit gradient definitions to reference).
fn paint_color(paint: Paint) -> Option<(Color, Option<f64>)> {
    match paint {
        Paint::None | Paint::LinearGradientRef => None,
        Paint::Color(c) if c.is_transparent() => None,
        Paint::Color(c) => {
            let opacity = if c.a == 0xFF { None } else { Some(c.a as f64 / 255.0) };
            Some((c, opacity))
        }
    }
}

fn format_hex(c: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Formats a float with six significant digits, trimming trailing zeros
/// — the practical range SVG coordinates fall in, rather than
/// `printf("%.6g")`'s full fixed/exponential switchover.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (5 - magnitude).clamp(0, 12) as usize;
    let mut s = format!("{value:.decimals$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}
