// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The recursive tree walker: cascades viewport/CTM/paint state down
//! `svg`/`g`/`a` containers and dispatches each primitive element to a
//! [`Shape`].
//!
//! Grounded on `usvg::converter`'s `State` (cloned per recursive entry
//! into a container, so sibling subtrees never observe each other's
//! attributes) and, for the per-element semantics, on `svgtiny_parse_svg`'s
//! dispatch table.

use crate::diagram::{Diagram, Shape, SvgError};
use crate::geom::Transform;
use crate::length::parse_length;
use crate::path_parser::parse_path_data;
use crate::shapes;
use crate::style::Style;
use crate::svgtree::{Document, Node};
use crate::transform_parser::parse_transform;

/// The cascading parse state, copied into each container's children.
#[derive(Clone, Copy, Debug)]
struct State {
    viewport_width: f64,
    viewport_height: f64,
    ctm: Transform,
    style: Style,
}

/// Walks `doc` from its root `<svg>` element, producing a flattened
/// [`Diagram`].
pub fn convert(doc: &Document, viewport_width: f64, viewport_height: f64) -> Diagram {
    let mut diagram = Diagram {
        shapes: Vec::new(),
        width: viewport_width,
        height: viewport_height,
        last_error: None,
    };

    let root = doc.root_element();
    let state = State {
        viewport_width,
        viewport_height,
        ctm: Transform::identity(),
        style: Style::default(),
    };

    let state = enter_container(root, doc, &state, &mut diagram);
    diagram.width = state.viewport_width;
    diagram.height = state.viewport_height;

    walk_children(root, doc, &state, &mut diagram);

    diagram
}

/// Updates `state` for entering a container element (`svg`/`g`/`a`):
/// `width`/`height` override (root `<svg>` only), `viewBox`, `transform`,
/// and the paint cascade. Returns the state to recurse with.
fn enter_container(node: Node, doc: &Document, state: &State, diagram: &mut Diagram) -> State {
    let mut next = *state;

    if node.tag_name() == "svg" {
        if let Some(v) = node.attribute("width") {
            next.viewport_width = parse_length(v, state.viewport_width);
        }
        if let Some(v) = node.attribute("height") {
            next.viewport_height = parse_length(v, state.viewport_height);
        }
    }

    if let Some(view_box) = node.attribute("viewBox") {
        match parse_view_box(view_box) {
            Some((min_x, min_y, vb_w, vb_h)) if vb_w > 0.0 && vb_h > 0.0 => {
                let a = next.viewport_width / vb_w;
                let d = next.viewport_height / vb_h;
                let mut vb_ts = Transform::new_translate(-min_x * a, -min_y * d);
                vb_ts.append(&Transform::new_scale(a, d));
                next.ctm.append(&vb_ts);
            }
            _ => {
                report_error(diagram, "viewBox", "malformed viewBox attribute");
            }
        }
    }

    if let Some(v) = node.attribute("transform") {
        next.ctm.append(&parse_transform(v));
    }

    next.style = state.style.cascade(node, doc, next.viewport_width);
    next
}

/// `viewBox="minx miny vw vh"`, commas or spaces.
fn parse_view_box(s: &str) -> Option<(f64, f64, f64, f64)> {
    let nums: Vec<f64> = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .filter_map(|tok| tok.parse::<f64>().ok())
        .collect();
    if nums.len() == 4 {
        Some((nums[0], nums[1], nums[2], nums[3]))
    } else {
        None
    }
}

fn walk_children(node: Node, doc: &Document, state: &State, diagram: &mut Diagram) {
    for child in node.children() {
        match child.tag_name() {
            "svg" | "g" | "a" => {
                let child_state = enter_container(child, doc, state, diagram);
                walk_children(child, doc, &child_state, diagram);
            }
            "rect" => convert_rect(child, doc, state, diagram),
            "circle" => convert_circle(child, doc, state, diagram),
            "line" => convert_line(child, doc, state, diagram),
            "polyline" => convert_poly(child, doc, state, diagram, false),
            "polygon" => convert_poly(child, doc, state, diagram, true),
            "path" => convert_path(child, doc, state, diagram),
            "text" => convert_text(child, doc, state, diagram),
            other => {
                log::warn!("skipping unsupported element <{other}>");
            }
        }
    }
}

fn shape_style(node: Node, doc: &Document, state: &State) -> Style {
    state.style.cascade(node, doc, state.viewport_width)
}

fn push_path(diagram: &mut Diagram, mut path_data: crate::pathdata::PathData, ctm: Transform, style: Style) {
    if path_data.is_empty() {
        return;
    }
    path_data.transform(ctm);
    diagram.shapes.push(Shape::Path {
        path_data,
        fill: style.fill,
        stroke: style.stroke,
        stroke_width: style.stroke_width * ctm.isotropic_scale(),
    });
}

fn convert_rect(node: Node, doc: &Document, state: &State, diagram: &mut Diagram) {
    let vw = state.viewport_width;
    let vh = state.viewport_height;
    let x = node.attribute("x").map(|v| parse_length(v, vw)).unwrap_or(0.0);
    let y = node.attribute("y").map(|v| parse_length(v, vh)).unwrap_or(0.0);
    let width = node.attribute("width").map(|v| parse_length(v, vw)).unwrap_or(0.0);
    let height = node.attribute("height").map(|v| parse_length(v, vh)).unwrap_or(0.0);
    let style = shape_style(node, doc, state);
    push_path(diagram, shapes::rect(x, y, width, height), state.ctm, style);
}

fn convert_circle(node: Node, doc: &Document, state: &State, diagram: &mut Diagram) {
    let vw = state.viewport_width;
    let vh = state.viewport_height;
    let cx = node.attribute("cx").map(|v| parse_length(v, vw)).unwrap_or(0.0);
    let cy = node.attribute("cy").map(|v| parse_length(v, vh)).unwrap_or(0.0);
    let r = node.attribute("r").map(|v| parse_length(v, vw)).unwrap_or(0.0);
    let style = shape_style(node, doc, state);
    push_path(diagram, shapes::circle(cx, cy, r), state.ctm, style);
}

fn convert_line(node: Node, doc: &Document, state: &State, diagram: &mut Diagram) {
    let vw = state.viewport_width;
    let vh = state.viewport_height;
    let x1 = node.attribute("x1").map(|v| parse_length(v, vw)).unwrap_or(0.0);
    let y1 = node.attribute("y1").map(|v| parse_length(v, vh)).unwrap_or(0.0);
    let x2 = node.attribute("x2").map(|v| parse_length(v, vw)).unwrap_or(0.0);
    let y2 = node.attribute("y2").map(|v| parse_length(v, vh)).unwrap_or(0.0);
    let style = shape_style(node, doc, state);
    push_path(diagram, shapes::line(x1, y1, x2, y2), state.ctm, style);
}

fn convert_poly(node: Node, doc: &Document, state: &State, diagram: &mut Diagram, close: bool) {
    let points = match node.attribute("points") {
        Some(v) => shapes::parse_points(v),
        None => {
            report_error(diagram, "points", "missing points attribute");
            return;
        }
    };
    let style = shape_style(node, doc, state);
    push_path(diagram, shapes::polyline(&points, close), state.ctm, style);
}

fn convert_path(node: Node, doc: &Document, state: &State, diagram: &mut Diagram) {
    let d = match node.attribute("d") {
        Some(v) => v,
        None => {
            report_error(diagram, "d", "missing d attribute");
            return;
        }
    };
    let style = shape_style(node, doc, state);
    push_path(diagram, parse_path_data(d), state.ctm, style);
}

fn convert_text(node: Node, doc: &Document, state: &State, diagram: &mut Diagram) {
    let vw = state.viewport_width;
    let vh = state.viewport_height;
    let x = node.attribute("x").map(|v| parse_length(v, vw)).unwrap_or(0.0);
    let y = node.attribute("y").map(|v| parse_length(v, vh)).unwrap_or(0.0);
    let (px, py) = state.ctm.apply(x, y);
    let style = shape_style(node, doc, state);

    let next_state = State { viewport_width: vw, viewport_height: vh, ctm: state.ctm, style };
    walk_text_children(node, doc, &next_state, diagram, px, py);
}

/// `<text>`'s direct text-node content becomes a text shape anchored at
/// `(px, py)`; `<tspan>` children recurse, inheriting the same anchor and
/// cascaded style (this crate doesn't lay out relative tspan offsets).
fn walk_text_children(node: Node, doc: &Document, state: &State, diagram: &mut Diagram, px: f64, py: f64) {
    let text = node.text();
    if !text.trim().is_empty() {
        diagram.shapes.push(Shape::Text {
            content: text.to_string(),
            x: px,
            y: py,
            fill: state.style.fill,
            stroke: state.style.stroke,
            stroke_width: state.style.stroke_width * state.ctm.isotropic_scale(),
        });
    }

    for child in node.children() {
        if child.tag_name() == "tspan" {
            let style = shape_style(child, doc, state);
            let next_state = State { style, ..*state };
            walk_text_children(child, doc, &next_state, diagram, px, py);
        }
    }
}

fn report_error(diagram: &mut Diagram, context: &str, message: &str) {
    log::warn!("{context}: {message}");
    if diagram.last_error.is_none() {
        diagram.last_error = Some(SvgError { context: context.to_string(), message: message.to_string() });
    }
}
