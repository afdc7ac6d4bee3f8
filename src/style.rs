// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Presentation attribute resolution: `fill`, `stroke`, `stroke-width`,
//! and the inline `style="..."` shorthand that can set any of the three.
//!
//! Ported from `svgtiny_parse_paint_attributes`, which scans `style` for
//! each of `fill:`/`stroke:`/`stroke-width:` as an independent substring
//! search rather than splitting on `;` into a property map. That means a
//! malformed declaration (`fill` missing its colon, say) simply fails to
//! match its own search and leaves that one property alone — the other
//! two are unaffected. This keeps that property-by-property independence
//! instead of the more obviously "correct" split-then-parse design, since
//! the fault isolation is itself part of the behavior being preserved.

use crate::color::{parse_paint, Color, Paint};
use crate::length::parse_length;
use crate::svgtree::{Document, Node};

/// The cascading presentation state carried down the element tree.
#[derive(Clone, Copy, Debug)]
pub struct Style {
    pub fill: Paint,
    pub stroke: Paint,
    pub stroke_width: f64,
}

impl Default for Style {
    /// SVG's initial values: black fill, no stroke, 1 unit stroke width.
    fn default() -> Self {
        Style {
            fill: Paint::Color(Color::black()),
            stroke: Paint::None,
            stroke_width: 1.0,
        }
    }
}

impl Style {
    /// Resolves this element's own `fill`/`stroke`/`stroke-width` (as
    /// plain attributes, then as `style="..."` overrides, matching the
    /// original's attribute-then-style precedence) against the inherited
    /// state, returning the state to pass to this element's children.
    ///
    /// `viewport_width` is used to resolve percentage `stroke-width`
    /// lengths — the original always measures `stroke-width` (and every
    /// other non-axis-specific length) against the viewport *width*,
    /// never an average or diagonal, and this keeps that exactly.
    pub fn cascade(&self, node: Node, doc: &Document, viewport_width: f64) -> Style {
        let mut next = *self;

        if let Some(v) = node.attribute("fill") {
            if let Some(p) = parse_paint(v, doc) {
                next.fill = p;
            }
        }
        if let Some(v) = node.attribute("stroke") {
            if let Some(p) = parse_paint(v, doc) {
                next.stroke = p;
            }
        }
        if let Some(v) = node.attribute("stroke-width") {
            next.stroke_width = parse_length(v, viewport_width);
        }

        if let Some(style) = node.attribute("style") {
            if let Some(v) = find_declaration(style, "fill") {
                if let Some(p) = parse_paint(v, doc) {
                    next.fill = p;
                }
            }
            if let Some(v) = find_declaration(style, "stroke") {
                if let Some(p) = parse_paint(v, doc) {
                    next.stroke = p;
                }
            }
            if let Some(v) = find_declaration(style, "stroke-width") {
                next.stroke_width = parse_length(v, viewport_width);
            }
        }

        next
    }
}

/// Finds `name:value` inside a `style` attribute's text by direct
/// substring search (not a `;`-split property map): locates the first
/// occurrence of `"{name}:"` (colon included, so `fill` never matches
/// inside `stroke-width`'s property name), skips leading spaces, then
/// reads up to the next `;` or space, whichever comes first — matching
/// `strcspn(s, "; ")` in `svgtiny_parse_paint_attributes`.
fn find_declaration<'a>(style: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{name}:");
    let pos = style.find(&needle)?;
    let value = style[pos + needle.len()..].trim_start_matches(' ');
    let end = value.find([';', ' ']).unwrap_or(value.len());
    Some(&value[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_black_fill_no_stroke() {
        let s = Style::default();
        assert_eq!(s.fill, Paint::Color(Color::black()));
        assert_eq!(s.stroke, Paint::None);
        assert_eq!(s.stroke_width, 1.0);
    }

    #[test]
    fn style_attribute_sets_all_three_independently() {
        let v = find_declaration("fill:red;stroke:blue;stroke-width:2", "fill");
        assert_eq!(v, Some("red"));
        let v = find_declaration("fill:red;stroke:blue;stroke-width:2", "stroke");
        assert_eq!(v, Some("blue"));
        let v = find_declaration("fill:red;stroke:blue;stroke-width:2", "stroke-width");
        assert_eq!(v, Some("2"));
    }

    #[test]
    fn fill_search_does_not_match_inside_stroke_width_name() {
        let v = find_declaration("stroke-width:3", "fill");
        assert_eq!(v, None);
    }

    #[test]
    fn malformed_declaration_leaves_only_itself_unset() {
        // no colon after "fill" -> no match, but stroke still parses.
        let v = find_declaration("fill red; stroke:green", "fill");
        assert_eq!(v, None);
        let v = find_declaration("fill red; stroke:green", "stroke");
        assert_eq!(v, Some("green"));
    }
}
