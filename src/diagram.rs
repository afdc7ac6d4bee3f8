// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The flattened render-ready output: a [`Diagram`] is a flat list of
//! [`Shape`]s in absolute device-space coordinates, plus the viewport
//! size the original document declared.
//!
//! This is this crate's equivalent of the original's `struct svgtiny_diagram`
//! (`shape` array, `width`, `height`, `error_line`/`error_message`).

use crate::color::Paint;
use crate::converter;
use crate::pathdata::PathData;
use crate::svgtree::Document;

/// One flattened drawable element.
#[derive(Clone, Debug)]
pub enum Shape {
    /// Any filled/stroked outline: rectangles, circles, lines, polylines,
    /// polygons and `<path>` all normalize to this.
    Path {
        path_data: PathData,
        fill: Paint,
        stroke: Paint,
        stroke_width: f64,
    },
    /// A run of text, positioned at its already-transformed baseline
    /// origin. Glyph layout isn't performed; consumers that need to draw
    /// this are expected to shape the text themselves.
    Text {
        content: String,
        x: f64,
        y: f64,
        fill: Paint,
        stroke: Paint,
        stroke_width: f64,
    },
}

/// A single recoverable malformation encountered while parsing.
///
/// The original identifies these by source line number; `roxmltree`
/// doesn't expose one convenient for this, so this carries a short
/// description of the offending element/attribute instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgError {
    pub context: String,
    pub message: String,
}

impl std::fmt::Display for SvgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.context, self.message)
    }
}

/// A complete parse of an SVG document: every shape it resolved to, in
/// painter's order, plus the viewport it was laid out against.
#[derive(Clone, Debug)]
pub struct Diagram {
    pub shapes: Vec<Shape>,
    pub width: f64,
    pub height: f64,
    /// The most recent tier-3 recoverable malformation encountered, if
    /// any. Every occurrence is also logged via `log::warn!` as it's
    /// found; this field only retains the last one, matching the
    /// original's single `error_line`/`error_message` pair.
    pub last_error: Option<SvgError>,
}

/// Failure to parse an SVG document at all (as opposed to a recoverable,
/// per-element malformation — see [`SvgError`]).
#[derive(Debug)]
pub enum ParseError {
    /// The document's root element isn't `<svg>`.
    NotSvg,
    /// The XML itself is malformed.
    Xml(roxmltree::Error),
    /// The requested viewport is degenerate (zero or negative).
    InvalidSize,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::NotSvg => write!(f, "root element is not <svg>"),
            ParseError::Xml(e) => write!(f, "XML error: {e}"),
            ParseError::InvalidSize => write!(f, "viewport width/height must both be positive"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Xml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<roxmltree::Error> for ParseError {
    fn from(e: roxmltree::Error) -> Self {
        ParseError::Xml(e)
    }
}

impl Diagram {
    /// Parses `svg` against the given viewport, flattening every shape it
    /// contains into absolute coordinates.
    ///
    /// `viewport_width`/`viewport_height` play the role of the original's
    /// `svgtiny_create`-time target size: they seed percentage-length
    /// resolution and, when the root `<svg>` carries a `viewBox`, the
    /// initial scale into that viewport.
    pub fn parse(svg: &str, viewport_width: f64, viewport_height: f64) -> Result<Diagram, ParseError> {
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            return Err(ParseError::InvalidSize);
        }

        let doc = match Document::parse(svg)? {
            Some(doc) => doc,
            None => return Err(ParseError::NotSvg),
        };

        Ok(converter::convert(&doc, viewport_width, viewport_height))
    }
}
