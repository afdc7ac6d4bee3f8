// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Color literal parsing: `#RGB`, `#RRGGBB`, `rgb()`, `none`, `url(#id)`
//! and named colors. Ported from `svgtiny_parse_color`.

use crate::color_table;
use crate::svgtree::Document;

/// An 8-bit RGBA color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// The fully-transparent sentinel: `fill`/`stroke` set to `none`, or
    /// any color whose alpha channel happens to be zero (the distilled
    /// spec treats these identically at emission time).
    #[inline]
    pub fn transparent() -> Self {
        Color { r: 0, g: 0, b: 0, a: 0 }
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    #[inline]
    pub fn black() -> Self {
        Color::new(0, 0, 0)
    }
}

/// A resolved paint value: a concrete color, no paint at all, or a
/// `url(#id)` reference to a gradient this crate doesn't resolve.
///
/// See `SPEC_FULL.md` §4.2 / §9 for why `LinearGradientRef` exists: the original C
/// never actually sets this sentinel on a successful `url()` lookup, even
/// though its own writer checks for it. This port sets it, so the check
/// is reachable.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Paint {
    Color(Color),
    None,
    LinearGradientRef,
}

impl Paint {
    #[inline]
    pub fn is_none(&self) -> bool {
        match self {
            Paint::None => true,
            Paint::LinearGradientRef => false,
            Paint::Color(c) => c.is_transparent(),
        }
    }
}

/// Parses a paint/color attribute value (`fill`, `stroke`, or the `style=`
/// substring for either). Returns `None` when the string is recognized as
/// malformed or references a missing `url(#id)`, in which case the caller
/// (the cascading state in `converter.rs`) must leave the inherited paint
/// unchanged, exactly like `svgtiny_parse_color` leaving `*c` untouched.
pub fn parse_paint(s: &str, doc: &Document) -> Option<Paint> {
    let s = s.trim();

    if s == "none" {
        return Some(Paint::None);
    }

    if let Some(id) = s.strip_prefix("url(#") {
        let id = id.split(')').next().unwrap_or(id);
        return if doc.element_by_id(id).is_some() {
            Some(Paint::LinearGradientRef)
        } else {
            log::warn!("id \"{}\" not found", id);
            None
        };
    }

    parse_color(s).map(Paint::Color)
}

/// Parses a bare color literal (no `none`/`url()` handling).
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if s.len() == 4 && s.starts_with('#') {
        let r = hex_nibble(s.as_bytes()[1])?;
        let g = hex_nibble(s.as_bytes()[2])?;
        let b = hex_nibble(s.as_bytes()[3])?;
        return Some(Color::new(r | (r << 4), g | (g << 4), b | (b << 4)));
    }

    if s.len() == 7 && s.starts_with('#') {
        let r = hex_byte(&s[1..3])?;
        let g = hex_byte(&s[3..5])?;
        let b = hex_byte(&s[5..7])?;
        return Some(Color::new(r, g, b));
    }

    if s.starts_with("rgb(") && s.ends_with(')') {
        let inner = &s[4..s.len() - 1];
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() == 3 {
            if let Some(color) = parse_rgb_channels(&parts) {
                return Some(color);
            }
        }
        return None;
    }

    color_table::lookup(s).map(|(r, g, b)| Color::new(r, g, b))
}

fn parse_rgb_channels(parts: &[&str]) -> Option<Color> {
    if parts.iter().all(|p| p.ends_with('%')) {
        let mut channels = [0u8; 3];
        for (i, p) in parts.iter().enumerate() {
            let n: f64 = p[..p.len() - 1].parse().ok()?;
            channels[i] = (n * 255.0 / 100.0) as u8;
        }
        Some(Color::new(channels[0], channels[1], channels[2]))
    } else {
        let mut channels = [0u8; 3];
        for (i, p) in parts.iter().enumerate() {
            channels[i] = p.parse().ok()?;
        }
        Some(Color::new(channels[0], channels[1], channels[2]))
    }
}

fn hex_nibble(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|v| v as u8)
}

fn hex_byte(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_duplicates_nibbles() {
        let c = parse_color("#abc").unwrap();
        assert_eq!(c.r, 0xaa);
        assert_eq!(c.g, 0xbb);
        assert_eq!(c.b, 0xcc);
    }

    #[test]
    fn long_hex() {
        let c = parse_color("#ff0000").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 0, 0));
    }

    #[test]
    fn rgb_integer_channels() {
        let c = parse_color("rgb(10,20,30)").unwrap();
        assert_eq!((c.r, c.g, c.b), (10, 20, 30));
    }

    #[test]
    fn rgb_percent_channels() {
        let c = parse_color("rgb(100%,0%,50%)").unwrap();
        assert_eq!(c.r, 255);
        assert_eq!(c.g, 0);
        assert_eq!(c.b, 127);
    }

    #[test]
    fn named_color() {
        assert_eq!(parse_color("red"), Some(Color::new(255, 0, 0)));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(parse_color("notacolor"), None);
    }
}
