// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! CSS length parsing.
//!
//! Ported from `svgtiny_parse_length` (`examples/original_source/svgtiny.c`):
//! the numeric prefix is the longest run over `{0-9, +, -, .}`, the suffix
//! is matched case-sensitively against a fixed unit table, and an unknown
//! suffix resolves to `0` rather than an error — lengths never fail to parse.

/// The fixed font size used to resolve `em`/`ex` lengths.
///
/// There is no CSS cascade in this crate, so `font-size` is never read off
/// an element; every `em` is simply 20 user units, matching the original's
/// hard-coded `float font_size = 20;`.
pub const FONT_SIZE: f64 = 20.0;

/// Parses a CSS length string into user-space units.
///
/// `viewport_size` is the current viewport width or height, whichever axis
/// the length expresses; it is only consulted for `%` lengths.
pub fn parse_length(s: &str, viewport_size: f64) -> f64 {
    let s = s.trim();
    let num_len = s
        .find(|c: char| !(c.is_ascii_digit() || c == '+' || c == '-' || c == '.'))
        .unwrap_or(s.len());
    let (num_str, unit) = s.split_at(num_len);
    let n: f64 = num_str.parse().unwrap_or(0.0);

    match unit {
        "" => n,
        "%" => n / 100.0 * viewport_size,
        "em" => n * FONT_SIZE,
        "ex" => n / 2.0 * FONT_SIZE,
        "px" => n,
        "pt" => n * 1.25,
        "pc" => n * 15.0,
        "mm" => n * 3.543307,
        "cm" => n * 35.43307,
        "in" => n * 90.0,
        _ => 0.0,
    }
}
