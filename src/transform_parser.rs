// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The `transform` attribute mini-language: a whitespace/comma-separated
//! list of `matrix()`/`translate()`/`scale()`/`rotate()`/`skewX()`/`skewY()`
//! function calls, composed left to right.
//!
//! Ported from `svgtiny_parse_transform_attributes`, including its
//! `rotate(angle cx cy)` expansion: rotation about an arbitrary point is
//! expressed directly as a single 6-parameter matrix rather than as
//! translate-rotate-translate, to match the original's formula exactly.

use crate::geom::Transform;

/// Parses a `transform` attribute value into a single composed
/// [`Transform`]. Unrecognized function names or malformed argument lists
/// stop parsing at that point, keeping whatever was composed so far — the
/// same tier-3 "keep the accumulated prefix" behavior as path/color
/// parsing.
pub fn parse_transform(s: &str) -> Transform {
    let mut result = Transform::identity();
    let mut rest = s;

    while let Some((name, args, tail)) = next_function(rest) {
        let nums = parse_args(args);
        let applied = match name {
            "matrix" if nums.len() == 6 => {
                Some(Transform::new(nums[0], nums[1], nums[2], nums[3], nums[4], nums[5]))
            }
            "translate" if nums.len() == 1 => Some(Transform::new_translate(nums[0], 0.0)),
            "translate" if nums.len() == 2 => Some(Transform::new_translate(nums[0], nums[1])),
            "scale" if nums.len() == 1 => Some(Transform::new_scale(nums[0], nums[0])),
            "scale" if nums.len() == 2 => Some(Transform::new_scale(nums[0], nums[1])),
            "rotate" if nums.len() == 1 => Some(Transform::new_rotate(nums[0])),
            "rotate" if nums.len() == 3 => Some(Transform::new_rotate_at(nums[0], nums[1], nums[2])),
            "skewX" if nums.len() == 1 => Some(Transform::new_skew_x(nums[0])),
            "skewY" if nums.len() == 1 => Some(Transform::new_skew_y(nums[0])),
            _ => None,
        };

        match applied {
            Some(ts) => {
                result.append(&ts);
                rest = tail;
            }
            None => break,
        }
    }

    result
}

/// Splits off the next `name(args)` call, skipping leading separators.
/// Returns `(name, args, remainder)`.
fn next_function(s: &str) -> Option<(&str, &str, &str)> {
    let s = s.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
    let open = s.find('(')?;
    let name = s[..open].trim();
    if name.is_empty() {
        return None;
    }
    let close = s[open..].find(')')? + open;
    let args = &s[open + 1..close];
    let tail = &s[close + 1..];
    Some((name, args, tail))
}

fn parse_args(s: &str) -> Vec<f64> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .filter_map(|tok| tok.parse::<f64>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_then_scale_compose_left_to_right() {
        let ts = parse_transform("translate(10,20) scale(2)");
        let (x, y) = ts.apply(1.0, 1.0);
        // scale applies to local coordinates first: (1,1) -> (2,2),
        // then translate: (2,2) -> (12,22).
        assert_eq!((x, y), (12.0, 22.0));
    }

    #[test]
    fn single_value_translate_is_y_zero() {
        let ts = parse_transform("translate(5)");
        assert_eq!(ts.apply(0.0, 0.0), (5.0, 0.0));
    }

    #[test]
    fn uniform_scale_shorthand() {
        let ts = parse_transform("scale(3)");
        assert_eq!(ts.apply(2.0, 2.0), (6.0, 6.0));
    }

    #[test]
    fn rotate_about_origin() {
        let ts = parse_transform("rotate(90)");
        let (x, y) = ts.apply(1.0, 0.0);
        assert!((x - 0.0).abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rotate_about_arbitrary_point_fixes_that_point() {
        let ts = parse_transform("rotate(90 10 10)");
        let (x, y) = ts.apply(10.0, 10.0);
        assert!((x - 10.0).abs() < 1e-9);
        assert!((y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_function_stops_parsing_but_keeps_prefix() {
        let ts = parse_transform("translate(10,10) frobnicate(1,2,3)");
        assert_eq!(ts.apply(0.0, 0.0), (10.0, 10.0));
    }

    #[test]
    fn empty_string_is_identity() {
        assert!(parse_transform("").is_default());
    }
}
