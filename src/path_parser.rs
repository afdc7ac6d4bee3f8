// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The `d` attribute mini-language interpreter.
//!
//! Ported from `svgtiny_parse_path`'s state machine: a single cursor over
//! the (comma-normalized) attribute text, tried against each command in
//! turn, tracking the current point plus the last cubic/quadratic control
//! point for `S`/`T` shorthand reflection. Restructured as a hand-rolled
//! tokenizer instead of repeated `sscanf`, but the control flow —
//! including which state resets after which command family — is a
//! line-for-line port.

use crate::pathdata::PathData;

struct Cursor<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(s: &'a str) -> Self {
        Cursor { s, pos: 0 }
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.s[self.pos..].chars().next() {
            if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    /// Consumes the next path command letter, if one follows (skipping
    /// leading whitespace first). Does not consume anything on failure.
    fn try_command(&mut self) -> Option<char> {
        let save = self.pos;
        self.skip_ws();
        match self.s[self.pos..].chars().next() {
            Some(c) if "MmLlHhVvCcSsQqTtZz".contains(c) => {
                self.pos += c.len_utf8();
                Some(c)
            }
            _ => {
                self.pos = save;
                None
            }
        }
    }

    /// Consumes the next floating point literal, if one follows. Supports
    /// the same grammar as C's `sscanf("%f")`: optional sign, digits,
    /// optional fraction, optional exponent. Does not consume anything on
    /// failure.
    fn try_number(&mut self) -> Option<f64> {
        let save = self.pos;
        self.skip_ws();
        let start = self.pos;
        let bytes = self.s.as_bytes();
        let mut i = self.pos;

        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }

        let mut has_digits = false;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            has_digits = true;
        }
        if i < bytes.len() && bytes[i] == b'.' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
                has_digits = true;
            }
        }

        if !has_digits {
            self.pos = save;
            return None;
        }

        let mut j = i;
        if j < bytes.len() && (bytes[j] == b'e' || bytes[j] == b'E') {
            let mut k = j + 1;
            if k < bytes.len() && (bytes[k] == b'+' || bytes[k] == b'-') {
                k += 1;
            }
            let exp_start = k;
            while k < bytes.len() && bytes[k].is_ascii_digit() {
                k += 1;
            }
            if k > exp_start {
                j = k;
            }
        }

        let text = &self.s[start..j];
        match text.parse() {
            Ok(n) => {
                self.pos = j;
                Some(n)
            }
            Err(_) => {
                self.pos = save;
                None
            }
        }
    }

    fn try_pair(&mut self) -> Option<(f64, f64)> {
        let save = self.pos;
        match (self.try_number(), self.try_number()) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => {
                self.pos = save;
                None
            }
        }
    }
}

/// Parses an SVG `d` attribute value into a [`PathData`] tape, in the
/// element's own user-space coordinates (not yet transformed by the CTM;
/// the walker transforms the whole tape afterwards).
///
/// Stops silently at the first unrecognized token, keeping whatever was
/// already accumulated — the distilled spec requires this (tier-3
/// recoverable malformation, not a hard parse failure).
pub fn parse_path_data(d: &str) -> PathData {
    let normalized = d.replace(',', " ");
    let mut cur = Cursor::new(&normalized);
    let mut path = PathData::new();

    let mut last_x = 0.0_f64;
    let mut last_y = 0.0_f64;
    let mut last_cubic = (0.0_f64, 0.0_f64);
    let mut last_quad = (0.0_f64, 0.0_f64);

    while let Some(cmd) = cur.try_command() {
        match cmd {
            'M' | 'm' | 'L' | 'l' => {
                let relative = cmd.is_ascii_lowercase();
                let is_move = cmd == 'M' || cmd == 'm';

                let (mut x, mut y) = match cur.try_pair() {
                    Some(p) => p,
                    None => break,
                };
                if relative {
                    x += last_x;
                    y += last_y;
                }
                if is_move {
                    path.push_move_to(x, y);
                } else {
                    path.push_line_to(x, y);
                }
                last_x = x;
                last_y = y;
                last_cubic = (x, y);
                last_quad = (x, y);

                while let Some((mut x, mut y)) = cur.try_pair() {
                    if relative {
                        x += last_x;
                        y += last_y;
                    }
                    path.push_line_to(x, y);
                    last_x = x;
                    last_y = y;
                    last_cubic = (x, y);
                    last_quad = (x, y);
                }
            }

            'H' | 'h' => {
                let relative = cmd == 'h';
                let mut x = match cur.try_number() {
                    Some(x) => x,
                    None => break,
                };
                loop {
                    if relative {
                        x += last_x;
                    }
                    path.push_line_to(x, last_y);
                    last_x = x;
                    last_cubic = (last_x, last_y);
                    last_quad = (last_x, last_y);
                    match cur.try_number() {
                        Some(next) => x = next,
                        None => break,
                    }
                }
            }

            'V' | 'v' => {
                let relative = cmd == 'v';
                let mut y = match cur.try_number() {
                    Some(y) => y,
                    None => break,
                };
                loop {
                    if relative {
                        y += last_y;
                    }
                    path.push_line_to(last_x, y);
                    last_y = y;
                    last_cubic = (last_x, last_y);
                    last_quad = (last_x, last_y);
                    match cur.try_number() {
                        Some(next) => y = next,
                        None => break,
                    }
                }
            }

            'C' | 'c' => {
                let relative = cmd == 'c';
                loop {
                    let save = cur.pos;
                    let (mut x1, mut y1) = match cur.try_pair() {
                        Some(p) => p,
                        None => {
                            cur.pos = save;
                            break;
                        }
                    };
                    let (mut x2, mut y2) = match cur.try_pair() {
                        Some(p) => p,
                        None => {
                            cur.pos = save;
                            break;
                        }
                    };
                    let (mut x, mut y) = match cur.try_pair() {
                        Some(p) => p,
                        None => {
                            cur.pos = save;
                            break;
                        }
                    };
                    if relative {
                        x1 += last_x;
                        y1 += last_y;
                        x2 += last_x;
                        y2 += last_y;
                        x += last_x;
                        y += last_y;
                    }
                    path.push_curve_to(x1, y1, x2, y2, x, y);
                    last_cubic = (x2, y2);
                    last_quad = (x, y);
                    last_x = x;
                    last_y = y;
                }
            }

            'S' | 's' => {
                let relative = cmd == 's';
                loop {
                    let save = cur.pos;
                    let (mut x2, mut y2) = match cur.try_pair() {
                        Some(p) => p,
                        None => {
                            cur.pos = save;
                            break;
                        }
                    };
                    let (mut x, mut y) = match cur.try_pair() {
                        Some(p) => p,
                        None => {
                            cur.pos = save;
                            break;
                        }
                    };
                    let x1 = last_x + (last_x - last_cubic.0);
                    let y1 = last_y + (last_y - last_cubic.1);
                    if relative {
                        x2 += last_x;
                        y2 += last_y;
                        x += last_x;
                        y += last_y;
                    }
                    path.push_curve_to(x1, y1, x2, y2, x, y);
                    last_cubic = (x2, y2);
                    last_quad = (x, y);
                    last_x = x;
                    last_y = y;
                }
            }

            'Q' | 'q' => {
                let relative = cmd == 'q';
                loop {
                    let save = cur.pos;
                    let (mut x1, mut y1) = match cur.try_pair() {
                        Some(p) => p,
                        None => {
                            cur.pos = save;
                            break;
                        }
                    };
                    let (mut x, mut y) = match cur.try_pair() {
                        Some(p) => p,
                        None => {
                            cur.pos = save;
                            break;
                        }
                    };
                    // The original stores the *authored* control point
                    // (before the relative offset is applied), which for
                    // lowercase `q` is a delta, not an absolute point.
                    // `T`/`t` reflection below inherits this quirk.
                    last_quad = (x1, y1);
                    if relative {
                        x1 += last_x;
                        y1 += last_y;
                        x += last_x;
                        y += last_y;
                    }
                    path.push_quad_as_cubic(last_x, last_y, x1, y1, x, y);
                    last_cubic = (x, y);
                    last_x = x;
                    last_y = y;
                }
            }

            'T' | 't' => {
                let relative = cmd == 't';
                loop {
                    let save = cur.pos;
                    let (mut x, mut y) = match cur.try_pair() {
                        Some(p) => p,
                        None => {
                            cur.pos = save;
                            break;
                        }
                    };
                    let mut x1 = last_x + (last_x - last_quad.0);
                    let mut y1 = last_y + (last_y - last_quad.1);
                    last_quad = (x1, y1);
                    if relative {
                        x1 += last_x;
                        y1 += last_y;
                        x += last_x;
                        y += last_y;
                    }
                    path.push_quad_as_cubic(last_x, last_y, x1, y1, x, y);
                    last_cubic = (x, y);
                    last_x = x;
                    last_y = y;
                }
            }

            'Z' | 'z' => {
                path.push_close_path();
            }

            _ => unreachable!("Cursor::try_command only returns known commands"),
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathdata::PathSegment;

    #[test]
    fn moveto_lineto_close() {
        let p = parse_path_data("M10,10 L20,20 Z");
        let segs = p.segments();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0], PathSegment::MoveTo { x: 10.0, y: 10.0 });
        assert_eq!(segs[1], PathSegment::LineTo { x: 20.0, y: 20.0 });
        assert_eq!(segs[2], PathSegment::ClosePath);
    }

    #[test]
    fn relative_lineto_accumulates_from_current_point() {
        let p = parse_path_data("M0,0 l10,0 l0,10");
        let segs = p.segments();
        assert_eq!(segs[1], PathSegment::LineTo { x: 10.0, y: 0.0 });
        assert_eq!(segs[2], PathSegment::LineTo { x: 10.0, y: 10.0 });
    }

    #[test]
    fn quadratic_is_promoted_to_cubic() {
        // M10,10 L20,20 q10,0 20,10 z, per SPEC_FULL scenario 3.
        let p = parse_path_data("M10,10 L20,20 q10,0 20,10 z");
        let segs = p.segments();
        match segs[2] {
            PathSegment::CurveTo { x1, y1, x2, y2, x, y } => {
                assert!((x1 - 26.666667).abs() < 1e-4);
                assert!((y1 - 20.0).abs() < 1e-4);
                assert!((x2 - 33.333333).abs() < 1e-4);
                assert!((y2 - 23.333333).abs() < 1e-4);
                assert!((x - 40.0).abs() < 1e-9);
                assert!((y - 30.0).abs() < 1e-9);
            }
            other => panic!("expected CurveTo, got {other:?}"),
        }
        assert_eq!(segs[3], PathSegment::ClosePath);
    }

    #[test]
    fn smooth_curve_reflects_previous_control_point() {
        let p = parse_path_data("M0,0 C10,0 10,10 20,10 S30,20 30,30");
        let segs = p.segments();
        match segs[2] {
            PathSegment::CurveTo { x1, y1, .. } => {
                // reflection of (10,10) about (20,10) is (30,10)
                assert_eq!((x1, y1), (30.0, 10.0));
            }
            other => panic!("expected CurveTo, got {other:?}"),
        }
    }

    #[test]
    fn horizontal_and_vertical_lineto_hold_the_other_axis() {
        let p = parse_path_data("M5,5 H15 V25");
        let segs = p.segments();
        assert_eq!(segs[1], PathSegment::LineTo { x: 15.0, y: 5.0 });
        assert_eq!(segs[2], PathSegment::LineTo { x: 15.0, y: 25.0 });
    }

    #[test]
    fn unrecognized_token_terminates_parsing_but_keeps_prefix() {
        let p = parse_path_data("M0,0 L10,10 X99,99");
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn missing_d_is_simply_empty() {
        let p = parse_path_data("");
        assert!(p.is_empty());
    }
}
