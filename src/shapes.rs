// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Basic shape element constructors: `rect`, `circle`, `ellipse`, `line`,
//! `polyline` and `polygon`, each reduced to a [`PathData`] tape in the
//! element's own user-space coordinates.
//!
//! Ported from the fixed-layout constructors in `svgtiny.c`
//! (`svgtiny_parse_rect`, `svgtiny_parse_circle`, ...), which built a
//! fixed-length float array per shape; here each just appends segments.

use crate::pathdata::PathData;

/// Bezier approximation constant for a quarter circle, `4/3*(sqrt(2)-1)`,
/// matching the original's hard-coded `KAPPA`.
const KAPPA: f64 = 0.5522847498;

pub fn rect(x: f64, y: f64, width: f64, height: f64) -> PathData {
    let mut p = PathData::new();
    if width <= 0.0 || height <= 0.0 {
        return p;
    }

    p.push_move_to(x, y);
    p.push_line_to(x + width, y);
    p.push_line_to(x + width, y + height);
    p.push_line_to(x, y + height);
    p.push_close_path();
    p
}

pub fn circle(cx: f64, cy: f64, r: f64) -> PathData {
    ellipse(cx, cy, r, r)
}

/// Four cubic Beziers approximating an ellipse, starting at `(cx-rx, cy)`
/// and winding through `(cx, cy+ry)`, `(cx+rx, cy)`, `(cx, cy-ry)` — ported
/// control-point-for-control-point from `svgtiny_parse_circle`
/// (`svgtiny.c:503-530`), which this is the `rx != ry` generalization of.
pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> PathData {
    let mut p = PathData::new();
    if rx <= 0.0 || ry <= 0.0 {
        return p;
    }

    let kx = rx * KAPPA;
    let ky = ry * KAPPA;

    p.push_move_to(cx - rx, cy);
    p.push_curve_to(cx - rx, cy + ky, cx - kx, cy + ry, cx, cy + ry);
    p.push_curve_to(cx + kx, cy + ry, cx + rx, cy + ky, cx + rx, cy);
    p.push_curve_to(cx + rx, cy - ky, cx + kx, cy - ry, cx, cy - ry);
    p.push_curve_to(cx - kx, cy - ry, cx - rx, cy - ky, cx - rx, cy);
    p.push_close_path();
    p
}

pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> PathData {
    let mut p = PathData::new();
    p.push_move_to(x1, y1);
    p.push_line_to(x2, y2);
    p
}

pub fn polyline(points: &[(f64, f64)], close: bool) -> PathData {
    let mut p = PathData::new();
    let mut iter = points.iter();
    if let Some(&(x, y)) = iter.next() {
        p.push_move_to(x, y);
        for &(x, y) in iter {
            p.push_line_to(x, y);
        }
        if close {
            p.push_close_path();
        }
    }
    p
}

/// Parses the `points` attribute shared by `<polyline>` and `<polygon>`:
/// whitespace- and/or comma-separated numbers, grouped in pairs. A
/// trailing unpaired number is dropped, matching the original's
/// `sscanf("%f %f")`-pair loop silently stopping when only one number
/// remains.
pub fn parse_points(s: &str) -> Vec<(f64, f64)> {
    let nums: Vec<f64> = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .filter_map(|tok| tok.parse::<f64>().ok())
        .collect();

    nums.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rect_is_four_lines_and_a_close() {
        let p = rect(10.0, 10.0, 30.0, 40.0);
        let segs = p.segments();
        assert_eq!(segs.len(), 5);
        assert_eq!(segs[0], crate::pathdata::PathSegment::MoveTo { x: 10.0, y: 10.0 });
        assert_eq!(segs[1], crate::pathdata::PathSegment::LineTo { x: 40.0, y: 10.0 });
        assert_eq!(segs[2], crate::pathdata::PathSegment::LineTo { x: 40.0, y: 50.0 });
        assert_eq!(segs[3], crate::pathdata::PathSegment::LineTo { x: 10.0, y: 50.0 });
        assert_eq!(segs[4], crate::pathdata::PathSegment::ClosePath);
    }

    #[test]
    fn zero_size_rect_is_empty() {
        assert!(rect(0.0, 0.0, 0.0, 10.0).is_empty());
    }

    #[test]
    fn circle_closes_with_four_curves() {
        let p = circle(50.0, 50.0, 25.0);
        assert_eq!(p.len(), 6); // move + 4 curves + close
    }

    #[test]
    fn circle_starts_at_cx_minus_r_and_winds_through_the_cardinal_points() {
        let p = circle(0.0, 0.0, 10.0);
        let segs = p.segments();
        assert_eq!(segs[0], crate::pathdata::PathSegment::MoveTo { x: -10.0, y: 0.0 });
        match segs[1] {
            crate::pathdata::PathSegment::CurveTo { x, y, .. } => assert_eq!((x, y), (0.0, 10.0)),
            other => panic!("expected CurveTo, got {other:?}"),
        }
        match segs[2] {
            crate::pathdata::PathSegment::CurveTo { x, y, .. } => assert_eq!((x, y), (10.0, 0.0)),
            other => panic!("expected CurveTo, got {other:?}"),
        }
        match segs[3] {
            crate::pathdata::PathSegment::CurveTo { x, y, .. } => assert_eq!((x, y), (0.0, -10.0)),
            other => panic!("expected CurveTo, got {other:?}"),
        }
    }

    #[test]
    fn points_attribute_parses_pairs_and_drops_trailing_odd_value() {
        let pts = parse_points("0,0 10,0 10,10 5");
        assert_eq!(pts, vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    }

    #[test]
    fn polygon_closes_polyline_does_not() {
        let pts = vec![(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)];
        let polygon = polyline(&pts, true);
        let open = polyline(&pts, false);
        assert_eq!(polygon.len(), 4);
        assert_eq!(open.len(), 3);
    }
}
