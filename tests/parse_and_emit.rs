// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Whole-document scenarios, ported from SPEC_FULL.md §8's concrete
//! scenario list: parse a small SVG document, assert on the flattened
//! shape list it produces.

use pretty_assertions::assert_eq;

use svgflat::{Diagram, PathSegment, Shape};

fn only_shape(svg: &str, vw: f64, vh: f64) -> Shape {
    let diagram = Diagram::parse(svg, vw, vh).expect("valid document");
    assert_eq!(diagram.shapes.len(), 1, "expected exactly one shape");
    diagram.shapes.into_iter().next().unwrap()
}

#[test]
fn rect_becomes_four_lines_and_a_close() {
    let shape = only_shape(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
             <rect x="10" y="20" width="30" height="40" fill="#ff0000"/>
           </svg>"#,
        100.0,
        100.0,
    );
    match shape {
        Shape::Path { path_data, fill, stroke, .. } => {
            let segs = path_data.segments();
            assert_eq!(segs[0], PathSegment::MoveTo { x: 10.0, y: 20.0 });
            assert_eq!(segs[1], PathSegment::LineTo { x: 40.0, y: 20.0 });
            assert_eq!(segs[2], PathSegment::LineTo { x: 40.0, y: 60.0 });
            assert_eq!(segs[3], PathSegment::LineTo { x: 10.0, y: 60.0 });
            assert_eq!(segs[4], PathSegment::ClosePath);
            assert_eq!(fill, svgflat::Paint::Color(svgflat::Color::new(0xff, 0, 0)));
            assert!(stroke.is_none());
        }
        other => panic!("expected a path shape, got {other:?}"),
    }
}

#[test]
fn circle_with_stroke_none_omits_stroke_on_emit() {
    let shape = only_shape(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="50" height="50">
             <circle cx="0" cy="0" r="10" stroke="none"/>
           </svg>"#,
        50.0,
        50.0,
    );
    match shape {
        Shape::Path { path_data, stroke, .. } => {
            assert_eq!(path_data.len(), 6); // move + 4 curves + close
            assert!(stroke.is_none());
        }
        other => panic!("expected a path shape, got {other:?}"),
    }
}

#[test]
fn quadratic_in_path_data_is_promoted_to_cubic() {
    let shape = only_shape(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="50" height="50">
             <path d="M10,10 L20,20 q10,0 20,10 z"/>
           </svg>"#,
        50.0,
        50.0,
    );
    match shape {
        Shape::Path { path_data, .. } => {
            let segs = path_data.segments();
            match segs[2] {
                PathSegment::CurveTo { x1, y1, x2, y2, x, y } => {
                    assert!((x1 - 26.666667).abs() < 1e-4);
                    assert!((y1 - 20.0).abs() < 1e-4);
                    assert!((x2 - 33.333333).abs() < 1e-4);
                    assert!((y2 - 23.333333).abs() < 1e-4);
                    assert!((x - 40.0).abs() < 1e-9);
                    assert!((y - 30.0).abs() < 1e-9);
                }
                other => panic!("expected a CurveTo, got {other:?}"),
            }
            assert_eq!(segs[3], PathSegment::ClosePath);
        }
        other => panic!("expected a path shape, got {other:?}"),
    }
}

#[test]
fn view_box_rescales_child_coordinates() {
    let shape = only_shape(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10" width="100" height="100">
             <rect width="10" height="10"/>
           </svg>"#,
        100.0,
        100.0,
    );
    match shape {
        Shape::Path { path_data, .. } => {
            let segs = path_data.segments();
            assert_eq!(segs[0], PathSegment::MoveTo { x: 0.0, y: 0.0 });
            assert_eq!(segs[1], PathSegment::LineTo { x: 100.0, y: 0.0 });
            assert_eq!(segs[2], PathSegment::LineTo { x: 100.0, y: 100.0 });
            assert_eq!(segs[3], PathSegment::LineTo { x: 0.0, y: 100.0 });
        }
        other => panic!("expected a path shape, got {other:?}"),
    }
}

#[test]
fn nested_group_transform_composes_inside_parent() {
    let shape = only_shape(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="50" height="50">
             <g transform="translate(5,5) scale(2)">
               <rect width="1" height="1"/>
             </g>
           </svg>"#,
        50.0,
        50.0,
    );
    match shape {
        Shape::Path { path_data, .. } => {
            let segs = path_data.segments();
            assert_eq!(segs[0], PathSegment::MoveTo { x: 5.0, y: 5.0 });
            assert_eq!(segs[1], PathSegment::LineTo { x: 7.0, y: 5.0 });
            assert_eq!(segs[2], PathSegment::LineTo { x: 7.0, y: 7.0 });
            assert_eq!(segs[3], PathSegment::LineTo { x: 5.0, y: 7.0 });
        }
        other => panic!("expected a path shape, got {other:?}"),
    }
}

#[test]
fn round_trip_preserves_shape_count_and_geometry() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
        <rect x="10" y="20" width="30" height="40" fill="#ff0000"/>
    </svg>"#;
    let first = Diagram::parse(svg, 100.0, 100.0).unwrap();
    let rendered = first.to_svg_string();
    let second = Diagram::parse(&rendered, 100.0, 100.0).unwrap();

    assert_eq!(first.shapes.len(), second.shapes.len());
    match (&first.shapes[0], &second.shapes[0]) {
        (Shape::Path { path_data: a, .. }, Shape::Path { path_data: b, .. }) => {
            for (sa, sb) in a.segments().iter().zip(b.segments().iter()) {
                assert_eq!(sa, sb);
            }
        }
        other => panic!("expected two path shapes, got {other:?}"),
    }
}

#[test]
fn emitted_length_matches_the_written_string() {
    let diagram = Diagram::parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20">
             <line x1="0" y1="0" x2="10" y2="10" stroke="blue" stroke-width="2"/>
           </svg>"#,
        20.0,
        20.0,
    )
    .unwrap();
    assert_eq!(diagram.svg_len(), diagram.to_svg_string().len());
}

#[test]
fn unsupported_root_element_is_rejected() {
    let err = Diagram::parse("<html><body/></html>", 10.0, 10.0).unwrap_err();
    assert!(matches!(err, svgflat::ParseError::NotSvg));
}

#[test]
fn missing_d_attribute_is_recoverable_and_does_not_abort_the_parse() {
    let diagram = Diagram::parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
             <path/>
             <rect width="5" height="5"/>
           </svg>"#,
        10.0,
        10.0,
    )
    .unwrap();
    assert_eq!(diagram.shapes.len(), 1);
    assert!(diagram.last_error.is_some());
}

#[test]
fn text_anchor_is_transformed_by_the_live_ctm() {
    let shape = only_shape(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="50" height="50">
             <g transform="translate(10,10)">
               <text x="5" y="5">hello</text>
             </g>
           </svg>"#,
        50.0,
        50.0,
    );
    match shape {
        Shape::Text { content, x, y, .. } => {
            assert_eq!(content, "hello");
            assert_eq!((x, y), (15.0, 15.0));
        }
        other => panic!("expected a text shape, got {other:?}"),
    }
}

#[test]
fn anchor_element_is_a_transparent_container_like_g() {
    let shape = only_shape(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="50" height="50">
             <a href="https://example.com">
               <rect width="10" height="10" fill="green"/>
             </a>
           </svg>"#,
        50.0,
        50.0,
    );
    assert!(matches!(shape, Shape::Path { .. }));
}

#[test]
fn unsupported_ellipse_element_is_silently_skipped() {
    let diagram = Diagram::parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="50" height="50">
             <ellipse cx="25" cy="25" rx="10" ry="5"/>
             <rect width="5" height="5"/>
           </svg>"#,
        50.0,
        50.0,
    )
    .unwrap();
    assert_eq!(diagram.shapes.len(), 1);
}
