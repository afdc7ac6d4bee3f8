// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`svgflat` parses a (restricted) SVG 1.1 document into a flat, render-ready
[`Diagram`]: a list of [`Shape`]s, each already reduced to absolute-space
path tapes or text anchors, with every inherited paint/font/transform
attribute resolved. There's a companion [`Diagram::to_svg_string`] that
serializes a diagram back into a minimal SVG document, so a diagram can
round-trip through text for inspection, caching, or testing.

This sits one layer below a general-purpose SVG parser like `usvg`: there's
no CSS cascade, no gradients, no clip paths or filters, no `use`/`defs`
resolution, and no arc command. What's left is the geometry every such
parser eventually has to reduce primitives to anyway — rectangles, circles,
lines, polylines/polygons and arbitrary `path` data — plus just enough of
the paint model (`fill`/`stroke`/`stroke-width`, inline `style=`) to carry
color through to the output.

## Pipeline

```text
&str (SVG source)
  -> svgtree::Document      (roxmltree -> a small id-indexed element tree)
  -> converter::convert      (recursive descent, cascading paint/CTM state)
  -> Diagram                 (flat Vec<Shape>, already in device space)
  -> Diagram::to_svg_string  (optional: emit back to SVG text)
```

## Example

```
use svgflat::Diagram;

let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
    <rect x="10" y="20" width="30" height="40" fill="#ff0000"/>
</svg>"#;

let diagram = Diagram::parse(svg, 100.0, 100.0).unwrap();
assert_eq!(diagram.shapes.len(), 1);
println!("{}", diagram.to_svg_string());
```
*/

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]

mod color;
mod color_table;
mod converter;
mod diagram;
mod emitter;
mod geom;
mod length;
mod path_parser;
mod pathdata;
mod shapes;
mod style;
mod svgtree;
mod transform_parser;

pub use color::{Color, Paint};
pub use diagram::{Diagram, ParseError, Shape, SvgError};
pub use geom::Transform;
pub use pathdata::{PathData, PathSegment};
