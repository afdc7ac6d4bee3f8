// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A small, read-only SVG element tree built once over `roxmltree`'s XML
//! tree, indexed by `id` for O(1) `url(#id)` resolution.
//!
//! `roxmltree` plays the role of the opaque XML tokenizer the distilled
//! spec treats as an external collaborator. This module is this crate's
//! equivalent of `rosvgtree`/`usvg::svgtree`: a thin SVG-flavored wrapper
//! over it. Unlike those, nodes here own their data (tag name, attributes,
//! text) instead of borrowing from `roxmltree::Node` — this crate's
//! element/attribute vocabulary is small enough that the copy is cheap,
//! and it sidesteps keeping a `roxmltree::Document` borrow alive
//! alongside a parallel by-id index.

use std::collections::HashMap;

#[derive(Debug)]
struct ElementNode {
    tag_name: String,
    attrs: Vec<(String, String)>,
    children: Vec<usize>,
    text: String,
}

/// A parsed SVG document, indexed by element `id`.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<ElementNode>,
    links: HashMap<String, usize>,
}

impl Document {
    /// Parses `svg` with `roxmltree` and flattens it into this crate's own
    /// element tree, rooted at the first element named `svg`.
    ///
    /// Returns `None` when there is no root `<svg>` element — the caller
    /// turns that into `ParseError::NotSvg`.
    pub fn parse(svg: &str) -> Result<Option<Document>, roxmltree::Error> {
        let xml = roxmltree::Document::parse(svg)?;
        let root = xml.root_element();
        if root.tag_name().name() != "svg" {
            return Ok(None);
        }

        let mut doc = Document { nodes: Vec::new(), links: HashMap::new() };
        doc.build(root);
        Ok(Some(doc))
    }

    fn build(&mut self, xml_node: roxmltree::Node) -> usize {
        let tag_name = xml_node.tag_name().name().to_string();
        let attrs = xml_node
            .attributes()
            .iter()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect();

        let mut text = String::new();
        for child in xml_node.children() {
            if child.is_text() {
                if let Some(t) = child.text() {
                    text.push_str(t);
                }
            }
        }

        let index = self.nodes.len();
        self.nodes.push(ElementNode { tag_name, attrs, children: Vec::new(), text });

        if let Some(id) = xml_node.attribute("id") {
            self.links.entry(id.to_string()).or_insert(index);
        }

        let mut children = Vec::new();
        for child in xml_node.children() {
            if child.is_element() {
                children.push(self.build(child));
            }
        }
        self.nodes[index].children = children;

        index
    }

    /// Returns the document's root `<svg>` element.
    pub fn root_element(&self) -> Node<'_> {
        Node { doc: self, index: 0 }
    }

    /// Looks up an element by its `id` attribute. O(1) after parsing.
    pub fn element_by_id(&self, id: &str) -> Option<Node<'_>> {
        self.links.get(id).map(|&index| Node { doc: self, index })
    }
}

/// A reference to one element in a [`Document`].
#[derive(Clone, Copy, Debug)]
pub struct Node<'a> {
    doc: &'a Document,
    index: usize,
}

impl<'a> Node<'a> {
    #[inline]
    fn data(&self) -> &'a ElementNode {
        &self.doc.nodes[self.index]
    }

    #[inline]
    pub fn tag_name(&self) -> &'a str {
        &self.data().tag_name
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.data().attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// The concatenated text of this element's direct text-node children.
    /// Only meaningful for `<text>`/`<tspan>`.
    pub fn text(&self) -> &'a str {
        &self.data().text
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let doc = self.doc;
        self.data().children.iter().map(move |&index| Node { doc, index })
    }
}
