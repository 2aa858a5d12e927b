// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory configuration node adapter.
//!
//! `MemoryNode` holds its attributes directly, which makes it useful for building
//! configuration programmatically and for testing code that reads through the
//! [`ConfigNode`] port without touching the file system.

use crate::ports::ConfigNode;

/// A configuration node backed by an in-memory attribute list.
///
/// Attribute order is preserved and setting an existing attribute replaces its
/// value. The textual form renders the node as an empty XML element.
///
/// # Examples
///
/// ```rust
/// use ebook_filter::adapters::MemoryNode;
/// use ebook_filter::ports::ConfigNode;
///
/// let node = MemoryNode::new("Filter")
///     .with_attribute("sourcePath", "/books")
///     .with_attribute("patten", "*.epub");
///
/// assert_eq!(node.attribute("patten"), Some("*.epub"));
/// assert_eq!(node.outer_text(), r#"<Filter sourcePath="/books" patten="*.epub" />"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryNode {
    name: String,
    attributes: Vec<(String, String)>,
    rendered: String,
}

impl MemoryNode {
    /// Creates a node with the given element name and no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        let mut node = Self {
            name: name.into(),
            attributes: Vec::new(),
            rendered: String::new(),
        };
        node.render();
        node
    }

    /// Adds or replaces an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Adds or replaces an attribute in place.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
        self.render();
    }

    /// Removes an attribute if present.
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|(k, _)| k != name);
        self.render();
    }

    /// Returns the element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn render(&mut self) {
        let mut out = format!("<{}", self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_attribute(value));
            out.push('"');
        }
        out.push_str(" />");
        self.rendered = out;
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl ConfigNode for MemoryNode {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn outer_text(&self) -> &str {
        &self.rendered
    }
}
