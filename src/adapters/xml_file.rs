// SPDX-License-Identifier: MIT OR Apache-2.0

//! XML file configuration adapter.
//!
//! This module loads XML configuration documents with `roxmltree` and exposes
//! their elements through the [`ConfigNode`] port. Elements are selected with a
//! small subset of XPath: `a/b/c` anchored at the document element, or `//a/b/c`
//! matching `a` anywhere in the tree.

use crate::domain::{ConfigError, Result as AttributeResult};
use crate::ports::ConfigNode;
use directories::ProjectDirs;
use roxmltree::{Document, Node};
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for XML configuration files (10MB)
const MAX_XML_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SOURCE_NAME: &str = "xml-file";

type Result<T> = std::result::Result<T, ConfigError>;

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

fn parse_document(content: &str) -> Result<Document<'_>> {
    Document::parse(content).map_err(|e| ConfigError::ParseError {
        message: format!("Failed to parse XML: {}", e),
        source: Some(Box::new(e)),
    })
}

impl<'a, 'input: 'a> ConfigNode for Node<'a, 'input> {
    fn attribute(&self, name: &str) -> Option<&str> {
        Node::attribute(self, name)
    }

    fn outer_text(&self) -> &str {
        &self.document().input_text()[self.range()]
    }
}

/// Selects the first element matching `path` in document order.
///
/// Paths starting with `//` match their first segment anywhere in the tree; other
/// paths must start at the document element. Returns `None` for an empty path.
///
/// # Examples
///
/// ```rust
/// use ebook_filter::adapters::xml_file::select_single_node;
/// use ebook_filter::ports::ConfigNode;
///
/// let doc = roxmltree::Document::parse(r#"<config><Filter patten="*.pdf"/></config>"#).unwrap();
/// let node = select_single_node(&doc, "//config/Filter").unwrap();
/// assert_eq!(ConfigNode::attribute(&node, "patten"), Some("*.pdf"));
/// assert!(select_single_node(&doc, "Filter").is_none());
/// ```
pub fn select_single_node<'a, 'input>(
    doc: &'a Document<'input>,
    path: &str,
) -> Option<Node<'a, 'input>> {
    let anywhere = path.starts_with("//");
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let (first, rest) = segments.split_first()?;
    let root = doc.root();

    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == *first)
        .filter(|n| anywhere || n.parent() == Some(root))
        .find_map(|start| descend(start, rest))
}

fn descend<'a, 'input>(node: Node<'a, 'input>, rest: &[&str]) -> Option<Node<'a, 'input>> {
    match rest.split_first() {
        None => Some(node),
        Some((segment, tail)) => node
            .children()
            .filter(|c| c.is_element() && c.tag_name().name() == *segment)
            .find_map(|c| descend(c, tail)),
    }
}

/// An element extracted from an XML document.
///
/// Owns its attributes and the element's verbatim source text, so it can outlive
/// the document it was selected from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    outer_xml: String,
}

impl XmlElement {
    /// Returns the local element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a, 'input> From<Node<'a, 'input>> for XmlElement {
    fn from(node: Node<'a, 'input>) -> Self {
        Self {
            name: node.tag_name().name().to_string(),
            attributes: node
                .attributes()
                .map(|a| (a.name().to_string(), a.value().to_string()))
                .collect(),
            outer_xml: node.outer_text().to_string(),
        }
    }
}

impl ConfigNode for XmlElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn outer_text(&self) -> &str {
        &self.outer_xml
    }
}

/// A well-formed XML configuration document.
///
/// # Examples
///
/// ```rust
/// use ebook_filter::adapters::XmlConfigDocument;
/// use ebook_filter::domain::AttributeReader;
///
/// let doc = XmlConfigDocument::from_xml(
///     r#"<config><MySector1 name="songyang1" age="100"/></config>"#,
/// ).unwrap();
/// let node = doc.select_node("//config/MySector1").unwrap();
/// assert_eq!(node.mandatory_i32("age").unwrap(), 100);
/// assert_eq!(node.optional_string("gender", "songyang2"), "songyang2");
/// ```
#[derive(Debug, Clone)]
pub struct XmlConfigDocument {
    file_path: Option<PathBuf>,
    content: String,
}

impl XmlConfigDocument {
    /// Loads and checks a configuration file.
    ///
    /// The file must exist, be at most 10MB and be well formed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();

        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: format!(
                    "Invalid or inaccessible path: {}",
                    display_name(&file_path)
                ),
                source: Some(Box::new(e)),
            })?;

        let metadata = fs::metadata(&canonical_path).map_err(|e| ConfigError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!(
                "Failed to read file metadata: {}",
                display_name(&canonical_path)
            ),
            source: Some(Box::new(e)),
        })?;

        if metadata.len() > MAX_XML_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_XML_FILE_SIZE
                ),
                source: None,
            });
        }

        let content =
            fs::read_to_string(&canonical_path).map_err(|e| ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: format!(
                    "Failed to read configuration file: {}",
                    display_name(&canonical_path)
                ),
                source: Some(Box::new(e)),
            })?;

        parse_document(&content)?;
        tracing::debug!(path = %canonical_path.display(), "loaded XML configuration");

        Ok(Self {
            file_path: Some(canonical_path),
            content,
        })
    }

    /// Checks and wraps XML text that did not come from a file.
    pub fn from_xml(content: impl Into<String>) -> Result<Self> {
        let content = content.into();
        parse_document(&content)?;
        Ok(Self {
            file_path: None,
            content,
        })
    }

    /// Loads `file_name` from the OS-appropriate configuration directory.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use ebook_filter::adapters::XmlConfigDocument;
    ///
    /// let doc =
    ///     XmlConfigDocument::from_default_location("MyConfig.xml", "ebook-filter", "org")
    ///         .unwrap();
    /// ```
    pub fn from_default_location(file_name: &str, app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_file(proj_dirs.config_dir().join(file_name))
    }

    /// Loads `file_name` from the current working directory, falling back to the
    /// OS-appropriate configuration directory when it is not there.
    pub fn locate(file_name: &str, app_name: &str, qualifier: &str) -> Result<Self> {
        let local = std::env::current_dir()?.join(file_name);
        if local.is_file() {
            return Self::from_file(local);
        }
        tracing::debug!(
            file = file_name,
            "configuration not in working directory, trying default location"
        );
        Self::from_default_location(file_name, app_name, qualifier)
    }

    /// Returns the path the document was loaded from, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the raw XML text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Parses the document for direct traversal.
    pub fn document(&self) -> Result<Document<'_>> {
        parse_document(&self.content)
    }

    /// Returns the first element matching `path`, or `None` when nothing matches.
    pub fn find_node(&self, path: &str) -> Result<Option<XmlElement>> {
        let doc = self.document()?;
        Ok(select_single_node(&doc, path).map(XmlElement::from))
    }

    /// Returns the first element matching `path`.
    pub fn select_node(&self, path: &str) -> Result<XmlElement> {
        self.find_node(path)?
            .ok_or_else(|| ConfigError::NodeNotFound {
                path: path.to_string(),
            })
    }

    /// Selects `path` and applies `read` to the selected node.
    ///
    /// Attribute errors raised by `read` are converted into [`ConfigError`].
    pub fn read_node<T, F>(&self, path: &str, read: F) -> Result<T>
    where
        F: FnOnce(&XmlElement) -> AttributeResult<T>,
    {
        let node = self.select_node(path)?;
        Ok(read(&node)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AttributeReader;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<config>
  <Filter sourcePath="/in" targetPath="/out" patten="*.azw3"/>
  <Nested><Filter patten="*.epub"/></Nested>
</config>"#;

    #[test]
    fn test_select_anchored_path() {
        let doc = Document::parse(SAMPLE).unwrap();
        let node = select_single_node(&doc, "config/Filter").unwrap();
        assert_eq!(ConfigNode::attribute(&node, "patten"), Some("*.azw3"));
    }

    #[test]
    fn test_select_anywhere_path() {
        let doc = Document::parse(SAMPLE).unwrap();
        let node = select_single_node(&doc, "//Nested/Filter").unwrap();
        assert_eq!(ConfigNode::attribute(&node, "patten"), Some("*.epub"));

        let first = select_single_node(&doc, "//Filter").unwrap();
        assert_eq!(ConfigNode::attribute(&first, "patten"), Some("*.azw3"));
    }

    #[test]
    fn test_select_misses() {
        let doc = Document::parse(SAMPLE).unwrap();
        assert!(select_single_node(&doc, "").is_none());
        assert!(select_single_node(&doc, "Nested/Filter").is_none());
        assert!(select_single_node(&doc, "//config/Missing").is_none());
    }

    #[test]
    fn test_node_outer_text_is_verbatim() {
        let doc = Document::parse(SAMPLE).unwrap();
        let node = select_single_node(&doc, "//config/Filter").unwrap();
        assert_eq!(
            node.outer_text(),
            r#"<Filter sourcePath="/in" targetPath="/out" patten="*.azw3"/>"#
        );
    }

    #[test]
    fn test_xml_element_from_node() {
        let doc = Document::parse(SAMPLE).unwrap();
        let element = XmlElement::from(select_single_node(&doc, "//config/Filter").unwrap());
        assert_eq!(element.name(), "Filter");
        assert_eq!(element.attributes().count(), 3);
        assert_eq!(element.attribute("sourcePath"), Some("/in"));
        assert!(element.outer_text().starts_with("<Filter "));
    }

    #[test]
    fn test_entities_are_decoded_in_values() {
        let doc = XmlConfigDocument::from_xml(r#"<config><F q="a &amp; b"/></config>"#).unwrap();
        let node = doc.select_node("config/F").unwrap();
        assert_eq!(node.attribute("q"), Some("a & b"));
        assert!(node.outer_text().contains("&amp;"));
    }

    #[test]
    fn test_from_xml_invalid() {
        let result = XmlConfigDocument::from_xml("<config><Filter></config>");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_select_node_not_found() {
        let doc = XmlConfigDocument::from_xml(SAMPLE).unwrap();
        let err = doc.select_node("//config/Logging").unwrap_err();
        assert!(matches!(err, ConfigError::NodeNotFound { .. }));
        assert!(doc.find_node("//config/Logging").unwrap().is_none());
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", SAMPLE).unwrap();

        let doc = XmlConfigDocument::from_file(temp_file.path()).unwrap();
        assert!(doc.file_path().is_some());
        let node = doc.select_node("//config/Filter").unwrap();
        assert_eq!(node.mandatory_string("targetPath").unwrap(), "/out");
    }

    #[test]
    fn test_from_file_nonexistent() {
        let result = XmlConfigDocument::from_file("/nonexistent/path/to/MyConfig.xml");
        assert!(matches!(result, Err(ConfigError::SourceError { .. })));
    }

    #[test]
    fn test_read_node_converts_attribute_errors() {
        let doc = XmlConfigDocument::from_xml(SAMPLE).unwrap();
        let err = doc
            .read_node("//config/Filter", |n| n.mandatory_i32("retries"))
            .unwrap_err();
        match err {
            ConfigError::Attribute(inner) => {
                assert!(inner.is_missing());
                assert!(inner.node_text().contains("patten=\"*.azw3\""));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
