// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration node trait definition.
//!
//! This module defines the `ConfigNode` trait, the port through which the attribute
//! reader sees a parsed configuration element. Any attribute-bearing tree node (an
//! XML element, an in-memory map, ...) can be read once it implements this trait.

/// A read-only, attribute-bearing configuration element.
///
/// Implementations expose raw attribute values by name and a full textual
/// rendering of the element, which is embedded in error messages so an operator
/// can locate the offending configuration.
///
/// # Examples
///
/// ```rust
/// use ebook_filter::ports::ConfigNode;
///
/// struct Single;
///
/// impl ConfigNode for Single {
///     fn attribute(&self, name: &str) -> Option<&str> {
///         (name == "patten").then_some("*.azw3")
///     }
///
///     fn outer_text(&self) -> &str {
///         "<Filter patten=\"*.azw3\" />"
///     }
/// }
///
/// assert_eq!(Single.attribute("patten"), Some("*.azw3"));
/// assert!(Single.has_attribute("patten"));
/// assert!(!Single.has_attribute("sourcePath"));
/// ```
pub trait ConfigNode {
    /// Returns the raw value of the attribute `name`, or `None` if it is absent.
    ///
    /// An attribute that is present with an empty value returns `Some("")`.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Returns the full textual form of this node, used for diagnostics.
    fn outer_text(&self) -> &str;

    /// Returns `true` if the attribute `name` is present.
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

impl<N: ConfigNode + ?Sized> ConfigNode for &N {
    fn attribute(&self, name: &str) -> Option<&str> {
        (**self).attribute(name)
    }

    fn outer_text(&self) -> &str {
        (**self).outer_text()
    }
}

impl<N: ConfigNode + ?Sized> ConfigNode for Box<N> {
    fn attribute(&self, name: &str) -> Option<&str> {
        (**self).attribute(name)
    }

    fn outer_text(&self) -> &str {
        (**self).outer_text()
    }
}
