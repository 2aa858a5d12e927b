// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed attribute accessors.
//!
//! `AttributeReader` is implemented for every [`ConfigNode`] and layers typed,
//! fail-fast accessors on top of the raw attribute lookup. Presence and validity
//! are separate failure axes: the optional accessors only waive presence. A value
//! that is present but malformed is always an error, even when a default was
//! supplied.
//!
//! # Examples
//!
//! ```
//! use ebook_filter::adapters::MemoryNode;
//! use ebook_filter::domain::AttributeReader;
//!
//! let node = MemoryNode::new("Filter")
//!     .with_attribute("retries", "3")
//!     .with_attribute("verbose", "maybe");
//!
//! assert_eq!(node.mandatory_i32("retries").unwrap(), 3);
//! assert_eq!(node.optional_i64("limit", 10).unwrap(), 10);
//! assert!(node.optional_bool("verbose", false).is_err());
//! assert!(node.mandatory_string("name").is_err());
//! ```

use crate::domain::attribute_value::{datetime_type_name, parse_datetime, FromAttribute};
use crate::domain::errors::{AttributeError, Result};
use crate::ports::ConfigNode;
use chrono::NaiveDateTime;
use std::path::MAIN_SEPARATOR;

fn missing<N: ConfigNode + ?Sized>(node: &N, name: &str) -> AttributeError {
    AttributeError::MissingAttribute {
        name: name.to_string(),
        node: node.outer_text().to_string(),
    }
}

fn coerce<T: FromAttribute, N: ConfigNode + ?Sized>(node: &N, name: &str, raw: &str) -> Result<T> {
    T::from_attribute(raw).map_err(|source| AttributeError::ParseError {
        name: name.to_string(),
        target_type: T::TYPE_NAME.to_string(),
        node: node.outer_text().to_string(),
        source,
    })
}

fn coerce_datetime<N: ConfigNode + ?Sized>(
    node: &N,
    name: &str,
    raw: &str,
    format: &str,
) -> Result<NaiveDateTime> {
    parse_datetime(raw, format).map_err(|e| AttributeError::ParseError {
        name: name.to_string(),
        target_type: datetime_type_name(format),
        node: node.outer_text().to_string(),
        source: Box::new(e),
    })
}

/// Typed accessors over a configuration node's attributes.
///
/// All methods are pure reads: calling one twice with the same arguments yields
/// the same result.
pub trait AttributeReader: ConfigNode {
    /// Reads a mandatory attribute and coerces it to `T`.
    fn mandatory<T: FromAttribute>(&self, name: &str) -> Result<T> {
        let raw = self.attribute(name).ok_or_else(|| missing(self, name))?;
        coerce(self, name, raw)
    }

    /// Reads an optional attribute and coerces it to `T`, returning `default` only
    /// when the attribute is absent.
    fn optional<T: FromAttribute>(&self, name: &str, default: T) -> Result<T> {
        match self.attribute(name) {
            Some(raw) => coerce(self, name, raw),
            None => Ok(default),
        }
    }

    /// Returns the raw value of a mandatory attribute.
    fn mandatory_string(&self, name: &str) -> Result<String> {
        self.mandatory(name)
    }

    /// Returns the raw value of an attribute, or `default` when it is absent.
    fn optional_string(&self, name: &str, default: &str) -> String {
        self.attribute(name).unwrap_or(default).to_string()
    }

    /// Returns a mandatory folder path, normalized to end with exactly one
    /// platform path separator.
    ///
    /// ```
    /// use ebook_filter::adapters::MemoryNode;
    /// use ebook_filter::domain::AttributeReader;
    /// use std::path::MAIN_SEPARATOR;
    ///
    /// let node = MemoryNode::new("Filter").with_attribute("out", "books");
    /// assert_eq!(node.folder_path("out").unwrap(), format!("books{}", MAIN_SEPARATOR));
    /// ```
    fn folder_path(&self, name: &str) -> Result<String> {
        let mut folder = self.mandatory_string(name)?;
        if !folder.ends_with(MAIN_SEPARATOR) {
            folder.push(MAIN_SEPARATOR);
        }
        Ok(folder)
    }

    /// Reads a mandatory 32-bit integer.
    fn mandatory_i32(&self, name: &str) -> Result<i32> {
        self.mandatory(name)
    }

    /// Reads an optional 32-bit integer.
    fn optional_i32(&self, name: &str, default: i32) -> Result<i32> {
        self.optional(name, default)
    }

    /// Reads a mandatory 64-bit integer.
    fn mandatory_i64(&self, name: &str) -> Result<i64> {
        self.mandatory(name)
    }

    /// Reads an optional 64-bit integer.
    fn optional_i64(&self, name: &str, default: i64) -> Result<i64> {
        self.optional(name, default)
    }

    /// Reads a mandatory boolean (`true`/`false`, case-insensitive).
    fn mandatory_bool(&self, name: &str) -> Result<bool> {
        self.mandatory(name)
    }

    /// Reads an optional boolean.
    fn optional_bool(&self, name: &str, default: bool) -> Result<bool> {
        self.optional(name, default)
    }

    /// Reads a mandatory timestamp in the given `strftime` format.
    fn mandatory_datetime(&self, name: &str, format: &str) -> Result<NaiveDateTime> {
        let raw = self.attribute(name).ok_or_else(|| missing(self, name))?;
        coerce_datetime(self, name, raw, format)
    }

    /// Reads an optional timestamp in the given `strftime` format.
    ///
    /// An attribute that is absent or empty yields `default`; a non-empty value
    /// that does not match the format is an error.
    fn optional_datetime(
        &self,
        name: &str,
        format: &str,
        default: NaiveDateTime,
    ) -> Result<NaiveDateTime> {
        match self.attribute(name) {
            Some(raw) if !raw.is_empty() => coerce_datetime(self, name, raw, format),
            _ => Ok(default),
        }
    }
}

impl<N: ConfigNode + ?Sized> AttributeReader for N {}
