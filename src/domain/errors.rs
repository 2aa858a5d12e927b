// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration reader and the relocator.
//!
//! Attribute extraction fails in exactly two ways: the attribute is missing, or it
//! is present but cannot be coerced to the requested type. Both carry the textual
//! form of the node being inspected so an operator can find the offending element.
//! All errors use `thiserror` for proper error handling and conversion.

use std::path::PathBuf;
use thiserror::Error;

/// A boxed, thread-safe underlying error.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure to extract a single attribute from a configuration node.
///
/// # Examples
///
/// ```
/// use ebook_filter::domain::errors::AttributeError;
///
/// let error = AttributeError::MissingAttribute {
///     name: "sourcePath".to_string(),
///     node: "<Filter />".to_string(),
/// };
/// assert!(error.to_string().contains("sourcePath"));
/// assert!(error.to_string().contains("<Filter />"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AttributeError {
    /// A mandatory attribute is absent from the node.
    #[error("Missing mandatory attribute: {name}\n at:\n{node}")]
    MissingAttribute {
        /// The attribute that was requested
        name: String,
        /// Full textual form of the node that was inspected
        node: String,
    },

    /// The attribute is present but its value does not parse as the requested type.
    #[error("Failed to parse {target_type} attribute: {name} at:\n{node}")]
    ParseError {
        /// The attribute that was requested
        name: String,
        /// Human readable name of the requested type
        target_type: String,
        /// Full textual form of the node that was inspected
        node: String,
        /// The underlying parse failure
        #[source]
        source: BoxError,
    },
}

impl AttributeError {
    /// Returns the name of the attribute this error refers to.
    pub fn attribute_name(&self) -> &str {
        match self {
            AttributeError::MissingAttribute { name, .. } => name,
            AttributeError::ParseError { name, .. } => name,
        }
    }

    /// Returns the textual form of the node this error refers to.
    pub fn node_text(&self) -> &str {
        match self {
            AttributeError::MissingAttribute { node, .. } => node,
            AttributeError::ParseError { node, .. } => node,
        }
    }

    /// Returns `true` for [`AttributeError::MissingAttribute`].
    pub fn is_missing(&self) -> bool {
        matches!(self, AttributeError::MissingAttribute { .. })
    }

    /// Returns `true` for [`AttributeError::ParseError`].
    pub fn is_parse_error(&self) -> bool {
        matches!(self, AttributeError::ParseError { .. })
    }
}

/// Errors raised while loading a configuration document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// An attribute could not be extracted.
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    /// No element matched the requested path.
    #[error("Configuration node not found: {path}")]
    NodeNotFound {
        /// The path that was searched for
        path: String,
    },

    /// The configuration document is not well formed.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<BoxError>,
    },

    /// The configuration source could not be read.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<BoxError>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Precondition failures that abort a relocation before any file is copied.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RelocateError {
    /// The source directory does not exist or is not a directory.
    #[error("Incorrect source path, please confirm: {}", path.display())]
    SourceNotFound {
        /// The configured source directory
        path: PathBuf,
    },

    /// The file name pattern is not a valid glob.
    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The configured pattern
        pattern: String,
        /// The underlying glob error
        #[source]
        source: globset::Error,
    },
}

/// A specialized Result type for attribute extraction.
pub type Result<T> = std::result::Result<T, AttributeError>;
