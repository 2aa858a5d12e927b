// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed XML configuration attributes and a flattening file relocator.
//!
//! The core of this crate is a reader that gives typed, validated access to the
//! attributes of a configuration node. On top of it sits a small relocator that
//! copies every file matching a glob from a source tree into one flat directory.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: attribute coercion, the mandatory/optional accessor
//!   contracts and the error taxonomy (`AttributeReader`, `FromAttribute`, errors)
//! - **Ports**: the `ConfigNode` trait every attribute-bearing node implements
//! - **Adapters**: an in-memory node and XML elements backed by `roxmltree`
//! - **Service**: relocator settings and the copy loop
//!
//! # Accessor Contract
//!
//! - Mandatory accessors fail with `MissingAttribute` when the attribute is absent.
//! - Optional accessors return their default only when the attribute is absent.
//! - A present but malformed value is a `ParseError` for both.
//! - Every error carries the attribute name and the full text of the node.
//!
//! # Feature Flags
//!
//! - `xml`: Enable the `roxmltree` adapter (default)
//!
//! # Quick Start
//!
//! ```rust
//! use ebook_filter::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let doc = XmlConfigDocument::from_xml(
//!     r#"<config><Filter sourcePath="/downloads" retries="3"/></config>"#,
//! )?;
//! let node = doc.select_node("//config/Filter")?;
//!
//! assert_eq!(node.mandatory_string("sourcePath")?, "/downloads");
//! assert_eq!(node.optional_i32("retries", 1)?, 3);
//! assert_eq!(node.optional_string("patten", "*.azw3"), "*.azw3");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        AttributeError, AttributeReader, ConfigError, FromAttribute, RelocateError, Result,
    };
    pub use crate::ports::ConfigNode;
    pub use crate::service::{CollisionPolicy, RelocationReport, Relocator, RelocatorSettings};

    pub use crate::adapters::MemoryNode;
    #[cfg(feature = "xml")]
    pub use crate::adapters::{XmlConfigDocument, XmlElement};
}
