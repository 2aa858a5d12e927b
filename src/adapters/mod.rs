// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration node implementations.
//!
//! This module contains concrete implementations of the [`ConfigNode`](crate::ports::ConfigNode)
//! port: an in-memory node, and XML elements backed by `roxmltree`.

pub mod memory;
#[cfg(feature = "xml")]
pub mod xml_file;

// Re-export adapters based on feature flags
pub use memory::MemoryNode;
#[cfg(feature = "xml")]
pub use xml_file::{XmlConfigDocument, XmlElement};
