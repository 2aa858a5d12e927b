// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that the domain reads
//! configuration through. They are implemented by adapters in the adapters layer.

pub mod node;

// Re-export commonly used types
pub use node::ConfigNode;
