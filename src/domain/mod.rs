// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the typed attribute reader.
//!
//! This module contains the core of the crate: coercion of raw attribute strings
//! into typed values and the mandatory/optional accessor contracts. It depends only
//! on the [`ConfigNode`](crate::ports::ConfigNode) port, never on a concrete parser.

pub mod attribute_value;
pub mod errors;
pub mod reader;

// Re-export commonly used types
pub use attribute_value::{FromAttribute, InvalidBoolean};
pub use errors::{AttributeError, ConfigError, RelocateError, Result};
pub use reader::AttributeReader;
