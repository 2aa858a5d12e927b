// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer.
//!
//! This module turns configuration into work: it reads the relocator's settings
//! through the attribute reader and runs the flattening copy.

pub mod relocator;
pub mod settings;

pub use relocator::{CopyFailure, RelocationReport, Relocator};
pub use settings::{CollisionPolicy, RelocatorSettings};
