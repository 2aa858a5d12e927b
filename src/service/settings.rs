// SPDX-License-Identifier: MIT OR Apache-2.0

//! Relocator settings read from a configuration node.

use crate::domain::{AttributeReader, ConfigError, Result};
use crate::ports::ConfigNode;
use std::path::{Path, PathBuf};

/// Path of the relocator's configuration node.
pub const FILTER_NODE_PATH: &str = "//config/Filter";

/// Attribute holding the source directory.
pub const SOURCE_PATH_ATTR: &str = "sourcePath";

/// Attribute holding the target directory.
pub const TARGET_PATH_ATTR: &str = "targetPath";

/// Attribute holding the file name pattern. The spelling matches existing
/// configuration files.
pub const PATTERN_ATTR: &str = "patten";

/// Correctly spelled alias, read only when [`PATTERN_ATTR`] is absent.
pub const PATTERN_ALIAS_ATTR: &str = "pattern";

/// Attribute selecting [`CollisionPolicy::Overwrite`] when `true`.
pub const OVERWRITE_ATTR: &str = "overwrite";

/// Pattern used when none is configured.
pub const DEFAULT_PATTERN: &str = "*.azw3";

/// Returns the file system root used as the default target directory.
pub fn platform_root() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\")
    } else {
        PathBuf::from("/")
    }
}

/// What to do when the flattened destination file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// The copy fails and the existing file is left untouched.
    #[default]
    Fail,
    /// The existing file is replaced.
    Overwrite,
}

impl CollisionPolicy {
    /// Maps the `overwrite` flag to a policy.
    pub fn from_overwrite(overwrite: bool) -> Self {
        if overwrite {
            CollisionPolicy::Overwrite
        } else {
            CollisionPolicy::Fail
        }
    }
}

/// Everything the relocator needs to run.
///
/// # Examples
///
/// ```rust
/// use ebook_filter::adapters::MemoryNode;
/// use ebook_filter::service::{CollisionPolicy, RelocatorSettings};
/// use std::path::Path;
///
/// let node = MemoryNode::new("Filter").with_attribute("targetPath", "/library");
/// let settings = RelocatorSettings::from_node_in(&node, Path::new("/downloads")).unwrap();
///
/// assert_eq!(settings.source_dir, Path::new("/downloads"));
/// assert_eq!(settings.target_dir, Path::new("/library"));
/// assert_eq!(settings.pattern, "*.azw3");
/// assert_eq!(settings.collision, CollisionPolicy::Fail);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocatorSettings {
    /// Directory tree searched for matching files.
    pub source_dir: PathBuf,
    /// Flat directory the files are copied into.
    pub target_dir: PathBuf,
    /// Glob matched against each file name.
    pub pattern: String,
    /// Behaviour on destination name collisions.
    pub collision: CollisionPolicy,
}

impl RelocatorSettings {
    /// Reads the settings, defaulting the source directory to the current working
    /// directory.
    pub fn from_node<N: ConfigNode + ?Sized>(node: &N) -> std::result::Result<Self, ConfigError> {
        let working_dir = std::env::current_dir()?;
        Ok(Self::from_node_in(node, &working_dir)?)
    }

    /// Reads the settings, defaulting the source directory to `working_dir`.
    pub fn from_node_in<N: ConfigNode + ?Sized>(node: &N, working_dir: &Path) -> Result<Self> {
        let source_dir = node.optional_string(SOURCE_PATH_ATTR, &working_dir.to_string_lossy());
        let target_dir =
            node.optional_string(TARGET_PATH_ATTR, &platform_root().to_string_lossy());

        let pattern = if node.has_attribute(PATTERN_ATTR) {
            node.mandatory_string(PATTERN_ATTR)?
        } else {
            node.optional_string(PATTERN_ALIAS_ATTR, DEFAULT_PATTERN)
        };

        let overwrite = node.optional_bool(OVERWRITE_ATTR, false)?;

        Ok(Self {
            source_dir: PathBuf::from(source_dir),
            target_dir: PathBuf::from(target_dir),
            pattern,
            collision: CollisionPolicy::from_overwrite(overwrite),
        })
    }
}
