// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use ebook_filter::adapters::MemoryNode;
use std::fs;
use std::path::{Path, PathBuf};

/// Creates a node carrying one value of every supported type.
#[allow(dead_code)]
pub fn create_typed_node() -> MemoryNode {
    MemoryNode::new("MySector1")
        .with_attribute("name", "songyang1")
        .with_attribute("age", "100")
        .with_attribute("size", "4294967296")
        .with_attribute("enabled", "True")
        .with_attribute("since", "2015-03-09 11:25:00")
}

/// Writes `content` to `root/relative`, creating parent directories.
#[allow(dead_code)]
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Returns the sorted file names directly inside `dir`.
#[allow(dead_code)]
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
