// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flattening file relocation.
//!
//! The relocator walks a source tree, picks every regular file whose name matches
//! a glob and copies it into a single target directory under its original file
//! name. A failed copy is logged and recorded, and the batch carries on.

use crate::domain::RelocateError;
use crate::service::settings::{CollisionPolicy, RelocatorSettings};
use globset::{GlobBuilder, GlobMatcher};
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file that matched the pattern but could not be copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFailure {
    /// The file that was being copied.
    pub source: PathBuf,
    /// Where it was being copied to.
    pub destination: PathBuf,
    /// The error message.
    pub message: String,
}

/// Outcome of one relocation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RelocationReport {
    /// Files whose name matched the pattern.
    pub matched: u64,
    /// Files copied successfully.
    pub copied: u64,
    /// Per-file copy failures.
    pub failures: Vec<CopyFailure>,
    /// Entries that could not be read while walking the source tree.
    pub warnings: Vec<String>,
}

impl RelocationReport {
    /// Number of failed copies.
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Returns `true` when every matched file was copied.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.warnings.is_empty()
    }
}

impl fmt::Display for RelocationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "matched={} copied={} failed={} warnings={}",
            self.matched,
            self.copied,
            self.failures.len(),
            self.warnings.len()
        )
    }
}

/// Copies matching files from a source tree into a flat target directory.
///
/// # Examples
///
/// ```rust,no_run
/// use ebook_filter::service::{CollisionPolicy, Relocator, RelocatorSettings};
/// use std::path::PathBuf;
///
/// let relocator = Relocator::new(RelocatorSettings {
///     source_dir: PathBuf::from("/downloads"),
///     target_dir: PathBuf::from("/library"),
///     pattern: "*.azw3".to_string(),
///     collision: CollisionPolicy::Fail,
/// });
/// let report = relocator.relocate().unwrap();
/// println!("{} files moved", report.copied);
/// ```
#[derive(Debug, Clone)]
pub struct Relocator {
    settings: RelocatorSettings,
}

impl Relocator {
    /// Creates a relocator from its settings.
    pub fn new(settings: RelocatorSettings) -> Self {
        Self { settings }
    }

    /// Returns the settings this relocator runs with.
    pub fn settings(&self) -> &RelocatorSettings {
        &self.settings
    }

    /// Runs the relocation once.
    ///
    /// Fails without copying anything when the source directory is missing or
    /// the pattern is invalid. Otherwise returns a report; individual copy
    /// failures are recorded in it rather than returned as errors.
    pub fn relocate(&self) -> Result<RelocationReport, RelocateError> {
        let source_dir = &self.settings.source_dir;
        if !source_dir.is_dir() {
            return Err(RelocateError::SourceNotFound {
                path: source_dir.clone(),
            });
        }
        let matcher = compile_pattern(&self.settings.pattern)?;
        // Files already sitting in the target directory are never copied onto themselves.
        let target_dir = self
            .settings
            .target_dir
            .canonicalize()
            .unwrap_or_else(|_| self.settings.target_dir.clone());

        tracing::info!(
            source = %source_dir.display(),
            target = %self.settings.target_dir.display(),
            pattern = %self.settings.pattern,
            collision = ?self.settings.collision,
            "starting relocation"
        );

        let mut report = RelocationReport::default();
        for entry in WalkDir::new(source_dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unreadable entry");
                    report.warnings.push(e.to_string());
                    continue;
                }
            };
            if !entry.file_type().is_file() || !matcher.is_match(entry.file_name()) {
                continue;
            }
            let in_target = entry
                .path()
                .parent()
                .and_then(|p| p.canonicalize().ok())
                .is_some_and(|p| p == target_dir);
            if in_target {
                tracing::debug!(file = %entry.path().display(), "already in target directory");
                continue;
            }
            report.matched += 1;

            let destination = self.settings.target_dir.join(entry.file_name());
            match copy_file(entry.path(), &destination, self.settings.collision) {
                Ok(bytes) => {
                    report.copied += 1;
                    tracing::debug!(
                        source = %entry.path().display(),
                        destination = %destination.display(),
                        bytes,
                        "copied file"
                    );
                }
                Err(e) => {
                    tracing::error!(
                        source = %entry.path().display(),
                        destination = %destination.display(),
                        error = %e,
                        "failed to copy file"
                    );
                    report.failures.push(CopyFailure {
                        source: entry.path().to_path_buf(),
                        destination,
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            copied = report.copied,
            failed = report.failures.len(),
            "relocation finished, {} files moved",
            report.copied
        );
        Ok(report)
    }
}

fn compile_pattern(pattern: &str) -> Result<GlobMatcher, RelocateError> {
    GlobBuilder::new(pattern)
        .case_insensitive(cfg!(windows))
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| RelocateError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn copy_file(source: &Path, destination: &Path, policy: CollisionPolicy) -> io::Result<u64> {
    match policy {
        CollisionPolicy::Overwrite => fs::copy(source, destination),
        CollisionPolicy::Fail => {
            let mut reader = File::open(source)?;
            let permissions = reader.metadata()?.permissions();
            let mut writer = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(destination)?;
            let bytes = io::copy(&mut reader, &mut writer)?;
            writer.set_permissions(permissions)?;
            Ok(bytes)
        }
    }
}
