// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging integration test.
//!
//! The global subscriber can be installed once per process, so everything that
//! depends on it lives in a single test in its own binary.

mod common;

use common::write_file;
use ebook_filter::logging::{init_logging, is_initialized, LogSettings, LoggingError};
use ebook_filter::service::{CollisionPolicy, Relocator, RelocatorSettings};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_relocation_is_logged_to_file() {
    let log_dir = TempDir::new().unwrap();
    let settings = LogSettings {
        level: "debug".to_string(),
        directory: Some(log_dir.path().to_path_buf()),
        file_name: "relocate.log".to_string(),
    };

    let guard = init_logging(&settings).unwrap();
    assert!(is_initialized());
    assert!(matches!(
        init_logging(&settings),
        Err(LoggingError::AlreadyInitialized)
    ));

    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write_file(source.path(), "one/a.azw3", "A");
    write_file(source.path(), "two/b.azw3", "B");
    write_file(source.path(), "two/notes.txt", "N");

    let missing = Relocator::new(RelocatorSettings {
        source_dir: source.path().join("missing"),
        target_dir: target.path().to_path_buf(),
        pattern: "*.azw3".to_string(),
        collision: CollisionPolicy::Fail,
    });
    assert!(missing.relocate().is_err());

    let relocator = Relocator::new(RelocatorSettings {
        source_dir: source.path().to_path_buf(),
        target_dir: target.path().to_path_buf(),
        pattern: "*.azw3".to_string(),
        collision: CollisionPolicy::Fail,
    });
    assert_eq!(relocator.relocate().unwrap().copied, 2);

    // A second run collides on both earlier files and copies only the new one.
    write_file(source.path(), "three/c.azw3", "C");
    let rerun = relocator.relocate().unwrap();
    assert_eq!(rerun.copied, 1);
    assert_eq!(rerun.failure_count(), 2);

    drop(guard);
    let log = fs::read_to_string(log_dir.path().join("relocate.log")).unwrap();

    // A rejected source never reaches the start of the run.
    assert_eq!(log.matches("starting relocation").count(), 2);
    assert_eq!(log.matches("relocation finished, 2 files moved").count(), 1);
    assert_eq!(log.matches("relocation finished, 1 files moved").count(), 1);
    assert_eq!(log.matches("copied file").count(), 3);

    let copy_errors: Vec<&str> = log
        .lines()
        .filter(|line| line.contains("failed to copy file"))
        .collect();
    assert_eq!(copy_errors.len(), 2);
    for line in &copy_errors {
        assert!(line.contains("ERROR"), "not logged at error level: {line}");
    }
    assert!(copy_errors.iter().any(|line| line.contains("a.azw3")));
    assert!(copy_errors.iter().any(|line| line.contains("b.azw3")));
}
