// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging setup that fails part way can be retried.
//!
//! Installing the global subscriber is process-wide, so this lives in its own
//! test binary.

use ebook_filter::logging::{init_logging, is_initialized, LogSettings, LoggingError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_failed_init_can_be_retried() {
    let root = TempDir::new().unwrap();
    let blocker = root.path().join("not-a-directory");
    fs::write(&blocker, "file").unwrap();

    let broken = LogSettings {
        level: "info".to_string(),
        directory: Some(blocker.join("logs")),
        file_name: "retry.log".to_string(),
    };
    let err = init_logging(&broken).unwrap_err();
    assert!(matches!(err, LoggingError::Io(_)), "unexpected error: {err}");
    assert!(!is_initialized());

    let working = LogSettings {
        level: "info".to_string(),
        directory: Some(root.path().join("logs")),
        file_name: "retry.log".to_string(),
    };
    let guard = init_logging(&working).unwrap();
    assert!(is_initialized());
    assert!(matches!(
        init_logging(&working),
        Err(LoggingError::AlreadyInitialized)
    ));

    tracing::info!("logging recovered");
    drop(guard);
    let log = fs::read_to_string(root.path().join("logs").join("retry.log")).unwrap();
    assert!(log.contains("logging recovered"));
}
