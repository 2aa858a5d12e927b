// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide logging setup.
//!
//! Logging goes through the `tracing` facade everywhere in the crate. The binary
//! installs one subscriber at startup with [`init_logging`]: a console layer on
//! stderr plus, when a directory is configured, a non-blocking file layer. The
//! returned [`LogGuard`] must be held until shutdown so buffered lines are flushed.

use crate::domain::AttributeReader;
use crate::ports::ConfigNode;
use once_cell::sync::OnceCell;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

/// Path of the optional logging configuration node.
pub const LOGGING_NODE_PATH: &str = "//config/Logging";

const DEFAULT_LEVEL: &str = "info";
const DEFAULT_DIRECTORY: &str = "logs";
const DEFAULT_FILE_NAME: &str = "ebook-filter.log";

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Errors raised while installing the logging subscriber.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoggingError {
    /// Logging was already initialized in this process.
    #[error("logging is already initialized")]
    AlreadyInitialized,

    /// The level directive could not be parsed.
    #[error("invalid log level '{level}': {source}")]
    InvalidLevel {
        /// The configured directive
        level: String,
        /// The underlying parse error
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// The log file could not be opened.
    #[error("failed to open log file: {0}")]
    Appender(#[from] InitError),

    /// Another global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Subscriber(#[from] TryInitError),

    /// The log directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// `EnvFilter` directive, e.g. `info` or `ebook_filter=debug`.
    pub level: String,
    /// Directory of the log file, or `None` to log to the console only.
    pub directory: Option<PathBuf>,
    /// Log file name inside `directory`.
    pub file_name: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            directory: Some(PathBuf::from(DEFAULT_DIRECTORY)),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl LogSettings {
    /// Reads `level`, `directory` and `file` from a logging node. An empty
    /// `directory` disables the file layer.
    pub fn from_node<N: ConfigNode + ?Sized>(node: &N) -> Self {
        let level = node.optional_string("level", DEFAULT_LEVEL);
        let directory = node.optional_string("directory", DEFAULT_DIRECTORY);
        let file_name = node.optional_string("file", DEFAULT_FILE_NAME);

        Self {
            level,
            directory: (!directory.is_empty()).then(|| PathBuf::from(directory)),
            file_name,
        }
    }
}

/// Keeps the file writer alive; dropping it flushes pending log lines.
#[must_use = "dropping the guard stops the file writer"]
#[derive(Debug)]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Returns `true` once [`init_logging`] has succeeded in this process.
pub fn is_initialized() -> bool {
    INITIALIZED.get().is_some()
}

/// Installs the global subscriber. Succeeds at most once per process; a failed
/// attempt leaves logging uninitialized so it can be retried.
pub fn init_logging(settings: &LogSettings) -> Result<LogGuard, LoggingError> {
    let filter = EnvFilter::try_new(&settings.level).map_err(|source| {
        LoggingError::InvalidLevel {
            level: settings.level.clone(),
            source,
        }
    })?;

    let mut installed = None;
    INITIALIZED.get_or_try_init(|| {
        installed = Some(install(filter, settings)?);
        Ok::<(), LoggingError>(())
    })?;

    let guard = installed.ok_or(LoggingError::AlreadyInitialized)?;
    tracing::debug!(level = %settings.level, "logging initialized");
    Ok(LogGuard { _file: guard })
}

fn install(
    filter: EnvFilter,
    settings: &LogSettings,
) -> Result<Option<WorkerGuard>, LoggingError> {
    let (file_layer, guard) = match &settings.directory {
        Some(directory) => {
            fs::create_dir_all(directory)?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(settings.file_name.as_str())
                .build(directory)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
