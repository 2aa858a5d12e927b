// SPDX-License-Identifier: MIT OR Apache-2.0

//! `ebook-filter`: copies every file matching the configured pattern from the
//! source tree into the flat target directory.
//!
//! Configuration is read from `MyConfig.xml` in the working directory, or from
//! the OS configuration directory when it is not there:
//!
//! ```xml
//! <config>
//!   <Filter sourcePath="D:\Downloads" targetPath="E:\Kindle\" patten="*.azw3" overwrite="false"/>
//!   <Logging level="info" directory="logs" file="ebook-filter.log"/>
//! </config>
//! ```
//!
//! Exit codes: `0` when every matched file was copied, `1` on configuration or
//! precondition errors (nothing is copied), `2` when some copies failed or parts
//! of the source tree could not be read.

use ebook_filter::adapters::XmlConfigDocument;
use ebook_filter::logging::{self, LogSettings, LOGGING_NODE_PATH};
use ebook_filter::service::settings::FILTER_NODE_PATH;
use ebook_filter::service::{RelocationReport, Relocator, RelocatorSettings};
use std::process::ExitCode;

const CONFIG_FILE: &str = "MyConfig.xml";
const APP_NAME: &str = "ebook-filter";
const QUALIFIER: &str = "org";

fn main() -> ExitCode {
    let doc = match XmlConfigDocument::locate(CONFIG_FILE, APP_NAME, QUALIFIER) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Failed to load {}: {}", CONFIG_FILE, e);
            return ExitCode::FAILURE;
        }
    };

    let log_settings = match doc.find_node(LOGGING_NODE_PATH) {
        Ok(Some(node)) => LogSettings::from_node(&node),
        Ok(None) => LogSettings::default(),
        Err(e) => {
            eprintln!("Failed to read logging configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let _guard = match logging::init_logging(&log_settings) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let settings = match doc
        .select_node(FILTER_NODE_PATH)
        .and_then(|node| RelocatorSettings::from_node(&node))
    {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match Relocator::new(settings).relocate() {
        Ok(report) => {
            if !report.is_clean() {
                tracing::warn!(
                    failed = report.failure_count(),
                    skipped = report.warnings.len(),
                    "relocation incomplete: {}",
                    report
                );
            }
            ExitCode::from(exit_status(&report))
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn exit_status(report: &RelocationReport) -> u8 {
    if report.is_clean() {
        0
    } else {
        2
    }
}
