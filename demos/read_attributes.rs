// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed attribute reading example.
//!
//! This example demonstrates:
//! - Loading an XML configuration document
//! - Reading mandatory and optional attributes of each supported type
//! - What the diagnostics look like when an attribute is missing or malformed
//!
//! To run this example:
//! ```bash
//! cargo run --example read_attributes
//! ```

use chrono::NaiveDate;
use ebook_filter::prelude::*;

const CONFIG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<config>
  <MySector1 name="songyang1" age="100" size="4294967296" enabled="true" since="2015-03-09 11:25:00"/>
  <Filter sourcePath="/downloads" targetPath="/library" patten="*.azw3" retries="three"/>
</config>"#;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== Typed Attribute Reading ===\n");

    let doc = XmlConfigDocument::from_xml(CONFIG)?;
    let sector = doc.select_node("//config/MySector1")?;

    // Example 1: mandatory values of every type
    println!("--- Example 1: Mandatory Values ---");
    println!("name    = {}", sector.mandatory_string("name")?);
    println!("age     = {}", sector.mandatory_i32("age")?);
    println!("size    = {}", sector.mandatory_i64("size")?);
    println!("enabled = {}", sector.mandatory_bool("enabled")?);
    println!(
        "since   = {}",
        sector.mandatory_datetime("since", "%Y-%m-%d %H:%M:%S")?
    );
    println!();

    // Example 2: optional values fall back only when absent
    println!("--- Example 2: Optional Values ---");
    let fallback = NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or("invalid fallback date")?;
    println!("nickname = {}", sector.optional_string("nickname", "songyang2"));
    println!("level    = {}", sector.optional_i32("level", 1)?);
    println!(
        "until    = {}",
        sector.optional_datetime("until", "%Y-%m-%d", fallback)?
    );
    println!();

    // Example 3: diagnostics
    println!("--- Example 3: Diagnostics ---");
    if let Err(e) = sector.mandatory_string("gender") {
        println!("{}\n", e);
    }
    let filter = doc.select_node("//config/Filter")?;
    if let Err(e) = filter.optional_i32("retries", 3) {
        println!("{}", e);
        if let Some(cause) = std::error::Error::source(&e) {
            println!("  caused by: {}", cause);
        }
    }
    println!();

    // Example 4: folder paths
    println!("--- Example 4: Folder Paths ---");
    println!("targetPath = {}", filter.folder_path("targetPath")?);

    Ok(())
}
