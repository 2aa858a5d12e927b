// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for reading settings out of XML configuration files.

#![cfg(feature = "xml")]

use ebook_filter::adapters::xml_file::select_single_node;
use ebook_filter::adapters::XmlConfigDocument;
use ebook_filter::domain::{AttributeReader, ConfigError};
use ebook_filter::logging::{LogSettings, LOGGING_NODE_PATH};
use ebook_filter::service::settings::{platform_root, FILTER_NODE_PATH};
use ebook_filter::service::{CollisionPolicy, RelocatorSettings};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_full_configuration_file() {
    let file = write_config(
        r#"<?xml version="1.0" encoding="utf-8"?>
<config>
  <Filter sourcePath="/data/in" targetPath="/data/out" patten="*.mobi" overwrite="true"/>
  <Logging level="warn" directory="" file="x.log"/>
</config>"#,
    );

    let doc = XmlConfigDocument::from_file(file.path()).unwrap();
    let filter = doc.select_node(FILTER_NODE_PATH).unwrap();
    let settings = RelocatorSettings::from_node_in(&filter, Path::new("/work")).unwrap();
    assert_eq!(settings.source_dir, PathBuf::from("/data/in"));
    assert_eq!(settings.target_dir, PathBuf::from("/data/out"));
    assert_eq!(settings.pattern, "*.mobi");
    assert_eq!(settings.collision, CollisionPolicy::Overwrite);

    let logging = doc.find_node(LOGGING_NODE_PATH).unwrap().unwrap();
    let log_settings = LogSettings::from_node(&logging);
    assert_eq!(log_settings.level, "warn");
    assert_eq!(log_settings.directory, None);
}

#[test]
fn test_empty_filter_node_yields_defaults() {
    let doc = XmlConfigDocument::from_xml("<config><Filter/></config>").unwrap();
    let filter = doc.select_node(FILTER_NODE_PATH).unwrap();
    let settings = RelocatorSettings::from_node_in(&filter, Path::new("/cwd")).unwrap();

    assert_eq!(settings.source_dir, PathBuf::from("/cwd"));
    assert_eq!(settings.target_dir, platform_root());
    assert_eq!(settings.pattern, "*.azw3");
}

#[test]
fn test_errors_quote_the_xml_element() {
    let doc = XmlConfigDocument::from_xml(
        "<config>\n  <Filter overwrite=\"sometimes\" />\n</config>",
    )
    .unwrap();
    let err = doc
        .read_node(FILTER_NODE_PATH, |n| RelocatorSettings::from_node_in(n, Path::new("/")))
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("overwrite"));
    assert!(message.contains("<Filter overwrite=\"sometimes\" />"));
    assert!(matches!(err, ConfigError::Attribute(_)));
}

#[test]
fn test_borrowed_node_reads_directly() {
    let xml = r#"<config><MySector1 name="songyang1" age="100"/></config>"#;
    let doc = roxmltree::Document::parse(xml).unwrap();
    let node = select_single_node(&doc, "//config/MySector1").unwrap();

    assert_eq!(node.mandatory_string("name").unwrap(), "songyang1");
    assert_eq!(node.optional_i32("age", 0).unwrap(), 100);
    let err = node.mandatory_string("gender").unwrap_err();
    assert!(err.to_string().contains(r#"<MySector1 name="songyang1" age="100"/>"#));
}

#[test]
fn test_missing_filter_node() {
    let doc = XmlConfigDocument::from_xml("<config><Other/></config>").unwrap();
    let err = doc.select_node(FILTER_NODE_PATH).unwrap_err();
    assert!(err.to_string().contains(FILTER_NODE_PATH));
}

#[test]
fn test_malformed_file() {
    let file = write_config("<config><Filter patten=\"*.azw3\"></config>");
    let result = XmlConfigDocument::from_file(file.path());
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_document_keeps_content() {
    let xml = "<config><Filter/></config>";
    let doc = XmlConfigDocument::from_xml(xml).unwrap();
    assert_eq!(doc.content(), xml);
    assert!(doc.file_path().is_none());
    assert!(doc.document().is_ok());
}
