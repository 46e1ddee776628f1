//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use serde_json::{Value, json};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub fn encode_utf16le(text: &str, with_bom: bool) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(2 + text.len() * 2);
    if with_bom {
        bytes.extend_from_slice(&[0xFF, 0xFE]);
    }
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

pub fn build_container(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, bytes) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("start zip entry");
        writer.write_all(bytes).expect("write zip entry");
    }
    writer.finish().expect("finish zip").into_inner()
}

/// Builds a synthetic export whose layout part holds `layout_json` as
/// BOM-prefixed UTF-16LE.
pub fn build_pbix(layout_json: &str) -> Vec<u8> {
    build_container(&[
        ("Report/Layout", &encode_utf16le(layout_json, true)),
        ("Version", &encode_utf16le("1.23", true)),
    ])
}

/// A visual container whose embedded config declares `visual_type`.
pub fn visual_container(visual_type: &str) -> Value {
    let config = json!({
        "name": format!("{visual_type}_0"),
        "singleVisual": { "visualType": visual_type },
    });
    json!({ "config": serde_json::to_string(&config).expect("serialize config") })
}

/// A layout with one section per `(display_name, visual_types)` pair.
pub fn layout_json(sections: &[(&str, &[&str])]) -> String {
    let sections: Vec<Value> = sections
        .iter()
        .map(|(display_name, types)| {
            json!({
                "displayName": display_name,
                "visualContainers": types
                    .iter()
                    .map(|t| visual_container(t))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();
    serde_json::to_string(&json!({ "sections": sections, "theme": "city" }))
        .expect("serialize layout")
}

pub fn build_pbix_with_sections(sections: &[(&str, &[&str])]) -> Vec<u8> {
    build_pbix(&layout_json(sections))
}
