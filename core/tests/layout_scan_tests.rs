mod common;

use common::{build_container, build_pbix, build_pbix_with_sections, encode_utf16le, layout_json};
use pbix_scan::{
    BuiltinCatalog, ScanError, UNKNOWN_VISUAL_TYPE, VisualClassification, extract_visuals,
    parse_layout, scan_container, section_count,
};
use serde_json::json;

fn catalog() -> BuiltinCatalog {
    BuiltinCatalog::standard()
}

#[test]
fn well_formed_layout_yields_descriptors_in_document_order() {
    let layout = layout_json(&[
        ("Overview", &["barChart", "acme.superViz"]),
        ("Detail", &["slicer", "table", "PBI_CV_4A35A56B"]),
    ]);
    let doc = parse_layout(&layout).expect("layout should parse");

    let visuals = extract_visuals(&doc);
    assert_eq!(visuals.len(), 5);

    let positions: Vec<(usize, usize)> = visuals
        .iter()
        .map(|v| (v.section_index, v.container_index))
        .collect();
    assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1), (1, 2)]);

    let types: Vec<&str> = visuals.iter().map(|v| v.declared_type.as_str()).collect();
    assert_eq!(
        types,
        vec!["barChart", "acme.superViz", "slicer", "table", "PBI_CV_4A35A56B"]
    );
    assert_eq!(visuals[0].section_name.as_deref(), Some("Overview"));
    assert_eq!(visuals[4].section_name.as_deref(), Some("Detail"));
    assert_eq!(section_count(&doc), 2);
}

#[test]
fn empty_and_absent_container_lists_yield_zero_descriptors() {
    let layout = serde_json::to_string(&json!({
        "sections": [
            { "displayName": "Empty", "visualContainers": [] },
            { "displayName": "No list" },
        ],
    }))
    .unwrap();
    let doc = parse_layout(&layout).expect("layout should parse");
    assert!(extract_visuals(&doc).is_empty());
    // Both sections still count as pages.
    assert_eq!(section_count(&doc), 2);
}

#[test]
fn round_trip_classifies_builtin_and_custom() {
    let bytes = build_pbix_with_sections(&[("Page 1", &["barChart", "acme.superViz"])]);
    let scan = scan_container(bytes, &catalog()).expect("synthetic export should scan");

    assert_eq!(scan.num_pages, 1);
    let classes: Vec<VisualClassification> =
        scan.visuals.iter().map(|v| v.classification).collect();
    assert_eq!(
        classes,
        vec![VisualClassification::BuiltIn, VisualClassification::Custom]
    );
    let counts = scan.counts();
    assert_eq!(counts.total, 2);
    assert_eq!(counts.custom, 1);
}

#[test]
fn unparsable_config_counts_toward_total_but_not_custom() {
    let layout = serde_json::to_string(&json!({
        "sections": [{
            "displayName": "Page 1",
            "visualContainers": [
                { "config": "{broken json" },
                common::visual_container("acme.superViz"),
            ],
        }],
    }))
    .unwrap();
    let scan = scan_container(build_pbix(&layout), &catalog()).expect("scan should succeed");

    assert_eq!(scan.visuals.len(), 2);
    assert_eq!(scan.visuals[0].descriptor.declared_type, UNKNOWN_VISUAL_TYPE);
    assert_eq!(scan.visuals[0].classification, VisualClassification::Unknown);

    let counts = scan.counts();
    assert_eq!(counts.total, 2);
    assert_eq!(counts.custom, 1);
}

#[test]
fn missing_type_field_yields_unknown_classification() {
    let config = serde_json::to_string(&json!({ "name": "v0", "singleVisual": {} })).unwrap();
    let layout = serde_json::to_string(&json!({
        "sections": [{ "visualContainers": [{ "config": config }] }],
    }))
    .unwrap();
    let scan = scan_container(build_pbix(&layout), &catalog()).expect("scan should succeed");

    assert_eq!(scan.visuals.len(), 1);
    assert_eq!(scan.visuals[0].classification, VisualClassification::Unknown);
}

#[test]
fn visual_and_section_names_are_recovered() {
    let bytes = build_pbix_with_sections(&[("Revenue", &["barChart"])]);
    let scan = scan_container(bytes, &catalog()).expect("scan should succeed");
    let descriptor = &scan.visuals[0].descriptor;
    assert_eq!(descriptor.visual_name.as_deref(), Some("barChart_0"));
    assert_eq!(descriptor.section_name.as_deref(), Some("Revenue"));
    assert!(descriptor.raw_config.is_some());
}

#[test]
fn missing_layout_part_fails_with_container_error() {
    let bytes = build_container(&[("Version", b"1.23")]);
    let err = scan_container(bytes, &catalog()).expect_err("missing layout must fail");
    assert!(matches!(err, ScanError::Container(_)));
}

#[test]
fn odd_length_layout_part_fails_with_decode_error() {
    let mut layout = encode_utf16le(r#"{"sections":[]}"#, true);
    layout.push(0x00);
    let bytes = build_container(&[("Report/Layout", &layout)]);
    let err = scan_container(bytes, &catalog()).expect_err("odd length must fail");
    assert!(matches!(err, ScanError::Decode(_)));
}

#[test]
fn malformed_layout_json_fails_with_parse_error() {
    let bytes = build_pbix(r#"{"sections": ["#);
    let err = scan_container(bytes, &catalog()).expect_err("bad JSON must fail");
    assert!(matches!(err, ScanError::Parse(_)));
}

#[test]
fn non_object_layout_root_fails_with_parse_error() {
    let bytes = build_pbix(r#"[1, 2, 3]"#);
    let err = scan_container(bytes, &catalog()).expect_err("array root must fail");
    assert!(matches!(err, ScanError::Parse(_)));
}

#[test]
fn descriptor_total_matches_sum_over_sections() {
    let sections: Vec<(String, Vec<&str>)> = (0..4)
        .map(|i| {
            let name = format!("Page {i}");
            let types: Vec<&str> = std::iter::repeat("barChart").take(i).collect();
            (name, types)
        })
        .collect();
    let borrowed: Vec<(&str, &[&str])> = sections
        .iter()
        .map(|(name, types)| (name.as_str(), types.as_slice()))
        .collect();
    let scan = scan_container(build_pbix_with_sections(&borrowed), &catalog())
        .expect("scan should succeed");

    // 0 + 1 + 2 + 3 containers across four sections.
    assert_eq!(scan.counts().total, 6);
    assert_eq!(scan.num_pages, 4);
}
