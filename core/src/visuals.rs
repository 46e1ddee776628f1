//! Visual extraction from parsed layout documents.
//!
//! Walks the layout's ordered section list and each section's ordered visual
//! containers, recovering the declared type of every visual from the
//! container's embedded config document. Faults are isolated per container:
//! one bad visual must not invalidate the report's count.

use serde_json::Value;

use crate::layout::{LayoutDocument, embedded_json};

/// Sentinel declared type for containers whose config could not be read.
pub const UNKNOWN_VISUAL_TYPE: &str = "Unknown";

const SECTIONS_KEY: &str = "sections";
const VISUAL_CONTAINERS_KEY: &str = "visualContainers";
const CONFIG_KEY: &str = "config";
const SINGLE_VISUAL_KEY: &str = "singleVisual";
const VISUAL_TYPE_KEY: &str = "visualType";
const VISUAL_NAME_KEY: &str = "name";
const SECTION_NAME_KEY: &str = "displayName";

/// One placed visual, positioned by document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualDescriptor {
    pub section_index: usize,
    pub container_index: usize,
    pub declared_type: String,
    pub raw_config: Option<String>,
    pub visual_name: Option<String>,
    pub section_name: Option<String>,
}

/// Extracts all visual descriptors in document order: section index
/// ascending, then container index ascending.
///
/// An absent or empty section/container list yields zero descriptors for that
/// scope. A container whose embedded config fails to parse, or whose type
/// field is absent, still yields a descriptor with the sentinel type.
pub fn extract_visuals(doc: &LayoutDocument) -> Vec<VisualDescriptor> {
    let mut visuals = Vec::new();
    let Some(sections) = doc.get(SECTIONS_KEY).and_then(Value::as_array) else {
        return visuals;
    };

    for (section_index, section) in sections.iter().enumerate() {
        let Some(section) = section.as_object() else {
            continue;
        };
        let section_name = section
            .get(SECTION_NAME_KEY)
            .and_then(Value::as_str)
            .map(str::to_owned);
        let Some(containers) = section.get(VISUAL_CONTAINERS_KEY).and_then(Value::as_array)
        else {
            continue;
        };
        for (container_index, container) in containers.iter().enumerate() {
            visuals.push(describe_container(
                section_index,
                container_index,
                section_name.clone(),
                container,
            ));
        }
    }

    visuals
}

/// Number of sections in the layout, used as the report's page count.
pub fn section_count(doc: &LayoutDocument) -> usize {
    doc.get(SECTIONS_KEY)
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

fn describe_container(
    section_index: usize,
    container_index: usize,
    section_name: Option<String>,
    container: &Value,
) -> VisualDescriptor {
    let object = container.as_object();
    let raw_config = object
        .and_then(|c| c.get(CONFIG_KEY))
        .and_then(Value::as_str)
        .map(str::to_owned);
    let config = object.and_then(|c| embedded_json(c, CONFIG_KEY));

    let declared_type = config
        .as_ref()
        .and_then(|cfg| cfg.get(SINGLE_VISUAL_KEY))
        .and_then(|sv| sv.get(VISUAL_TYPE_KEY))
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_VISUAL_TYPE)
        .to_owned();
    let visual_name = config
        .as_ref()
        .and_then(|cfg| cfg.get(VISUAL_NAME_KEY))
        .and_then(Value::as_str)
        .map(str::to_owned);

    VisualDescriptor {
        section_index,
        container_index,
        declared_type,
        raw_config,
        visual_name,
        section_name,
    }
}
