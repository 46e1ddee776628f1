//! Visual type classification.
//!
//! A declared type is matched against the built-in catalog first; everything
//! off-catalog is treated as custom, whether or not it matches one of the
//! shapes custom visuals typically use. That fallback knowingly misclassifies
//! built-ins missing from the catalog; it is preserved rather than silently
//! ignoring unrecognized types.

use serde::{Deserialize, Serialize};

use crate::catalog::BuiltinCatalog;
use crate::visuals::UNKNOWN_VISUAL_TYPE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualClassification {
    BuiltIn,
    Custom,
    Unknown,
}

impl VisualClassification {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BuiltIn => "built-in",
            Self::Custom => "custom",
            Self::Unknown => "unknown",
        }
    }
}

/// Marketplace identifiers carry this prefix.
const CUSTOM_VISUAL_PREFIX: &str = "PBI_CV_";
/// Longest type name seen among built-in visuals; anything longer is custom.
const MAX_BUILTIN_TYPE_LEN: usize = 25;

/// Classifies a declared visual type. Pure; first match wins.
pub fn classify_visual_type(
    declared_type: &str,
    catalog: &BuiltinCatalog,
) -> VisualClassification {
    if declared_type.is_empty() || declared_type == UNKNOWN_VISUAL_TYPE {
        return VisualClassification::Unknown;
    }
    if catalog.contains(declared_type) {
        return VisualClassification::BuiltIn;
    }
    if matches_custom_shape(declared_type) {
        return VisualClassification::Custom;
    }
    // Off-catalog and not custom-shaped: still assumed custom rather than
    // silently ignored.
    VisualClassification::Custom
}

/// Whether a type identifier matches one of the shapes custom visuals use:
/// publisher-qualified dots, over-length names, GUIDs, or the marketplace
/// prefix.
pub fn matches_custom_shape(declared_type: &str) -> bool {
    declared_type.contains('.')
        || declared_type.len() > MAX_BUILTIN_TYPE_LEN
        || looks_like_guid(declared_type)
        || declared_type.starts_with(CUSTOM_VISUAL_PREFIX)
}

/// GUID detector: 32 hex digits, bare or in the canonical 8-4-4-4-12 layout.
/// Deliberately regex-free to stay deterministic and dependency-light.
fn looks_like_guid(value: &str) -> bool {
    let b = value.as_bytes();
    match b.len() {
        32 => b.iter().all(|&c| c.is_ascii_hexdigit()),
        36 => b.iter().enumerate().all(|(idx, &c)| {
            if matches!(idx, 8 | 13 | 18 | 23) {
                c == b'-'
            } else {
                c.is_ascii_hexdigit()
            }
        }),
        _ => false,
    }
}
