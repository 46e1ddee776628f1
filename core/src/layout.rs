//! Layout document parsing.
//!
//! A decoded layout is a generic JSON document. Only two conditions are
//! escalated here: a syntax failure and a non-mapping root. Unrecognized keys
//! anywhere in the tree are tolerated so schema drift in newer exports does
//! not break the walk.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::error_codes;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LayoutParseError {
    #[error("layout JSON parse error: {0}")]
    Syntax(String),
    #[error("layout root is not a JSON object")]
    RootNotObject,
}

impl LayoutParseError {
    pub fn code(&self) -> &'static str {
        match self {
            LayoutParseError::Syntax(_) => error_codes::LAYOUT_SYNTAX,
            LayoutParseError::RootNotObject => error_codes::LAYOUT_ROOT_NOT_OBJECT,
        }
    }
}

/// A parsed report layout with a mapping at the root.
#[derive(Debug, Clone)]
pub struct LayoutDocument {
    root: Map<String, Value>,
}

impl LayoutDocument {
    pub(crate) fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }
}

pub fn parse_layout(text: &str) -> Result<LayoutDocument, LayoutParseError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| LayoutParseError::Syntax(e.to_string()))?;
    match value {
        Value::Object(root) => Ok(LayoutDocument { root }),
        _ => Err(LayoutParseError::RootNotObject),
    }
}

/// Re-parses a string field of `object` as its own JSON document.
///
/// Returns `None` when the field is absent, not a string, or not valid JSON.
/// A malformed embedded fragment must stay isolated; it never poisons the
/// outer walk.
pub(crate) fn embedded_json(object: &Map<String, Value>, key: &str) -> Option<Value> {
    let raw = object.get(key)?.as_str()?;
    serde_json::from_str(raw).ok()
}
