//! Attribute bags attached to quote line items.
//!
//! Line items carry loosely-structured specification maps (install type,
//! trim, options, ...). Values are held in a small closed variant type and
//! read through accessors that fall back to [`NONE`] for absent keys and
//! reject values of the wrong type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Literal printed for spec keys that have no value.
pub const NONE: &str = "none";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Absent,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Nested arrays/objects (ids, option lists) that are stored but never printed.
    Structured(serde_json::Value),
}

impl SpecValue {
    fn kind(&self) -> &'static str {
        match self {
            SpecValue::Absent => "absent",
            SpecValue::Text(_) => "a string",
            SpecValue::Number(_) => "a number",
            SpecValue::Bool(_) => "a bool",
            SpecValue::Structured(_) => "a structured value",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecMap(BTreeMap<String, SpecValue>);

impl SpecMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: SpecValue) -> Self {
        self.0.insert(key.to_string(), value);
        self
    }

    pub fn with_text(self, key: &str, value: &str) -> Self {
        self.with(key, SpecValue::Text(value.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<&SpecValue> {
        self.0.get(key)
    }

    /// Read a string-typed entry.
    ///
    /// Missing keys and explicit nulls yield [`NONE`]. Any other non-string
    /// value is an input error.
    pub fn text(&self, key: &str) -> Result<&str, CoreError> {
        match self.0.get(key) {
            None | Some(SpecValue::Absent) => Ok(NONE),
            Some(SpecValue::Text(s)) => Ok(s.as_str()),
            Some(other) => Err(CoreError::SpecType {
                key: key.to_string(),
                expected: "a string",
                found: other.kind(),
            }),
        }
    }
}

impl FromIterator<(String, SpecValue)> for SpecMap {
    fn from_iter<I: IntoIterator<Item = (String, SpecValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
