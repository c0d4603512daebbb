//! Form payload model shared by the mapper and its callers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::city::CitySelection;


/// One raw form field value. Single inputs arrive as a plain string;
/// multi-selects and repeated field names arrive as an ordered list.
/// Values are always strings, the way form collection produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Many(Vec<String>),
}

impl FieldValue {
    /// All tokens in order, regardless of shape.
    pub fn values(&self) -> Vec<&str> {
        match self {
            FieldValue::Single(value) => vec![value.as_str()],
            FieldValue::Many(values) => values.iter().map(|value| value.as_str()).collect(),
        }
    }

    /// String coercion: a list renders as its elements joined with commas,
    /// matching how the original form layer stringified repeated fields.
    pub fn joined(&self) -> String {
        match self {
            FieldValue::Single(value) => value.clone(),
            FieldValue::Many(values) => values.join(","),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Single(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Single(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::Many(values)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::Many(values.into_iter().map(|value| value.to_string()).collect())
    }
}


/// The whole submitted form: one value per field name, plus the selected
/// city under its dedicated key. Produced externally (form collection,
/// CLI payload file) and passed into the mapper as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FormSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ville_data: Option<CitySelection>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl FormSnapshot {
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Strict single-string accessor: list-shaped input never matches,
    /// like the original's `===` comparisons against the raw value.
    pub fn scalar(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(FieldValue::Single(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// All tokens for a field, empty when the field is absent.
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.fields.get(name).map(|value| value.values()).unwrap_or_default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }
}
