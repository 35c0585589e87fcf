//! JSON Schema output model.
//!
//! A [`Fragment`] covers the subset of JSON Schema keywords the converters
//! emit. Unset keywords are omitted when serialized, so a fragment maps
//! one-to-one onto the JSON object a consumer sees.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A JSON Schema document or sub-schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    /// Absent only on the `oneOf` wrapper built for alternatives.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Custom error text (ajv-errors keyword).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Fragment>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Fragment>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<Fragment>>,
}

/// JSON Schema `type` keyword values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceType {
    String,
    Number,
    Integer,
    Array,
    Object,
}

/// JSON Schema `format` keyword values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Email,
    Uuid,
    Uri,
}

impl Fragment {
    pub fn of_type(instance_type: InstanceType) -> Self {
        Self {
            instance_type: Some(instance_type),
            ..Default::default()
        }
    }

    /// A type-less `{ "oneOf": [...] }` wrapper.
    pub fn one_of(branches: Vec<Fragment>) -> Self {
        Self {
            one_of: Some(branches),
            ..Default::default()
        }
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
