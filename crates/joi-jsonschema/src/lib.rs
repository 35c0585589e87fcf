//! Joi schema to JSON Schema conversion.
//!
//! `joi-jsonschema` turns the description of a Joi schema (the tree
//! returned by `schema.describe()`) into an equivalent JSON Schema document.
//!
//! # Architecture
//!
//! ```text
//! Host schema           Described tree          JSON Schema
//! ───────────     ──────────────────────     ─────────────
//! SchemaSource ──> DescribedNode ──dispatch─┬─> string
//!  (describe.rs)    (describe.rs)           ├─> number
//!                                           ├─> array ──> items / oneOf
//!                                           └─> object ─> properties
//!                                               (convert/*)   (fragment.rs)
//! ```
//!
//! Only `string`, `number`, `array` and `object` nodes (plus alternatives as
//! array items) have a mapping. Any other type is logged with
//! `tracing::warn!` and contributes nothing, so the rest of the tree still
//! converts.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let described = json!({
//!     "type": "object",
//!     "keys": {
//!         "name": { "type": "string", "flags": { "presence": "required" } },
//!         "age": { "type": "number", "rules": [{ "name": "integer" }] }
//!     }
//! });
//!
//! let schema = joi_jsonschema::convert_value(&described).unwrap();
//! assert_eq!(schema, json!({
//!     "type": "object",
//!     "properties": {
//!         "name": { "type": "string" },
//!         "age": { "type": "integer" }
//!     },
//!     "required": ["name"],
//!     "additionalProperties": false
//! }));
//! ```
//!
//! # Known quirks
//!
//! Two behaviors are kept on purpose because consumers rely on them:
//! - `errorMessage` on a pattern is the first non-empty message template
//!   across *all* rules of the string, not necessarily the pattern's own.
//! - An array with several item schemas keeps only the last one.

pub mod convert;
pub mod describe;
pub mod error;
pub mod fragment;
pub mod rules;

pub use convert::dispatch;
pub use describe::{DescribedNode, Match, NodeKind, Rule, SchemaSource, SwitchCase};
pub use error::ConvertError;
pub use fragment::{Format, Fragment, InstanceType};
pub use rules::{find_rule, first_message_template, has_flag};

use serde_json::Value;

/// Convert a Joi schema into JSON Schema.
///
/// Fails with [`ConvertError::InvalidInput`] before looking at the tree if
/// `schema` is not a Joi schema. `Ok(None)` means the root type has no JSON
/// Schema mapping.
pub fn convert<S>(schema: &S) -> Result<Option<Fragment>, ConvertError>
where
    S: SchemaSource + ?Sized,
{
    if !schema.is_schema() {
        return Err(ConvertError::InvalidInput);
    }
    let described = schema.describe()?;
    Ok(dispatch(&described))
}

/// [`convert`] for a described tree held as JSON, returning JSON.
///
/// An unmapped root type yields `null`.
pub fn convert_value(described: &Value) -> Result<Value, ConvertError> {
    match convert(described)? {
        Some(fragment) => fragment.to_value().map_err(ConvertError::Serialize),
        None => Ok(Value::Null),
    }
}
