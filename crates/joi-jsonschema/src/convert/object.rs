//! Object schemas.

use super::dispatch;
use crate::describe::DescribedNode;
use crate::fragment::{Fragment, InstanceType};
use crate::rules::has_flag;
use indexmap::IndexMap;
use serde_json::Value;

/// Convert an object node.
///
/// `Joi.object()` (no `keys`) accepts anything and maps to a bare
/// `{ "type": "object" }`. `Joi.object({})` declares a shape, so it always
/// carries `additionalProperties`, closed unless the `unknown` flag is set.
pub(crate) fn convert_object(node: &DescribedNode) -> Fragment {
    let mut schema = Fragment::of_type(InstanceType::Object);

    let Some(keys) = &node.keys else {
        return schema;
    };

    let required_flag = Value::from("required");
    let mut properties = IndexMap::new();
    let mut required = Vec::new();

    for (name, child) in keys {
        if let Some(property) = dispatch(child) {
            properties.insert(name.clone(), property);
        }
        if has_flag(child.flags(), "presence", &required_flag) {
            required.push(name.clone());
        }
    }

    if !properties.is_empty() {
        schema.properties = Some(properties);
    }
    if !required.is_empty() {
        schema.required = Some(required);
    }
    schema.additional_properties = Some(has_flag(node.flags(), "unknown", &Value::Bool(true)));

    schema
}
