//! Number schemas.

use crate::describe::DescribedNode;
use crate::fragment::{Fragment, InstanceType};
use crate::rules::find_rule;
use serde_json::{Number, Value};

pub(crate) fn convert_number(node: &DescribedNode) -> Fragment {
    let mut schema = Fragment::of_type(InstanceType::Number);
    let rules = node.rules();

    if find_rule(rules, "integer").is_some() {
        schema.instance_type = Some(InstanceType::Integer);
    }

    // Explicit min/max below overwrite these bounds.
    if let Some(sign) = find_rule(rules, "sign") {
        if sign.arg("sign").and_then(Value::as_str) == Some("positive") {
            schema.minimum = Some(Number::from(1));
        } else {
            schema.maximum = Some(Number::from(-1));
        }
    }

    if let Some(min) = find_rule(rules, "min") {
        schema.minimum = min.limit();
    }

    if let Some(max) = find_rule(rules, "max") {
        schema.maximum = max.limit();
    }

    schema
}
