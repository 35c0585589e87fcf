//! String schemas.

use crate::describe::DescribedNode;
use crate::fragment::{Format, Fragment, InstanceType};
use crate::rules::{find_rule, first_message_template, is_truthy};
use serde_json::Value;

/// Format rules in application order; a later match overwrites an earlier one.
const FORMAT_RULES: [(&str, Format); 3] = [
    ("email", Format::Email),
    ("guid", Format::Uuid),
    ("uri", Format::Uri),
];

pub(crate) fn convert_string(node: &DescribedNode) -> Fragment {
    let mut schema = Fragment::of_type(InstanceType::String);
    let rules = node.rules();

    for (name, format) in FORMAT_RULES {
        if find_rule(rules, name).is_some() {
            schema.format = Some(format);
        }
    }

    if let Some(min) = find_rule(rules, "min") {
        schema.min_length = min.limit();
    }

    if let Some(max) = find_rule(rules, "max") {
        schema.max_length = max.limit();
    }

    if let Some(pattern) = find_rule(rules, "pattern") {
        let inverted = pattern
            .arg("options")
            .and_then(|options| options.get("invert"))
            .is_some_and(is_truthy);

        if !inverted {
            if let Some(regex) = pattern.arg("regex").and_then(Value::as_str) {
                schema.pattern = Some(portable_pattern(regex));
            }
            schema.error_message = first_message_template(rules).map(str::to_string);
        }
    }

    if let Some(allow) = &node.allow {
        // An allowed "" means "may be empty", not an enumerated value.
        let values: Vec<String> = allow
            .iter()
            .filter_map(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect();
        if !values.is_empty() {
            schema.enum_values = Some(values);
        }
    }

    schema
}

/// Regex source text from Joi's `/source/flags` form, with `\d` spelled
/// as `[0-9]` so every JSON Schema regex dialect reads it the same way.
fn portable_pattern(regex: &str) -> String {
    regex_source(regex).replace(r"\d", "[0-9]")
}

fn regex_source(regex: &str) -> &str {
    regex
        .strip_prefix('/')
        .and_then(|rest| rest.rfind('/').map(|end| &rest[..end]))
        .unwrap_or(regex)
}
