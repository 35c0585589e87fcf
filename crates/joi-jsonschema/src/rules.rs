//! Rule and flag lookup.

use crate::describe::Rule;
use serde_json::{Map, Value};

/// First rule named `name`, in declaration order.
pub fn find_rule<'a>(rules: &'a [Rule], name: &str) -> Option<&'a Rule> {
    rules.iter().find(|rule| rule.name == name)
}

/// Whether `flags` maps `name` to exactly `value`.
///
/// Missing flags never match, so `has_flag(None, ..)` is always false.
pub fn has_flag(flags: Option<&Map<String, Value>>, name: &str, value: &Value) -> bool {
    flags
        .and_then(|flags| flags.get(name))
        .is_some_and(|v| v == value)
}

/// Message template of the first rule carrying one.
///
/// This scans every rule, not only the one the message is being attached
/// for: a message set on an earlier rule wins over a later one.
pub fn first_message_template(rules: &[Rule]) -> Option<&str> {
    rules.iter().find_map(Rule::message_template)
}

/// Loose truthiness for option values (`invert: 1`, `invert: "yes"`).
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
