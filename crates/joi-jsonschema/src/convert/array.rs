//! Array schemas.

use super::{convert_object, dispatch};
use crate::describe::{DescribedNode, NodeKind};
use crate::fragment::{Fragment, InstanceType};
use crate::rules::find_rule;

pub(crate) fn convert_array(node: &DescribedNode) -> Fragment {
    let mut schema = Fragment::of_type(InstanceType::Array);
    let rules = node.rules();

    if let Some(min) = find_rule(rules, "min") {
        schema.min_items = min.limit();
    }

    if find_rule(rules, "unique").is_some() {
        schema.unique_items = Some(true);
    }

    // Each element schema replaces the previous one: with several
    // `items(...)` only the last is kept, and an unsupported last element
    // leaves `items` unset.
    for item in node.items.iter().flatten() {
        schema.items = convert_item(item).map(Box::new);
    }

    schema
}

fn convert_item(item: &DescribedNode) -> Option<Fragment> {
    match item.kind() {
        NodeKind::Alternatives => Some(convert_alternatives(item)),
        _ => dispatch(item),
    }
}

/// Alternatives become `oneOf`, with every branch read as an object schema.
///
/// A conditional match (one with a `ref`) takes precedence: the branches
/// are the `then` schemas of the first such match.
fn convert_alternatives(node: &DescribedNode) -> Fragment {
    let matches = node.matches.as_deref().unwrap_or_default();

    let branches: Vec<Fragment> = match matches.iter().find(|m| m.reference.is_some()) {
        Some(conditional) => conditional
            .conditional_branches()
            .into_iter()
            .map(convert_object)
            .collect(),
        None => matches
            .iter()
            .filter_map(|m| m.schema.as_ref())
            .map(convert_object)
            .collect(),
    };

    Fragment::one_of(branches)
}
