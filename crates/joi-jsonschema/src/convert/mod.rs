//! Described node to JSON Schema conversion.
//!
//! [`dispatch`] routes a node to its per-type converter by type tag. Each
//! converter reads the node's rules and flags and recurses through
//! `dispatch` for nested schemas.

mod array;
mod number;
mod object;
mod string;

pub(crate) use array::convert_array;
pub(crate) use number::convert_number;
pub(crate) use object::convert_object;
pub(crate) use string::convert_string;

use crate::describe::{DescribedNode, NodeKind};
use crate::fragment::Fragment;

/// Convert one described node.
///
/// Returns `None` for types without a JSON Schema mapping; callers treat
/// that as "no constraint" and keep converting siblings.
pub fn dispatch(node: &DescribedNode) -> Option<Fragment> {
    tracing::trace!(node_type = %node.type_name, "converting node");
    match node.kind() {
        NodeKind::String => Some(convert_string(node)),
        NodeKind::Number => Some(convert_number(node)),
        NodeKind::Array => Some(convert_array(node)),
        NodeKind::Object => Some(convert_object(node)),
        NodeKind::Alternatives | NodeKind::Unsupported(_) => {
            tracing::warn!(node_type = %node.type_name, "Unsupported type: {}", node.type_name);
            None
        }
    }
}
