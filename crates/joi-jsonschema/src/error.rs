//! Error type for schema conversion.

/// Errors raised by [`convert`](crate::convert).
///
/// Unsupported node types are not errors: they are logged and produce no
/// fragment, so the rest of the tree still converts.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input is not a Joi schema.
    #[error("Not a Joi schema")]
    InvalidInput,

    /// The input looked like a schema but its description could not be read.
    #[error("malformed schema description: {0}")]
    Describe(#[source] serde_json::Error),

    /// The resulting fragment could not be turned into a JSON value.
    ///
    /// Unreachable in practice: every `Fragment` keyword is a string, bool,
    /// number, list or string-keyed map, all of which serialize to JSON. It
    /// exists so [`convert_value`](crate::convert_value) can propagate
    /// `serde_json::to_value` without panicking.
    #[error("failed to serialize JSON Schema: {0}")]
    Serialize(#[source] serde_json::Error),
}
