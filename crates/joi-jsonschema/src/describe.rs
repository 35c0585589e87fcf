//! Described schema model.
//!
//! Joi schemas introspect themselves through `describe()`, which yields a
//! plain nested structure with a `type` tag on every node. This module
//! models that structure and the [`SchemaSource`] seam a host implements to
//! hand its schema objects to the converter.

use crate::error::ConvertError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Something that can be converted: a host-side schema object.
///
/// Mirrors the two operations the schema library exposes, `Joi.isSchema`
/// and `schema.describe()`.
pub trait SchemaSource {
    /// Whether this value belongs to the Joi schema family.
    fn is_schema(&self) -> bool;

    /// Produce the canonical described tree for this schema.
    fn describe(&self) -> Result<DescribedNode, ConvertError>;
}

/// A JSON value holding `describe()` output.
///
/// Any object with a string `type` member counts as a schema.
impl SchemaSource for Value {
    fn is_schema(&self) -> bool {
        self.get("type").is_some_and(Value::is_string)
    }

    fn describe(&self) -> Result<DescribedNode, ConvertError> {
        DescribedNode::deserialize(self).map_err(ConvertError::Describe)
    }
}

impl SchemaSource for DescribedNode {
    fn is_schema(&self) -> bool {
        true
    }

    fn describe(&self) -> Result<DescribedNode, ConvertError> {
        Ok(self.clone())
    }
}

/// One node of a described schema tree.
///
/// Members the converter does not read (`preferences`, `metas`, ...) are
/// ignored on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribedNode {
    /// Type tag (`string`, `number`, `array`, `object`, `alternatives`, ...).
    #[serde(rename = "type")]
    pub type_name: String,

    /// Rules in the order they were added to the schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,

    /// Flags such as `presence` or `unknown`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<Map<String, Value>>,

    /// Explicitly allowed literal values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<Vec<Value>>,

    /// Array element schemas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<DescribedNode>>,

    /// Object property schemas, in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<IndexMap<String, DescribedNode>>,

    /// Alternatives branches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<Match>>,
}

/// The type tag of a node, as a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    String,
    Number,
    Array,
    Object,
    Alternatives,
    Unsupported(&'a str),
}

impl DescribedNode {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Default::default()
        }
    }

    pub fn kind(&self) -> NodeKind<'_> {
        match self.type_name.as_str() {
            "string" => NodeKind::String,
            "number" => NodeKind::Number,
            "array" => NodeKind::Array,
            "object" => NodeKind::Object,
            "alternatives" => NodeKind::Alternatives,
            other => NodeKind::Unsupported(other),
        }
    }

    /// Rules of this node; empty when none were declared.
    pub fn rules(&self) -> &[Rule] {
        self.rules.as_deref().unwrap_or_default()
    }

    pub fn flags(&self) -> Option<&Map<String, Value>> {
        self.flags.as_ref()
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.get_or_insert_with(Vec::new).push(rule);
        self
    }

    pub fn with_flag(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.flags
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_key(mut self, name: impl Into<String>, child: DescribedNode) -> Self {
        self.keys
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), child);
        self
    }

    pub fn with_item(mut self, item: DescribedNode) -> Self {
        self.items.get_or_insert_with(Vec::new).push(item);
        self
    }
}

/// A named constraint attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Map<String, Value>>,

    /// Custom error message; Joi stores it as `{ "template": "..." }`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

impl Rule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_message(mut self, template: impl Into<String>) -> Self {
        self.message = Some(serde_json::json!({ "template": template.into() }));
        self
    }

    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.args.as_ref()?.get(name)
    }

    /// The numeric `limit` argument.
    ///
    /// Joi also accepts references as limits; those have no JSON Schema
    /// counterpart and are dropped.
    pub fn limit(&self) -> Option<Number> {
        match self.arg("limit")? {
            Value::Number(n) => Some(n.clone()),
            other => {
                tracing::debug!(rule = %self.name, limit = %other, "skipping non-numeric limit");
                None
            }
        }
    }

    /// Non-empty custom message template, if any.
    pub fn message_template(&self) -> Option<&str> {
        self.message
            .as_ref()?
            .get("template")?
            .as_str()
            .filter(|t| !t.is_empty())
    }
}

/// One branch of an alternatives node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Unconditional branch schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<DescribedNode>,

    /// Reference the condition is evaluated against.
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch: Option<Vec<SwitchCase>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub then: Option<DescribedNode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otherwise: Option<DescribedNode>,
}

/// One case of a conditional `switch`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub then: Option<DescribedNode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otherwise: Option<DescribedNode>,
}

impl Match {
    /// The `then` schemas of a conditional branch.
    ///
    /// A `switch` yields each case's `then`. A single `is`/`then`/`otherwise`
    /// condition without a `switch` yields its `then` and `otherwise`.
    pub fn conditional_branches(&self) -> Vec<&DescribedNode> {
        match &self.switch {
            Some(cases) => cases.iter().filter_map(|case| case.then.as_ref()).collect(),
            None => self.then.iter().chain(self.otherwise.iter()).collect(),
        }
    }
}
