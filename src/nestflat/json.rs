//! Conversion between `serde_json::Value` documents and elements
//!
//! Dynamic documents have no static sum type, so the split into leaves and nested sequences
//! happens here: arrays become nested sequences and every other value (null, booleans,
//! numbers, strings, objects) is a leaf that passes through untouched.

use super::element::Element;
use super::error::FlattenError;
use serde_json::Value;

/// Converts a JSON value into an element, recursing into arrays.
pub fn element_from_value(value: Value) -> Element<Value> {
    match value {
        Value::Array(items) => {
            Element::Nested(items.into_iter().map(element_from_value).collect())
        }
        other => Element::Leaf(other),
    }
}

/// Converts a top-level JSON document into an input sequence.
///
/// The document must be an array; anything else is rejected with
/// [`FlattenError::NotASequence`].
pub fn sequence_from_value(value: Value) -> Result<Vec<Element<Value>>, FlattenError> {
    match value {
        Value::Array(items) => Ok(items.into_iter().map(element_from_value).collect()),
        other => Err(FlattenError::NotASequence(kind(&other))),
    }
}

/// Human-readable name of a JSON value's kind.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<Value> for Element<Value> {
    fn from(value: Value) -> Self {
        element_from_value(value)
    }
}
