//! Raw tool-call argument payloads.
//!
//! Providers disagree on how function arguments travel: most send a JSON
//! string, some send a decoded object, and in-process harnesses hand over
//! raw bytes or maps whose keys were never constrained to strings. The
//! payload keeps whichever representation arrived; turning it into a
//! canonical mapping is the validator's job.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Tool-call arguments in the representation they arrived in
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentPayload {
    /// Already a string-keyed JSON object
    Object(Map<String, Value>),
    /// Mapping whose keys are arbitrary JSON values
    Keyed(Vec<(Value, Value)>),
    /// JSON-encoded text
    Text(String),
    /// JSON-encoded bytes
    Bytes(Vec<u8>),
    /// Any other JSON value (arrays, numbers, booleans, null)
    Other(Value),
}

impl ArgumentPayload {
    /// Short name of the representation, used in diagnostics
    #[must_use]
    pub fn representation(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Keyed(_) => "keyed map",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Other(Value::Null) => "null",
            Self::Other(Value::Bool(_)) => "boolean",
            Self::Other(Value::Number(_)) => "number",
            Self::Other(Value::String(_)) => "string",
            Self::Other(Value::Array(_)) => "array",
            Self::Other(Value::Object(_)) => "object",
        }
    }
}

impl From<Value> for ArgumentPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Object(map),
            Value::String(text) => Self::Text(text),
            other => Self::Other(other),
        }
    }
}

impl From<&str> for ArgumentPayload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ArgumentPayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<u8>> for ArgumentPayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'de> Deserialize<'de> for ArgumentPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl Serialize for ArgumentPayload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Object(map) => map.serialize(serializer),
            Self::Keyed(pairs) => pairs.serialize(serializer),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Bytes(bytes) => match std::str::from_utf8(bytes) {
                Ok(text) => serializer.serialize_str(text),
                Err(_) => bytes.serialize(serializer),
            },
            Self::Other(value) => value.serialize(serializer),
        }
    }
}
