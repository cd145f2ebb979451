//! Tool-call argument normalization
//!
//! Every encoding a provider may use for function arguments is reduced to
//! one canonical form, a string-keyed JSON object, before any argument
//! check runs.

use response_schemas::ArgumentPayload;
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a payload could not be normalized
#[derive(Debug, Error)]
pub enum ArgumentError {
    /// Text or bytes that are not a JSON object
    #[error("{0}")]
    InvalidJson(#[source] serde_json::Error),

    /// A representation that cannot carry named arguments
    #[error("unsupported argument type ({0})")]
    Unsupported(&'static str),
}

/// Reduce a raw payload to a string-keyed mapping
///
/// | payload | result |
/// |---|---|
/// | absent, `null` | empty mapping |
/// | object | unchanged |
/// | keyed map | string keys kept, other keys dropped |
/// | text, bytes | parsed as a JSON object |
/// | anything else | [`ArgumentError::Unsupported`] |
pub fn normalize_arguments(
    payload: Option<&ArgumentPayload>,
) -> Result<Map<String, Value>, ArgumentError> {
    let Some(payload) = payload else {
        return Ok(Map::new());
    };

    match payload {
        ArgumentPayload::Object(map) => Ok(map.clone()),
        ArgumentPayload::Keyed(pairs) => Ok(pairs
            .iter()
            .filter_map(|(key, value)| match key {
                Value::String(k) => Some((k.clone(), value.clone())),
                _ => None,
            })
            .collect()),
        ArgumentPayload::Text(text) => {
            serde_json::from_str(text).map_err(ArgumentError::InvalidJson)
        }
        ArgumentPayload::Bytes(bytes) => {
            serde_json::from_slice(bytes).map_err(ArgumentError::InvalidJson)
        }
        ArgumentPayload::Other(Value::Null) => Ok(Map::new()),
        other @ ArgumentPayload::Other(_) => {
            Err(ArgumentError::Unsupported(other.representation()))
        }
    }
}
