//! JSON serialization helpers
//!
//! `from_json` takes its "shape" from the target type: the type supplies
//! behaviour, the text supplies field values.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ValuesResult;

/// Serialize `value` to compact JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> ValuesResult<String> {
    let json = serde_json::to_string(value)?;
    log::trace!("Serialized {} bytes of JSON", json.len());
    Ok(json)
}

/// Parse `text` into a value of type `T`
pub fn from_json<T: DeserializeOwned>(text: &str) -> ValuesResult<T> {
    serde_json::from_str(text).map_err(|e| {
        log::debug!("JSON parse failed: {}", e);
        e.into()
    })
}

/// Parse `text` without a target shape
pub fn from_json_value(text: &str) -> ValuesResult<serde_json::Value> {
    from_json(text)
}
