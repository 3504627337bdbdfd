//! Bridge between typed form records and the flat string value map held by a form.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Current field values keyed by field name.
pub type FieldValues = BTreeMap<String, String>;

/// Typed record that a form reads from and writes back into.
///
/// Any `serde` record whose fields are strings qualifies. Non-string scalars are
/// rendered with their JSON text on the way in and fail to decode on the way out.
pub trait FormValues: Serialize + DeserializeOwned + 'static {}

impl<T> FormValues for T where T: Serialize + DeserializeOwned + 'static {}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Structural failures while moving data between a typed record and a form.
pub enum FormError {
    /// The record did not serialize into a JSON object.
    #[error("form record must serialize to a flat object")]
    NotAnObject,
    /// The record could not be serialized.
    #[error("form record encode failed: {0}")]
    Encode(String),
    /// The current values could not be deserialized into the record type.
    #[error("form record decode failed: {0}")]
    Decode(String),
}

/// Flattens `record` into a field value map.
///
/// # Errors
///
/// Returns [`FormError::Encode`] when serialization fails and
/// [`FormError::NotAnObject`] when the record is not a struct/map.
pub fn encode_values<T: Serialize>(record: &T) -> Result<FieldValues, FormError> {
    let value = serde_json::to_value(record).map_err(|err| FormError::Encode(err.to_string()))?;
    match value {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(name, value)| (name, scalar_text(value)))
            .collect()),
        Value::Null => Ok(FieldValues::new()),
        _ => Err(FormError::NotAnObject),
    }
}

/// Rebuilds a typed record from the field value map.
///
/// # Errors
///
/// Returns [`FormError::Decode`] when a required record field is missing or not a string.
pub fn decode_values<T: DeserializeOwned>(values: &FieldValues) -> Result<T, FormError> {
    let map = values
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect::<Map<String, Value>>();
    serde_json::from_value(Value::Object(map)).map_err(|err| FormError::Decode(err.to_string()))
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
