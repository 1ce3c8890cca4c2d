use serde_json::{Map, Value};

use crate::error::{AppError, FieldError};
use crate::models::ContentKind;

/// Version metadata a client may set directly.
pub const METADATA_FIELDS: [&str; 3] = ["isActive", "version", "lastUpdatedBy"];

/// Server-managed fields that clients commonly echo back; silently dropped.
pub const READ_ONLY_FIELDS: [&str; 4] = ["_id", "__v", "createdAt", "updatedAt"];

/// Metadata fields extracted from a request body.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VersionMeta {
    pub is_active: Option<bool>,
    pub version: Option<String>,
    pub last_updated_by: Option<String>,
}

/// A request body split into content fields and version metadata.
#[derive(Debug, Default, Clone)]
pub struct ContentPayload {
    pub content: Map<String, Value>,
    pub meta: VersionMeta,
}

impl ContentPayload {
    /// Split `body` against the field allow-list of `T`.
    ///
    /// A `null` body is treated as an empty object.
    pub fn parse<T: ContentKind>(body: Value) -> Result<Self, AppError> {
        let object = into_object(body)?;
        let allowed = content_fields::<T>()?;

        let mut payload = ContentPayload::default();
        let mut errors = Vec::new();

        for (key, value) in object {
            match key.as_str() {
                "isActive" => match value {
                    Value::Bool(b) => payload.meta.is_active = Some(b),
                    Value::Null => {}
                    _ => errors.push(FieldError::new("isActive", "isActive must be a boolean")),
                },
                "version" => match value {
                    Value::String(s) => payload.meta.version = Some(s),
                    Value::Null => {}
                    _ => errors.push(FieldError::new("version", "version must be a string")),
                },
                "lastUpdatedBy" => match value {
                    Value::String(s) if !s.trim().is_empty() => {
                        payload.meta.last_updated_by = Some(s.trim().to_string())
                    }
                    Value::String(_) | Value::Null => {}
                    _ => errors.push(FieldError::new(
                        "lastUpdatedBy",
                        "lastUpdatedBy must be a string",
                    )),
                },
                k if READ_ONLY_FIELDS.contains(&k) => {}
                k if allowed.contains_key(k) => {
                    payload.content.insert(key, value);
                }
                _ => errors.push(FieldError::new(key, "Unknown field")),
            }
        }

        if errors.is_empty() {
            Ok(payload)
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

/// Require a JSON object body (`null` counts as empty).
pub fn into_object(body: Value) -> Result<Map<String, Value>, AppError> {
    match body {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => Err(AppError::invalid_field(
            "body",
            "Request body must be a JSON object",
        )),
    }
}

/// The top-level field names of `T`, taken from its serialized default.
fn content_fields<T: ContentKind>() -> Result<Map<String, Value>, AppError> {
    match serde_json::to_value(T::default()) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AppError::Internal(format!(
            "{} does not serialize to an object",
            T::LABEL
        ))),
        Err(e) => Err(AppError::Internal(e.to_string())),
    }
}

/// Merge `patch` into `target`: nested objects merge key by key, while arrays
/// and scalars replace the existing value.
pub fn deep_merge(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(existing), Value::Object(incoming)) => {
            for (key, value) in incoming {
                match existing.get_mut(&key) {
                    Some(slot) => deep_merge(slot, value),
                    None => {
                        existing.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Deserialize a merged JSON value into a typed content or item value.
pub fn from_json<D: serde::de::DeserializeOwned>(value: Value) -> Result<D, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::invalid_field("body", e.to_string()))
}

/// Serialize a typed value back into JSON for merging.
pub fn to_json<S: serde::Serialize>(value: &S) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(e.to_string()))
}
