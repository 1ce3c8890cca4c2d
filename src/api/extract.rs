use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde_json::Value;

use crate::error::AppError;

/// A JSON request body that tolerates being empty.
///
/// An empty body yields `Value::Null`. Malformed JSON is reported in the
/// standard error envelope instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(e.body_text())
            } else {
                AppError::BadRequest(e.body_text())
            }
        })?;

        parse_body(&bytes).map(JsonBody)
    }
}

/// Parse raw body bytes, treating whitespace-only input as `null`.
pub fn parse_body(bytes: &[u8]) -> Result<Value, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes)
        .map_err(|e| AppError::invalid_field("body", format!("Malformed JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_null() {
        assert_eq!(parse_body(b"").unwrap(), Value::Null);
        assert_eq!(parse_body(b"  \n").unwrap(), Value::Null);
    }

    #[test]
    fn test_object_body() {
        let value = parse_body(br#"{"headerTitle":"x"}"#).unwrap();
        assert_eq!(value["headerTitle"], "x");
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            parse_body(b"{not json"),
            Err(AppError::Validation(_))
        ));
    }
}
