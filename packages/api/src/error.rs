//! Normalised request failures.
//!
//! Every failed call made through [`crate::ApiClient`] surfaces as an
//! [`ApiError`] carrying three things: a human readable `message`, the HTTP
//! `status` (absent when the request never got a response), and the raw JSON
//! body in `data` (absent when the body was not JSON).
//!
//! The message is chosen in this order:
//!
//! 1. `data.message` when the backend sent one,
//! 2. the transport error text (for a bare non-2xx response,
//!    `Request failed with status code <status>`),
//! 3. [`FALLBACK_MESSAGE`].

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// A request failure normalised to `{message, status, data}`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
    pub data: Option<Value>,
}

/// One entry of a structured `errors` list returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ApiError {
    /// Build an error from a non-2xx response body.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let data: Option<Value> = serde_json::from_slice(body).ok();
        let message = data
            .as_ref()
            .and_then(|d| d.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status code {status}"));

        Self {
            message,
            status: Some(status),
            data,
        }
    }

    /// Build an error for a request that never produced a usable response.
    pub fn transport(err: &reqwest::Error) -> Self {
        let message = err.to_string();
        Self {
            message: if message.is_empty() {
                FALLBACK_MESSAGE.to_string()
            } else {
                message
            },
            status: err.status().map(|s| s.as_u16()),
            data: None,
        }
    }

    /// A 2xx response whose body did not match the expected shape.
    pub fn decode(status: u16, err: &serde_json::Error) -> Self {
        Self {
            message: format!("Unexpected response: {err}"),
            status: Some(status),
            data: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status == Some(403)
    }

    /// Structured `{field, message}` errors from `data.errors`, keyed by field.
    ///
    /// Returns `None` when the body has no `errors` array, so callers can fall
    /// back to [`ApiError::message`].
    pub fn field_errors(&self) -> Option<BTreeMap<String, String>> {
        let errors = self.data.as_ref()?.get("errors")?.as_array()?;
        let parsed = errors
            .iter()
            .filter_map(|e| serde_json::from_value::<FieldError>(e.clone()).ok())
            .map(|e| (e.field, e.message))
            .collect();
        Some(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_taken_from_body() {
        let err = ApiError::from_response(400, br#"{"message":"Card declined"}"#);
        assert_eq!(err.message, "Card declined");
        assert_eq!(err.status, Some(400));
        assert!(err.data.is_some());
    }

    #[test]
    fn test_non_json_body_uses_status_text() {
        let err = ApiError::from_response(502, b"<html>Bad Gateway</html>");
        assert_eq!(err.message, "Request failed with status code 502");
        assert_eq!(err.status, Some(502));
        assert!(err.data.is_none());
    }

    #[test]
    fn test_blank_message_uses_status_text() {
        let err = ApiError::from_response(500, br#"{"message":"  "}"#);
        assert_eq!(err.message, "Request failed with status code 500");
        let err = ApiError::from_response(404, br#"{"error":"missing"}"#);
        assert_eq!(err.message, "Request failed with status code 404");
    }

    #[test]
    fn test_field_errors() {
        let body = br#"{"errors":[{"field":"zip_code","message":"Invalid ZIP"},{"field":"cvv","message":"Bad CVV"},{"oops":1}]}"#;
        let err = ApiError::from_response(422, body);
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["zip_code"], "Invalid ZIP");
        assert_eq!(fields["cvv"], "Bad CVV");
    }

    #[test]
    fn test_field_errors_absent() {
        let err = ApiError::from_response(400, br#"{"message":"nope"}"#);
        assert!(err.field_errors().is_none());
    }

    #[test]
    fn test_status_helpers() {
        assert!(ApiError::from_response(401, b"").is_unauthorized());
        assert!(ApiError::from_response(403, b"").is_forbidden());
        assert!(!ApiError::from_response(404, b"").is_unauthorized());
    }
}
