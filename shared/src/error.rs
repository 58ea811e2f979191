//! API error type.
//!
//! `RequestFailed` is the one error kind at the HTTP boundary: any non-2xx
//! response, carrying the raw body text. The remaining variants cover failures
//! that never produced a status code.

use serde_json::Value;
use thiserror::Error;

/// Message shown when an error body is JSON but has no usable `detail`.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{body}")]
    RequestFailed { status: u16, body: String },
    /// The request never completed (DNS, CORS, connection reset).
    #[error("network error: {0}")]
    Network(String),
    /// The request body could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),
    /// A success response did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Status code of a failed request, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for an inline error message.
    ///
    /// A JSON body with a string `detail` shows that detail; other JSON shows
    /// the detail re-encoded, or a generic message when there is none; a
    /// non-JSON body is shown verbatim.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::RequestFailed { status, body } => {
                if body.trim().is_empty() {
                    return format!("Request failed with status {status}");
                }
                match serde_json::from_str::<Value>(body) {
                    Ok(json) => detail_of(&json).unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
                    Err(_) => body.clone(),
                }
            }
            other => other.to_string(),
        }
    }
}

fn detail_of(json: &Value) -> Option<String> {
    match json.get("detail")? {
        Value::Null => None,
        Value::String(detail) if detail.is_empty() => None,
        Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(body: &str) -> ApiError {
        ApiError::RequestFailed {
            status: 400,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_detail_is_extracted() {
        assert_eq!(
            failed(r#"{"detail":"Invalid credentials"}"#).display_message(),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_raw_text_when_not_json() {
        assert_eq!(
            failed("Internal Server Error").display_message(),
            "Internal Server Error"
        );
    }

    #[test]
    fn test_json_without_detail_is_generic() {
        assert_eq!(failed(r#"{"error":"x"}"#).display_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(failed(r#"{"detail":null}"#).display_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_structured_detail_is_reencoded() {
        let message = failed(r#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#)
            .display_message();
        assert!(message.contains("field required"));
    }

    #[test]
    fn test_empty_body_mentions_status() {
        let err = ApiError::RequestFailed {
            status: 502,
            body: String::new(),
        };
        assert_eq!(err.display_message(), "Request failed with status 502");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_error_message_is_raw_body() {
        assert_eq!(failed("nope").to_string(), "nope");
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }
}
