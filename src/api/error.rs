//! API Error Type
//!
//! Error surface for the HTTP client. Backend failures carry the `message`
//! field verbatim; transport failures carry the underlying fetch error.

use thiserror::Error;

/// Fallback when a non-2xx body has no usable `message` field.
pub const GENERIC_FAILURE: &str = "Request failed";

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the backend's `message` field or
    /// [`GENERIC_FAILURE`].
    #[error("{message}")]
    Api { status: u16, message: String },

    /// fetch itself rejected: no response at all.
    #[error("{0}")]
    Network(String),

    /// 2xx response whose body was not the expected JSON.
    #[error("failed to parse server response: {0}")]
    Decode(String),
}

impl ApiError {
    /// User-facing toast text. `online` is `navigator.onLine` at the time the
    /// error surfaced; callers off the main thread can pass `true`.
    pub fn user_message(&self, online: bool) -> String {
        match self {
            ApiError::Network(_) if !online => {
                "You're offline. Check your connection and try again.".to_string()
            }
            ApiError::Network(_) => {
                "Can't reach the server. Please try again in a moment.".to_string()
            }
            ApiError::Api { status: 429, .. } => {
                "Too many requests. Give it a moment and try again.".to_string()
            }
            ApiError::Api { status, .. } if (500..600).contains(status) => {
                "Something went wrong on our end. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Pull the user-facing message out of an error body, if there is one.
pub fn error_message(body: Option<serde_json::Value>) -> String {
    body.as_ref()
        .and_then(|v| v.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_field_is_used_verbatim() {
        assert_eq!(error_message(Some(json!({"message": "Not found"}))), "Not found");
    }

    #[test]
    fn missing_message_falls_back_to_generic() {
        assert_eq!(error_message(Some(json!({"error": "nope"}))), GENERIC_FAILURE);
        assert_eq!(error_message(Some(json!("plain string"))), GENERIC_FAILURE);
        assert_eq!(error_message(None), GENERIC_FAILURE);
    }

    #[test]
    fn api_error_displays_backend_message() {
        let err = ApiError::Api { status: 404, message: "Not found".into() };
        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn network_error_propagates_underlying_message() {
        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.to_string(), "TypeError: Failed to fetch");
    }

    #[test]
    fn classification_distinguishes_offline_from_unreachable() {
        let err = ApiError::Network("Failed to fetch".into());
        assert!(err.user_message(false).contains("offline"));
        assert!(err.user_message(true).contains("reach the server"));
    }

    #[test]
    fn classification_cans_rate_limit_and_server_errors() {
        let limited = ApiError::Api { status: 429, message: GENERIC_FAILURE.into() };
        assert!(limited.user_message(true).contains("Too many requests"));

        let broken = ApiError::Api { status: 503, message: GENERIC_FAILURE.into() };
        assert!(broken.user_message(true).contains("on our end"));

        // Ordinary client errors keep the backend's own words.
        let not_found = ApiError::Api { status: 404, message: "Not found".into() };
        assert_eq!(not_found.user_message(true), "Not found");
    }
}
