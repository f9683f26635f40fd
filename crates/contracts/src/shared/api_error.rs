//! Error taxonomy for calls to the cinema backend
//!
//! Every failure ends up as a toast, so the only thing callers really need is
//! [`ApiError::user_message`]. The variants exist so that logs and tests can
//! tell a transport problem from a business rejection.

use super::form_schema::FieldErrors;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never reached the server or the body could not be read
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Envelope came back with `success: false`
    #[error("{message}")]
    Business { code: Option<String>, message: String },

    /// Payload did not match the expected shape
    #[error("failed to parse response: {0}")]
    Decode(String),

    /// 401 response without an error message, the session is no longer valid
    #[error("not authenticated")]
    Unauthorized,

    /// Client-side validation blocked the request
    #[error("form contains {} invalid field(s)", .0.len())]
    Validation(FieldErrors),
}

impl ApiError {
    /// Human readable text for toasts and alerts.
    ///
    /// Backend-provided messages win over generic ones.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message, status } if message.trim().is_empty() => {
                format!("Request failed with status {}", status)
            }
            ApiError::Http { message, .. } | ApiError::Business { message, .. } => message.clone(),
            ApiError::Unauthorized => "Your session has expired, please sign in again".to_string(),
            ApiError::Validation(_) => "Please fix the highlighted fields".to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_is_shown_to_user() {
        let err = ApiError::Http {
            status: 409,
            message: "Room name already exists".into(),
        };
        assert_eq!(err.user_message(), "Room name already exists");
    }

    #[test]
    fn test_empty_http_message_falls_back_to_status() {
        let err = ApiError::Http {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.user_message(), "Request failed with status 500");
    }

    #[test]
    fn test_validation_error_counts_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "Name is required".into());
        let err = ApiError::Validation(errors);
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "form contains 1 invalid field(s)");
    }

    #[test]
    fn test_unauthorized_asks_to_sign_in_again() {
        assert_eq!(
            ApiError::Unauthorized.user_message(),
            "Your session has expired, please sign in again"
        );
    }
}
