//! API Errors
//!
//! Failures of backend calls. None of them are retried; pages show
//! `user_message()` in an inline alert and keep rendering.

use serde_json::Value;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("unexpected non-JSON response: {0}")]
    NonJson(String),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("browser error: {0}")]
    Browser(String),
}

impl ApiError {
    /// Map a non-2xx status and its body to an error.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = server_message(body).unwrap_or_else(|| default_message(status).to_string());
        match status {
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Server { status, message },
        }
    }

    /// Text for an inline alert
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server. Check your connection.".to_string(),
            ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Rejected(msg)
            | ApiError::NonJson(msg) => msg.clone(),
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ApiError::Browser(msg) => msg.clone(),
        }
    }

    /// Authorization failures (not signed in, or not an admin)
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_) | ApiError::Forbidden(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Message the backend put in an error body: `error`, then `message`,
/// then the raw text itself.
pub fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        return ["error", "message"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(String::from);
    }
    Some(body.to_string())
}

fn default_message(status: u16) -> &'static str {
    match status {
        401 => "Please sign in to continue",
        403 => "You are not allowed to do that",
        404 => "Not found",
        500..=599 => "The server failed to handle the request",
        _ => "Request failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(
            ApiError::from_status(401, ""),
            ApiError::Unauthorized("Please sign in to continue".into())
        );
        assert_eq!(
            ApiError::from_status(403, r#"{"success":false,"message":"Admins only"}"#),
            ApiError::Forbidden("Admins only".into())
        );
        assert_eq!(
            ApiError::from_status(404, r#"{"error":"File not found"}"#),
            ApiError::NotFound("File not found".into())
        );
        assert_eq!(
            ApiError::from_status(502, "Bad gateway"),
            ApiError::Server { status: 502, message: "Bad gateway".into() }
        );
    }

    #[test]
    fn test_server_message_prefers_error_field() {
        let body = r#"{"error":"Folder missing","message":"ignored"}"#;
        assert_eq!(server_message(body), Some("Folder missing".into()));
        assert_eq!(server_message(r#"{"message":"Nope"}"#), Some("Nope".into()));
        assert_eq!(server_message(r#"{"success":false}"#), None);
        assert_eq!(server_message("  "), None);
    }

    #[test]
    fn test_user_message() {
        assert_eq!(
            ApiError::Forbidden("Admins only".into()).user_message(),
            "Admins only"
        );
        assert!(ApiError::Network("TypeError".into()).user_message().contains("server"));
        assert!(ApiError::Unauthorized("x".into()).is_auth());
        assert!(!ApiError::NotFound("x".into()).is_auth());
    }
}
