//! Error types for the HTTP layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Request-level failures. Upstream chat failures never appear here;
/// the relay has already turned them into a fallback reply.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Message exceeds {limit} characters")]
    MessageTooLong { limit: usize },

    #[error("The chat assistant is not enabled on this site")]
    AssistantDisabled,

    #[error("Conversation not found: {0}")]
    ConversationNotFound(String),
}

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl SiteError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            SiteError::EmptyMessage => (StatusCode::BAD_REQUEST, "EMPTY_MESSAGE"),
            SiteError::MessageTooLong { .. } => (StatusCode::BAD_REQUEST, "MESSAGE_TOO_LONG"),
            SiteError::AssistantDisabled => {
                (StatusCode::SERVICE_UNAVAILABLE, "ASSISTANT_DISABLED")
            }
            SiteError::ConversationNotFound(_) => {
                (StatusCode::NOT_FOUND, "CONVERSATION_NOT_FOUND")
            }
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = serde_json::json!({
            "success": false,
            "error": ApiError {
                code: code.to_string(),
                message: self.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SiteError::MessageTooLong { limit: 2000 };
        assert_eq!(err.to_string(), "Message exceeds 2000 characters");
        let err = SiteError::ConversationNotFound("abc".into());
        assert_eq!(err.to_string(), "Conversation not found: abc");
    }

    #[test]
    fn error_status_codes() {
        assert_eq!(
            SiteError::EmptyMessage.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SiteError::AssistantDisabled.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            SiteError::ConversationNotFound("x".into())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
    }
}
