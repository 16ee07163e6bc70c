//! Chat engine for the portfolio assistant.
//!
//! Provides:
//! - A transport trait (`AiClient`) and a Gemini implementation
//! - Conversation sessions that keep history and token usage
//! - The `Initializer` factory and the `ChatRelay` context that turns
//!   upstream failures into a fallback reply and a fresh conversation

pub mod gemini;
pub mod relay;
pub mod session;
pub mod token_tracker;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use relay::{ChatRelay, Conversation, Initializer, DEFAULT_FALLBACK_REPLY};
pub use session::Session;
pub use token_tracker::TokenTracker;

#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("assistant not configured: {0}")]
    NotConfigured(String),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}

impl AiError {
    /// Setup errors must reach the operator; everything else is a failed turn.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AiError::NotConfigured(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::assistant("hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }

    #[test]
    fn total_tokens_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 1,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn only_configuration_errors_are_fatal() {
        assert!(AiError::NotConfigured("missing key".into()).is_fatal());
        assert!(!AiError::RateLimited.is_fatal());
        assert!(!AiError::Timeout.is_fatal());
        assert!(!AiError::NetworkError("reset".into()).is_fatal());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            AiError::NotConfigured("GEMINI_API_KEY is not set".into()).to_string(),
            "assistant not configured: GEMINI_API_KEY is not set"
        );
        assert_eq!(AiError::RateLimited.to_string(), "Rate limited");
    }
}
