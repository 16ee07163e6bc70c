//! Chat assistant configuration types.

use serde::{Deserialize, Serialize};

/// Settings for the portfolio chat assistant.
///
/// The API key is never read from this file; it comes from the
/// environment only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub enabled: bool,
    pub model: String,
    /// Upper bound on reply length (valid range: 64-8192).
    pub max_tokens: u32,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Longest visitor message accepted by the chat endpoint (valid range: 1-10000).
    pub max_message_chars: u32,
    /// Text shown when the upstream call fails. Uses the built-in apology when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reply: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: "gemini-2.0-flash".into(),
            max_tokens: 1024,
            temperature: 0.7,
            max_message_chars: 2000,
            fallback_reply: None,
        }
    }
}
