//! HTTP server configuration types.

use serde::{Deserialize, Serialize};

/// HTTP listener and conversation-store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    /// Listen port (valid range: 1-65535).
    pub port: u32,
    /// Maximum accepted request body size in bytes (valid range: 1024-1048576).
    pub max_body_bytes: u32,
    /// Idle time after which a visitor's conversation is evicted (valid range: 60-86400).
    pub conversation_ttl_secs: u32,
    /// How often the reaper runs (valid range: 5-3600).
    pub reap_interval_secs: u32,
    /// Upper bound on concurrently cached conversations (valid range: 1-100000).
    pub max_conversations: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            max_body_bytes: 16 * 1024,
            conversation_ttl_secs: 1800,
            reap_interval_secs: 60,
            max_conversations: 1000,
        }
    }
}
