//! Configuration schema types for Folio.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults suitable for local development.

mod assistant;
mod profile;
mod server;
mod system;

pub use assistant::*;
pub use profile::*;
pub use server::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Folio.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct FolioConfig {
    pub server: ServerConfig,
    pub assistant: AssistantConfig,
    pub profile: ProfileConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_server() {
        let config = FolioConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.max_body_bytes, 16 * 1024);
        assert_eq!(config.server.conversation_ttl_secs, 1800);
        assert_eq!(config.server.reap_interval_secs, 60);
        assert_eq!(config.server.max_conversations, 1000);
    }

    #[test]
    fn default_config_has_correct_assistant() {
        let config = FolioConfig::default();
        assert!(config.assistant.enabled);
        assert_eq!(config.assistant.model, "gemini-2.0-flash");
        assert_eq!(config.assistant.max_tokens, 1024);
        assert!((config.assistant.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.assistant.max_message_chars, 2000);
        assert!(config.assistant.fallback_reply.is_none());
    }

    #[test]
    fn default_config_has_no_profile_override() {
        let config = FolioConfig::default();
        assert!(config.profile.path.is_none());
    }

    #[test]
    fn default_log_level_is_info() {
        let config = FolioConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.level.as_directive(), "info");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: FolioConfig = toml::from_str(
            r#"
[server]
port = 3000

[assistant]
model = "gemini-1.5-flash"
"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.assistant.model, "gemini-1.5-flash");
        assert_eq!(config.assistant.max_tokens, 1024);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: FolioConfig = toml::from_str("[logging]\nlevel = \"WARNING\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Warning);
        assert_eq!(config.logging.level.as_directive(), "warn");
    }
}
