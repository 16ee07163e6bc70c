//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Folio Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# The Gemini API key is read from GEMINI_API_KEY (or GOOGLE_API_KEY),
# never from this file.

[server]
# host = "127.0.0.1"
# port = 8080                    # 1-65535
# max_body_bytes = 16384         # 1024-1048576
# conversation_ttl_secs = 1800   # 60-86400
# reap_interval_secs = 60        # 5-3600
# max_conversations = 1000       # 1-100000

[assistant]
# enabled = true
# model = "gemini-2.0-flash"
# max_tokens = 1024              # 64-8192
# temperature = 0.7              # 0.0-2.0
# max_message_chars = 2000       # 1-10000
# fallback_reply = "Sorry, I'm having trouble connecting right now. Please try again in a moment."

[profile]
# path = "/path/to/profile.toml"

[logging]
# level = "INFO"                 # DEBUG, INFO, WARNING, ERROR
"##
}
