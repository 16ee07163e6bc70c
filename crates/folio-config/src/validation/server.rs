//! Validation for the `[server]` section.

use crate::schema::FolioConfig;

use super::helpers::{validate_non_empty, validate_range};

pub(crate) fn validate_server(errors: &mut Vec<String>, config: &FolioConfig) {
    let server = &config.server;
    validate_non_empty(errors, "server.host", &server.host);
    validate_range(errors, "server.port", server.port, 1, 65535);
    validate_range(
        errors,
        "server.max_body_bytes",
        server.max_body_bytes,
        1024,
        1024 * 1024,
    );
    validate_range(
        errors,
        "server.conversation_ttl_secs",
        server.conversation_ttl_secs,
        60,
        86400,
    );
    validate_range(
        errors,
        "server.reap_interval_secs",
        server.reap_interval_secs,
        5,
        3600,
    );
    validate_range(
        errors,
        "server.max_conversations",
        server.max_conversations,
        1,
        100_000,
    );
}
