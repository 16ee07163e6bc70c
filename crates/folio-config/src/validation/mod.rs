//! Full configuration validation.
//!
//! Validates numeric ranges and required strings. Each section has its
//! own submodule; this orchestrator calls them all and collects errors
//! into a single `ConfigError`.

mod assistant;
mod helpers;
mod server;


use crate::schema::FolioConfig;
use folio_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FolioConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    server::validate_server(&mut errors, config);
    assistant::validate_assistant(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
