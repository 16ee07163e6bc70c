//! Folio configuration system.
//!
//! Provides TOML-based configuration for the portfolio server and its
//! chat assistant. All config sections use sensible defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use folio_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{FolioConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use folio_common::ConfigError;

/// Load config from an explicit path, or from the platform default path.
///
/// An explicit path must exist. The default path is created with a
/// commented template when missing. The result is validated either way.
pub fn load_config(path: Option<&Path>) -> Result<FolioConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FolioConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
