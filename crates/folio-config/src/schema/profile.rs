//! Biographical data source configuration.

use serde::{Deserialize, Serialize};

/// Where the portfolio owner's records come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ProfileConfig {
    /// Path to a profile TOML file. The bundled profile is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
