//! Recommendation resolver configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_jurisdiction() -> String {
    "US".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Jurisdiction assumed when a scan request carries none.
    #[serde(default = "default_jurisdiction")]
    pub default_jurisdiction: String,

    /// Optional operator-supplied instruction catalog (TOML). Merged over
    /// the built-in catalog at load and on reload.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_jurisdiction: default_jurisdiction(),
            catalog_path: None,
        }
    }
}
