//! Registry enrichment configuration.
//!
//! Enrichment is off by default: the pipeline is complete without it, and
//! the catalog text is always the authoritative fallback.

use serde::{Deserialize, Serialize};

const fn default_timeout_secs() -> u64 {
    6
}

fn default_dailymed_base_url() -> String {
    "https://dailymed.nlm.nih.gov/dailymed".to_string()
}

fn default_rxnorm_base_url() -> String {
    "https://rxnav.nlm.nih.gov".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnrichConfig {
    /// Whether the resolver consults the public drug registries at all.
    #[serde(default)]
    pub enabled: bool,

    /// Per-lookup timeout. Enrichment is best-effort; a slow registry must
    /// not hold the scan hostage.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// DailyMed service base URL. Overridable so tests can point at a local
    /// fixture server.
    #[serde(default = "default_dailymed_base_url")]
    pub dailymed_base_url: String,

    /// RxNorm service base URL.
    #[serde(default = "default_rxnorm_base_url")]
    pub rxnorm_base_url: String,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            timeout_secs: default_timeout_secs(),
            dailymed_base_url: default_dailymed_base_url(),
            rxnorm_base_url: default_rxnorm_base_url(),
        }
    }
}
