//! Pipeline-level configuration.

use serde::{Deserialize, Serialize};

const fn default_scan_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Bound on one whole scan (extract through resolve). On expiry the
    /// in-flight result is discarded, never partially applied.
    #[serde(default = "default_scan_timeout_secs")]
    pub scan_timeout_secs: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scan_timeout_secs: default_scan_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = PipelineConfig::default();
        assert_eq!(config.scan_timeout_secs, 10);
    }
}
