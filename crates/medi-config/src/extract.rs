//! Feature extractor limits.

use serde::{Deserialize, Serialize};

/// Default maximum accepted image payload: 8 MiB.
const fn default_max_image_bytes() -> usize {
    8 * 1024 * 1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractConfig {
    /// Maximum accepted image payload in bytes. Larger uploads are rejected
    /// before any decoding.
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: default_max_image_bytes(),
        }
    }
}
