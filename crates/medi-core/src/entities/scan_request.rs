use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Immutable input to one scan pipeline invocation.
///
/// Owned by the caller and discarded after the pipeline returns; the core
/// never persists it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScanRequest {
    /// Raw image payload. Must be non-empty and within the configured size
    /// bound; the extractor rejects anything else before processing.
    pub image: Vec<u8>,
    /// Free-text medicine name, when the caller supplied one.
    pub name: Option<String>,
    /// Region code (e.g., `US`, `US-CA`). `None` selects the configured
    /// default jurisdiction.
    pub jurisdiction: Option<String>,
}

impl ScanRequest {
    /// Build a request from image bytes alone.
    #[must_use]
    pub const fn from_image(image: Vec<u8>) -> Self {
        Self {
            image,
            name: None,
            jurisdiction: None,
        }
    }

    /// Attach a medicine name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a jurisdiction code.
    #[must_use]
    pub fn with_jurisdiction(mut self, jurisdiction: impl Into<String>) -> Self {
        self.jurisdiction = Some(jurisdiction.into());
        self
    }
}
