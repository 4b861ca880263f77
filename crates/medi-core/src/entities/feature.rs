use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized representation of one scan input, decoupled from the raw
/// image bytes.
///
/// Produced by the feature extractor from exactly one `ScanRequest` and
/// immutable once produced. The token map is a `BTreeMap` so iteration
/// order, and therefore every downstream score, is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FeatureRecord {
    /// Weighted text tokens from the caller-supplied medicine name.
    /// Repeated tokens accumulate weight additively.
    pub tokens: BTreeMap<String, f64>,
    /// Packaging appearance descriptors.
    pub visual: VisualProfile,
    /// The medicine name as supplied, when present.
    pub name: Option<String>,
}

impl FeatureRecord {
    /// Whether any text evidence is available.
    #[must_use]
    pub fn has_text(&self) -> bool {
        !self.tokens.is_empty()
    }
}

/// Deterministic appearance descriptors for a decoded scan image.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VisualProfile {
    /// Decoded image width in pixels.
    pub width: u32,
    /// Decoded image height in pixels.
    pub height: u32,
    /// Mean pixel luminance in `[0, 1]`.
    pub mean_luminance: f64,
    /// Dominant hue bucket (`red`, `orange`, `yellow`, `green`, `blue`,
    /// `violet`, or `neutral` for low-saturation imagery).
    pub dominant_hue: String,
    /// Base64 perceptual-hash signature of the downsampled image.
    pub signature: String,
}
