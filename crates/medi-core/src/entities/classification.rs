use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::FeatureRecord;
use crate::enums::DisposalCategory;

/// Blended score for a single category, kept as the evidence trail behind
/// a classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CategoryScore {
    pub category: DisposalCategory,
    /// Normalized blended score in `[0, 1]`.
    pub score: f64,
    /// Text-evidence component before blending.
    pub text_score: f64,
    /// Visual-evidence component before blending.
    pub visual_score: f64,
}

/// Output of the disposal classifier.
///
/// `confidence` is calibrated from the score margin, never a placeholder
/// constant. A result with `low_confidence` set is a qualified success:
/// callers must surface it distinctly rather than presenting a guess as
/// fact.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ClassificationResult {
    pub category: DisposalCategory,
    /// Calibrated probability in `[0, 1]` that `category` is correct.
    pub confidence: f64,
    /// True iff `confidence` fell below the configured threshold.
    pub low_confidence: bool,
    /// Per-category score breakdown, most severe category first.
    pub scores: Vec<CategoryScore>,
    /// The feature record the decision was made from.
    pub evidence: FeatureRecord,
}
