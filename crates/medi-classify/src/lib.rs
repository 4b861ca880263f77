//! # medi-classify
//!
//! Deterministic disposal classification for Medisort.
//!
//! Maps a [`FeatureRecord`] to a [`ClassificationResult`] using the built-in
//! substance-class rule table. Text and visual evidence score separately per
//! category and are blended with a configurable alpha:
//!
//! - `0.0` = visual only
//! - `1.0` = text only
//! - `0.7` (default) = favors the caller-supplied name
//!
//! The decision path contains no randomness: repeated calls with the same
//! features and parameters return the same category and confidence. When
//! several categories score within `tie_epsilon` of the top score, the most
//! severe one wins (`HazardousWaste > PharmacyDropOff > Recycle`) —
//! under-classifying risk is worse than over-classifying it.

mod rules;
mod score;

pub use rules::{ClassRule, RULES};
pub use score::{text_score, visual_score};

use medi_core::entities::{CategoryScore, ClassificationResult, FeatureRecord};
use medi_core::enums::DisposalCategory;

/// Scoring parameters, supplied by the embedding application's config.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierParams {
    /// Results scoring below this confidence are flagged low-confidence.
    pub confidence_threshold: f64,
    /// Categories within this distance of the top score tie conservatively.
    pub tie_epsilon: f64,
    /// Blend weight between text and visual evidence.
    pub text_alpha: f64,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.55,
            tie_epsilon: 0.05,
            text_alpha: 0.7,
        }
    }
}

/// Classify a feature record into a disposal category with confidence.
///
/// Total over its input domain: every outcome is a member of
/// [`DisposalCategory::ALL`] and `confidence` lands in `[0, 1]`. A result
/// below the threshold comes back flagged, not suppressed — low confidence
/// is a qualified success the caller must surface distinctly.
#[must_use]
pub fn classify(features: &FeatureRecord, params: &ClassifierParams) -> ClassificationResult {
    // With no text evidence the blend collapses to visual only; otherwise a
    // high alpha would let an absent name suppress real visual signal.
    let alpha = if features.has_text() {
        params.text_alpha.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let scores: Vec<CategoryScore> = DisposalCategory::ALL
        .into_iter()
        .map(|category| {
            let text = score::text_score(features, category);
            let visual = score::visual_score(features, category);
            CategoryScore {
                category,
                score: alpha * text + (1.0 - alpha) * visual,
                text_score: text,
                visual_score: visual,
            }
        })
        .collect();

    let top_score = scores
        .iter()
        .map(|s| s.score)
        .fold(f64::NEG_INFINITY, f64::max);

    // ALL is ordered most severe first, so the first candidate inside the
    // epsilon band is the conservative pick.
    let winner = scores
        .iter()
        .find(|s| s.score >= top_score - params.tie_epsilon)
        .map_or(DisposalCategory::HazardousWaste, |s| s.category);

    let runner_up = scores
        .iter()
        .filter(|s| s.category != winner)
        .map(|s| s.score)
        .fold(0.0, f64::max);

    let confidence = calibrate(top_score, runner_up);
    let low_confidence = confidence < params.confidence_threshold;

    tracing::debug!(
        category = %winner,
        confidence,
        low_confidence,
        "classified scan"
    );

    ClassificationResult {
        category: winner,
        confidence,
        low_confidence,
        scores,
        evidence: features.clone(),
    }
}

/// Calibrate confidence from the top score and its margin over the runner-up.
///
/// `top * (0.6 + 0.4 * margin/top)`: a dominant winner keeps most of its
/// score; a contested one is discounted toward the threshold. Always in
/// `[0, 1]` for inputs in `[0, 1]`.
fn calibrate(top: f64, runner_up: f64) -> f64 {
    if top <= 0.0 {
        return 0.0;
    }
    let margin = ((top - runner_up) / top).clamp(0.0, 1.0);
    (top * (0.6 + 0.4 * margin)).clamp(0.0, 1.0)
}
