//! Classifier scoring parameters.

use serde::{Deserialize, Serialize};

/// Default confidence threshold below which a result is flagged low-confidence.
const fn default_confidence_threshold() -> f64 {
    0.55
}

/// Default epsilon for the conservative tie-break.
const fn default_tie_epsilon() -> f64 {
    0.05
}

/// Default blend weight: `0.7` favors text evidence over visual evidence.
const fn default_text_alpha() -> f64 {
    0.7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Results scoring below this confidence are flagged, not suppressed.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,

    /// Categories scoring within this distance of the top score tie; the
    /// most severe one among them wins.
    #[serde(default = "default_tie_epsilon")]
    pub tie_epsilon: f64,

    /// Blend weight between text and visual evidence:
    /// `0.0` = visual only, `1.0` = text only.
    #[serde(default = "default_text_alpha")]
    pub text_alpha: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            tie_epsilon: default_tie_epsilon(),
            text_alpha: default_text_alpha(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ClassifierConfig::default();
        assert!((config.confidence_threshold - 0.55).abs() < f64::EPSILON);
        assert!((config.tie_epsilon - 0.05).abs() < f64::EPSILON);
        assert!((config.text_alpha - 0.7).abs() < f64::EPSILON);
    }
}
