//! Per-category evidence scoring.
//!
//! Text and visual evidence score separately, each normalized to `[0, 1]`,
//! and the classifier blends them. Both scorers are pure functions of the
//! feature record and the fixed rule table.

use medi_core::entities::FeatureRecord;
use medi_core::enums::DisposalCategory;

use crate::rules::RULES;

/// Text-evidence score for one category.
///
/// Raw score is the sum, over this category's rules, of rule weight times
/// the matched token weights. Saturates as `raw / (0.5 + raw)` so a single
/// strong match already clears 0.6 while piling on tokens approaches 1.0.
#[must_use]
pub fn text_score(features: &FeatureRecord, category: DisposalCategory) -> f64 {
    let mut raw = 0.0;
    for rule in RULES.iter().filter(|r| r.category == category) {
        for token in rule.tokens {
            if let Some(weight) = features.tokens.get(*token) {
                raw += rule.weight * weight;
            }
        }
    }
    raw / (0.5 + raw)
}

/// Visual-evidence score for one category.
///
/// A packaging-appearance prior: hue buckets carry base scores per category
/// (warm hues lean hazardous, desaturated packaging leans pharmacy/recycle),
/// nudged by the luminance band and clamped to `[0, 1]`.
#[must_use]
pub fn visual_score(features: &FeatureRecord, category: DisposalCategory) -> f64 {
    let (haz, pharmacy, recycle): (f64, f64, f64) = match features.visual.dominant_hue.as_str() {
        "red" => (0.60, 0.30, 0.10),
        "orange" => (0.55, 0.30, 0.15),
        "yellow" => (0.45, 0.35, 0.20),
        "green" => (0.20, 0.35, 0.50),
        "blue" => (0.25, 0.40, 0.35),
        "violet" => (0.35, 0.40, 0.20),
        // "neutral" and anything a future extractor might emit.
        _ => (0.25, 0.45, 0.40),
    };

    let base = match category {
        DisposalCategory::HazardousWaste => haz,
        DisposalCategory::PharmacyDropOff => pharmacy,
        DisposalCategory::Recycle => recycle,
    };

    let luminance = features.visual.mean_luminance;
    let nudge = match category {
        // Dark, opaque containers lean hazardous.
        DisposalCategory::HazardousWaste if luminance < 0.2 => 0.10,
        // Bright white packaging is the common pharmacy-return look.
        DisposalCategory::PharmacyDropOff if luminance >= 0.8 => 0.05,
        // Bright empties and cartons lean recyclable.
        DisposalCategory::Recycle if luminance >= 0.8 => 0.10,
        _ => 0.0,
    };

    (base + nudge).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use medi_core::entities::VisualProfile;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn features(tokens: &[(&str, f64)], hue: &str, luminance: f64) -> FeatureRecord {
        FeatureRecord {
            tokens: tokens.iter().map(|(t, w)| ((*t).to_string(), *w)).collect(),
            visual: VisualProfile {
                width: 100,
                height: 100,
                mean_luminance: luminance,
                dominant_hue: hue.to_string(),
                signature: "sig".to_string(),
            },
            name: None,
        }
    }

    #[test]
    fn single_strong_token_clears_point_six() {
        let f = features(&[("epipen", 1.0)], "neutral", 0.5);
        let score = text_score(&f, DisposalCategory::HazardousWaste);
        assert!(score > 0.6, "got {score}");
    }

    #[test]
    fn text_score_saturates_below_one() {
        let f = features(
            &[("needle", 3.0), ("syringe", 3.0), ("chemo", 3.0)],
            "neutral",
            0.5,
        );
        let score = text_score(&f, DisposalCategory::HazardousWaste);
        assert!(score > 0.9 && score < 1.0, "got {score}");
    }

    #[test]
    fn unmatched_tokens_score_zero() {
        let f = features(&[("gibberish", 2.0)], "neutral", 0.5);
        for category in DisposalCategory::ALL {
            assert!(text_score(&f, category) < f64::EPSILON);
        }
    }

    #[test]
    fn tokens_only_vote_for_their_own_category() {
        let f = features(&[("oxycodone", 1.0)], "neutral", 0.5);
        assert!(text_score(&f, DisposalCategory::PharmacyDropOff) > 0.0);
        assert!(text_score(&f, DisposalCategory::HazardousWaste) < f64::EPSILON);
        assert!(text_score(&f, DisposalCategory::Recycle) < f64::EPSILON);
    }

    #[rstest]
    #[case("red", DisposalCategory::HazardousWaste)]
    #[case("green", DisposalCategory::Recycle)]
    #[case("neutral", DisposalCategory::PharmacyDropOff)]
    fn hue_prior_peaks_on_the_expected_category(
        #[case] hue: &str,
        #[case] expected: DisposalCategory,
    ) {
        let f = features(&[], hue, 0.5);
        let best = DisposalCategory::ALL
            .into_iter()
            .max_by(|a, b| {
                visual_score(&f, *a)
                    .partial_cmp(&visual_score(&f, *b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap();
        assert_eq!(best, expected);
    }

    #[test]
    fn luminance_nudges_stay_in_range() {
        for hue in ["red", "orange", "yellow", "green", "blue", "violet", "neutral"] {
            for luminance in [0.0, 0.1, 0.5, 0.85, 1.0] {
                let f = features(&[], hue, luminance);
                for category in DisposalCategory::ALL {
                    let score = visual_score(&f, category);
                    assert!((0.0..=1.0).contains(&score), "{hue}/{luminance}/{category}");
                }
            }
        }
    }
}
