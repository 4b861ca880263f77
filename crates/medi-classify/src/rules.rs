//! Substance-class rule table.
//!
//! Maps token lexicons to disposal categories with weights. The table is
//! fixed at build time; every classifier decision traces back to it. All
//! lexicon entries are lowercase because the extractor lowercases tokens.

use medi_core::enums::DisposalCategory;

/// One substance class: a token lexicon voting for a category.
#[derive(Debug, Clone, Copy)]
pub struct ClassRule {
    /// Substance class label, for logs and evidence.
    pub class: &'static str,
    pub category: DisposalCategory,
    pub tokens: &'static [&'static str],
    /// Vote strength per matched token.
    pub weight: f64,
}

/// The built-in rule table.
pub const RULES: &[ClassRule] = &[
    ClassRule {
        class: "sharps",
        category: DisposalCategory::HazardousWaste,
        tokens: &[
            "needle", "needles", "syringe", "syringes", "lancet", "lancets", "epipen",
            "autoinjector", "injector", "sharps",
        ],
        weight: 1.0,
    },
    ClassRule {
        class: "inhalants",
        category: DisposalCategory::HazardousWaste,
        tokens: &["inhaler", "aerosol", "propellant", "hfa", "albuterol", "nebulizer"],
        weight: 1.0,
    },
    ClassRule {
        class: "cytotoxic",
        category: DisposalCategory::HazardousWaste,
        tokens: &["chemo", "chemotherapy", "cytotoxic", "methotrexate", "warfarin", "coumadin"],
        weight: 1.0,
    },
    ClassRule {
        class: "high-risk-patches",
        category: DisposalCategory::HazardousWaste,
        tokens: &["fentanyl", "patch", "patches", "transdermal"],
        weight: 0.9,
    },
    ClassRule {
        class: "mercury",
        category: DisposalCategory::HazardousWaste,
        tokens: &["mercury", "thermometer"],
        weight: 1.0,
    },
    ClassRule {
        class: "controlled",
        category: DisposalCategory::PharmacyDropOff,
        tokens: &[
            "opioid", "oxycodone", "hydrocodone", "morphine", "codeine", "tramadol",
            "amphetamine", "adderall", "alprazolam", "xanax", "diazepam", "valium",
            "controlled",
        ],
        weight: 1.0,
    },
    ClassRule {
        class: "prescription",
        category: DisposalCategory::PharmacyDropOff,
        tokens: &[
            "tablet", "tablets", "capsule", "capsules", "pill", "pills", "antibiotic",
            "antibiotics", "amoxicillin", "insulin", "suspension", "syrup", "prescription",
            "rx",
        ],
        weight: 0.6,
    },
    ClassRule {
        class: "packaging",
        category: DisposalCategory::Recycle,
        tokens: &[
            "empty", "bottle", "bottles", "container", "packaging", "cardboard", "box",
            "carton", "blister", "foil", "wrapper", "tube", "plastic",
        ],
        weight: 0.8,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lexicon_is_lowercase() {
        for rule in RULES {
            for token in rule.tokens {
                assert_eq!(
                    *token,
                    token.to_lowercase(),
                    "rule '{}' has a non-lowercase token",
                    rule.class
                );
            }
        }
    }

    #[test]
    fn no_token_appears_twice() {
        let mut seen = HashSet::new();
        for rule in RULES {
            for token in rule.tokens {
                assert!(seen.insert(*token), "token '{token}' appears in two rules");
            }
        }
    }

    #[test]
    fn weights_are_positive_and_bounded() {
        for rule in RULES {
            assert!(rule.weight > 0.0 && rule.weight <= 1.0, "rule '{}'", rule.class);
        }
    }

    #[test]
    fn every_category_has_at_least_one_rule() {
        for category in medi_core::enums::DisposalCategory::ALL {
            assert!(
                RULES.iter().any(|r| r.category == category),
                "{category} has no rules"
            );
        }
    }
}
