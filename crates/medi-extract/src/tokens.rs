//! Name tokenization into weighted text evidence.

use std::collections::BTreeMap;

/// Words that carry no classification signal.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "by", "for", "in", "of", "on", "or", "the", "with",
];

/// Tokenize a medicine name into weighted tokens.
///
/// Lowercases, splits on non-alphanumeric runs, drops stopwords and
/// one-character fragments, and accumulates repeated tokens additively.
/// The `BTreeMap` keeps downstream iteration deterministic.
#[must_use]
pub fn tokenize(name: &str) -> BTreeMap<String, f64> {
    let mut tokens = BTreeMap::new();
    for raw in name.split(|c: char| !c.is_alphanumeric()) {
        let token = raw.to_lowercase();
        if token.len() < 2 || STOPWORDS.contains(&token.as_str()) {
            continue;
        }
        *tokens.entry(token).or_insert(0.0) += 1.0;
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn splits_and_lowercases() {
        let tokens = tokenize("Albuterol Inhaler (HFA)");
        assert_eq!(tokens.len(), 3);
        assert!((tokens["albuterol"] - 1.0).abs() < f64::EPSILON);
        assert!((tokens["inhaler"] - 1.0).abs() < f64::EPSILON);
        assert!((tokens["hfa"] - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn repeated_tokens_accumulate() {
        let tokens = tokenize("spray nasal spray");
        assert!((tokens["spray"] - 2.0).abs() < f64::EPSILON);
        assert!((tokens["nasal"] - 1.0).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case("the and of")]
    #[case("a b c")]
    #[case("--- !!!")]
    #[case("")]
    fn noise_yields_no_tokens(#[case] name: &str) {
        assert!(tokenize(name).is_empty());
    }

    #[test]
    fn ordering_is_deterministic() {
        let a: Vec<String> = tokenize("warfarin sodium tablets").into_keys().collect();
        let b: Vec<String> = tokenize("tablets warfarin sodium").into_keys().collect();
        assert_eq!(a, b);
    }
}
