//! Instruction catalog: load, validate, resolve.

use std::collections::HashMap;
use std::path::Path;

use medi_core::entities::DisposalInstruction;
use medi_core::enums::DisposalCategory;
use serde::Deserialize;

use crate::error::{CatalogError, ResolveError};

/// Jurisdiction key of the fallback entries.
pub const DEFAULT_JURISDICTION: &str = "*";

/// The built-in catalog document, compiled into the binary so resolution
/// works with zero external files.
const BUILTIN_CATALOG: &str = include_str!("../data/default_catalog.toml");

#[derive(Debug, Deserialize)]
struct CatalogDoc {
    #[serde(default)]
    instruction: Vec<DisposalInstruction>,
}

/// Immutable lookup table from (category, jurisdiction) to instruction.
///
/// Read-only from the request path's perspective; replaced wholesale via
/// [`crate::CatalogHandle::reload`].
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<(DisposalCategory, String), DisposalInstruction>,
}

impl Catalog {
    /// Parse and validate the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the embedded document is malformed —
    /// which the crate's own tests rule out for released builds.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog document.
    ///
    /// Jurisdictions are normalized to uppercase (`"*"` excepted) so lookup
    /// is case-insensitive. Every entry must carry non-blank text, and no
    /// (category, jurisdiction) key may repeat.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed TOML and
    /// [`CatalogError::InvalidEntry`]/[`CatalogError::DuplicateEntry`] for
    /// content defects.
    pub fn from_toml_str(doc: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDoc = toml::from_str(doc)?;
        let mut entries = HashMap::with_capacity(doc.instruction.len());

        for mut entry in doc.instruction {
            entry.jurisdiction = normalize_jurisdiction(&entry.jurisdiction);
            if entry.jurisdiction.is_empty() {
                return Err(CatalogError::InvalidEntry {
                    category: entry.category,
                    jurisdiction: entry.jurisdiction,
                    reason: "blank jurisdiction".to_string(),
                });
            }
            if entry.text.trim().is_empty() {
                return Err(CatalogError::InvalidEntry {
                    category: entry.category,
                    jurisdiction: entry.jurisdiction,
                    reason: "empty instruction text".to_string(),
                });
            }

            let key = (entry.category, entry.jurisdiction.clone());
            if entries.insert(key, entry.clone()).is_some() {
                return Err(CatalogError::DuplicateEntry {
                    category: entry.category,
                    jurisdiction: entry.jurisdiction,
                });
            }
        }

        Ok(Self { entries })
    }

    /// Load an operator-supplied catalog file and merge it over the
    /// built-in entries (file entries win on key collisions).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, plus any
    /// parse or validation error from either document.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let mut catalog = Self::builtin()?;
        let overlay = Self::from_toml_str(&std::fs::read_to_string(path)?)?;
        catalog.entries.extend(overlay.entries);
        Ok(catalog)
    }

    /// Resolve the instruction for a category and jurisdiction.
    ///
    /// Falls back to the `"*"` entry when no jurisdiction-specific row
    /// exists. Never returns empty text: load-time validation guarantees
    /// every stored entry carries content.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NoInstructionAvailable`] when even the
    /// fallback is missing — a catalog maintenance defect, logged for
    /// operator follow-up.
    pub fn resolve(
        &self,
        category: DisposalCategory,
        jurisdiction: &str,
    ) -> Result<&DisposalInstruction, ResolveError> {
        let jurisdiction = normalize_jurisdiction(jurisdiction);

        if let Some(entry) = self.entries.get(&(category, jurisdiction.clone())) {
            return Ok(entry);
        }
        if let Some(entry) = self
            .entries
            .get(&(category, DEFAULT_JURISDICTION.to_string()))
        {
            return Ok(entry);
        }

        tracing::error!(%category, %jurisdiction, "catalog has no entry, not even the default");
        Err(ResolveError::NoInstructionAvailable {
            category,
            jurisdiction,
        })
    }

    /// Number of entries, for reload logging.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_jurisdiction(jurisdiction: &str) -> String {
    let trimmed = jurisdiction.trim();
    if trimmed == DEFAULT_JURISDICTION {
        trimmed.to_string()
    } else {
        trimmed.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn builtin_catalog_parses_and_validates() {
        let catalog = Catalog::builtin().expect("builtin catalog must be valid");
        assert!(!catalog.is_empty());
    }

    #[rstest]
    #[case(DisposalCategory::HazardousWaste)]
    #[case(DisposalCategory::PharmacyDropOff)]
    #[case(DisposalCategory::Recycle)]
    fn every_category_has_a_default_row(#[case] category: DisposalCategory) {
        let catalog = Catalog::builtin().unwrap();
        let entry = catalog.resolve(category, "ZZ-UNKNOWN").unwrap();
        assert_eq!(entry.jurisdiction, DEFAULT_JURISDICTION);
        assert!(!entry.text.trim().is_empty());
    }

    #[test]
    fn specific_jurisdiction_beats_the_default() {
        let catalog = Catalog::builtin().unwrap();
        let entry = catalog
            .resolve(DisposalCategory::HazardousWaste, "US-CA")
            .unwrap();
        assert_eq!(entry.jurisdiction, "US-CA");
        assert!(entry.text.contains("California"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = Catalog::builtin().unwrap();
        let lower = catalog
            .resolve(DisposalCategory::PharmacyDropOff, "us-ca")
            .unwrap();
        let upper = catalog
            .resolve(DisposalCategory::PharmacyDropOff, "US-CA")
            .unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn missing_default_is_a_data_gap() {
        let doc = r#"
            [[instruction]]
            category = "Recycle"
            jurisdiction = "US"
            text = "Rinse and recycle."
            last_verified = "2025-10-22"
        "#;
        let catalog = Catalog::from_toml_str(doc).unwrap();
        let err = catalog
            .resolve(DisposalCategory::Recycle, "DE")
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::NoInstructionAvailable {
                category: DisposalCategory::Recycle,
                ..
            }
        ));
    }

    #[test]
    fn empty_text_is_rejected_at_load() {
        let doc = r#"
            [[instruction]]
            category = "Recycle"
            jurisdiction = "*"
            text = "   "
            last_verified = "2025-10-22"
        "#;
        let err = Catalog::from_toml_str(doc).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEntry { .. }));
    }

    #[test]
    fn duplicate_keys_are_rejected_at_load() {
        let doc = r#"
            [[instruction]]
            category = "Recycle"
            jurisdiction = "us"
            text = "First."
            last_verified = "2025-10-22"

            [[instruction]]
            category = "Recycle"
            jurisdiction = "US"
            text = "Second."
            last_verified = "2025-10-22"
        "#;
        let err = Catalog::from_toml_str(doc).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateEntry { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Catalog::from_toml_str("instruction = 3").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn operator_file_overrides_builtin_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [[instruction]]
            category = "Recycle"
            jurisdiction = "US"
            text = "County pilot program: use the green pharmacy bin."
            last_verified = "2026-01-10"
            "#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        let entry = catalog.resolve(DisposalCategory::Recycle, "US").unwrap();
        assert!(entry.text.contains("green pharmacy bin"));
        // Untouched builtin rows survive the merge.
        assert!(
            catalog
                .resolve(DisposalCategory::HazardousWaste, "US-CA")
                .is_ok()
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
