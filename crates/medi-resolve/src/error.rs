//! Catalog and resolution error types.

use medi_core::enums::DisposalCategory;
use thiserror::Error;

/// Errors raised while loading or validating an instruction catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog document failed to parse as TOML.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// An entry failed validation (empty text, blank jurisdiction).
    #[error("invalid catalog entry for {category}/{jurisdiction}: {reason}")]
    InvalidEntry {
        category: DisposalCategory,
        jurisdiction: String,
        reason: String,
    },

    /// Two entries share the same (category, jurisdiction) key.
    #[error("duplicate catalog entry for {category}/{jurisdiction}")]
    DuplicateEntry {
        category: DisposalCategory,
        jurisdiction: String,
    },
}

/// Errors raised on the resolution hot path.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Neither a jurisdiction-specific entry nor the `"*"` default exists.
    /// A data-completeness defect, not a runtime condition to hide.
    #[error("no disposal instruction available for {category}/{jurisdiction}")]
    NoInstructionAvailable {
        category: DisposalCategory,
        jurisdiction: String,
    },
}
