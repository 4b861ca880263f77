//! Disposal categories and the scan lifecycle state machine.
//!
//! `DisposalCategory` serializes with its wire-facing variant names
//! (`"Recycle"`, `"PharmacyDropOff"`, `"HazardousWaste"`) because the
//! boundary response exposes them verbatim. `ScanStage` uses `snake_case`
//! serialization and provides `allowed_next_states()` to enforce valid
//! transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DisposalCategory
// ---------------------------------------------------------------------------

/// Recommended handling method for expired or unused medicine.
///
/// The set is closed and fixed at deploy time: every classifier output is a
/// member of this enumeration, never a free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum DisposalCategory {
    Recycle,
    PharmacyDropOff,
    HazardousWaste,
}

impl DisposalCategory {
    /// All categories, most severe first. Iteration order is part of the
    /// classifier's determinism contract.
    pub const ALL: [Self; 3] = [Self::HazardousWaste, Self::PharmacyDropOff, Self::Recycle];

    /// Severity rank used for conservative tie-breaking.
    ///
    /// `HazardousWaste > PharmacyDropOff > Recycle`: under-classifying risk
    /// is worse than over-classifying it.
    #[must_use]
    pub const fn severity(self) -> u8 {
        match self {
            Self::Recycle => 0,
            Self::PharmacyDropOff => 1,
            Self::HazardousWaste => 2,
        }
    }

    /// Return the string representation used on the wire and in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recycle => "Recycle",
            Self::PharmacyDropOff => "PharmacyDropOff",
            Self::HazardousWaste => "HazardousWaste",
        }
    }
}

impl fmt::Display for DisposalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ScanStage
// ---------------------------------------------------------------------------

/// Stage of a scan through the pipeline lifecycle.
///
/// ```text
/// received → classified → resolved
///          → failed (terminal, from any non-terminal stage)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScanStage {
    Received,
    Classified,
    Resolved,
    Failed,
}

impl ScanStage {
    /// Valid next stages from the current stage.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Received => &[Self::Classified, Self::Failed],
            Self::Classified => &[Self::Resolved, Self::Failed],
            Self::Resolved | Self::Failed => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether the stage is terminal (no further transitions).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved | Self::Failed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Classified => "classified",
            Self::Resolved => "resolved",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ScanStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
