use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DisposalCategory;

/// Human-readable disposal guidance for one (category, jurisdiction) pair.
///
/// Identified uniquely by the pair. Read-only on the request path; content
/// changes only through an out-of-band catalog reload.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DisposalInstruction {
    pub category: DisposalCategory,
    /// Region code the text applies to, or `"*"` for the
    /// jurisdiction-agnostic default.
    pub jurisdiction: String,
    pub text: String,
    /// Date the content team last verified the guidance.
    pub last_verified: NaiveDate,
}
