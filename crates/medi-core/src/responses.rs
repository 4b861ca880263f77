//! Boundary response types serialized by the embedding application.
//!
//! The HTTP layer that hosts the pipeline serializes these as-is, so field
//! names here are the wire contract: `lowConfidence`, not `low_confidence`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ClassificationResult, DisposalInstruction};
use crate::enums::DisposalCategory;

/// Response for a completed scan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub category: DisposalCategory,
    pub confidence: f64,
    pub low_confidence: bool,
    pub instruction: String,
    pub jurisdiction: String,
}

impl ScanResponse {
    /// Assemble the wire response from pipeline outputs.
    #[must_use]
    pub fn from_parts(result: &ClassificationResult, instruction: &DisposalInstruction) -> Self {
        Self {
            category: result.category,
            confidence: result.confidence,
            low_confidence: result.low_confidence,
            instruction: instruction.text.clone(),
            jurisdiction: instruction.jurisdiction.clone(),
        }
    }
}
