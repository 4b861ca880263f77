//! Cross-cutting error types for Medisort.
//!
//! This module defines errors that can originate from any crate in the
//! system. Domain-specific errors (e.g., `ExtractError`, `CatalogError`)
//! are defined in their respective crates. The unified `PipelineError` is
//! deferred to `medi-pipeline` where all crate errors converge.

use thiserror::Error;

use crate::enums::ScanStage;

/// Errors that can be raised by any Medisort crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A scan lifecycle transition was attempted that is not allowed.
    #[error("invalid scan transition from {from} to {to}")]
    InvalidTransition { from: ScanStage, to: ScanStage },

    /// Data failed validation (shape, range, constraints).
    #[error("validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Advance a scan stage, enforcing the state machine.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTransition`] when the move is not among
/// `from.allowed_next_states()`.
pub fn advance_stage(from: ScanStage, to: ScanStage) -> Result<ScanStage, CoreError> {
    if from.can_transition_to(to) {
        Ok(to)
    } else {
        Err(CoreError::InvalidTransition { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_follows_the_state_machine() {
        let stage = advance_stage(ScanStage::Received, ScanStage::Classified).unwrap();
        assert_eq!(stage, ScanStage::Classified);
        let stage = advance_stage(stage, ScanStage::Resolved).unwrap();
        assert_eq!(stage, ScanStage::Resolved);
    }

    #[test]
    fn advance_rejects_back_transitions() {
        let err = advance_stage(ScanStage::Resolved, ScanStage::Received).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidTransition {
                from: ScanStage::Resolved,
                to: ScanStage::Received
            }
        ));
    }

    #[test]
    fn advance_rejects_stage_skips() {
        let err = advance_stage(ScanStage::Received, ScanStage::Resolved).unwrap_err();
        assert!(err.to_string().contains("received"));
        assert!(err.to_string().contains("resolved"));
    }
}
