//! Unified pipeline error.
//!
//! This is where the per-crate errors converge: the boundary that hosts the
//! pipeline matches on one type and maps it to a transport status. Low
//! confidence is deliberately absent — it is a qualified success carried on
//! the outcome, not an error.

use std::time::Duration;

use medi_core::errors::CoreError;
use medi_extract::ExtractError;
use medi_resolve::{CatalogError, ResolveError};
use thiserror::Error;

/// Errors that can terminate a scan pipeline invocation.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input rejected before any processing (empty, oversized, unreadable,
    /// or unrecognized image payload).
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),

    /// Instruction lookup found no entry, not even the default row.
    #[error("resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    /// Instruction catalog failed to load at pipeline construction.
    #[error("catalog failed to load: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration failed validation at pipeline construction.
    #[error("configuration rejected: {0}")]
    Config(#[from] medi_config::ConfigError),

    /// Scan stage bookkeeping violated the lifecycle state machine.
    #[error(transparent)]
    Lifecycle(#[from] CoreError),

    /// The whole-pipeline deadline expired; the in-flight result was
    /// discarded.
    #[error("scan timed out after {0:?}")]
    Timeout(Duration),

    /// The extraction worker task died (panic or executor shutdown).
    #[error("internal pipeline failure: {0}")]
    Internal(String),
}

impl PipelineError {
    /// HTTP-equivalent status for the hosting boundary.
    ///
    /// Input rejections are the caller's fault (400); a missing instruction
    /// is an upstream data gap (502); a deadline expiry is 504; everything
    /// else is an internal fault (500).
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Extract(_) => 400,
            Self::Resolve(_) => 502,
            Self::Timeout(_) => 504,
            Self::Catalog(_) | Self::Config(_) | Self::Lifecycle(_) | Self::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medi_core::enums::DisposalCategory;

    #[test]
    fn input_rejections_are_client_errors() {
        let err = PipelineError::Extract(ExtractError::InvalidInput("empty".to_string()));
        assert_eq!(err.status(), 400);
        let err = PipelineError::Extract(ExtractError::UnsupportedFormat("tiff?".to_string()));
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn data_gaps_are_upstream_errors() {
        let err = PipelineError::Resolve(ResolveError::NoInstructionAvailable {
            category: DisposalCategory::Recycle,
            jurisdiction: "DE".to_string(),
        });
        assert_eq!(err.status(), 502);
    }

    #[test]
    fn timeouts_map_to_gateway_timeout() {
        let err = PipelineError::Timeout(Duration::from_secs(10));
        assert_eq!(err.status(), 504);
    }
}
