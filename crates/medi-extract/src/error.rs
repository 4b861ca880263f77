//! Extraction error types.

/// Errors that can occur during feature extraction.
///
/// Both variants are input rejections: they fire before any feature is
/// computed and are never retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The payload is empty, oversized, or a recognized encoding failed to
    /// decode.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The byte stream matches no recognized image encoding.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
}
