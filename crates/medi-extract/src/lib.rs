//! # medi-extract
//!
//! Deterministic feature extraction for Medisort scans.
//!
//! Turns a raw image payload (and an optional medicine name) into a
//! normalized [`FeatureRecord`]: weighted name tokens plus packaging
//! appearance descriptors (dimensions, luminance, dominant hue, perceptual
//! signature). Extraction is a pure function of its input — identical
//! bytes and name always produce an identical record, which the classifier
//! relies on for its own determinism guarantee and the surrounding
//! application can rely on for caching.
//!
//! ## Async usage
//!
//! Image decoding is CPU-bound and synchronous. When calling from async
//! code, wrap calls in [`tokio::task::spawn_blocking`]:
//!
//! ```ignore
//! let features = tokio::task::spawn_blocking(move || {
//!     medi_extract::extract(&image, name.as_deref(), max_bytes)
//! }).await??;
//! ```

pub mod error;
mod tokens;
mod visual;

pub use error::ExtractError;
pub use tokens::tokenize;

use medi_core::entities::FeatureRecord;

/// Extract a [`FeatureRecord`] from image bytes and an optional name.
///
/// `max_image_bytes` bounds the accepted payload; the caller supplies it
/// from configuration.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidInput`] when the payload is empty,
/// exceeds `max_image_bytes`, or a recognized encoding fails to decode,
/// and [`ExtractError::UnsupportedFormat`] when the bytes match no
/// recognized image encoding.
pub fn extract(
    image: &[u8],
    name: Option<&str>,
    max_image_bytes: usize,
) -> Result<FeatureRecord, ExtractError> {
    if image.is_empty() {
        return Err(ExtractError::InvalidInput("empty image payload".to_string()));
    }
    if image.len() > max_image_bytes {
        return Err(ExtractError::InvalidInput(format!(
            "image payload of {} bytes exceeds the {max_image_bytes} byte bound",
            image.len()
        )));
    }

    let format = image::guess_format(image)
        .map_err(|_| ExtractError::UnsupportedFormat("unrecognized image encoding".to_string()))?;
    let decoded = image::load_from_memory_with_format(image, format)
        .map_err(|e| ExtractError::InvalidInput(format!("image failed to decode: {e}")))?;

    let record = FeatureRecord {
        tokens: name.map(tokens::tokenize).unwrap_or_default(),
        visual: visual::profile(&decoded),
        name: name.map(str::to_string),
    };
    tracing::debug!(
        tokens = record.tokens.len(),
        hue = %record.visual.dominant_hue,
        "extracted features"
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    const MAX_BYTES: usize = 8 * 1024 * 1024;

    fn png_bytes(r: u8, g: u8, b: u8) -> Vec<u8> {
        let img = RgbImage::from_pixel(40, 30, Rgb([r, g, b]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn empty_payload_is_invalid_input() {
        let err = extract(&[], None, MAX_BYTES).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidInput(_)));
    }

    #[test]
    fn oversized_payload_is_invalid_input() {
        let bytes = png_bytes(10, 10, 10);
        let err = extract(&bytes, None, 16).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidInput(_)));
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn garbage_bytes_are_unsupported_format() {
        let err = extract(b"definitely not an image", None, MAX_BYTES).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
    }

    #[test]
    fn truncated_png_is_invalid_input() {
        let mut bytes = png_bytes(10, 10, 10);
        bytes.truncate(bytes.len() / 2);
        let err = extract(&bytes, None, MAX_BYTES).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidInput(_)));
    }

    #[test]
    fn valid_png_extracts_features() {
        let bytes = png_bytes(220, 30, 30);
        let record = extract(&bytes, Some("EpiPen auto-injector"), MAX_BYTES).unwrap();
        assert_eq!((record.visual.width, record.visual.height), (40, 30));
        assert_eq!(record.visual.dominant_hue, "red");
        assert!(record.tokens.contains_key("epipen"));
        assert_eq!(record.name.as_deref(), Some("EpiPen auto-injector"));
    }

    #[test]
    fn extraction_is_deterministic() {
        let bytes = png_bytes(30, 80, 220);
        let a = extract(&bytes, Some("ibuprofen"), MAX_BYTES).unwrap();
        let b = extract(&bytes, Some("ibuprofen"), MAX_BYTES).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_name_yields_no_tokens() {
        let bytes = png_bytes(30, 200, 60);
        let record = extract(&bytes, None, MAX_BYTES).unwrap();
        assert!(!record.has_text());
        assert!(record.name.is_none());
    }
}
