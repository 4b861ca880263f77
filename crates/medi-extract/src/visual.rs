//! Visual profiling of decoded scan images.
//!
//! Everything here is a pure function of the decoded pixels: fixed-size
//! downsampling, fixed hue bucket edges, and a perceptual hash with a fixed
//! algorithm and size. Identical bytes always profile identically.

use image::DynamicImage;
use image::imageops::FilterType;
use image_hasher::{HashAlg, HasherConfig};
use medi_core::entities::VisualProfile;

/// Downsample edge length used for luminance and hue statistics.
const SAMPLE_SIZE: u32 = 32;

/// Minimum channel spread (out of 255) for a pixel to count as colored.
const SATURATION_FLOOR: u8 = 24;

/// Hue buckets in tie-break priority order.
const HUE_BUCKETS: &[&str] = &["red", "orange", "yellow", "green", "blue", "violet"];

/// Compute the visual profile of a decoded image.
#[must_use]
pub fn profile(img: &DynamicImage) -> VisualProfile {
    let (width, height) = (img.width(), img.height());
    let sample = img
        .resize_exact(SAMPLE_SIZE, SAMPLE_SIZE, FilterType::Triangle)
        .to_rgb8();

    let mut luminance_sum = 0.0;
    let mut bucket_counts = [0usize; 6];
    let mut colored = 0usize;

    for pixel in sample.pixels() {
        let [r, g, b] = pixel.0;
        luminance_sum += luminance(r, g, b);
        if let Some(bucket) = hue_bucket(r, g, b) {
            bucket_counts[bucket] += 1;
            colored += 1;
        }
    }

    let pixel_count = (SAMPLE_SIZE * SAMPLE_SIZE) as usize;
    // Mostly desaturated imagery (white bottles, blister foil) profiles as
    // neutral even if a few pixels carry color.
    let dominant_hue = if colored * 4 < pixel_count {
        "neutral".to_string()
    } else {
        let (best, _) = bucket_counts
            .iter()
            .enumerate()
            .fold((0, 0), |acc, (i, &n)| if n > acc.1 { (i, n) } else { acc });
        HUE_BUCKETS[best].to_string()
    };

    VisualProfile {
        width,
        height,
        mean_luminance: luminance_sum / pixel_count as f64,
        dominant_hue,
        signature: signature(img),
    }
}

/// Rec. 709 relative luminance, scaled to `[0, 1]`.
fn luminance(r: u8, g: u8, b: u8) -> f64 {
    (0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)) / 255.0
}

/// Bucket index for a pixel's hue, or `None` for low-saturation pixels.
fn hue_bucket(r: u8, g: u8, b: u8) -> Option<usize> {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max - min < SATURATION_FLOOR {
        return None;
    }

    let delta = f64::from(max - min);
    let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));
    let mut hue = if max == r {
        60.0 * (((gf - bf) / delta) % 6.0)
    } else if max == g {
        60.0 * ((bf - rf) / delta + 2.0)
    } else {
        60.0 * ((rf - gf) / delta + 4.0)
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    let bucket = match hue {
        h if !(20.0..340.0).contains(&h) => 0, // red
        h if h < 45.0 => 1,                    // orange
        h if h < 70.0 => 2,                    // yellow
        h if h < 170.0 => 3,                   // green
        h if h < 260.0 => 4,                   // blue
        _ => 5,                                // violet
    };
    Some(bucket)
}

/// Base64 perceptual-hash signature (double-gradient, 8x8).
fn signature(img: &DynamicImage) -> String {
    let hasher = HasherConfig::new()
        .hash_alg(HashAlg::DoubleGradient)
        .hash_size(8, 8)
        .to_hasher();
    hasher.hash_image(img).to_base64()
}
