//! Percentage resize of the untouched original.
//!
//! This path ignores the crop and the bleed frame entirely: the whole image
//! is scaled by `clamp(percentage, 1, 100) / 100` and re-encoded as lossy
//! WebP. It exists so a batch can ship web-friendly copies of the originals
//! alongside the print set, with a before/after size line when the original
//! byte size is known.

use crate::raster::{self, RasterError};
use crate::specs::RESIZE_WEBP_QUALITY;
use crate::types::Dimensions;
use image::DynamicImage;
use image::imageops::FilterType;

/// Output size for a percentage of the natural size. Each axis rounds to
/// the nearest pixel and never collapses below 1.
pub fn scaled_dimensions(natural: Dimensions, percentage: u32) -> Dimensions {
    let scale = percentage.clamp(1, 100) as f64 / 100.0;
    Dimensions::new(
        ((natural.width as f64 * scale).round() as u32).max(1),
        ((natural.height as f64 * scale).round() as u32).max(1),
    )
}

/// Scale the full original and encode it. Returns the WebP bytes and the
/// output pixel size.
pub fn resize_original(
    source: &DynamicImage,
    percentage: u32,
) -> Result<(Vec<u8>, Dimensions), RasterError> {
    let natural = Dimensions::new(source.width(), source.height());
    let target = scaled_dimensions(natural, percentage);
    let scaled = source
        .resize_exact(target.width, target.height, FilterType::Lanczos3)
        .to_rgb8();
    let bytes = raster::encode_webp(&scaled, RESIZE_WEBP_QUALITY)?;
    Ok((bytes, target))
}

/// Signed percent saved relative to the original: positive means the result
/// shrank, negative means it grew.
pub fn percent_saved(original_size: u64, result_size: u64) -> i64 {
    ((original_size as f64 - result_size as f64) / original_size as f64 * 100.0).round() as i64
}

/// `"1.0 MB → 512.0 KB (↓50%)"`. Growth is shown with the up indicator,
/// never hidden or clamped.
pub fn savings_display(original_size: u64, result_size: u64) -> String {
    let pct = percent_saved(original_size, result_size);
    let (arrow, magnitude) = if pct >= 0 { ('↓', pct) } else { ('↑', -pct) };
    format!(
        "{} → {} ({}{}%)",
        crate::output::format_bytes(original_size),
        crate::output::format_bytes(result_size),
        arrow,
        magnitude
    )
}
