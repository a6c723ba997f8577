//! Rasterization: draw the source onto an exact-size surface and encode.
//!
//! The surface is always opaque white RGB — print and web outputs carry no
//! transparency, and any canvas the image does not cover stays white.
//! Drawing never fails: the draw rectangle may hang off any edge (or miss
//! the surface entirely) and is simply clipped.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Surface | `image::RgbImage` |
//! | Resample | `image::imageops`, `Lanczos3` |
//! | Composite | `image::imageops::overlay` (clips, accepts negative offsets) |
//! | JPEG encode | `image::codecs::jpeg::JpegEncoder` |
//! | WebP encode | `webp::Encoder` (lossy) |

use crate::transform::DrawRect;
use crate::types::Dimensions;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use std::io::Cursor;
use thiserror::Error;

/// Upper bound on surface pixel count. A1 at 300 DPI is ~71 MP; anything
/// approaching a gigapixel is a corrupt spec or a hostile input, not a
/// print job.
const MAX_SURFACE_PIXELS: u64 = 1_000_000_000;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("cannot allocate a {0} drawing surface")]
    SurfaceUnavailable(Dimensions),
    #[error("{0} encoder produced no output")]
    EncodeFailure(&'static str),
}

/// Allocate an opaque white surface of exactly the target size.
fn allocate_surface(target: Dimensions) -> Result<RgbImage, RasterError> {
    if target.width == 0 || target.height == 0 || target.pixel_count() > MAX_SURFACE_PIXELS {
        return Err(RasterError::SurfaceUnavailable(target));
    }
    Ok(RgbImage::from_pixel(
        target.width,
        target.height,
        Rgb([255, 255, 255]),
    ))
}

/// Draw `source` onto a white `target`-sized surface at `rect`.
///
/// The source is resampled with Lanczos3 to the rectangle's rounded pixel
/// size (floored at 1×1), then composited at the rounded offset with
/// clipping.
pub fn render(
    source: &DynamicImage,
    target: Dimensions,
    rect: DrawRect,
) -> Result<RgbImage, RasterError> {
    let mut canvas = allocate_surface(target)?;

    let draw_w = (rect.width.round() as i64).max(1) as u32;
    let draw_h = (rect.height.round() as i64).max(1) as u32;
    let scaled = source
        .resize_exact(draw_w, draw_h, FilterType::Lanczos3)
        .to_rgb8();
    image::imageops::overlay(
        &mut canvas,
        &scaled,
        rect.x.round() as i64,
        rect.y.round() as i64,
    );

    Ok(canvas)
}

/// Encode to JPEG at the given quality (print rasters).
pub fn encode_jpeg(surface: &RgbImage, quality: u8) -> Result<Vec<u8>, RasterError> {
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(Cursor::new(&mut bytes), quality)
        .write_image(
            surface.as_raw(),
            surface.width(),
            surface.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|_| RasterError::EncodeFailure("JPEG"))?;
    if bytes.is_empty() {
        return Err(RasterError::EncodeFailure("JPEG"));
    }
    Ok(bytes)
}

/// Encode to lossy WebP at the given quality (web outputs).
pub fn encode_webp(surface: &RgbImage, quality: f32) -> Result<Vec<u8>, RasterError> {
    let encoder = webp::Encoder::from_rgb(surface.as_raw(), surface.width(), surface.height());
    let bytes = encoder.encode(quality).to_vec();
    if bytes.is_empty() {
        return Err(RasterError::EncodeFailure("WebP"));
    }
    Ok(bytes)
}
