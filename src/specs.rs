//! Output spec registry: target geometries, DPI math, and codec settings.
//!
//! Everything here is process-wide read-only data. The print targets derive
//! their pixel sizes from physical dimensions at 300 DPI; the web thumbnail
//! is a fixed pixel size with its own aspect ratio, unrelated to the bleed
//! frame.
//!
//! ## Pixel derivation
//!
//! ```text
//! total_cm  = trim_cm + 2 × bleed_mm/10
//! pixels    = ceil(total_cm × 118.1102)        // per axis
//! ```
//!
//! The ceiling matters: a raster that undershoots the physical page by even
//! a fraction of a pixel leaves an unprinted sliver at the cut line. Always
//! round up.

use crate::types::Dimensions;

/// Pixels per centimeter at 300 DPI (300 / 2.54).
pub const PPCM: f64 = 118.1102;

/// PDF user-space points per centimeter (72 / 2.54 points per inch).
pub const POINTS_PER_CM: f64 = 72.0 / 2.54;

/// JPEG quality for rasters embedded in print PDFs.
pub const PRINT_JPEG_QUALITY: u8 = 95;

/// Lossy WebP quality for the fixed web thumbnail.
pub const THUMBNAIL_WEBP_QUALITY: f32 = 90.0;

/// Lossy WebP quality for the percentage resize of the original.
pub const RESIZE_WEBP_QUALITY: f32 = 85.0;

/// Fixed pixel size of the web thumbnail. Its 912:1296 aspect is not
/// derived from any print target, so crop placement on it is only an
/// approximation of the authored framing.
pub const THUMBNAIL_SIZE: Dimensions = Dimensions {
    width: 912,
    height: 1296,
};

/// A print page target: final trim size plus bleed on every edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintSpec {
    /// Short identifier used in output file names (`photo_A1.pdf`).
    pub name: &'static str,
    pub trim_width_cm: f64,
    pub trim_height_cm: f64,
    pub bleed_mm: f64,
}

impl PrintSpec {
    /// Physical page size including bleed, in centimeters.
    pub fn total_cm(&self) -> (f64, f64) {
        let bleed_cm = self.bleed_mm / 10.0;
        (
            self.trim_width_cm + 2.0 * bleed_cm,
            self.trim_height_cm + 2.0 * bleed_cm,
        )
    }

    /// Raster size in pixels at 300 DPI, rounded up per axis.
    pub fn pixel_size(&self) -> Dimensions {
        let (w_cm, h_cm) = self.total_cm();
        Dimensions {
            width: (w_cm * PPCM).ceil() as u32,
            height: (h_cm * PPCM).ceil() as u32,
        }
    }

    /// Physical page size in PDF points.
    pub fn page_points(&self) -> (f64, f64) {
        let (w_cm, h_cm) = self.total_cm();
        (w_cm * POINTS_PER_CM, h_cm * POINTS_PER_CM)
    }
}

/// A1 poster: 59.4 × 84.1 cm trim, 3 mm bleed. This is the reference frame
/// all crops are authored against; A2 shares its aspect ratio.
pub const A1: PrintSpec = PrintSpec {
    name: "A1",
    trim_width_cm: 59.4,
    trim_height_cm: 84.1,
    bleed_mm: 3.0,
};

/// A2 poster: 42.0 × 59.4 cm trim, 3 mm bleed.
pub const A2: PrintSpec = PrintSpec {
    name: "A2",
    trim_width_cm: 42.0,
    trim_height_cm: 59.4,
    bleed_mm: 3.0,
};

/// Print targets in export order.
pub const PRINT_SPECS: &[PrintSpec] = &[A1, A2];
