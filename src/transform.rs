//! Pure placement math: one authored crop, many target resolutions.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! A crop is authored against the bleed frame displayed at some reference
//! width R. To reproduce the same framing on a target raster of width Wt,
//! every authored quantity scales by `Wt / R`:
//!
//! ```text
//! ratio = Wt / R
//! drawW = R × scale × ratio
//! drawH = drawW × (Hn / Wn)
//! drawX = Wt/2 − drawW/2 + x × ratio
//! drawY = Ht/2 − drawH/2 + y × ratio
//! ```
//!
//! This linear law means a single `CropState` produces identical framing on
//! any raster that shares the bleed frame's aspect ratio, with no per-target
//! re-derivation. For a target with an unrelated aspect (the fixed web
//! thumbnail) the horizontal framing still scales exactly but the vertical
//! centering is the target's own, so placement is only approximate. That is
//! the intended behavior; callers must not "correct" it.

use crate::crop::CropState;
use crate::types::Dimensions;

/// Where to draw the source image on a target surface, in target pixels.
/// May extend beyond the surface on any side; the rasterizer clips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Map an authored crop onto a target raster.
///
/// `natural` is the source image's decoded size, `reference_width` the
/// on-screen frame width the crop was authored at.
pub fn draw_rect(
    natural: Dimensions,
    crop: &CropState,
    reference_width: f64,
    target: Dimensions,
) -> DrawRect {
    let ratio = target.width as f64 / reference_width;
    let width = reference_width * crop.scale * ratio;
    let height = width * (natural.height as f64 / natural.width as f64);
    DrawRect {
        x: target.width as f64 / 2.0 - width / 2.0 + crop.x * ratio,
        y: target.height as f64 / 2.0 - height / 2.0 + crop.y * ratio,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f64 = 400.0;

    fn landscape() -> Dimensions {
        Dimensions::new(2000, 1500)
    }

    // =========================================================================
    // Placement tests
    // =========================================================================

    #[test]
    fn default_crop_centers_image_at_reference_width() {
        let target = Dimensions::new(400, 565);
        let rect = draw_rect(landscape(), &CropState::new(), R, target);

        // scale 1 at ratio 1: drawn width equals the reference width.
        assert_eq!(rect.width, 400.0);
        assert_eq!(rect.height, 300.0);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, (565.0 - 300.0) / 2.0);
    }

    #[test]
    fn zoom_scales_around_frame_center() {
        let target = Dimensions::new(400, 565);
        let rect = draw_rect(landscape(), &CropState::with(0.0, 0.0, 2.0), R, target);

        assert_eq!(rect.width, 800.0);
        assert_eq!(rect.height, 600.0);
        // Still centered: equal overhang on both sides.
        assert_eq!(rect.x, -200.0);
    }

    #[test]
    fn offsets_shift_by_target_ratio() {
        let small = draw_rect(
            landscape(),
            &CropState::with(10.0, -20.0, 1.0),
            R,
            Dimensions::new(400, 565),
        );
        let large = draw_rect(
            landscape(),
            &CropState::with(10.0, -20.0, 1.0),
            R,
            Dimensions::new(800, 1130),
        );

        assert_eq!(small.x - (400.0 - small.width) / 2.0, 10.0);
        assert_eq!(large.x - (800.0 - large.width) / 2.0, 20.0);
    }

    #[test]
    fn portrait_source_preserves_its_aspect() {
        let rect = draw_rect(
            Dimensions::new(1500, 2000),
            &CropState::new(),
            R,
            Dimensions::new(400, 565),
        );
        assert!((rect.height / rect.width - 2000.0 / 1500.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_frame_pan_is_not_clamped() {
        let rect = draw_rect(
            landscape(),
            &CropState::with(-1000.0, 0.0, 1.0),
            R,
            Dimensions::new(400, 565),
        );
        // The rectangle sits entirely left of the surface; clipping is the
        // rasterizer's job, not the transform's.
        assert!(rect.x + rect.width < 0.0);
    }

    // =========================================================================
    // Scaling-law property: identical framing at every aspect-sharing size
    // =========================================================================

    #[test]
    fn center_offset_scales_linearly_between_targets() {
        // Two targets sharing the frame aspect (ratio 2x), arbitrary crop.
        let crop = CropState::with(37.0, -12.5, 1.6);
        let t1 = Dimensions::new(400, 565);
        let t2 = Dimensions::new(800, 1130);

        let r1 = draw_rect(landscape(), &crop, R, t1);
        let r2 = draw_rect(landscape(), &crop, R, t2);

        let k = t2.width as f64 / t1.width as f64;
        let off1 = r1.x - t1.width as f64 / 2.0;
        let off2 = r2.x - t2.width as f64 / 2.0;
        assert!((off2 - off1 * k).abs() < 1e-9);

        let voff1 = r1.y - t1.height as f64 / 2.0;
        let voff2 = r2.y - t2.height as f64 / 2.0;
        assert!((voff2 - voff1 * k).abs() < 1e-9);
    }

    #[test]
    fn framing_holds_at_print_resolution() {
        // Authoring at 400 px on screen and rendering at A1's 7087 px must
        // keep proportional placement: every rect component scales by Wt/R.
        let crop = CropState::with(25.0, 40.0, 1.25);
        let screen = draw_rect(landscape(), &crop, R, Dimensions::new(400, 565));
        let print = draw_rect(landscape(), &crop, R, Dimensions::new(7087, 10004));

        let k = 7087.0 / 400.0;
        assert!((print.width - screen.width * k).abs() < 1e-6);
        assert!((print.height - screen.height * k).abs() < 1e-6);
        let screen_off = screen.x - 200.0 + screen.width / 2.0;
        let print_off = print.x - 7087.0 / 2.0 + print.width / 2.0;
        assert!((print_off - screen_off * k).abs() < 1e-6);
    }

    #[test]
    fn reference_width_independence_of_visual_result() {
        // The same visual framing authored at two different reference widths
        // (offsets scaled accordingly) produces the same draw rect.
        let a = draw_rect(
            landscape(),
            &CropState::with(10.0, 20.0, 1.5),
            400.0,
            Dimensions::new(7087, 10004),
        );
        let b = draw_rect(
            landscape(),
            &CropState::with(20.0, 40.0, 1.5),
            800.0,
            Dimensions::new(7087, 10004),
        );
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y - b.y).abs() < 1e-9);
        assert!((a.width - b.width).abs() < 1e-9);
    }
}
