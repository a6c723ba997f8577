//! Per-image export orchestration.
//!
//! [`export_image`] is a pure function from one decoded image plus its
//! authored crop and options to an ordered list of finished files. Enabled
//! targets always run in the same fixed order — print PDF A1, print PDF A2,
//! web thumbnail, resize — so batch output and archive layout are
//! deterministic. With no target enabled it returns an empty list; deciding
//! whether that is an error belongs to the caller (the batch coordinator
//! rejects it up front).

use crate::crop::CropState;
use crate::naming;
use crate::pdf::{self, PdfError};
use crate::raster::{self, RasterError};
use crate::resize;
use crate::specs;
use crate::transform;
use crate::types::{Dimensions, FileKind, GeneratedFile};
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("could not decode {name}: {reason}")]
    Decode { name: String, reason: String },
    #[error("no output format selected for {0}")]
    InvalidOptions(String),
    #[error("rasterization failed: {0}")]
    Raster(#[from] RasterError),
    #[error("PDF assembly failed: {0}")]
    Pdf(#[from] PdfError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which targets to produce for one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Produce the A1 + A2 print PDF pair.
    pub pdf_set: bool,
    /// Produce the fixed 912×1296 web thumbnail.
    pub thumbnail: bool,
    /// Produce the percentage resize of the original.
    pub resize: bool,
    /// Resize percentage, clamped to 1–100 when applied.
    pub resize_percentage: u32,
}

impl ExportOptions {
    pub fn any_enabled(&self) -> bool {
        self.pdf_set || self.thumbnail || self.resize
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pdf_set: true,
            thumbnail: true,
            resize: true,
            resize_percentage: 100,
        }
    }
}

/// Export every enabled target for one image.
///
/// `reference_width` is the on-screen frame width `crop` was authored at;
/// `original_byte_size`, when known, feeds the resize target's before/after
/// size line.
pub fn export_image(
    source: &DynamicImage,
    crop: &CropState,
    reference_width: f64,
    base_name: &str,
    options: &ExportOptions,
    original_byte_size: Option<u64>,
) -> Result<Vec<GeneratedFile>, ExportError> {
    let mut files = Vec::new();

    if options.pdf_set {
        for spec in specs::PRINT_SPECS {
            files.push(export_print_target(
                source,
                crop,
                reference_width,
                base_name,
                spec,
            )?);
        }
    }

    let natural = Dimensions::new(source.width(), source.height());

    if options.thumbnail {
        // The thumbnail's aspect is unrelated to the bleed frame, so the
        // frame formula lands the image only approximately here. Accepted:
        // correcting it would break the one-crop-many-targets contract.
        let target = specs::THUMBNAIL_SIZE;
        let rect = transform::draw_rect(natural, crop, reference_width, target);
        let surface = raster::render(source, target, rect)?;
        let bytes = raster::encode_webp(&surface, specs::THUMBNAIL_WEBP_QUALITY)?;
        files.push(GeneratedFile {
            name: naming::output_file_name(base_name, naming::THUMBNAIL_SUFFIX, FileKind::Webp),
            size_display: crate::output::format_bytes(bytes.len() as u64),
            bytes,
            kind: FileKind::Webp,
            dimensions: target,
        });
    }

    if options.resize {
        let (bytes, dimensions) = resize::resize_original(source, options.resize_percentage)?;
        let size_display = match original_byte_size {
            Some(original) => resize::savings_display(original, bytes.len() as u64),
            None => crate::output::format_bytes(bytes.len() as u64),
        };
        files.push(GeneratedFile {
            name: naming::output_file_name(base_name, naming::RESIZE_SUFFIX, FileKind::Webp),
            size_display,
            bytes,
            kind: FileKind::Webp,
            dimensions,
        });
    }

    Ok(files)
}

/// Build one print target: raster at the spec's pixel size, JPEG-encode,
/// wrap in a single-page PDF at the spec's physical size.
pub fn export_print_target(
    source: &DynamicImage,
    crop: &CropState,
    reference_width: f64,
    base_name: &str,
    spec: &specs::PrintSpec,
) -> Result<GeneratedFile, ExportError> {
    let natural = Dimensions::new(source.width(), source.height());
    let target = spec.pixel_size();
    let rect = transform::draw_rect(natural, crop, reference_width, target);
    let surface = raster::render(source, target, rect)?;
    let jpeg = raster::encode_jpeg(&surface, specs::PRINT_JPEG_QUALITY)?;
    let bytes = pdf::wrap_print_raster(&jpeg, target, spec.page_points())?;
    Ok(GeneratedFile {
        name: naming::output_file_name(base_name, spec.name, FileKind::Pdf),
        size_display: crate::output::format_bytes(bytes.len() as u64),
        bytes,
        kind: FileKind::Pdf,
        dimensions: target,
    })
}
