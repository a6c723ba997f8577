//! Shared types used across all pipeline stages.
//!
//! These types flow from the export stage into reporting and archiving and
//! must stay identical across those modules. `CropState` and the per-image
//! option types live in [`crate::crop`] and [`crate::session`]; this module
//! holds only what a finished export hands back to its caller.

use serde::{Deserialize, Serialize};

/// A pixel size. Immutable by convention: operations that change size
/// return a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count, without overflow on extreme sizes.
    pub fn pixel_count(self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Container format of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Webp,
}

impl FileKind {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Webp => "webp",
        }
    }
}

/// One finished output file. Immutable once produced.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// File name including extension, e.g. `photo_A1.pdf`.
    pub name: String,
    pub bytes: Vec<u8>,
    pub kind: FileKind,
    /// Declared output pixel size. For PDFs this is the embedded raster's
    /// pixel size, not the physical page size.
    pub dimensions: Dimensions,
    /// Human-readable size line for reports; the resize target uses the
    /// before/after comparison form.
    pub size_display: String,
}

/// All files exported for one source image, in selection order
/// (print PDFs, thumbnail, resize).
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Resolved base name: the custom name, or the original filename with
    /// its extension stripped.
    pub base_name: String,
    pub files: Vec<GeneratedFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_display() {
        assert_eq!(Dimensions::new(912, 1296).to_string(), "912x1296");
    }

    #[test]
    fn pixel_count_does_not_overflow_u32() {
        let d = Dimensions::new(100_000, 100_000);
        assert_eq!(d.pixel_count(), 10_000_000_000);
    }

    #[test]
    fn file_kind_extensions() {
        assert_eq!(FileKind::Pdf.extension(), "pdf");
        assert_eq!(FileKind::Webp.extension(), "webp");
    }
}
