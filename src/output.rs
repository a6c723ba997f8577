//! CLI output formatting for authoring and export.
//!
//! Output is information-centric: every image leads with its positional
//! index and resolved name, with files and authored state as indented
//! context lines.
//!
//! ```text
//! 001 sunset (4 files)
//!     sunset_A1.pdf  7087x10004  14.2 MB
//!     sunset_A2.pdf  5032x7087  7.9 MB
//!     sunset_web.webp  912x1296  180.3 KB
//!     sunset_small.webp  1500x1000  2.1 MB → 840.0 KB (↓60%)
//! ```
//!
//! Each report has a `format_*` function returning `Vec<String>` (pure, no
//! I/O) and a `print_*` wrapper that writes to stdout.

use crate::session::Session;
use crate::types::BatchResult;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Human-readable byte count: `840.0 KB`, `2.1 MB`. Below 1 KB the exact
/// count is shown.
pub fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    const GB: f64 = 1024.0 * 1024.0 * 1024.0;

    let b = bytes as f64;
    if b >= GB {
        format!("{:.1} GB", b / GB)
    } else if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

// ============================================================================
// Export report
// ============================================================================

/// Format the per-image file listing of a finished batch.
pub fn format_export_output(results: &[BatchResult]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, result) in results.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} files)",
            format_index(i + 1),
            result.base_name,
            result.files.len()
        ));
        for file in &result.files {
            lines.push(format!(
                "    {}  {}  {}",
                file.name, file.dimensions, file.size_display
            ));
        }
    }
    lines
}

pub fn print_export_output(results: &[BatchResult]) {
    for line in format_export_output(results) {
        println!("{line}");
    }
}

// ============================================================================
// Session status
// ============================================================================

/// Format the session inventory: every authored image with its crop and
/// target selection.
pub fn format_status_output(session: &Session) -> Vec<String> {
    let mut lines = vec![format!(
        "Session ({} images, reference width {})",
        session.entries.len(),
        session.reference_width
    )];

    for (i, entry) in session.entries.iter().enumerate() {
        let name = entry
            .base_name
            .clone()
            .unwrap_or_else(|| crate::naming::strip_extension(&entry.path.display().to_string()));
        lines.push(format!("{} {}", format_index(i + 1), name));
        lines.push(format!("    Source: {}", entry.path.display()));
        lines.push(format!(
            "    Crop: x {:.1}, y {:.1}, scale {:.2}",
            entry.crop.x, entry.crop.y, entry.crop.scale
        ));

        let mut targets = Vec::new();
        if entry.options.pdf_set {
            targets.push("pdf set".to_string());
        }
        if entry.options.thumbnail {
            targets.push("thumbnail".to_string());
        }
        if entry.options.resize {
            targets.push(format!("resize {}%", entry.options.resize_percentage));
        }
        let targets = if targets.is_empty() {
            "none".to_string()
        } else {
            targets.join(", ")
        };
        lines.push(format!("    Targets: {targets}"));
    }
    lines
}

pub fn print_status_output(session: &Session) {
    for line in format_status_output(session) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crop::CropState;
    use crate::types::{Dimensions, FileKind, GeneratedFile};
    use std::path::Path;

    fn sample_result() -> BatchResult {
        BatchResult {
            base_name: "sunset".into(),
            files: vec![GeneratedFile {
                name: "sunset_web.webp".into(),
                bytes: vec![0; 64],
                kind: FileKind::Webp,
                dimensions: Dimensions::new(912, 1296),
                size_display: "64 B".into(),
            }],
        }
    }

    // =========================================================================
    // Byte formatting tests
    // =========================================================================

    #[test]
    fn format_bytes_picks_the_right_unit() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(524_288), "512.0 KB");
        assert_eq!(format_bytes(1_048_576), "1.0 MB");
        assert_eq!(format_bytes(3_221_225_472), "3.0 GB");
    }

    // =========================================================================
    // Export report tests
    // =========================================================================

    #[test]
    fn export_output_lists_files_under_indexed_header() {
        let lines = format_export_output(&[sample_result()]);
        assert_eq!(lines[0], "001 sunset (1 files)");
        assert_eq!(lines[1], "    sunset_web.webp  912x1296  64 B");
    }

    #[test]
    fn export_output_indexes_sequentially() {
        let mut second = sample_result();
        second.base_name = "dawn".into();
        let lines = format_export_output(&[sample_result(), second]);
        assert!(lines.iter().any(|l| l.starts_with("001 sunset")));
        assert!(lines.iter().any(|l| l.starts_with("002 dawn")));
    }

    // =========================================================================
    // Status report tests
    // =========================================================================

    #[test]
    fn status_shows_crop_and_targets() {
        let mut session = Session::new(400.0);
        let entry = session.entry_mut(Path::new("photos/sunset.jpg"));
        entry.crop = CropState::with(10.0, -20.0, 1.5);
        entry.options.resize_percentage = 50;

        let lines = format_status_output(&session);
        assert_eq!(lines[0], "Session (1 images, reference width 400)");
        assert!(lines.contains(&"    Crop: x 10.0, y -20.0, scale 1.50".to_string()));
        assert!(lines.contains(&"    Targets: pdf set, thumbnail, resize 50%".to_string()));
    }

    #[test]
    fn status_marks_images_without_targets() {
        let mut session = Session::new(400.0);
        let entry = session.entry_mut(Path::new("a.jpg"));
        entry.options.pdf_set = false;
        entry.options.thumbnail = false;
        entry.options.resize = false;

        let lines = format_status_output(&session);
        assert!(lines.contains(&"    Targets: none".to_string()));
    }
}
