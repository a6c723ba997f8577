//! Base-name resolution and output file naming.
//!
//! Every export for one source image shares a single base name. Users may
//! type a custom name; a blank or whitespace-only entry falls back to the
//! original filename with its extension stripped (`photo.jpg` → `photo`).
//! Target suffixes are fixed per output:
//!
//! ```text
//! {base}_A1.pdf     print PDF, A1
//! {base}_A2.pdf     print PDF, A2
//! {base}_web.webp   fixed web thumbnail
//! {base}_small.webp percentage resize
//! ```

use crate::types::FileKind;
use std::path::Path;

/// Suffix for the fixed web thumbnail output.
pub const THUMBNAIL_SUFFIX: &str = "web";

/// Suffix for the percentage-resize output.
pub const RESIZE_SUFFIX: &str = "small";

/// Drop the final extension from a filename. Returns the input unchanged
/// when there is nothing to strip.
pub fn strip_extension(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}

/// Resolve the base name for an image: the custom name if it has any
/// non-whitespace content, otherwise the stripped original filename.
pub fn resolve_base_name(custom: Option<&str>, original_filename: &str) -> String {
    if let Some(name) = custom {
        let trimmed = name.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    strip_extension(original_filename)
}

/// Compose an output file name from base, target suffix, and container.
pub fn output_file_name(base: &str, suffix: &str, kind: FileKind) -> String {
    format!("{base}_{suffix}.{}", kind.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_custom_name_falls_back_to_stripped_filename() {
        assert_eq!(resolve_base_name(None, "photo.jpg"), "photo");
        assert_eq!(resolve_base_name(Some(""), "photo.jpg"), "photo");
        assert_eq!(resolve_base_name(Some("   "), "photo.jpg"), "photo");
    }

    #[test]
    fn custom_name_wins_and_is_trimmed() {
        assert_eq!(resolve_base_name(Some(" poster "), "photo.jpg"), "poster");
    }

    #[test]
    fn strip_extension_variants() {
        assert_eq!(strip_extension("photo.jpg"), "photo");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension("no-extension"), "no-extension");
    }

    #[test]
    fn output_names_follow_the_fixed_pattern() {
        assert_eq!(output_file_name("photo", "A1", FileKind::Pdf), "photo_A1.pdf");
        assert_eq!(
            output_file_name("photo", THUMBNAIL_SUFFIX, FileKind::Webp),
            "photo_web.webp"
        );
        assert_eq!(
            output_file_name("photo", RESIZE_SUFFIX, FileKind::Webp),
            "photo_small.webp"
        );
    }
}
