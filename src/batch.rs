//! Sequential batch coordination over many source images.
//!
//! The coordinator decodes, exports, and releases one image at a time:
//! deliberately no parallelism, so peak memory stays bounded by a single
//! decoded raster and its largest print surface. Options are validated for
//! every item before any work starts — a batch either begins with all items
//! exportable or produces zero output. Any later failure (unreadable file,
//! undecodable bytes, raster or PDF error) aborts the whole batch; partial
//! results are discarded with it.

use crate::crop::CropState;
use crate::export::{self, ExportError, ExportOptions};
use crate::naming;
use crate::types::BatchResult;
use std::path::{Path, PathBuf};

/// One image queued for export: the source path plus its authored state.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub path: PathBuf,
    /// Custom base name; blank or absent falls back to the stripped
    /// filename.
    pub custom_name: Option<String>,
    /// Committed crop snapshot, copied out of the editing domain.
    pub crop: CropState,
    pub options: ExportOptions,
}

impl BatchItem {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            custom_name: None,
            crop: CropState::new(),
            options: ExportOptions::default(),
        }
    }

    fn display_name(&self) -> String {
        file_name(&self.path)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Export every item in order, one at a time, against one shared reference
/// width. Every crop in the batch must have been authored at that width.
pub fn run_batch(
    items: &[BatchItem],
    reference_width: f64,
) -> Result<Vec<BatchResult>, ExportError> {
    // Reject before any decode so a misconfigured item cannot leave a
    // half-finished batch behind.
    for item in items {
        if !item.options.any_enabled() {
            return Err(ExportError::InvalidOptions(item.display_name()));
        }
    }

    let mut results = Vec::with_capacity(items.len());
    for item in items {
        let encoded = std::fs::read(&item.path)?;
        let original_byte_size = encoded.len() as u64;
        let source = image::load_from_memory(&encoded).map_err(|err| ExportError::Decode {
            name: item.display_name(),
            reason: err.to_string(),
        })?;
        drop(encoded);

        let base_name = naming::resolve_base_name(item.custom_name.as_deref(), &item.display_name());
        let files = export::export_image(
            &source,
            &item.crop,
            reference_width,
            &base_name,
            &item.options,
            Some(original_byte_size),
        )?;
        results.push(BatchResult { base_name, files });
        // `source` drops here; the next item's decode starts on a clean slate.
    }
    Ok(results)
}
