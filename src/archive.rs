//! Archive layout and writing.
//!
//! One batch becomes one deflate-compressed zip. Layout depends only on the
//! result count:
//!
//! - exactly one result → its files sit at the archive root
//! - more than one → one top-level folder per result, named by its resolved
//!   base name, holding only that result's files
//!
//! Root files and folders are never mixed in the same archive. Duplicate
//! base names get numeric suffixes (`photo`, `photo-2`, …) so every folder
//! path stays unique.

use crate::types::BatchResult;
use std::collections::HashMap;
use std::io::{Cursor, Write};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("archive write failed: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Folder name per result, suffixing repeats of the same base name.
fn unique_folder_names(results: &[BatchResult]) -> Vec<String> {
    let mut seen: HashMap<&str, u32> = HashMap::new();
    results
        .iter()
        .map(|result| {
            let count = seen.entry(result.base_name.as_str()).or_insert(0);
            *count += 1;
            if *count == 1 {
                result.base_name.clone()
            } else {
                format!("{}-{}", result.base_name, count)
            }
        })
        .collect()
}

/// Lay every batch result out into one compressed archive.
pub fn build_archive(results: &[BatchResult]) -> Result<Vec<u8>, ArchiveError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    match results {
        [single] => {
            for file in &single.files {
                writer.start_file(file.name.as_str(), options)?;
                writer.write_all(&file.bytes)?;
            }
        }
        many => {
            let folders = unique_folder_names(many);
            for (result, folder) in many.iter().zip(&folders) {
                for file in &result.files {
                    writer.start_file(format!("{folder}/{}", file.name), options)?;
                    writer.write_all(&file.bytes)?;
                }
            }
        }
    }

    Ok(writer.finish()?.into_inner())
}
