//! The authoring session: per-image crop and options, persisted as JSON.
//!
//! Crop authoring and export run as separate invocations, so everything the
//! export stage needs is written to a session document in between — the
//! same manifest-between-stages shape as the rest of the pipeline. The
//! session is an explicit store indexed by source path; nothing in the core
//! reads ambient or global state.
//!
//! One `reference_width` is shared by the whole session: every crop must be
//! authored against a frame displayed at that width. Recording the width in
//! the document (instead of assuming it) is what makes the shared-width
//! contract checkable.

use crate::batch::BatchItem;
use crate::crop::CropState;
use crate::export::ExportOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default session document name, relative to the working directory.
pub const DEFAULT_SESSION_FILE: &str = "bleedframe-session.json";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Authored state for one source image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEntry {
    pub path: PathBuf,
    /// Custom base name for outputs; blank falls back to the filename.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_name: Option<String>,
    #[serde(default)]
    pub crop: CropState,
    #[serde(default)]
    pub options: ExportOptions,
}

impl SessionEntry {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            base_name: None,
            crop: CropState::new(),
            options: ExportOptions::default(),
        }
    }
}

/// All authored state for a batch, in authoring order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// On-screen frame width every crop in this session was authored at.
    pub reference_width: f64,
    #[serde(default)]
    pub entries: Vec<SessionEntry>,
}

impl Session {
    pub fn new(reference_width: f64) -> Self {
        Self {
            reference_width,
            entries: Vec::new(),
        }
    }

    /// Look up the entry for a source path.
    pub fn entry(&self, path: &Path) -> Option<&SessionEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// Get or create the entry for a source path. New entries start with
    /// the centered default crop and all targets enabled.
    pub fn entry_mut(&mut self, path: &Path) -> &mut SessionEntry {
        if let Some(index) = self.entries.iter().position(|entry| entry.path == path) {
            return &mut self.entries[index];
        }
        self.entries.push(SessionEntry::new(path.to_path_buf()));
        self.entries.last_mut().unwrap()
    }

    /// Snapshot the session into batch items. Crops are copied out; running
    /// the batch never mutates the session.
    pub fn to_batch_items(&self) -> Vec<BatchItem> {
        self.entries
            .iter()
            .map(|entry| BatchItem {
                path: entry.path.clone(),
                custom_name: entry.base_name.clone(),
                crop: entry.crop,
                options: entry.options,
            })
            .collect()
    }

    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load the session document, or start a fresh one when none exists.
    pub fn load_or_new(path: &Path, reference_width: f64) -> Result<Self, SessionError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new(reference_width))
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn entry_mut_creates_with_defaults_then_reuses() {
        let mut session = Session::new(400.0);
        let path = PathBuf::from("a.jpg");

        let entry = session.entry_mut(&path);
        assert_eq!(entry.crop, CropState::new());
        entry.crop = CropState::with(5.0, 5.0, 2.0);

        assert_eq!(session.entries.len(), 1);
        assert_eq!(session.entry_mut(&path).crop, CropState::with(5.0, 5.0, 2.0));
        assert_eq!(session.entries.len(), 1);
    }

    #[test]
    fn session_roundtrips_through_disk() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("session.json");

        let mut session = Session::new(512.0);
        let entry = session.entry_mut(Path::new("photos/one.jpg"));
        entry.crop = CropState::with(-10.0, 4.0, 1.2);
        entry.base_name = Some("poster".into());
        entry.options.pdf_set = false;
        session.save(&file).unwrap();

        let loaded = Session::load(&file).unwrap();
        assert_eq!(loaded.reference_width, 512.0);
        assert_eq!(loaded.entries.len(), 1);
        let entry = loaded.entry(Path::new("photos/one.jpg")).unwrap();
        assert_eq!(entry.crop, CropState::with(-10.0, 4.0, 1.2));
        assert_eq!(entry.base_name.as_deref(), Some("poster"));
        assert!(!entry.options.pdf_set);
    }

    #[test]
    fn load_or_new_falls_back_when_file_missing() {
        let tmp = TempDir::new().unwrap();
        let session = Session::load_or_new(&tmp.path().join("none.json"), 640.0).unwrap();
        assert_eq!(session.reference_width, 640.0);
        assert!(session.entries.is_empty());
    }

    #[test]
    fn batch_items_copy_state_without_aliasing() {
        let mut session = Session::new(400.0);
        session.entry_mut(Path::new("a.jpg")).crop = CropState::with(1.0, 2.0, 3.0);

        let items = session.to_batch_items();
        // Mutating the session afterwards does not touch the snapshot.
        session.entry_mut(Path::new("a.jpg")).crop = CropState::new();
        assert_eq!(items[0].crop, CropState::with(1.0, 2.0, 3.0));
    }

    #[test]
    fn minimal_document_fills_defaults() {
        let json = r#"{
            "reference_width": 400.0,
            "entries": [{"path": "x.jpg"}]
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        let entry = &session.entries[0];
        assert_eq!(entry.crop, CropState::new());
        assert!(entry.options.any_enabled());
    }
}
