use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use anamnese_core::draft_keys;
use anamnese_core::models::record::ClinicalRecord;

use crate::error::StorageError;
use crate::state::{decode_draft, encode_draft};
use crate::{objects, DraftStore};

/// Drafts kept as `drafts/{key}.json` under a root directory.
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    root: PathBuf,
    key: String,
}

impl FileDraftStore {
    pub fn new(root: impl Into<PathBuf>, key: &str) -> Result<Self, StorageError> {
        if !draft_keys::is_valid_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(Self {
            root: root.into(),
            key: key.to_string(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Where the draft document lives.
    pub fn path(&self) -> PathBuf {
        objects::object_path(&self.root, &draft_keys::draft(&self.key))
    }

    /// Store a rendered summary document next to the draft. Returns its path.
    pub fn save_summary_docx(&self, bytes: &[u8]) -> Result<PathBuf, StorageError> {
        let key = draft_keys::summary_docx(&self.key);
        let tmp_key = format!("{key}.tmp");
        objects::put_object(&self.root, &key, &tmp_key, bytes)
    }
}

impl DraftStore for FileDraftStore {
    fn load(&self) -> Result<Option<ClinicalRecord>, StorageError> {
        let bytes = match objects::get_object(&self.root, &draft_keys::draft(&self.key)) {
            Ok(bytes) => bytes,
            Err(StorageError::NotFound { .. }) => return Ok(None),
            Err(e) => return Err(e),
        };
        let record = decode_draft(&bytes)?;
        tracing::debug!(key = %self.key, record_id = %record.record_id, "draft loaded");
        Ok(Some(record))
    }

    fn save(&self, record: &ClinicalRecord) -> Result<(), StorageError> {
        let body = encode_draft(record)?;
        let path = objects::put_object(
            &self.root,
            &draft_keys::draft(&self.key),
            &draft_keys::draft_tmp(&self.key),
            &body,
        )?;
        tracing::info!(path = %path.display(), "draft saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        if objects::delete_object(&self.root, &draft_keys::draft(&self.key))? {
            tracing::info!(key = %self.key, "draft cleared");
        }
        Ok(())
    }
}

/// Draft kept in process memory, encoded the same way as on disk.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    document: Mutex<Option<Vec<u8>>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn document(&self) -> std::sync::MutexGuard<'_, Option<Vec<u8>>> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self) -> Result<Option<ClinicalRecord>, StorageError> {
        self.document().as_deref().map(decode_draft).transpose()
    }

    fn save(&self, record: &ClinicalRecord) -> Result<(), StorageError> {
        let body = encode_draft(record)?;
        *self.document() = Some(body);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.document() = None;
        Ok(())
    }
}
