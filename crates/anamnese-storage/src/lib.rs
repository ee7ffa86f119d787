//! anamnese-storage
//!
//! Draft persistence. The working record is saved as a single JSON document
//! per draft key, either on the local filesystem or in memory.

pub mod error;
pub mod objects;
pub mod state;
pub mod store;

use anamnese_core::models::record::ClinicalRecord;

use crate::error::StorageError;

pub use store::{FileDraftStore, MemoryDraftStore};

/// Somewhere the in-progress record can be kept between sessions.
pub trait DraftStore {
    /// The saved draft, or `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<ClinicalRecord>, StorageError>;

    /// Replace the saved draft.
    fn save(&self, record: &ClinicalRecord) -> Result<(), StorageError>;

    /// Remove the saved draft. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), StorageError>;
}
