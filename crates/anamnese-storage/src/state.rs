//! The on-disk draft document.
//!
//! A draft is wrapped in a small envelope so the format can evolve:
//!
//! ```json
//! { "schema_version": 1, "saved_at": "...", "record": { ... } }
//! ```
//!
//! A bare record with no envelope is read as version 0.

use serde::{Deserialize, Serialize};

use anamnese_core::models::record::ClinicalRecord;

use crate::error::StorageError;

/// Current draft schema version. Bump this when the record shape changes.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftEnvelope {
    pub schema_version: u32,
    pub saved_at: jiff::Timestamp,
    pub record: ClinicalRecord,
}

impl DraftEnvelope {
    pub fn wrap(record: &ClinicalRecord) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            saved_at: jiff::Timestamp::now(),
            record: record.clone(),
        }
    }
}

pub fn encode_draft(record: &ClinicalRecord) -> Result<Vec<u8>, StorageError> {
    Ok(serde_json::to_vec_pretty(&DraftEnvelope::wrap(record))?)
}

/// Parse a stored draft, accepting the current envelope or a bare record.
pub fn decode_draft(bytes: &[u8]) -> Result<ClinicalRecord, StorageError> {
    // Parse as raw JSON so the version can be checked before the shape.
    let mut json: serde_json::Value = serde_json::from_slice(bytes)?;
    let version = json
        .get("schema_version")
        .and_then(|v| v.as_u64())
        .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX));

    if version > CURRENT_SCHEMA_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: version,
            supported: CURRENT_SCHEMA_VERSION,
        });
    }

    let enveloped = if version >= 1 {
        json.get_mut("record").map(serde_json::Value::take)
    } else {
        None
    };
    let record = match enveloped {
        Some(record) => record,
        None => {
            tracing::info!("reading pre-envelope draft");
            json
        }
    };
    Ok(serde_json::from_value(record)?)
}
