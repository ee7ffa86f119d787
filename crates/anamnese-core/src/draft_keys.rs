//! Draft key/path conventions.
//!
//! Pure string functions, no filesystem access. These define the canonical
//! layout of draft documents under a store's root directory.

/// Key under which the single working draft is kept.
pub const DEFAULT_DRAFT_KEY: &str = "medhist_draft_v4";

pub const DRAFTS_PREFIX: &str = "drafts/";

pub fn draft(key: &str) -> String {
    format!("{DRAFTS_PREFIX}{key}.json")
}

pub fn draft_tmp(key: &str) -> String {
    format!("{DRAFTS_PREFIX}{key}.json.tmp")
}

pub fn summary_docx(key: &str) -> String {
    format!("exports/{key}/summary.docx")
}

/// Draft keys end up in file names; anything outside `[A-Za-z0-9_-]` is
/// rejected so a key can never escape the drafts directory.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
