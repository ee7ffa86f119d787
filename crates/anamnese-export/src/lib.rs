//! anamnese-export
//!
//! Clinical summary generation: a Tera template rendered from the record,
//! then optionally converted to DOCX.

pub mod context;
pub mod docx;
pub mod error;
pub mod render;
pub mod styles;

pub use context::SummaryContext;
pub use render::{render_summary, DEFAULT_SUMMARY_TEMPLATE};
