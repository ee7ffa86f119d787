//! anamnese-core
//!
//! Pure domain types, draft key conventions, lenient number parsing, and the
//! text-refinement contract. No storage or rendering dependency; this is the
//! shared vocabulary of the Anamnese workspace.

pub mod draft_keys;
pub mod error;
pub mod models;
pub mod numeric;
pub mod refine;
