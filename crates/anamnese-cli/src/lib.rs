//! anamnese-cli
//!
//! Command-line shell over a saved draft: start a record, identify the
//! patient, enter vitals, run the IVCF-20, and print or export the clinical
//! summary.

pub mod commands;
pub mod config;
pub mod logging;
