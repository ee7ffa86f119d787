//! Contract for the external text-refinement service.
//!
//! The service rewrites a section's free text in proper clinical register.
//! Its internals live elsewhere; callers only rely on the fallback rule in
//! [`refine_or_original`]: a failed refinement never loses what the student
//! typed.

use thiserror::Error;

use crate::models::patient::PatientType;

#[derive(Debug, Error)]
pub enum RefineError {
    #[error("refinement service unavailable: {0}")]
    Unavailable(String),

    #[error("refinement request failed: {0}")]
    Request(String),
}

pub trait TextRefiner {
    /// Return an improved version of `text` for the named section.
    fn refine(
        &self,
        text: &str,
        section: &str,
        patient_type: PatientType,
    ) -> Result<String, RefineError>;
}

/// Returns the input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughRefiner;

impl TextRefiner for PassthroughRefiner {
    fn refine(
        &self,
        text: &str,
        _section: &str,
        _patient_type: PatientType,
    ) -> Result<String, RefineError> {
        Ok(text.to_string())
    }
}

/// Refine `text`, falling back to the original on error or empty output.
pub fn refine_or_original(
    refiner: &dyn TextRefiner,
    text: &str,
    section: &str,
    patient_type: PatientType,
) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    match refiner.refine(text, section, patient_type) {
        Ok(refined) if !refined.trim().is_empty() => refined,
        Ok(_) => {
            tracing::warn!(section, "refinement returned empty text, keeping original");
            text.to_string()
        }
        Err(e) => {
            tracing::warn!(section, error = %e, "refinement failed, keeping original");
            text.to_string()
        }
    }
}
