//! anamnese-vitals
//!
//! Vital-sign and anthropometry interpretation. Pure functions over the raw
//! strings typed into the physical exam: every input is parsed leniently and
//! bad input degrades to an empty, neutral interpretation instead of an error.

pub mod age;
pub mod bmi;
pub mod growth;
pub mod interpretation;
pub mod vitals;

pub use age::{months_to_years, parse_age_to_months};
pub use bmi::{classify_adult_bmi, compute_bmi, fill_derived_bmi, format_bmi};
pub use growth::{calculate_z_score, growth_z_scores, z_score_color, GrowthMeasure, GrowthZScores};
pub use interpretation::{ColorTag, Interpretation};
pub use vitals::{interpret_vital_signs, reference_ranges, ReferenceRanges, VitalSign, VitalsInterpretation};
