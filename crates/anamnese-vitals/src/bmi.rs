use anamnese_core::models::record::VitalSigns;
use anamnese_core::numeric::leading_decimal;

use crate::interpretation::{ColorTag, Interpretation};

/// Age from which the elderly BMI cut-offs apply.
const ELDERLY_FROM_YEARS: f64 = 60.0;

/// Body mass index from weight in kilograms and height in centimetres.
/// `None` unless both are positive.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg > 0.0 && height_cm > 0.0 {
        let height_m = height_cm / 100.0;
        Some(weight_kg / (height_m * height_m))
    } else {
        None
    }
}

/// One decimal place, the precision the BMI field is stored with.
pub fn format_bmi(bmi: f64) -> String {
    format!("{bmi:.1}")
}

/// Recompute `vitals.bmi` from weight and height. Returns whether the field
/// was written; it is left untouched when either input is missing.
pub fn fill_derived_bmi(vitals: &mut VitalSigns) -> bool {
    let weight = leading_decimal(&vitals.weight).unwrap_or(0.0);
    let height = leading_decimal(&vitals.height).unwrap_or(0.0);
    match compute_bmi(weight, height) {
        Some(bmi) => {
            vitals.bmi = format_bmi(bmi);
            true
        }
        None => false,
    }
}

/// Weight-status category for adults and the elderly. Elderly patients use
/// the narrower 22–27 normal band; everyone else uses the WHO bands.
pub fn classify_adult_bmi(bmi: f64, age_years: f64) -> Interpretation {
    if bmi.is_nan() || bmi <= 0.0 {
        return Interpretation::empty();
    }

    if age_years >= ELDERLY_FROM_YEARS {
        if bmi < 22.0 {
            Interpretation::new("Underweight", ColorTag::Danger)
        } else if bmi <= 27.0 {
            Interpretation::new("Normal", ColorTag::Normal)
        } else {
            Interpretation::new("Overweight", ColorTag::Warning)
        }
    } else if bmi < 18.5 {
        Interpretation::new("Underweight", ColorTag::Danger)
    } else if bmi < 25.0 {
        Interpretation::new("Normal", ColorTag::Normal)
    } else if bmi < 30.0 {
        Interpretation::new("Overweight", ColorTag::Warning)
    } else if bmi < 35.0 {
        Interpretation::new("Obesity I", ColorTag::Warning)
    } else if bmi < 40.0 {
        Interpretation::new("Obesity II", ColorTag::Danger)
    } else {
        Interpretation::new("Obesity III", ColorTag::Danger)
    }
}
