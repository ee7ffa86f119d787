//! Pediatric growth z-scores.
//!
//! The reference is a single curve defined at two anchors, birth and 60
//! months, with mean and SD interpolated linearly in between. Ages past 60
//! months extrapolate along the same line. Sex is accepted for interface
//! compatibility but the curve is not sex-specific.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use anamnese_core::models::record::VitalSigns;
use anamnese_core::numeric::leading_decimal;

use crate::interpretation::ColorTag;

/// Head circumference is only plotted up to this age.
const HEAD_CIRCUMFERENCE_MAX_MONTHS: u32 = 24;

const UPPER_ANCHOR_MONTHS: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GrowthMeasure {
    Weight,
    Height,
    Bmi,
    /// Head circumference.
    #[serde(rename = "pc")]
    HeadCircumference,
}

#[derive(Debug, Clone, Copy)]
struct Reference {
    mean: f64,
    sd: f64,
}

impl GrowthMeasure {
    /// (birth, 60 months)
    fn anchors(self) -> (Reference, Reference) {
        let r = |mean, sd| Reference { mean, sd };
        match self {
            GrowthMeasure::Weight => (r(3.3, 0.5), r(18.3, 2.2)),
            GrowthMeasure::Height => (r(49.9, 2.0), r(110.0, 4.5)),
            GrowthMeasure::Bmi => (r(13.4, 1.2), r(15.3, 1.3)),
            GrowthMeasure::HeadCircumference => (r(34.5, 1.2), r(50.7, 1.3)),
        }
    }
}

/// Z-score of `value` against the interpolated reference, formatted with
/// two decimals. `None` for non-positive values.
pub fn calculate_z_score(
    value: f64,
    age_months: u32,
    measure: GrowthMeasure,
    _sex: &str,
) -> Option<String> {
    if value.is_nan() || value <= 0.0 {
        return None;
    }
    let (lower, upper) = measure.anchors();
    let t = f64::from(age_months) / UPPER_ANCHOR_MONTHS;
    let mean = lower.mean + t * (upper.mean - lower.mean);
    let sd = lower.sd + t * (upper.sd - lower.sd);
    let z = (value - mean) / sd;
    Some(format!("{z:.2}"))
}

/// Neutral when absent, normal within ±2 SD, danger otherwise.
pub fn z_score_color(z_score: Option<&str>) -> ColorTag {
    let Some(text) = z_score.filter(|s| !s.is_empty()) else {
        return ColorTag::Neutral;
    };
    match text.trim().parse::<f64>() {
        Ok(z) if z.abs() <= 2.0 => ColorTag::Normal,
        _ => ColorTag::Danger,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GrowthZScores {
    pub weight: Option<String>,
    pub height: Option<String>,
    pub bmi: Option<String>,
    #[serde(rename = "pc")]
    pub head_circumference: Option<String>,
}

/// Z-scores for every anthropometric field of a pediatric exam. Head
/// circumference is only scored for children up to 24 months.
pub fn growth_z_scores(vitals: &VitalSigns, age_months: u32, sex: &str) -> GrowthZScores {
    let score = |raw: &str, measure| {
        calculate_z_score(leading_decimal(raw).unwrap_or(0.0), age_months, measure, sex)
    };

    GrowthZScores {
        weight: score(&vitals.weight, GrowthMeasure::Weight),
        height: score(&vitals.height, GrowthMeasure::Height),
        bmi: score(&vitals.bmi, GrowthMeasure::Bmi),
        head_circumference: if age_months <= HEAD_CIRCUMFERENCE_MAX_MONTHS {
            score(&vitals.head_circumference, GrowthMeasure::HeadCircumference)
        } else {
            None
        },
    }
}
