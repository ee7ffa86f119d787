use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// IVCF-20 vulnerability tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum FrailtyLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for FrailtyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FrailtyLevel::Low => "LOW",
            FrailtyLevel::Moderate => "MODERATE",
            FrailtyLevel::High => "HIGH",
        })
    }
}

/// Cardiovascular risk tier as reported by the external risk calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

/// The applied IVCF-20 triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FrailtyAssessment {
    pub score: u8,
    pub result_text: String,
    pub level: FrailtyLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CardiovascularRisk {
    pub summary: String,
    pub level: RiskLevel,
}

/// Canonical home of every risk score on a record. The antecedents section
/// and the SOAP subjective section both write here, so readers never have to
/// reconcile two copies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frailty: Option<FrailtyAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardiovascular: Option<CardiovascularRisk>,
}
