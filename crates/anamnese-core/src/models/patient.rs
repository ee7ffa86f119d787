use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Which anamnesis workflow a record follows. Also selects the vital-sign
/// reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum PatientType {
    Adult,
    Pediatric,
    Geriatric,
    /// Problem-oriented SOAP note instead of the sectioned anamnesis.
    Soap,
}

impl PatientType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientType::Adult => "ADULT",
            PatientType::Pediatric => "PEDIATRIC",
            PatientType::Geriatric => "GERIATRIC",
            PatientType::Soap => "SOAP",
        }
    }
}

impl fmt::Display for PatientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatientType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADULT" => Ok(PatientType::Adult),
            "PEDIATRIC" => Ok(PatientType::Pediatric),
            "GERIATRIC" => Ok(PatientType::Geriatric),
            "SOAP" => Ok(PatientType::Soap),
            _ => Err(CoreError::UnknownPatientType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum PediatricSubType {
    Neonate,
    Infant,
    PreSchool,
    School,
    Adolescent,
}

impl FromStr for PediatricSubType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "neonate" => Ok(PediatricSubType::Neonate),
            "infant" => Ok(PediatricSubType::Infant),
            "pre_school" | "preschool" => Ok(PediatricSubType::PreSchool),
            "school" => Ok(PediatricSubType::School),
            "adolescent" => Ok(PediatricSubType::Adolescent),
            _ => Err(CoreError::UnknownPediatricSubType(s.to_string())),
        }
    }
}

/// Identification section. `age` is kept as typed ("3 meses", "86 anos");
/// the interpreter derives months from it on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientIdentification {
    pub name: String,
    pub age: String,
    pub sex: String,
    pub color: String,
    pub marital_status: String,
    pub occupation: String,
    pub birthplace: String,
    pub residence: String,
    #[serde(default)]
    pub guardian: String,
    #[serde(default)]
    pub schooling: String,
    #[serde(default)]
    pub caregiver: String,
}
