use serde::{Deserialize, Serialize};
use ts_rs::TS;

use anamnese_core::models::patient::PatientType;
use anamnese_core::models::record::VitalSigns;
use anamnese_core::numeric::{leading_decimal, leading_int};

use crate::interpretation::{ColorTag, Interpretation};

/// Inclusive `[low, high]` normal interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub low: i64,
    pub high: i64,
}

impl Band {
    const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    fn place(&self, value: i64) -> Placement {
        if value < self.low {
            Placement::Below
        } else if value > self.high {
            Placement::Above
        } else {
            Placement::Within
        }
    }
}

enum Placement {
    Below,
    Within,
    Above,
}

/// Normal intervals for the age- and type-dependent signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceRanges {
    pub heart_rate: Band,
    pub respiratory_rate: Band,
    pub systolic_pressure: Band,
}

impl ReferenceRanges {
    const fn new(hr: (i64, i64), rr: (i64, i64), sbp: (i64, i64)) -> Self {
        Self {
            heart_rate: Band::new(hr.0, hr.1),
            respiratory_rate: Band::new(rr.0, rr.1),
            systolic_pressure: Band::new(sbp.0, sbp.1),
        }
    }
}

const NEWBORN: ReferenceRanges = ReferenceRanges::new((120, 160), (40, 60), (60, 90));
const INFANT: ReferenceRanges = ReferenceRanges::new((100, 140), (30, 45), (70, 100));
const PRESCHOOL: ReferenceRanges = ReferenceRanges::new((75, 115), (20, 30), (85, 120));
const SCHOOL_AGE: ReferenceRanges = ReferenceRanges::new((60, 100), (12, 20), (110, 130));
const GERIATRIC: ReferenceRanges = ReferenceRanges::new((60, 100), (14, 22), (90, 140));
const ADULT: ReferenceRanges = ReferenceRanges::new((60, 100), (12, 20), (90, 130));

/// Select the reference table. Pediatric bands are keyed by age with
/// inclusive upper bounds of 1, 12 and 72 months.
pub fn reference_ranges(age_months: u32, patient_type: PatientType) -> ReferenceRanges {
    match patient_type {
        PatientType::Pediatric => match age_months {
            0..=1 => NEWBORN,
            2..=12 => INFANT,
            13..=72 => PRESCHOOL,
            _ => SCHOOL_AGE,
        },
        PatientType::Geriatric => GERIATRIC,
        PatientType::Adult | PatientType::Soap => ADULT,
    }
}

/// The interpreted vital signs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VitalSign {
    BloodPressure,
    HeartRate,
    RespiratoryRate,
    Saturation,
    Temperature,
}

impl VitalSign {
    pub const ALL: [VitalSign; 5] = [
        VitalSign::BloodPressure,
        VitalSign::HeartRate,
        VitalSign::RespiratoryRate,
        VitalSign::Saturation,
        VitalSign::Temperature,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VitalSign::BloodPressure => "BP",
            VitalSign::HeartRate => "HR",
            VitalSign::RespiratoryRate => "RR",
            VitalSign::Saturation => "SpO2",
            VitalSign::Temperature => "Temp",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            VitalSign::BloodPressure => "mmHg",
            VitalSign::HeartRate => "bpm",
            VitalSign::RespiratoryRate => "rpm",
            VitalSign::Saturation => "%",
            VitalSign::Temperature => "°C",
        }
    }

    /// The raw typed value for this sign.
    pub fn raw<'a>(&self, vitals: &'a VitalSigns) -> &'a str {
        match self {
            VitalSign::BloodPressure => &vitals.blood_pressure,
            VitalSign::HeartRate => &vitals.heart_rate,
            VitalSign::RespiratoryRate => &vitals.respiratory_rate,
            VitalSign::Saturation => &vitals.saturation,
            VitalSign::Temperature => &vitals.temperature,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalsInterpretation {
    #[serde(rename = "fc")]
    pub heart_rate: Interpretation,
    #[serde(rename = "fr")]
    pub respiratory_rate: Interpretation,
    #[serde(rename = "pa")]
    pub blood_pressure: Interpretation,
    #[serde(rename = "sat")]
    pub saturation: Interpretation,
    #[serde(rename = "temp")]
    pub temperature: Interpretation,
}

impl VitalsInterpretation {
    pub fn get(&self, sign: VitalSign) -> &Interpretation {
        match sign {
            VitalSign::BloodPressure => &self.blood_pressure,
            VitalSign::HeartRate => &self.heart_rate,
            VitalSign::RespiratoryRate => &self.respiratory_rate,
            VitalSign::Saturation => &self.saturation,
            VitalSign::Temperature => &self.temperature,
        }
    }
}

/// Interpret every vital sign independently. A sign that is missing, zero,
/// negative or non-numeric gets an empty neutral interpretation; it never
/// affects the others.
pub fn interpret_vital_signs(
    vitals: &VitalSigns,
    age_months: u32,
    patient_type: PatientType,
) -> VitalsInterpretation {
    let ranges = reference_ranges(age_months, patient_type);

    VitalsInterpretation {
        heart_rate: positive_int(&vitals.heart_rate)
            .map(|fc| heart_rate(fc, ranges.heart_rate))
            .unwrap_or_default(),
        respiratory_rate: positive_int(&vitals.respiratory_rate)
            .map(|fr| respiratory_rate(fr, ranges.respiratory_rate))
            .unwrap_or_default(),
        blood_pressure: systolic_pressure(&vitals.blood_pressure)
            .map(|pas| blood_pressure(pas, ranges.systolic_pressure))
            .unwrap_or_default(),
        saturation: positive_int(&vitals.saturation)
            .map(saturation)
            .unwrap_or_default(),
        temperature: leading_decimal(&vitals.temperature)
            .filter(|t| *t > 0.0)
            .map(temperature)
            .unwrap_or_default(),
    }
}

fn positive_int(raw: &str) -> Option<i64> {
    leading_int(raw).filter(|v| *v > 0)
}

/// Systolic value of a "systolic/diastolic" reading. Without a slash there
/// is no reading.
fn systolic_pressure(raw: &str) -> Option<i64> {
    let (systolic, _) = raw.split_once('/')?;
    positive_int(systolic)
}

fn heart_rate(fc: i64, band: Band) -> Interpretation {
    match band.place(fc) {
        Placement::Below => Interpretation::new("Bradycardia", ColorTag::Danger),
        Placement::Above => Interpretation::new("Tachycardia", ColorTag::Danger),
        Placement::Within => Interpretation::new("Normocardia", ColorTag::Normal),
    }
}

fn respiratory_rate(fr: i64, band: Band) -> Interpretation {
    match band.place(fr) {
        Placement::Below => Interpretation::new("Bradypnea", ColorTag::Danger),
        Placement::Above => Interpretation::new("Tachypnea", ColorTag::Danger),
        Placement::Within => Interpretation::new("Eupnea", ColorTag::Normal),
    }
}

fn blood_pressure(pas: i64, band: Band) -> Interpretation {
    match band.place(pas) {
        Placement::Below => Interpretation::new("Hypotensive", ColorTag::Cold),
        Placement::Above => Interpretation::new("Hypertensive", ColorTag::Danger),
        Placement::Within => Interpretation::new("Normotensive", ColorTag::Normal),
    }
}

fn saturation(sat: i64) -> Interpretation {
    if sat < 92 {
        Interpretation::new("Severe hypoxemia", ColorTag::Danger)
    } else if sat < 95 {
        Interpretation::new("Hypoxemia", ColorTag::Warning)
    } else {
        Interpretation::new("Normal", ColorTag::Normal)
    }
}

fn temperature(temp: f64) -> Interpretation {
    if temp < 35.0 {
        Interpretation::new("Hypothermia", ColorTag::Cold)
    } else if temp <= 37.2 {
        Interpretation::new("Afebrile", ColorTag::Normal)
    } else if temp <= 37.7 {
        Interpretation::new("Subfebrile", ColorTag::Warning)
    } else {
        Interpretation::new("Febrile", ColorTag::Danger)
    }
}
