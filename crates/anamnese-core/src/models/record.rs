use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::patient::{PatientIdentification, PatientType, PediatricSubType};
use super::risk::{CardiovascularRisk, FrailtyAssessment, RiskAssessments};
use super::soap::SoapData;

/// The single document the intake wizard fills in and the summary renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalRecord {
    pub record_id: Uuid,
    pub created_at: jiff::Timestamp,
    pub patient_type: PatientType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pediatric_sub_type: Option<PediatricSubType>,
    pub identification: PatientIdentification,
    /// QD.
    pub chief_complaint: String,
    /// HMA.
    pub present_illness: String,
    pub systems_review: SystemsReview,
    pub antecedents: Antecedents,
    pub physical_exam: PhysicalExam,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soap: Option<SoapData>,
    #[serde(default)]
    pub risk_assessments: RiskAssessments,
    pub diagnostic_hypothesis: String,
    pub risk_factors: String,
    pub plan_of_care: String,
}

impl ClinicalRecord {
    /// Blank record for a new intake. SOAP records get an initialized note.
    pub fn new(patient_type: PatientType, pediatric_sub_type: Option<PediatricSubType>) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            created_at: jiff::Timestamp::now(),
            patient_type,
            pediatric_sub_type: pediatric_sub_type
                .filter(|_| patient_type == PatientType::Pediatric),
            identification: PatientIdentification::default(),
            chief_complaint: String::new(),
            present_illness: String::new(),
            systems_review: SystemsReview::default(),
            antecedents: Antecedents::default(),
            physical_exam: PhysicalExam::default(),
            soap: (patient_type == PatientType::Soap).then(SoapData::default),
            risk_assessments: RiskAssessments::default(),
            diagnostic_hypothesis: String::new(),
            risk_factors: String::new(),
            plan_of_care: String::new(),
        }
    }

    pub fn age_text(&self) -> &str {
        &self.identification.age
    }

    /// Store an applied IVCF-20 result. Used by both the antecedents and the
    /// SOAP subjective entry paths.
    pub fn record_frailty(&mut self, assessment: FrailtyAssessment) {
        self.risk_assessments.frailty = Some(assessment);
    }

    pub fn clear_frailty(&mut self) {
        self.risk_assessments.frailty = None;
    }

    pub fn record_cardiovascular_risk(&mut self, risk: CardiovascularRisk) {
        self.risk_assessments.cardiovascular = Some(risk);
    }

    pub fn clear_cardiovascular_risk(&mut self) {
        self.risk_assessments.cardiovascular = None;
    }
}

/// ISDA: interrogatory of the body systems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SystemsReview {
    pub general: String,
    pub head_and_neck: String,
    pub thorax: String,
    pub abdomen: String,
    pub genitourinary: String,
    pub musculoskeletal: String,
    pub nervous: String,
    #[serde(default)]
    pub growth: String,
    #[serde(default)]
    pub cognitive: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Antecedents {
    pub physiological: String,
    pub pathological: String,
    pub family: String,
    pub habits: String,
    pub psychosocial: String,
    // Pediatric
    #[serde(default)]
    pub gestational: String,
    #[serde(default)]
    pub neonatal: String,
    #[serde(default)]
    pub development: String,
    #[serde(default)]
    pub vaccination: String,
    // Geriatric
    #[serde(default)]
    pub functionality: String,
    #[serde(default)]
    pub polypharmacy: String,
}

/// Raw vital signs exactly as typed. Every field may be empty; parsing is the
/// interpreter's job and never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalSigns {
    /// "systolic/diastolic", mmHg.
    pub blood_pressure: String,
    /// bpm.
    pub heart_rate: String,
    /// Breaths per minute.
    pub respiratory_rate: String,
    /// °C.
    pub temperature: String,
    /// SpO2 %.
    pub saturation: String,
    /// kg.
    #[serde(default)]
    pub weight: String,
    /// cm.
    #[serde(default)]
    pub height: String,
    /// cm, pediatric only.
    #[serde(default)]
    pub head_circumference: String,
    /// kg/m², derived from weight and height.
    #[serde(default)]
    pub bmi: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PhysicalExam {
    pub general: String,
    pub vital_signs: VitalSigns,
    pub skin_and_appendages: String,
    pub head_and_neck: String,
    pub respiratory: String,
    pub cardiovascular: String,
    pub abdomen: String,
    pub genitourinary: String,
    pub musculoskeletal: String,
    pub extremities: String,
    pub neurological: String,
    #[serde(default)]
    pub fontanelles: String,
}

/// Free-text regions of the physical exam, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExamRegion {
    General,
    SkinAndAppendages,
    HeadAndNeck,
    Respiratory,
    Cardiovascular,
    Abdomen,
    Genitourinary,
    Musculoskeletal,
    Extremities,
    Neurological,
    Fontanelles,
}

impl ExamRegion {
    pub const ALL: [ExamRegion; 11] = [
        ExamRegion::General,
        ExamRegion::SkinAndAppendages,
        ExamRegion::HeadAndNeck,
        ExamRegion::Respiratory,
        ExamRegion::Cardiovascular,
        ExamRegion::Abdomen,
        ExamRegion::Genitourinary,
        ExamRegion::Musculoskeletal,
        ExamRegion::Extremities,
        ExamRegion::Neurological,
        ExamRegion::Fontanelles,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExamRegion::General => "General appearance",
            ExamRegion::SkinAndAppendages => "Skin and appendages",
            ExamRegion::HeadAndNeck => "Head and neck",
            ExamRegion::Respiratory => "Respiratory",
            ExamRegion::Cardiovascular => "Cardiovascular",
            ExamRegion::Abdomen => "Abdomen",
            ExamRegion::Genitourinary => "Genitourinary",
            ExamRegion::Musculoskeletal => "Musculoskeletal",
            ExamRegion::Extremities => "Extremities",
            ExamRegion::Neurological => "Neurological",
            ExamRegion::Fontanelles => "Fontanelles",
        }
    }
}

impl PhysicalExam {
    pub fn region(&self, region: ExamRegion) -> &str {
        match region {
            ExamRegion::General => &self.general,
            ExamRegion::SkinAndAppendages => &self.skin_and_appendages,
            ExamRegion::HeadAndNeck => &self.head_and_neck,
            ExamRegion::Respiratory => &self.respiratory,
            ExamRegion::Cardiovascular => &self.cardiovascular,
            ExamRegion::Abdomen => &self.abdomen,
            ExamRegion::Genitourinary => &self.genitourinary,
            ExamRegion::Musculoskeletal => &self.musculoskeletal,
            ExamRegion::Extremities => &self.extremities,
            ExamRegion::Neurological => &self.neurological,
            ExamRegion::Fontanelles => &self.fontanelles,
        }
    }

    /// Regions with any non-blank text, in print order.
    pub fn regions(&self) -> Vec<(ExamRegion, &str)> {
        ExamRegion::ALL
            .iter()
            .map(|&r| (r, self.region(r).trim()))
            .filter(|(_, text)| !text.is_empty())
            .collect()
    }
}
