//! Everything the summary template reads, derived from a [`ClinicalRecord`].
//!
//! Interpretations are computed here rather than in the template so every
//! renderer (text, DOCX, a custom template) shows the same labels.

use serde::Serialize;

use anamnese_core::models::patient::{PatientIdentification, PatientType, PediatricSubType};
use anamnese_core::models::record::{ClinicalRecord, VitalSigns};
use anamnese_core::models::risk::{CardiovascularRisk, FrailtyAssessment};
use anamnese_core::models::soap::{SoapPlanCategory, SoapSubjective};
use anamnese_core::numeric::leading_decimal;
use anamnese_vitals::{
    classify_adult_bmi, fill_derived_bmi, growth_z_scores, interpret_vital_signs,
    months_to_years, parse_age_to_months, z_score_color, ColorTag, Interpretation, VitalSign,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledText {
    pub label: &'static str,
    pub text: String,
}

/// One vital sign as printed: the typed value with its unit, and the label
/// it was interpreted as (empty when it could not be read).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalLine {
    pub label: &'static str,
    pub value: String,
    pub interpretation: Interpretation,
}

/// An anthropometric measurement, with its z-score for pediatric records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasureLine {
    pub label: &'static str,
    pub value: String,
    pub z_score: Option<String>,
    pub color: ColorTag,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoapPlanLine {
    pub category: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoapProblem {
    pub id: String,
    pub text: String,
    pub plans: Vec<SoapPlanLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoapSummary {
    pub subjective: Vec<LabeledText>,
    pub objective: String,
    pub problems: Vec<SoapProblem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryContext {
    pub generated_on: String,
    pub patient_type: &'static str,
    pub pediatric_sub_type: Option<&'static str>,
    pub is_pediatric: bool,
    pub identification: PatientIdentification,
    pub age_months: u32,
    pub age_years: u32,
    pub chief_complaint: String,
    pub present_illness: String,
    pub systems_review: Vec<LabeledText>,
    pub antecedents: Vec<LabeledText>,
    pub vitals: Vec<VitalLine>,
    pub anthropometry: Vec<MeasureLine>,
    pub exam: Vec<LabeledText>,
    pub soap: Option<SoapSummary>,
    pub frailty: Option<FrailtyAssessment>,
    pub cardiovascular: Option<CardiovascularRisk>,
    pub diagnostic_hypothesis: String,
    pub risk_factors: String,
    pub plan_of_care: String,
}

impl SummaryContext {
    pub fn from_record(record: &ClinicalRecord) -> Self {
        let age_months = parse_age_to_months(record.age_text());
        let is_pediatric = record.patient_type == PatientType::Pediatric;

        let mut vital_signs = record.physical_exam.vital_signs.clone();
        if vital_signs.bmi.trim().is_empty() {
            fill_derived_bmi(&mut vital_signs);
        }

        Self {
            generated_on: jiff::Zoned::now().date().to_string(),
            patient_type: patient_type_label(record.patient_type),
            pediatric_sub_type: record.pediatric_sub_type.map(sub_type_label),
            is_pediatric,
            identification: record.identification.clone(),
            age_months,
            age_years: age_months / 12,
            chief_complaint: record.chief_complaint.trim().to_string(),
            present_illness: record.present_illness.trim().to_string(),
            systems_review: systems_review(record),
            antecedents: antecedents(record),
            vitals: vital_lines(&vital_signs, age_months, record.patient_type),
            anthropometry: anthropometry(
                &vital_signs,
                age_months,
                is_pediatric,
                &record.identification.sex,
            ),
            exam: record
                .physical_exam
                .regions()
                .into_iter()
                .map(|(region, text)| LabeledText {
                    label: region.label(),
                    text: text.to_string(),
                })
                .collect(),
            soap: record.soap.as_ref().map(|soap| SoapSummary {
                subjective: soap_subjective(&soap.subjective),
                objective: soap.objective.trim().to_string(),
                problems: soap
                    .assessments
                    .iter()
                    .filter(|a| !a.text.trim().is_empty())
                    .map(|a| SoapProblem {
                        id: a.id.clone(),
                        text: a.text.trim().to_string(),
                        plans: soap
                            .plans_for(&a.id)
                            .into_iter()
                            .filter(|p| !p.text.trim().is_empty())
                            .map(|p| SoapPlanLine {
                                category: plan_category_label(p.category),
                                text: p.text.trim().to_string(),
                            })
                            .collect(),
                    })
                    .collect(),
            }),
            frailty: record.risk_assessments.frailty.clone(),
            cardiovascular: record.risk_assessments.cardiovascular.clone(),
            diagnostic_hypothesis: record.diagnostic_hypothesis.trim().to_string(),
            risk_factors: record.risk_factors.trim().to_string(),
            plan_of_care: record.plan_of_care.trim().to_string(),
        }
    }
}

fn patient_type_label(patient_type: PatientType) -> &'static str {
    match patient_type {
        PatientType::Adult => "Adult",
        PatientType::Pediatric => "Pediatric",
        PatientType::Geriatric => "Geriatric",
        PatientType::Soap => "SOAP note",
    }
}

fn sub_type_label(sub_type: PediatricSubType) -> &'static str {
    match sub_type {
        PediatricSubType::Neonate => "Neonate",
        PediatricSubType::Infant => "Infant",
        PediatricSubType::PreSchool => "Preschool",
        PediatricSubType::School => "School age",
        PediatricSubType::Adolescent => "Adolescent",
    }
}

fn plan_category_label(category: SoapPlanCategory) -> &'static str {
    match category {
        SoapPlanCategory::Diagnostic => "Diagnostic",
        SoapPlanCategory::Therapeutic => "Therapeutic",
        SoapPlanCategory::FollowUp => "Follow-up",
        SoapPlanCategory::Education => "Education",
        SoapPlanCategory::Administrative => "Administrative",
    }
}

/// Keep only the entries with text, trimmed, in the given order.
fn labeled(entries: &[(&'static str, &String)]) -> Vec<LabeledText> {
    entries
        .iter()
        .map(|(label, text)| (*label, text.trim()))
        .filter(|(_, text)| !text.is_empty())
        .map(|(label, text)| LabeledText {
            label,
            text: text.to_string(),
        })
        .collect()
}

fn systems_review(record: &ClinicalRecord) -> Vec<LabeledText> {
    let r = &record.systems_review;
    labeled(&[
        ("General", &r.general),
        ("Head and neck", &r.head_and_neck),
        ("Thorax", &r.thorax),
        ("Abdomen", &r.abdomen),
        ("Genitourinary", &r.genitourinary),
        ("Musculoskeletal", &r.musculoskeletal),
        ("Nervous system", &r.nervous),
        ("Growth", &r.growth),
        ("Cognition", &r.cognitive),
    ])
}

fn antecedents(record: &ClinicalRecord) -> Vec<LabeledText> {
    let a = &record.antecedents;
    labeled(&[
        ("Physiological", &a.physiological),
        ("Gestational", &a.gestational),
        ("Neonatal", &a.neonatal),
        ("Development", &a.development),
        ("Vaccination", &a.vaccination),
        ("Pathological", &a.pathological),
        ("Family", &a.family),
        ("Habits", &a.habits),
        ("Psychosocial", &a.psychosocial),
        ("Functionality", &a.functionality),
        ("Polypharmacy", &a.polypharmacy),
    ])
}

fn soap_subjective(s: &SoapSubjective) -> Vec<LabeledText> {
    labeled(&[
        ("Identification", &s.identification),
        ("Complaint and history", &s.complaint_and_history),
        ("Systems review", &s.systems_review),
        ("Physiological history", &s.physiological_history),
        ("Pathological history", &s.pathological_history),
        ("Medications", &s.medications),
        ("Family history", &s.family_history),
        ("Habits", &s.habits),
        ("Socioeconomic", &s.socioeconomic),
        ("Vaccination", &s.vaccination),
    ])
}

fn with_unit(raw: &str, unit: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        "--".to_string()
    } else {
        format!("{raw} {unit}")
    }
}

/// The five interpreted signs, then BMI. BMI is not classified for
/// pediatric records; children are read from the growth z-scores instead.
fn vital_lines(vitals: &VitalSigns, age_months: u32, patient_type: PatientType) -> Vec<VitalLine> {
    let interpretation = interpret_vital_signs(vitals, age_months, patient_type);

    let mut lines: Vec<VitalLine> = VitalSign::ALL
        .iter()
        .map(|&sign| VitalLine {
            label: sign.label(),
            value: with_unit(sign.raw(vitals), sign.unit()),
            interpretation: interpretation.get(sign).clone(),
        })
        .collect();

    let bmi_interpretation = if patient_type == PatientType::Pediatric {
        Interpretation::empty()
    } else {
        classify_adult_bmi(
            leading_decimal(&vitals.bmi).unwrap_or(0.0),
            months_to_years(age_months),
        )
    };
    lines.push(VitalLine {
        label: "BMI",
        value: with_unit(&vitals.bmi, "kg/m²"),
        interpretation: bmi_interpretation,
    });
    lines
}

fn anthropometry(
    vitals: &VitalSigns,
    age_months: u32,
    is_pediatric: bool,
    sex: &str,
) -> Vec<MeasureLine> {
    let z = is_pediatric.then(|| growth_z_scores(vitals, age_months, sex));
    let line = |label, raw: &str, unit, z_score: Option<String>| MeasureLine {
        label,
        value: with_unit(raw, unit),
        color: z_score_color(z_score.as_deref()),
        z_score,
    };

    let mut lines = vec![
        line("Weight", &vitals.weight, "kg", z.as_ref().and_then(|z| z.weight.clone())),
        line("Height", &vitals.height, "cm", z.as_ref().and_then(|z| z.height.clone())),
    ];
    if is_pediatric {
        lines.push(line(
            "Head circumference",
            &vitals.head_circumference,
            "cm",
            z.as_ref().and_then(|z| z.head_circumference.clone()),
        ));
    }
    lines
}
