//! What each subcommand does to the draft. Printing is left to `main`.

use anamnese_core::models::patient::{PatientIdentification, PatientType, PediatricSubType};
use anamnese_core::models::record::{ClinicalRecord, VitalSigns};
use anamnese_export::docx::generate_docx;
use anamnese_export::styles::DocumentStyles;
use anamnese_export::{render_summary, SummaryContext, DEFAULT_SUMMARY_TEMPLATE};
use anamnese_instruments::instruments::ivcf20::FrailtyResult;
use anamnese_instruments::scoring::QuestionId;
use anamnese_instruments::wizard::{Ivcf20Session, WizardStep};
use anamnese_storage::DraftStore;
use anamnese_vitals::{
    classify_adult_bmi, fill_derived_bmi, growth_z_scores, interpret_vital_signs,
    months_to_years, parse_age_to_months, GrowthZScores, Interpretation, VitalsInterpretation,
};

fn load_draft(store: &dyn DraftStore) -> eyre::Result<ClinicalRecord> {
    store
        .load()?
        .ok_or_else(|| eyre::eyre!("no draft found; start one with `anamnese new`"))
}

/// Start a blank record, replacing any existing draft.
pub fn new_draft(
    store: &dyn DraftStore,
    patient_type: PatientType,
    sub_type: Option<PediatricSubType>,
) -> eyre::Result<ClinicalRecord> {
    if sub_type.is_some() && patient_type != PatientType::Pediatric {
        tracing::warn!(%patient_type, "sub-type only applies to pediatric records; ignored");
    }
    let record = ClinicalRecord::new(patient_type, sub_type);
    store.save(&record)?;
    tracing::info!(record_id = %record.record_id, %patient_type, "draft started");
    Ok(record)
}

/// Identification fields. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct IdentificationUpdate {
    pub name: Option<String>,
    /// As typed: "86 anos", "3 meses", "45 dias".
    pub age: Option<String>,
    pub sex: Option<String>,
    pub color: Option<String>,
    pub marital_status: Option<String>,
    pub occupation: Option<String>,
    pub birthplace: Option<String>,
    pub residence: Option<String>,
    pub guardian: Option<String>,
    pub schooling: Option<String>,
    pub caregiver: Option<String>,
}

impl IdentificationUpdate {
    fn apply_to(self, identification: &mut PatientIdentification) {
        let fields = [
            (self.name, &mut identification.name),
            (self.age, &mut identification.age),
            (self.sex, &mut identification.sex),
            (self.color, &mut identification.color),
            (self.marital_status, &mut identification.marital_status),
            (self.occupation, &mut identification.occupation),
            (self.birthplace, &mut identification.birthplace),
            (self.residence, &mut identification.residence),
            (self.guardian, &mut identification.guardian),
            (self.schooling, &mut identification.schooling),
            (self.caregiver, &mut identification.caregiver),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

/// Merge identification fields into the draft. The age text drives the
/// vital-sign bands, the BMI table, the z-scores and the IVCF-20 age seed.
pub fn identify(
    store: &dyn DraftStore,
    update: IdentificationUpdate,
) -> eyre::Result<PatientIdentification> {
    let mut record = load_draft(store)?;
    update.apply_to(&mut record.identification);
    store.save(&record)?;

    let age_months = parse_age_to_months(record.age_text());
    tracing::info!(record_id = %record.record_id, age_months, "identification updated");
    Ok(record.identification)
}

/// Typed vital-sign values. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct VitalsUpdate {
    pub blood_pressure: Option<String>,
    pub heart_rate: Option<String>,
    pub respiratory_rate: Option<String>,
    pub temperature: Option<String>,
    pub saturation: Option<String>,
    pub weight: Option<String>,
    pub height: Option<String>,
    pub head_circumference: Option<String>,
}

impl VitalsUpdate {
    fn apply_to(self, vitals: &mut VitalSigns) {
        let fields = [
            (self.blood_pressure, &mut vitals.blood_pressure),
            (self.heart_rate, &mut vitals.heart_rate),
            (self.respiratory_rate, &mut vitals.respiratory_rate),
            (self.temperature, &mut vitals.temperature),
            (self.saturation, &mut vitals.saturation),
            (self.weight, &mut vitals.weight),
            (self.height, &mut vitals.height),
            (self.head_circumference, &mut vitals.head_circumference),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

/// Interpretations shown after the vitals are saved.
#[derive(Debug, Clone)]
pub struct VitalsReport {
    pub vitals: VitalSigns,
    pub interpretation: VitalsInterpretation,
    /// Adult and geriatric records only.
    pub bmi: Option<Interpretation>,
    /// Pediatric records only.
    pub growth: Option<GrowthZScores>,
}

pub fn update_vitals(store: &dyn DraftStore, update: VitalsUpdate) -> eyre::Result<VitalsReport> {
    let mut record = load_draft(store)?;
    let vitals = &mut record.physical_exam.vital_signs;
    update.apply_to(vitals);
    fill_derived_bmi(vitals);
    let vitals = vitals.clone();
    store.save(&record)?;

    let age_months = parse_age_to_months(record.age_text());
    let is_pediatric = record.patient_type == PatientType::Pediatric;
    let bmi = vitals.bmi.parse::<f64>().ok();

    Ok(VitalsReport {
        interpretation: interpret_vital_signs(&vitals, age_months, record.patient_type),
        bmi: bmi
            .filter(|_| !is_pediatric)
            .map(|bmi| classify_adult_bmi(bmi, months_to_years(age_months))),
        growth: is_pediatric
            .then(|| growth_z_scores(&vitals, age_months, &record.identification.sex)),
        vitals,
    })
}

/// Answer the IVCF-20 page by page, apply it, and store the result on the
/// record. Items not given keep their defaults: q1 is seeded from the age
/// text, every other item is 0.
pub fn run_ivcf20(
    store: &dyn DraftStore,
    answers: &[(QuestionId, u8)],
) -> eyre::Result<FrailtyResult> {
    let mut record = load_draft(store)?;
    if !matches!(record.patient_type, PatientType::Geriatric | PatientType::Soap) {
        tracing::warn!(patient_type = %record.patient_type, "IVCF-20 is meant for older adults");
    }

    let mut session = Ivcf20Session::open(record.age_text());
    while session.current_step() != WizardStep::Result {
        for &question in session.current_step().questions() {
            if let Some(&(_, points)) = answers.iter().rev().find(|(q, _)| *q == question) {
                session.set_answer(question, points)?;
            }
        }
        session.next();
    }

    let result = session.apply();
    record.record_frailty(result.clone().into_assessment());
    store.save(&record)?;
    tracing::info!(score = result.total_score, level = %result.level, "IVCF-20 applied");
    Ok(result)
}

/// Render the summary with the built-in layout or a custom Tera template.
pub fn render(store: &dyn DraftStore, template: Option<&str>) -> eyre::Result<String> {
    let record = load_draft(store)?;
    let context = SummaryContext::from_record(&record);
    let (name, source) = match template {
        Some(source) => ("custom.md", source),
        None => ("summary.md", DEFAULT_SUMMARY_TEMPLATE),
    };
    Ok(render_summary(name, source, &context)?)
}

pub fn render_docx(rendered: &str) -> eyre::Result<Vec<u8>> {
    Ok(generate_docx(rendered, &DocumentStyles::default())?)
}

pub fn show(store: &dyn DraftStore) -> eyre::Result<String> {
    let record = load_draft(store)?;
    Ok(serde_json::to_string_pretty(&record)?)
}

pub fn clear(store: &dyn DraftStore) -> eyre::Result<()> {
    store.clear()?;
    Ok(())
}

/// Parse `q6=6` style answers.
pub fn parse_answer(s: &str) -> Result<(QuestionId, u8), String> {
    let (question, points) = s
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=POINTS, got {s:?}"))?;
    let question: QuestionId = question.parse().map_err(|e| format!("{e}"))?;
    let points: u8 = points
        .trim()
        .parse()
        .map_err(|_| format!("points must be a small whole number, got {points:?}"))?;
    Ok((question, points))
}
