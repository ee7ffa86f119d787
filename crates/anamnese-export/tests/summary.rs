use anamnese_core::models::patient::{PatientType, PediatricSubType};
use anamnese_core::models::record::ClinicalRecord;
use anamnese_core::models::risk::{CardiovascularRisk, FrailtyAssessment, FrailtyLevel, RiskLevel};
use anamnese_core::models::soap::SoapAssessmentItem;
use anamnese_export::error::ExportError;
use anamnese_export::{render_summary, SummaryContext, DEFAULT_SUMMARY_TEMPLATE};
use anamnese_vitals::ColorTag;

fn adult_record() -> ClinicalRecord {
    let mut record = ClinicalRecord::new(PatientType::Adult, None);
    record.identification.name = "João Silva".to_string();
    record.identification.age = "40 anos".to_string();
    record.identification.sex = "Masculino".to_string();
    record.chief_complaint = "Dor torácica".to_string();
    record.present_illness = "Dor há 2 dias.".to_string();
    record.systems_review.thorax = "  Nega dispneia ".to_string();
    let vitals = &mut record.physical_exam.vital_signs;
    vitals.blood_pressure = "150/95".to_string();
    vitals.heart_rate = "80".to_string();
    vitals.temperature = "38.5".to_string();
    vitals.weight = "70".to_string();
    vitals.height = "175".to_string();
    record.physical_exam.cardiovascular = "RCR 2T BNF".to_string();
    record.plan_of_care = "ECG".to_string();
    record
}

fn render(record: &ClinicalRecord) -> String {
    let context = SummaryContext::from_record(record);
    render_summary("summary.md", DEFAULT_SUMMARY_TEMPLATE, &context).unwrap()
}

#[test]
fn context_derives_ages_and_interpretations() {
    let context = SummaryContext::from_record(&adult_record());

    assert_eq!(context.age_months, 480);
    assert_eq!(context.age_years, 40);
    assert_eq!(context.patient_type, "Adult");

    let label = |name: &str| {
        context
            .vitals
            .iter()
            .find(|l| l.label == name)
            .map(|l| l.interpretation.label.clone())
            .unwrap()
    };
    assert_eq!(label("BP"), "Hypertensive");
    assert_eq!(label("HR"), "Normocardia");
    assert_eq!(label("Temp"), "Febrile");
    assert_eq!(label("RR"), "");
    assert_eq!(label("BMI"), "Normal");
}

#[test]
fn context_lists_only_filled_sections() {
    let context = SummaryContext::from_record(&adult_record());

    assert_eq!(context.systems_review.len(), 1);
    assert_eq!(context.systems_review[0].label, "Thorax");
    assert_eq!(context.systems_review[0].text, "Nega dispneia");
    assert!(context.antecedents.is_empty());
    assert_eq!(context.exam.len(), 1);
    assert_eq!(context.exam[0].label, "Cardiovascular");
}

#[test]
fn pediatric_context_uses_z_scores_not_bmi_bands() {
    let mut record = ClinicalRecord::new(PatientType::Pediatric, Some(PediatricSubType::Infant));
    record.identification.age = "6 meses".to_string();
    record.physical_exam.vital_signs.heart_rate = "150".to_string();
    record.physical_exam.vital_signs.weight = "7.9".to_string();
    record.physical_exam.vital_signs.height = "67".to_string();
    record.physical_exam.vital_signs.head_circumference = "43".to_string();

    let context = SummaryContext::from_record(&record);

    assert_eq!(context.pediatric_sub_type, Some("Infant"));
    let bmi = context.vitals.iter().find(|l| l.label == "BMI").unwrap();
    assert!(bmi.interpretation.is_empty());
    let hr = context.vitals.iter().find(|l| l.label == "HR").unwrap();
    assert_eq!(hr.interpretation.label, "Tachycardia");

    assert_eq!(context.anthropometry.len(), 3);
    for line in &context.anthropometry {
        assert!(line.z_score.is_some(), "{}", line.label);
        assert_ne!(line.color, ColorTag::Neutral);
    }
}

#[test]
fn adult_context_has_no_z_scores() {
    let context = SummaryContext::from_record(&adult_record());
    assert_eq!(context.anthropometry.len(), 2);
    assert!(context.anthropometry.iter().all(|l| l.z_score.is_none()));
}

#[test]
fn summary_has_every_section() {
    let text = render(&adult_record());

    for heading in [
        "# Clinical Record",
        "## Identification",
        "## History",
        "## Vital Signs and Anthropometry",
        "## Physical Exam",
        "## Plan of Care",
        "## Signatures",
    ] {
        assert!(text.contains(heading), "missing {heading}");
    }
    assert!(text.contains("- **Name:** João Silva"));
    assert!(text.contains("- **BP:** 150/95 mmHg (Hypertensive)"));
    assert!(text.contains("- **Temp:** 38.5 °C (Febrile)"));
    assert!(text.contains("- **BMI:** 22.9 kg/m² (Normal)"));
    assert!(text.contains("- **RR:** --"));
    assert!(text.contains("- **Cardiovascular:** RCR 2T BNF"));
    assert!(text.contains("- **Thorax:** Nega dispneia"));
    assert!(!text.contains("## Risk Assessments"));
    assert!(!text.contains("## Subjective"));
}

#[test]
fn missing_fields_get_placeholders() {
    let text = render(&ClinicalRecord::new(PatientType::Adult, None));

    assert!(text.contains("- **Name:** N/A"));
    assert!(text.contains("Not reported."));
    assert!(text.contains("Pending."));
}

#[test]
fn risk_assessments_come_from_the_canonical_slot() {
    let mut record = adult_record();
    record.record_frailty(FrailtyAssessment {
        score: 9,
        result_text: "Moderate vulnerability".to_string(),
        level: FrailtyLevel::Moderate,
    });
    record.record_cardiovascular_risk(CardiovascularRisk {
        summary: "Diabetes with target-organ damage".to_string(),
        level: RiskLevel::VeryHigh,
    });

    let text = render(&record);

    assert!(text.contains("## Risk Assessments"));
    assert!(text.contains("- **IVCF-20:** 9 points, Moderate vulnerability"));
    assert!(text.contains("- **Cardiovascular risk (VERY HIGH):** Diabetes with target-organ damage"));
}

#[test]
fn soap_summary_lists_problems_with_their_plans() {
    let mut record = ClinicalRecord::new(PatientType::Soap, None);
    let soap = record.soap.as_mut().unwrap();
    soap.subjective.complaint_and_history = "Cefaleia há 3 dias".to_string();
    soap.objective = "PA 140/90".to_string();
    soap.assessments[0].text = "Cefaleia tensional".to_string();
    soap.plans[0].text = "Observação".to_string();
    soap.assessments.push(SoapAssessmentItem {
        id: "2".to_string(),
        text: String::new(),
    });

    let context = SummaryContext::from_record(&record);
    let summary = context.soap.as_ref().unwrap();
    assert_eq!(summary.problems.len(), 1);
    assert_eq!(summary.problems[0].plans[0].category, "Diagnostic");

    let text = render(&record);
    assert!(text.contains("## Subjective"));
    assert!(text.contains("- **Complaint and history:** Cefaleia há 3 dias"));
    assert!(text.contains("PA 140/90"));
    assert!(text.contains("### 1. Cefaleia tensional"));
    assert!(text.contains("- **Diagnostic:** Observação"));
    assert!(!text.contains("## History"));
}

#[test]
fn custom_templates_see_the_same_context() {
    let context = SummaryContext::from_record(&adult_record());
    let text = render_summary(
        "short.md",
        "{{ identification.name }}: {{ age_years }}y, {{ vitals | length }} signs",
        &context,
    )
    .unwrap();
    assert_eq!(text, "João Silva: 40y, 6 signs");
}

#[test]
fn broken_template_is_a_parse_error() {
    let context = SummaryContext::from_record(&adult_record());
    let result = render_summary("bad.md", "{% if %}", &context);
    assert!(matches!(result, Err(ExportError::TemplateParse(_))));
}

#[test]
fn unknown_variable_is_a_render_error() {
    let context = SummaryContext::from_record(&adult_record());
    let result = render_summary("bad.md", "{{ nope.nothing }}", &context);
    assert!(matches!(result, Err(ExportError::TemplateRender(_))));
}
