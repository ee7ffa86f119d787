use anamnese_core::draft_keys;
use anamnese_core::models::patient::{PatientType, PediatricSubType};
use anamnese_core::models::record::{ClinicalRecord, ExamRegion};
use anamnese_core::models::risk::{CardiovascularRisk, FrailtyAssessment, FrailtyLevel, RiskLevel};

#[test]
fn new_soap_record_starts_with_linked_plan() {
    let record = ClinicalRecord::new(PatientType::Soap, None);
    let soap = record.soap.as_ref().expect("soap note initialized");

    assert_eq!(soap.assessments.len(), 1);
    assert_eq!(soap.assessments[0].id, "1");
    assert_eq!(soap.plans_for("1").len(), 1);
    assert!(soap.plans_for("2").is_empty());
}

#[test]
fn non_soap_records_have_no_note() {
    let record = ClinicalRecord::new(PatientType::Adult, None);
    assert!(record.soap.is_none());
}

#[test]
fn sub_type_only_kept_for_pediatric_records() {
    let child = ClinicalRecord::new(PatientType::Pediatric, Some(PediatricSubType::Infant));
    assert_eq!(child.pediatric_sub_type, Some(PediatricSubType::Infant));

    let adult = ClinicalRecord::new(PatientType::Adult, Some(PediatricSubType::Infant));
    assert_eq!(adult.pediatric_sub_type, None);
}

#[test]
fn risk_scores_live_in_one_slot() {
    let mut record = ClinicalRecord::new(PatientType::Soap, None);
    record.record_frailty(FrailtyAssessment {
        score: 9,
        result_text: "Moderate".to_string(),
        level: FrailtyLevel::Moderate,
    });
    record.record_cardiovascular_risk(CardiovascularRisk {
        summary: "High 10-year risk".to_string(),
        level: RiskLevel::High,
    });

    assert_eq!(record.risk_assessments.frailty.as_ref().map(|f| f.score), Some(9));
    assert_eq!(
        record.risk_assessments.cardiovascular.as_ref().map(|c| c.level),
        Some(RiskLevel::High)
    );

    record.clear_frailty();
    assert!(record.risk_assessments.frailty.is_none());
}

#[test]
fn record_survives_json() {
    let mut record = ClinicalRecord::new(PatientType::Geriatric, None);
    record.identification.age = "86 anos".to_string();
    record.physical_exam.vital_signs.blood_pressure = "150/90".to_string();

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"patient_type\":\"GERIATRIC\""));

    let back: ClinicalRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn exam_regions_skip_blank_text() {
    let mut record = ClinicalRecord::new(PatientType::Adult, None);
    record.physical_exam.general = "Good general state".to_string();
    record.physical_exam.abdomen = "   ".to_string();
    record.physical_exam.neurological = "No focal deficits".to_string();

    let regions = record.physical_exam.regions();
    assert_eq!(
        regions,
        vec![
            (ExamRegion::General, "Good general state"),
            (ExamRegion::Neurological, "No focal deficits"),
        ]
    );
}

#[test]
fn patient_type_parses_case_insensitively() {
    assert_eq!("pediatric".parse::<PatientType>().unwrap(), PatientType::Pediatric);
    assert_eq!("SOAP".parse::<PatientType>().unwrap(), PatientType::Soap);
    assert!("veterinary".parse::<PatientType>().is_err());
    assert_eq!(
        "pre-school".parse::<PediatricSubType>().unwrap(),
        PediatricSubType::PreSchool
    );
}

#[test]
fn draft_keys_are_confined() {
    assert_eq!(draft_keys::draft("medhist_draft_v4"), "drafts/medhist_draft_v4.json");
    assert!(draft_keys::is_valid_key("ward-3_bed12"));
    assert!(!draft_keys::is_valid_key("../etc/passwd"));
    assert!(!draft_keys::is_valid_key(""));
}

mod numeric {
    use anamnese_core::numeric::{first_digit_run, leading_decimal, leading_int};

    #[test]
    fn first_digit_run_skips_prefix_text() {
        assert_eq!(first_digit_run("idade: 86 anos"), Some(86));
        assert_eq!(first_digit_run("2 anos e 3 meses"), Some(2));
        assert_eq!(first_digit_run("sem idade"), None);
        assert_eq!(first_digit_run(""), None);
        assert_eq!(first_digit_run("99999999999999"), Some(u32::MAX));
    }

    #[test]
    fn leading_int_behaves_like_a_prefix_parse() {
        assert_eq!(leading_int("150"), Some(150));
        assert_eq!(leading_int(" 150bpm"), Some(150));
        assert_eq!(leading_int("94.5"), Some(94));
        assert_eq!(leading_int("-5"), Some(-5));
        assert_eq!(leading_int("bpm 150"), None);
        assert_eq!(leading_int("-"), None);
    }

    #[test]
    fn leading_decimal_accepts_comma() {
        assert_eq!(leading_decimal("38.5"), Some(38.5));
        assert_eq!(leading_decimal("37,8 °C"), Some(37.8));
        assert_eq!(leading_decimal("36."), Some(36.0));
        assert_eq!(leading_decimal("1.2.3"), Some(1.2));
        assert_eq!(leading_decimal("."), None);
        assert_eq!(leading_decimal("febril"), None);
    }
}
