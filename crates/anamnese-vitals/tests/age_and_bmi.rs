use anamnese_core::models::record::VitalSigns;
use anamnese_vitals::{
    classify_adult_bmi, compute_bmi, fill_derived_bmi, format_bmi, parse_age_to_months, ColorTag,
};

#[test]
fn age_units() {
    assert_eq!(parse_age_to_months("5 anos"), 60);
    assert_eq!(parse_age_to_months("3 meses"), 3);
    assert_eq!(parse_age_to_months("1 mês"), 1);
    assert_eq!(parse_age_to_months("28 dias"), 0);
    assert_eq!(parse_age_to_months("45 dias"), 1);
    assert_eq!(parse_age_to_months("2 years"), 24);
    assert_eq!(parse_age_to_months("ANOS: 7"), 84);
}

#[test]
fn age_without_digits_or_unit() {
    assert_eq!(parse_age_to_months(""), 0);
    assert_eq!(parse_age_to_months("recém-nascido"), 0);
    assert_eq!(parse_age_to_months("18"), 18);
}

#[test]
fn age_uses_first_number_only() {
    assert_eq!(parse_age_to_months("2 anos e 3 meses"), 24);
}

#[test]
fn age_never_overflows() {
    assert_eq!(parse_age_to_months("99999999999 anos"), u32::MAX);
}

#[test]
fn elderly_bands() {
    assert_eq!(classify_adult_bmi(21.9, 65.0).label, "Underweight");
    assert_eq!(classify_adult_bmi(22.0, 65.0).label, "Normal");
    assert_eq!(classify_adult_bmi(26.0, 65.0).label, "Normal");
    assert_eq!(classify_adult_bmi(27.0, 65.0).label, "Normal");
    let over = classify_adult_bmi(27.1, 60.0);
    assert_eq!(over.label, "Overweight");
    assert_eq!(over.color, ColorTag::Warning);
}

#[test]
fn adult_bands() {
    assert_eq!(classify_adult_bmi(18.4, 30.0).label, "Underweight");
    assert_eq!(classify_adult_bmi(18.5, 30.0).label, "Normal");
    assert_eq!(classify_adult_bmi(26.0, 30.0).label, "Overweight");
    assert_eq!(classify_adult_bmi(30.0, 30.0).label, "Obesity I");
    assert_eq!(classify_adult_bmi(35.0, 30.0).color, ColorTag::Danger);
    assert_eq!(classify_adult_bmi(35.0, 30.0).label, "Obesity II");
    assert_eq!(classify_adult_bmi(40.0, 30.0).label, "Obesity III");
}

#[test]
fn non_positive_bmi_is_empty() {
    for bmi in [0.0, -3.0, f64::NAN] {
        let result = classify_adult_bmi(bmi, 40.0);
        assert!(result.is_empty());
        assert_eq!(result.color, ColorTag::Neutral);
    }
}

#[test]
fn derived_bmi_for_an_adult() {
    let mut vitals = VitalSigns {
        weight: "70".to_string(),
        height: "175".to_string(),
        ..VitalSigns::default()
    };
    assert!(fill_derived_bmi(&mut vitals));
    assert_eq!(vitals.bmi, "22.9");

    let bmi: f64 = vitals.bmi.parse().unwrap();
    assert_eq!(classify_adult_bmi(bmi, 40.0).label, "Normal");
}

#[test]
fn derived_bmi_needs_both_inputs() {
    let mut vitals = VitalSigns {
        weight: "70".to_string(),
        bmi: "old".to_string(),
        ..VitalSigns::default()
    };
    assert!(!fill_derived_bmi(&mut vitals));
    assert_eq!(vitals.bmi, "old");
    assert_eq!(compute_bmi(70.0, 0.0), None);
    assert_eq!(format_bmi(24.96), "25.0");
}
