use anamnese_core::numeric::first_digit_run;

const DAYS_PER_MONTH: u32 = 30;

/// Normalize a free-text age ("5 anos", "3 meses", "28 dias") to whole
/// months.
///
/// The first run of digits is the quantity; the unit comes from the first
/// keyword found, checked in the order years, months, days. Text without a
/// unit keyword is taken as already being in months. No digits → 0.
pub fn parse_age_to_months(age_text: &str) -> u32 {
    let clean = age_text.to_lowercase();
    let Some(quantity) = first_digit_run(&clean) else {
        return 0;
    };

    if clean.contains("ano") || clean.contains("year") {
        quantity.saturating_mul(12)
    } else if clean.contains("mês") || clean.contains("mes") || clean.contains("month") {
        quantity
    } else if clean.contains("dia") || clean.contains("day") {
        quantity / DAYS_PER_MONTH
    } else {
        quantity
    }
}

/// Whole and fractional years for threshold tables keyed by age in years.
pub fn months_to_years(months: u32) -> f64 {
    f64::from(months) / 12.0
}
