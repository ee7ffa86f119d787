//! Lenient number parsing for values typed into free-text fields.
//!
//! None of these fail: anything that does not look like a number yields
//! `None`, and the caller treats that as "not provided".

/// The first run of ASCII digits anywhere in `text`, saturating at
/// `u32::MAX`. `"86 anos"` → 86, `"idade: 3 meses"` → 3.
pub fn first_digit_run(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let value = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .fold(0u32, |acc, c| {
            acc.saturating_mul(10)
                .saturating_add(c.to_digit(10).unwrap_or(0))
        });
    Some(value)
}

/// Integer prefix after optional leading whitespace and sign, ignoring any
/// trailing garbage. `"150bpm"` → 150, `"94.5"` → 94, `"abc"` → `None`.
pub fn leading_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Decimal prefix after optional leading whitespace and sign. Both `.` and
/// `,` are accepted as the decimal separator. `"37,8 °C"` → 37.8.
pub fn leading_decimal(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_separator = false;
    for (i, c) in s.char_indices() {
        match c {
            '-' | '+' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' | ',' if !seen_separator => seen_separator = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    let candidate = s[..end].replace(',', ".");
    let candidate = candidate.trim_end_matches('.');
    candidate.parse::<f64>().ok()
}
