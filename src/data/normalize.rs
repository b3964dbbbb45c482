//! Total coercions from raw cell text into record fields.
//!
//! None of these functions fail: anything unrecognised degrades to a
//! sentinel (`0`, `0.0`, [`MISSING_TEXT`]) so one malformed row never
//! aborts a load.

/// Placeholder for absent text cells.
pub const MISSING_TEXT: &str = "N/A";

/// Highest semester number accepted.
pub const MAX_SEMESTER: u8 = 10;

const ROMAN_SEMESTERS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

// ---------------------------------------------------------------------------
// Semester
// ---------------------------------------------------------------------------

/// Convert a semester label into `1..=10`, or `0` when it is empty or
/// unrecognised.
///
/// Accepts decimal labels (a leading integer is enough, so `"3rd"` is 3)
/// and Roman numerals `I`..`X` in any case. Values outside `0..=10` map
/// to `0`.
pub fn normalize_semester(raw: Option<&str>) -> u8 {
    let Some(raw) = raw else {
        return 0;
    };
    let label = raw.trim().to_uppercase();
    if label.is_empty() {
        return 0;
    }

    if let Some(n) = leading_integer(&label) {
        return match u8::try_from(n) {
            Ok(n) if n <= MAX_SEMESTER => n,
            _ => 0,
        };
    }

    ROMAN_SEMESTERS
        .iter()
        .position(|numeral| *numeral == label)
        .map(|i| i as u8 + 1)
        .unwrap_or(0)
}

/// Parse an optionally signed run of digits at the start of `s`.
fn leading_integer(s: &str) -> Option<i64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    // Absurdly long digit runs overflow; those are not semesters either.
    Some(s[..end].parse::<i64>().unwrap_or(i64::MAX))
}

// ---------------------------------------------------------------------------
// CGPA
// ---------------------------------------------------------------------------

/// Coerce a CGPA cell to a float, falling back to `0.0`.
pub fn parse_cgpa(raw: Option<&str>) -> f64 {
    raw.and_then(leading_float).unwrap_or(0.0)
}

/// Read the longest decimal number at the start of `s` (after leading
/// whitespace), e.g. `"8.25 (final)"` gives `8.25`.
///
/// Only finite values are returned.
pub fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Trim a text cell, substituting [`MISSING_TEXT`] when it is absent or blank.
pub fn clean_text(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => MISSING_TEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_roman_and_numeric() {
        assert_eq!(normalize_semester(Some("III")), 3);
        assert_eq!(normalize_semester(Some("7")), 7);
        assert_eq!(normalize_semester(Some("  vi ")), 6);
        assert_eq!(normalize_semester(Some("X")), 10);
        assert_eq!(normalize_semester(Some("viii")), 8);
    }

    #[test]
    fn test_semester_unrecognised_is_zero() {
        assert_eq!(normalize_semester(Some("")), 0);
        assert_eq!(normalize_semester(None), 0);
        assert_eq!(normalize_semester(Some("xyz")), 0);
        assert_eq!(normalize_semester(Some("XI")), 0);
        assert_eq!(normalize_semester(Some("   ")), 0);
    }

    #[test]
    fn test_semester_leading_integer() {
        assert_eq!(normalize_semester(Some("3rd")), 3);
        assert_eq!(normalize_semester(Some("2.5")), 2);
        assert_eq!(normalize_semester(Some("0")), 0);
    }

    #[test]
    fn test_semester_out_of_range_is_zero() {
        assert_eq!(normalize_semester(Some("11")), 0);
        assert_eq!(normalize_semester(Some("-2")), 0);
        assert_eq!(normalize_semester(Some("99999999999999999999999")), 0);
    }

    #[test]
    fn test_parse_cgpa() {
        assert_eq!(parse_cgpa(Some("8.0")), 8.0);
        assert_eq!(parse_cgpa(Some(" 9.25 ")), 9.25);
        assert_eq!(parse_cgpa(Some("7.5abc")), 7.5);
        assert_eq!(parse_cgpa(Some(".5")), 0.5);
        assert_eq!(parse_cgpa(Some("1e1")), 10.0);
        assert_eq!(parse_cgpa(Some("6e")), 6.0);
    }

    #[test]
    fn test_parse_cgpa_fallback() {
        assert_eq!(parse_cgpa(None), 0.0);
        assert_eq!(parse_cgpa(Some("")), 0.0);
        assert_eq!(parse_cgpa(Some("abc")), 0.0);
        assert_eq!(parse_cgpa(Some("NaN")), 0.0);
        assert_eq!(parse_cgpa(Some("inf")), 0.0);
        assert_eq!(parse_cgpa(Some(".")), 0.0);
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text(Some("  Ann  ")), "Ann");
        assert_eq!(clean_text(Some("")), MISSING_TEXT);
        assert_eq!(clean_text(Some("  ")), MISSING_TEXT);
        assert_eq!(clean_text(None), MISSING_TEXT);
    }
}
