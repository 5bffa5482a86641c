//! Display rules for rates and 10-point grades.
//!
//! The backend is inconsistent about rate units: older endpoints report a
//! 0..=1 fraction, newer ones a 0..=100 percentage. Normalization treats
//! anything above 1 as already-a-percent.

#[cfg(test)]
#[path = "grades_test.rs"]
mod grades_test;

/// Normalize a server-provided rate to a 0..=1 fraction.
pub fn to_rate(value: Option<f64>) -> f64 {
    let Some(v) = value else {
        return 0.0;
    };
    if !v.is_finite() {
        return 0.0;
    }
    if v > 1.0 { v / 100.0 } else { v }
}

/// Render a normalized rate as a rounded integer percentage, e.g. `82%`.
pub fn percent_label(rate: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = (to_rate(Some(rate)) * 100.0).round() as i64;
    format!("{rounded}%")
}

/// Map a 10-point score to a letter grade.
///
/// Used only when the server omits the letter; `None` (absent or
/// non-numeric input) renders as an empty cell.
pub fn letter_from_10(score: Option<f64>) -> &'static str {
    let Some(v) = score else {
        return "";
    };
    if !v.is_finite() {
        return "";
    }
    if v >= 8.5 {
        "A"
    } else if v >= 8.0 {
        "B+"
    } else if v >= 7.0 {
        "B"
    } else if v >= 6.5 {
        "C+"
    } else if v >= 5.5 {
        "C"
    } else if v >= 5.0 {
        "D+"
    } else if v >= 4.0 {
        "D"
    } else {
        "F"
    }
}
