use super::*;

#[test]
fn to_rate_passes_fractions_through() {
    assert!((to_rate(Some(0.82)) - 0.82).abs() < 1e-9);
    assert!((to_rate(Some(1.0)) - 1.0).abs() < 1e-9);
    assert!((to_rate(Some(0.0))).abs() < 1e-9);
}

#[test]
fn to_rate_divides_whole_percentages() {
    assert!((to_rate(Some(82.0)) - 0.82).abs() < 1e-9);
    assert!((to_rate(Some(100.0)) - 1.0).abs() < 1e-9);
}

#[test]
fn to_rate_defaults_missing_and_non_finite_to_zero() {
    assert!((to_rate(None)).abs() < 1e-9);
    assert!((to_rate(Some(f64::NAN))).abs() < 1e-9);
    assert!((to_rate(Some(f64::INFINITY))).abs() < 1e-9);
}

#[test]
fn percent_label_rounds_to_integer_percent() {
    assert_eq!(percent_label(0.82), "82%");
    assert_eq!(percent_label(82.0), "82%");
    assert_eq!(percent_label(0.8251), "83%");
    assert_eq!(percent_label(0.0), "0%");
}

#[test]
fn letter_thresholds_match_grading_scale() {
    assert_eq!(letter_from_10(Some(8.6)), "A");
    assert_eq!(letter_from_10(Some(8.5)), "A");
    assert_eq!(letter_from_10(Some(8.0)), "B+");
    assert_eq!(letter_from_10(Some(7.5)), "B");
    assert_eq!(letter_from_10(Some(6.5)), "C+");
    assert_eq!(letter_from_10(Some(5.5)), "C");
    assert_eq!(letter_from_10(Some(5.0)), "D+");
    assert_eq!(letter_from_10(Some(4.0)), "D");
    assert_eq!(letter_from_10(Some(3.9)), "F");
}

#[test]
fn letter_is_empty_for_missing_scores() {
    assert_eq!(letter_from_10(None), "");
    assert_eq!(letter_from_10(Some(f64::NAN)), "");
}
