use serde_json::json;

use super::*;

fn case(code: &str, value: &str, threshold: &str) -> WarningCaseRecord {
    WarningCaseRecord {
        student_id: "SV01".to_owned(),
        code: code.to_owned(),
        display_code: code.to_owned(),
        threshold: threshold.to_owned(),
        value: value.to_owned(),
        at: String::new(),
    }
}

#[test]
fn gpa_and_average_rules_render_high_severity_less_than() {
    let (severity, detail) = present_case(&case("GPA_BELOW", "1.8", "2.0"));
    assert_eq!(severity, CaseSeverity::High);
    assert_eq!(detail, "GPA: 1.8 (< 2.0)");

    let (severity, detail) = present_case(&case("AVG_BELOW", "4.2", "5.0"));
    assert_eq!(severity, CaseSeverity::High);
    assert_eq!(detail, "Average: 4.2 (< 5.0)");
}

#[test]
fn fail_and_debt_rules_render_medium_severity_at_least() {
    let (severity, detail) = present_case(&case("FAIL_COUNT", "3", "2"));
    assert_eq!(severity, CaseSeverity::Medium);
    assert_eq!(detail, "Failed courses: 3 (>= 2)");

    let (severity, detail) = present_case(&case("DEBT_OVER", "12", "10"));
    assert_eq!(severity, CaseSeverity::Medium);
    assert_eq!(detail, "Credit debt: 12 (>= 10)");
}

#[test]
fn unknown_rules_fall_back_to_raw_value_high_severity() {
    let (severity, detail) = present_case(&case("SOMETHING_NEW", "7", "1"));
    assert_eq!(severity, CaseSeverity::High);
    assert_eq!(detail, "7");
}

#[test]
fn severity_maps_to_badge_classes() {
    assert_eq!(CaseSeverity::High.badge_class(), "badge badge--danger");
    assert_eq!(CaseSeverity::Medium.badge_class(), "badge badge--warning");
}

#[test]
fn rule_payload_splits_code_and_threshold() {
    assert_eq!(
        rule_payload("gpa_below:2.0"),
        Some(json!({"Code": "GPA_BELOW", "Name": "gpa_below", "Threshold": 2.0}))
    );
}

#[test]
fn rule_payload_without_threshold_defaults_to_zero() {
    assert_eq!(
        rule_payload("FAIL_COUNT"),
        Some(json!({"Code": "FAIL_COUNT", "Name": "FAIL_COUNT", "Threshold": 0}))
    );
    assert_eq!(
        rule_payload("FAIL_COUNT:"),
        Some(json!({"Code": "FAIL_COUNT:", "Name": "FAIL_COUNT:", "Threshold": 0}))
    );
}

#[test]
fn rule_payload_rejects_empty_expressions() {
    assert_eq!(rule_payload("   "), None);
}

#[test]
fn rule_payload_tolerates_non_numeric_thresholds() {
    assert_eq!(
        rule_payload("GPA_BELOW:abc"),
        Some(json!({"Code": "GPA_BELOW", "Name": "GPA_BELOW", "Threshold": 0.0}))
    );
}
