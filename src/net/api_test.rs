use serde_json::json;

use super::*;

#[test]
fn parse_body_returns_json_payloads() {
    let body = parse_body(200, "application/json; charset=utf-8", r#"{"items": []}"#);
    assert_eq!(body, Ok(json!({"items": []})));
}

#[test]
fn parse_body_returns_raw_text_for_non_json() {
    let body = parse_body(200, "text/csv", "MaSV,HoTen\r\n");
    assert_eq!(body, Ok(json!("MaSV,HoTen\r\n")));
}

#[test]
fn parse_body_coerces_unparseable_json_to_empty_object() {
    let body = parse_body(200, "application/json", "not json at all");
    assert_eq!(body, Ok(json!({})));
}

#[test]
fn parse_body_coerces_empty_text_to_empty_object() {
    let body = parse_body(200, "", "");
    assert_eq!(body, Ok(json!({})));
}

#[test]
fn error_message_tries_conventional_fields_in_order() {
    assert_eq!(error_message(&json!({"message": "broken"}), 500), "broken");
    assert_eq!(error_message(&json!({"error": "bad input"}), 400), "bad input");
    assert_eq!(error_message(&json!({"msg": "Forbidden"}), 403), "Forbidden");
    assert_eq!(
        error_message(&json!({"msg": "x", "message": "wins"}), 400),
        "wins"
    );
}

#[test]
fn error_message_falls_back_to_status_code() {
    assert_eq!(error_message(&json!({}), 503), "503");
    assert_eq!(error_message(&json!("plain text body"), 500), "500");
}

#[test]
fn non_success_statuses_raise_with_extracted_message() {
    let err = parse_body(409, "application/json", r#"{"message": "Mã ngành đã tồn tại"}"#);
    assert_eq!(
        err,
        Err(ApiError::Http {
            status: 409,
            message: "Mã ngành đã tồn tại".to_owned()
        })
    );
}

#[test]
fn unauthorized_error_displays_as_bare_status() {
    // The router matches on "401"/"403" in surfaced messages.
    assert_eq!(ApiError::Unauthorized(401).to_string(), "401");
    assert_eq!(ApiError::Unauthorized(403).to_string(), "403");
    assert!(ApiError::Unauthorized(401).is_auth());
    assert!(!ApiError::Network("offline".to_owned()).is_auth());
}

#[test]
fn encode_component_escapes_reserved_characters() {
    assert_eq!(encode_component("TT1D22"), "TT1D22");
    assert_eq!(encode_component("2024 HK1"), "2024%20HK1");
    assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
    assert_eq!(encode_component("0.78"), "0.78");
}

#[test]
fn native_builds_report_api_unavailable() {
    assert_eq!(
        unavailable(),
        ApiError::Network("not available on server".to_owned())
    );
}
