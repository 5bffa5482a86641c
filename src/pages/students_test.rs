use serde_json::json;

use super::*;

#[test]
fn list_url_pins_page_and_page_size() {
    assert_eq!(students_url("", "", 1), "/api/admin/students?page=1&page_size=50");
}

#[test]
fn list_url_includes_search_and_class_filters_in_order() {
    assert_eq!(
        students_url("nguyen", "TT1D22", 1),
        "/api/admin/students?q=nguyen&lop=TT1D22&page=1&page_size=50"
    );
    assert_eq!(
        students_url("", "TT1D22", 2),
        "/api/admin/students?lop=TT1D22&page=2&page_size=50"
    );
}

#[test]
fn list_url_percent_encodes_filter_values() {
    assert_eq!(
        students_url("vă n", "", 1),
        "/api/admin/students?q=v%C4%83%20n&page=1&page_size=50"
    );
}

#[test]
fn student_endpoint_encodes_the_identifier() {
    assert_eq!(student_endpoint("SV 01"), "/api/admin/students/SV%2001");
}

#[test]
fn payload_uses_backend_field_names_and_trims() {
    assert_eq!(
        student_payload(" SV01 ", " Nguyen Van A ", "TT1D22", " a@vui.edu.vn "),
        json!({
            "MaSV": "SV01",
            "HoTen": "Nguyen Van A",
            "Lop": "TT1D22",
            "Email": "a@vui.edu.vn",
        })
    );
}

#[test]
fn editor_mode_locks_identifier_only_when_editing() {
    assert!(matches!(EditorMode::Edit("SV01".to_owned()), EditorMode::Edit(_)));
    assert_eq!(EditorMode::Create, EditorMode::Create);
}
