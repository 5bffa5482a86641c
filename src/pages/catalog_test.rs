use serde_json::json;

use super::*;

#[test]
fn field_tables_use_backend_keys() {
    assert_eq!(CatalogKind::Major.fields().len(), 2);
    assert_eq!(CatalogKind::Major.fields()[0].key, "MaNganh");
    assert_eq!(CatalogKind::Class.fields()[0].key, "MaLop");
    assert_eq!(CatalogKind::Course.fields()[0].key, "MaHP");
    assert_eq!(CatalogKind::Course.fields()[3].input, FieldInput::Checkbox);
}

#[test]
fn endpoints_match_resource_kind() {
    assert_eq!(CatalogKind::Major.base_endpoint(), "/api/admin/majors");
    assert_eq!(CatalogKind::Class.base_endpoint(), "/api/admin/classes");
    assert_eq!(CatalogKind::Course.base_endpoint(), "/api/admin/courses");
}

#[test]
fn payload_trims_text_and_passes_flags_through() {
    let values = vec![
        (COURSE_FIELDS[0], " HP01 ".to_owned(), false),
        (COURSE_FIELDS[1], "Data Structures".to_owned(), false),
        (COURSE_FIELDS[2], "3".to_owned(), false),
        (COURSE_FIELDS[3], String::new(), true),
    ];
    assert_eq!(
        catalog_payload(&values),
        json!({
            "MaHP": "HP01",
            "TenHP": "Data Structures",
            "SoTinChi": "3",
            "TinhDiemTichLuy": true,
        })
    );
}

#[test]
fn find_item_matches_any_code_field() {
    let data = json!({"items": [
        {"MaNganh": "CNTT", "TenNganh": "Information Technology"},
        {"MaLop": "TT1D22", "TenLop": "TT1"},
        {"code": "X9"}
    ]});
    assert!(find_item(&data, "TT1D22").is_some());
    assert!(find_item(&data, "X9").is_some());
    assert!(find_item(&data, "missing").is_none());
}

#[test]
fn delete_messages_use_the_kind_noun() {
    assert_eq!(CatalogKind::Major.noun(), "major");
    assert_eq!(CatalogKind::Class.noun(), "class");
    assert_eq!(CatalogKind::Course.noun(), "course");
}
