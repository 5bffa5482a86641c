use super::*;

fn grades_params() -> ImportParams {
    ImportParams {
        class_code: "TT1D22".to_owned(),
        semester: "2024-HK1".to_owned(),
        retake_policy: "keep-latest".to_owned(),
        allow_update: true,
        apply_fuzzy: true,
        fuzzy_threshold: 0.78,
    }
}

#[test]
fn kind_parse_defaults_to_grades() {
    assert_eq!(ImportKind::parse("roster"), ImportKind::Roster);
    assert_eq!(ImportKind::parse("curriculum"), ImportKind::Curriculum);
    assert_eq!(ImportKind::parse("grades"), ImportKind::Grades);
    assert_eq!(ImportKind::parse("anything-else"), ImportKind::Grades);
}

#[test]
fn grades_url_carries_every_parameter() {
    let url = import_url(ImportKind::Grades, true, &grades_params());
    let expected = concat!(
        "/api/admin/import/grades?preview=1&lop=TT1D22&hocky=2024-HK1",
        "&retake_policy=keep-latest&allow_update=1&apply_fuzzy=1",
        "&fuzzy_threshold=0.78&create_missing_students=1",
    );
    assert_eq!(url, expected);
}

#[test]
fn grades_url_omits_empty_optionals() {
    let params = ImportParams {
        fuzzy_threshold: 0.78,
        ..ImportParams::default()
    };
    assert_eq!(
        import_url(ImportKind::Grades, false, &params),
        "/api/admin/import/grades?preview=0&allow_update=0&apply_fuzzy=0&fuzzy_threshold=0.78&create_missing_students=1"
    );
}

#[test]
fn roster_url_has_class_and_allow_update_only() {
    let url = import_url(ImportKind::Roster, true, &grades_params());
    assert_eq!(
        url,
        "/api/admin/import/class-roster?preview=1&lop=TT1D22&allow_update=1&create_missing_students=1"
    );
}

#[test]
fn curriculum_url_takes_no_extra_parameters() {
    assert_eq!(
        import_url(ImportKind::Curriculum, true, &grades_params()),
        "/api/admin/import/curriculum?preview=1"
    );
}

#[test]
fn preview_and_commit_urls_differ_only_in_the_flag() {
    for kind in [ImportKind::Grades, ImportKind::Roster, ImportKind::Curriculum] {
        let preview = import_url(kind, true, &grades_params());
        let commit = import_url(kind, false, &grades_params());
        assert_eq!(preview.replace("preview=1", "preview=0"), commit);
    }
}

#[test]
fn class_codes_are_percent_encoded() {
    let params = ImportParams {
        class_code: "TT 1".to_owned(),
        fuzzy_threshold: 0.78,
        ..ImportParams::default()
    };
    let url = import_url(ImportKind::Roster, true, &params);
    assert!(url.contains("lop=TT%201"));
}

#[test]
fn fuzzy_threshold_falls_back_on_garbage_and_zero() {
    assert_eq!(parse_fuzzy_threshold("0.9"), 0.9);
    assert_eq!(parse_fuzzy_threshold("  0.5 "), 0.5);
    assert_eq!(parse_fuzzy_threshold(""), 0.78);
    assert_eq!(parse_fuzzy_threshold("abc"), 0.78);
    assert_eq!(parse_fuzzy_threshold("0"), 0.78);
    assert_eq!(parse_fuzzy_threshold("NaN"), 0.78);
}
