use super::*;

#[test]
fn normalize_username_strips_email_domain() {
    assert_eq!(normalize_username("admin@vui.edu.vn"), "admin");
    assert_eq!(normalize_username("  admin@vui.edu.vn  "), "admin");
    assert_eq!(normalize_username("plain_user"), "plain_user");
}

#[test]
fn normalize_username_keeps_only_the_local_part() {
    // Only the first '@' splits, mirroring the backend's expectation.
    assert_eq!(normalize_username("a@b@c"), "a");
}

#[test]
fn validate_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "secret"),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_login_input("admin", "   "),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_login_input("admin@vui.edu.vn", "secret"),
        Ok(("admin".to_owned(), "secret".to_owned()))
    );
}
