use super::*;

#[test]
fn panel_paths_round_trip_through_from_path() {
    for panel in Panel::ALL {
        assert_eq!(Panel::from_path(panel.href()), Some(panel));
    }
}

#[test]
fn unknown_paths_resolve_to_no_panel() {
    assert_eq!(Panel::from_path("/reports"), None);
    assert_eq!(Panel::from_path(""), None);
    assert_eq!(Panel::from_path("/students/extra"), None);
}

#[test]
fn dashboard_is_the_default_panel() {
    assert_eq!(Panel::default(), Panel::Dashboard);
    assert_eq!(Panel::default().href(), "/");
}

#[test]
fn toast_ids_are_unique_and_dismissable() {
    let mut ui = UiState::default();
    let first = ui.push_toast(ToastLevel::Info, "one");
    let second = ui.push_toast(ToastLevel::Danger, "two");
    assert_ne!(first, second);
    assert_eq!(ui.toasts.len(), 2);

    ui.dismiss_toast(first);
    assert_eq!(ui.toasts.len(), 1);
    assert_eq!(ui.toasts[0].message, "two");

    // Dismissing an unknown id is a no-op.
    ui.dismiss_toast(99);
    assert_eq!(ui.toasts.len(), 1);
}

#[test]
fn login_dialog_starts_closed() {
    assert!(!UiState::default().login_open);
}
