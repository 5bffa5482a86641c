use super::*;

#[test]
fn import_lock_drops_reentrant_submissions() {
    let mut state = ImportState::default();
    assert!(state.begin(ImportMode::Preview));
    // A second submit while busy is a no-op, not a queued request.
    assert!(!state.begin(ImportMode::Commit));
    assert_eq!(state.mode, Some(ImportMode::Preview));

    state.finish();
    assert!(!state.busy);
    // Both controls re-enable after the pending request resolves.
    assert!(state.begin(ImportMode::Commit));
    assert_eq!(state.mode, Some(ImportMode::Commit));
}

#[test]
fn import_lock_releases_on_failure_paths_too() {
    let mut state = ImportState::default();
    assert!(state.begin(ImportMode::Commit));
    // finish() is called from the shared exit path regardless of outcome.
    state.finish();
    assert!(!state.busy);
    assert_eq!(state.progress, Some(100));
    state.settle_progress();
    assert_eq!(state.progress, None);
}

#[test]
fn progress_steps_through_milestones() {
    let mut state = ImportState::default();
    assert!(state.begin(ImportMode::Preview));
    assert_eq!(state.progress, Some(30));
    state.advance_progress();
    assert_eq!(state.progress, Some(70));
    state.finish();
    assert_eq!(state.progress, Some(100));
}

#[test]
fn default_panel_states_are_empty_placeholders() {
    assert!(DashboardState::default().kpis.is_none());
    assert!(StudentsState::default().items.is_empty());
    assert!(!StudentsState::default().loaded);
    assert!(CatalogState::default().majors.is_empty());
    assert!(ClassCache::default().classes.is_none());
}

#[test]
fn clear_all_resets_every_panel_to_defaults() {
    let stores = PanelStores::new();
    stores.dashboard.set(DashboardState {
        kpis: Some(crate::net::types::DashboardKpis {
            total_students: 10,
            total_courses: 4,
            pass_rate: 0.5,
        }),
    });
    stores.students.update(|s| {
        s.loaded = true;
        s.items.push(crate::net::types::StudentRecord {
            id: "SV01".to_owned(),
            name: "An".to_owned(),
            class_code: "TT1".to_owned(),
            email: String::new(),
        });
    });
    stores.class_cache.update(|c| c.classes = Some(Vec::new()));

    stores.clear_all();

    assert_eq!(stores.dashboard.get_untracked(), DashboardState::default());
    assert_eq!(stores.students.get_untracked(), StudentsState::default());
    assert_eq!(stores.class_cache.get_untracked(), ClassCache::default());
}
