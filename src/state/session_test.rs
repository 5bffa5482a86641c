use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

/// In-memory stand-in for `localStorage`.
#[derive(Default)]
struct FakeStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for FakeStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn delete(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[test]
fn save_then_load_round_trips_token() {
    let store = FakeStore::default();
    assert!(save_credential(&store, "tok-123"));
    assert_eq!(load_credential(&store), Some("tok-123".to_owned()));
}

#[test]
fn save_rejects_empty_token_and_keeps_prior_state() {
    let store = FakeStore::default();
    assert!(save_credential(&store, "tok-123"));
    assert!(!save_credential(&store, ""));
    assert_eq!(load_credential(&store), Some("tok-123".to_owned()));
}

#[test]
fn load_migrates_legacy_key_to_canonical() {
    let store = FakeStore::default();
    store.write(LEGACY_ACCESS_KEY, "legacy-tok");

    assert_eq!(load_credential(&store), Some("legacy-tok".to_owned()));
    assert_eq!(store.read(ACCESS_KEY), Some("legacy-tok".to_owned()));
    assert_eq!(store.read(LEGACY_ACCESS_KEY), None);
}

#[test]
fn canonical_key_wins_over_legacy() {
    let store = FakeStore::default();
    store.write(ACCESS_KEY, "current");
    store.write(LEGACY_ACCESS_KEY, "stale");

    assert_eq!(load_credential(&store), Some("current".to_owned()));
    // Legacy key is untouched until a save or clear happens.
    assert_eq!(store.read(LEGACY_ACCESS_KEY), Some("stale".to_owned()));
}

#[test]
fn save_removes_legacy_key() {
    let store = FakeStore::default();
    store.write(LEGACY_ACCESS_KEY, "stale");
    assert!(save_credential(&store, "fresh"));
    assert_eq!(store.read(LEGACY_ACCESS_KEY), None);
}

#[test]
fn clear_removes_both_keys() {
    let store = FakeStore::default();
    store.write(ACCESS_KEY, "a");
    store.write(LEGACY_ACCESS_KEY, "b");
    clear_credential(&store);
    assert_eq!(load_credential(&store), None);
}

#[test]
fn empty_stored_values_load_as_absent() {
    let store = FakeStore::default();
    store.write(ACCESS_KEY, "");
    store.write(LEGACY_ACCESS_KEY, "");
    assert_eq!(load_credential(&store), None);
}

#[test]
fn identity_label_formats_role_placeholder() {
    let mut state = SessionState::default();
    assert_eq!(state.identity_label(), "— (—)");

    state.identity = Some(Identity {
        username: "admin".to_owned(),
        role: Some("Admin".to_owned()),
    });
    assert_eq!(state.identity_label(), "admin (Admin)");

    state.identity = Some(Identity {
        username: "probe".to_owned(),
        role: None,
    });
    assert_eq!(state.identity_label(), "probe (—)");
}
