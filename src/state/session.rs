//! Session state and credential persistence.
//!
//! DESIGN
//! ======
//! The bearer credential is the sole authorization gate for every outbound
//! call and every panel render. It persists across reloads under a canonical
//! `localStorage` key; an older deployment wrote a differently-named key, so
//! reads fall back to the legacy key and migrate it forward. Identity
//! (display name, role) is memory-only and re-derived from `/api/auth/me`
//! after a reload.
//!
//! Storage goes through the `KeyValueStore` trait so the migration and
//! save/clear rules are plain logic, testable with an in-memory fake.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Canonical storage key for the bearer credential.
pub const ACCESS_KEY: &str = "access_token";
/// Key written by the previous admin console build; read once, then removed.
pub const LEGACY_ACCESS_KEY: &str = "adm_access_token";

/// Who the signed-in administrator is, per the identity endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub role: Option<String>,
}

/// Authentication state shared through context.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Bearer credential attached to every request, when present.
    pub token: Option<String>,
    /// Memory-only identity; `None` until the first identity refresh.
    pub identity: Option<Identity>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `username (role)` label for the topbar, with em-dash placeholders
    /// while signed out.
    pub fn identity_label(&self) -> String {
        match &self.identity {
            Some(id) => format!("{} ({})", id.username, id.role.as_deref().unwrap_or("—")),
            None => "— (—)".to_owned(),
        }
    }
}

/// Minimal string key/value persistence seam.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// `localStorage`-backed store; a no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        crate::util::storage::get_item(key)
    }

    fn write(&self, key: &str, value: &str) {
        crate::util::storage::set_item(key, value);
    }

    fn delete(&self, key: &str) {
        crate::util::storage::remove_item(key);
    }
}

/// Load the persisted credential, migrating a legacy-key value to the
/// canonical key (and deleting the legacy key) on first read.
pub fn load_credential(store: &impl KeyValueStore) -> Option<String> {
    if let Some(token) = store.read(ACCESS_KEY) {
        if !token.is_empty() {
            return Some(token);
        }
    }
    let legacy = store.read(LEGACY_ACCESS_KEY)?;
    if legacy.is_empty() {
        return None;
    }
    store.write(ACCESS_KEY, &legacy);
    store.delete(LEGACY_ACCESS_KEY);
    Some(legacy)
}

/// Persist a credential under the canonical key. Empty tokens are rejected
/// and leave prior state unchanged.
pub fn save_credential(store: &impl KeyValueStore, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    store.write(ACCESS_KEY, token);
    store.delete(LEGACY_ACCESS_KEY);
    true
}

/// Remove the credential from both the canonical and legacy keys.
pub fn clear_credential(store: &impl KeyValueStore) {
    store.delete(ACCESS_KEY);
    store.delete(LEGACY_ACCESS_KEY);
}
