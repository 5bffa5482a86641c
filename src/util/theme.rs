//! Theme preference cycling and application.
//!
//! Reads the admin's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. The toggle cycles
//! `light -> dark -> auto` and writes the new mode back to `localStorage`.
//! Requires a browser environment; SSR paths safely no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

const STORAGE_KEY: &str = "theme";

/// Visual theme preference applied to the document element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the system preference.
    #[default]
    Auto,
}

impl ThemeMode {
    /// Attribute/storage value for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        }
    }

    /// Parse a stored value; anything unrecognized falls back to `Auto`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "light" => ThemeMode::Light,
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Auto,
        }
    }

    /// Next mode in the `light -> dark -> auto` cycle.
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Auto,
            ThemeMode::Auto => ThemeMode::Light,
        }
    }
}

/// Read the theme preference from localStorage, defaulting to `Auto`.
pub fn read_preference() -> ThemeMode {
    crate::util::storage::get_item(STORAGE_KEY).map_or(ThemeMode::Auto, |raw| ThemeMode::parse(&raw))
}

/// Apply the `data-theme` attribute on the `<html>` element and persist
/// the mode.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", mode.as_str());
            }
        }
    }
    crate::util::storage::set_item(STORAGE_KEY, mode.as_str());
}

/// Advance the cycle, apply and persist the new mode.
pub fn toggle(current: ThemeMode) -> ThemeMode {
    let next = current.next();
    apply(next);
    next
}
