//! Console chrome state: active-panel routing, theme, login dialog, toasts.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the per-panel data state so
//! the shell (sidebar, topbar, toast stack, login dialog) can evolve
//! independently of what each panel fetched.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::ThemeMode;

/// The navigable panels of the console, in sidebar order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Dashboard,
    Import,
    Students,
    Users,
    Configs,
    Warnings,
    Logs,
    Catalog,
}

impl Panel {
    pub const ALL: [Panel; 8] = [
        Panel::Dashboard,
        Panel::Import,
        Panel::Students,
        Panel::Users,
        Panel::Configs,
        Panel::Warnings,
        Panel::Logs,
        Panel::Catalog,
    ];

    /// Route path for this panel.
    pub fn href(self) -> &'static str {
        match self {
            Panel::Dashboard => "/",
            Panel::Import => "/import",
            Panel::Students => "/students",
            Panel::Users => "/users",
            Panel::Configs => "/configs",
            Panel::Warnings => "/warnings",
            Panel::Logs => "/logs",
            Panel::Catalog => "/catalog",
        }
    }

    /// Sidebar label.
    pub fn title(self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Import => "Import",
            Panel::Students => "Students",
            Panel::Users => "Users",
            Panel::Configs => "Configs",
            Panel::Warnings => "Warnings",
            Panel::Logs => "Import Logs",
            Panel::Catalog => "Catalog",
        }
    }

    /// Exact-match dispatch from a route path; unknown paths resolve to no
    /// panel (the shell renders, nothing loads).
    pub fn from_path(path: &str) -> Option<Panel> {
        Panel::ALL.into_iter().find(|panel| panel.href() == path)
    }
}

/// Severity of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Danger,
}

impl ToastLevel {
    pub fn class(self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast--info",
            ToastLevel::Success => "toast toast--success",
            ToastLevel::Warning => "toast toast--warning",
            ToastLevel::Danger => "toast toast--danger",
        }
    }
}

/// One queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Shell state shared through context.
#[derive(Clone, Debug)]
pub struct UiState {
    pub theme: ThemeMode,
    /// Whether the login dialog is open (set by the auth gate and by
    /// unauthorized responses).
    pub login_open: bool,
    pub sidebar_open: bool,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Auto,
            login_open: false,
            sidebar_open: false,
            toasts: Vec::new(),
            next_toast_id: 1,
        }
    }
}

impl UiState {
    /// Queue a notification; returns its id for later dismissal.
    pub fn push_toast(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
