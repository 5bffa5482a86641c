//! Per-panel data state and the panel registry.
//!
//! DESIGN
//! ======
//! Each panel owns a small struct of fetched data plus load/error flags,
//! held in a context-provided signal — never stashed on DOM nodes. The
//! `PanelStores` registry groups them so logout can reset every panel to
//! its empty placeholder in one place, and so the class-dropdown cache is
//! shared between the panels that need it.

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{
    ClassRecord, ConfigEntry, CourseRecord, DashboardKpis, ImportLogRecord, ImportReport,
    MajorRecord, StudentRecord, UserRecord, WarningCaseRecord, WarningRuleRecord,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    /// `None` renders the signed-out `—` placeholders.
    pub kpis: Option<DashboardKpis>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentsState {
    pub items: Vec<StudentRecord>,
    pub loaded: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsersState {
    pub items: Vec<UserRecord>,
    pub loaded: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigsState {
    pub entries: Vec<ConfigEntry>,
    pub loaded: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WarningsState {
    pub rules: Vec<WarningRuleRecord>,
    pub cases: Vec<WarningCaseRecord>,
    pub rules_error: Option<String>,
    pub cases_error: Option<String>,
    pub loaded: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogsState {
    pub items: Vec<ImportLogRecord>,
    pub loaded: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub majors: Vec<MajorRecord>,
    pub classes: Vec<ClassRecord>,
    pub courses: Vec<CourseRecord>,
    pub majors_error: Option<String>,
    pub classes_error: Option<String>,
    pub courses_error: Option<String>,
    pub loaded: bool,
}

/// Which phase the last import submission ran in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportMode {
    Preview,
    Commit,
}

impl ImportMode {
    pub fn badge_label(self) -> &'static str {
        match self {
            ImportMode::Preview => "Preview",
            ImportMode::Commit => "Commit",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ImportMode::Preview => "badge badge--warning",
            ImportMode::Commit => "badge badge--success",
        }
    }
}

/// Import workflow state: one in-flight request at a time, plus the last
/// rendered report.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportState {
    /// Submission lock; both submit buttons are disabled while set.
    pub busy: bool,
    /// Progress bar percentage while a request is in flight.
    pub progress: Option<u8>,
    pub report: Option<ImportReport>,
    pub mode: Option<ImportMode>,
    pub file_name: Option<String>,
}

impl ImportState {
    /// Try to take the submission lock. Returns `false` — the caller must
    /// drop the submission — when a request is already in flight.
    pub fn begin(&mut self, mode: ImportMode) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.mode = Some(mode);
        self.progress = Some(30);
        true
    }

    pub fn advance_progress(&mut self) {
        self.progress = Some(70);
    }

    /// Release the lock. Runs on success and failure alike so a failed
    /// request never leaves the buttons disabled.
    pub fn finish(&mut self) {
        self.busy = false;
        self.progress = Some(100);
    }

    pub fn settle_progress(&mut self) {
        self.progress = None;
    }
}

/// Lazily-populated class list shared by the Students and Import panels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassCache {
    pub classes: Option<Vec<ClassRecord>>,
}

/// Fetch the class list once and reuse it; a failed fetch stays uncached so
/// the next panel activation retries.
pub async fn ensure_classes(api: ApiClient, cache: RwSignal<ClassCache>) -> Vec<ClassRecord> {
    if let Some(classes) = cache.get_untracked().classes {
        return classes;
    }
    match api.get_json("/api/admin/classes").await {
        Ok(data) => {
            let classes = ClassRecord::list(&data);
            cache.update(|c| c.classes = Some(classes.clone()));
            classes
        }
        Err(_) => Vec::new(),
    }
}

/// Registry of every panel's state signal.
#[derive(Clone, Copy)]
pub struct PanelStores {
    pub dashboard: RwSignal<DashboardState>,
    pub students: RwSignal<StudentsState>,
    pub users: RwSignal<UsersState>,
    pub configs: RwSignal<ConfigsState>,
    pub warnings: RwSignal<WarningsState>,
    pub logs: RwSignal<LogsState>,
    pub catalog: RwSignal<CatalogState>,
    pub import: RwSignal<ImportState>,
    pub class_cache: RwSignal<ClassCache>,
}

impl Default for PanelStores {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelStores {
    pub fn new() -> Self {
        Self {
            dashboard: RwSignal::new(DashboardState::default()),
            students: RwSignal::new(StudentsState::default()),
            users: RwSignal::new(UsersState::default()),
            configs: RwSignal::new(ConfigsState::default()),
            warnings: RwSignal::new(WarningsState::default()),
            logs: RwSignal::new(LogsState::default()),
            catalog: RwSignal::new(CatalogState::default()),
            import: RwSignal::new(ImportState::default()),
            class_cache: RwSignal::new(ClassCache::default()),
        }
    }

    /// Reset every panel to its empty placeholder state. Runs on logout,
    /// independent of which panel is active.
    pub fn clear_all(&self) {
        self.dashboard.set(DashboardState::default());
        self.students.set(StudentsState::default());
        self.users.set(UsersState::default());
        self.configs.set(ConfigsState::default());
        self.warnings.set(WarningsState::default());
        self.logs.set(LogsState::default());
        self.catalog.set(CatalogState::default());
        self.import.set(ImportState::default());
        self.class_cache.set(ClassCache::default());
    }
}
