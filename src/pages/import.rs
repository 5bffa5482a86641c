//! Import panel: two-phase (preview/commit) bulk upload.
//!
//! DESIGN
//! ======
//! Preview and commit hit the same endpoint family and differ only in the
//! `preview` query flag. One module-level lock (`ImportState::busy`)
//! disables both submit buttons while a request is in flight; a second
//! submit during that window is dropped, never queued. The file-picker and
//! the drop target converge on the same `<input type=file>` element, so
//! submission reads one place regardless of how the file arrived.

#[cfg(test)]
#[path = "import_test.rs"]
mod import_test;

use leptos::prelude::*;

use crate::components::shell::AdminShell;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::api::{ApiClient, encode_component};
use crate::net::types::{ImportReport, count_label, preview_cell, preview_columns};
#[cfg(feature = "hydrate")]
use crate::state::panels::ensure_classes;
use crate::state::panels::{ImportMode, PanelStores};
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastLevel;
use crate::state::ui::{Panel, UiState};

/// Only the first 200 preview records are rendered.
const PREVIEW_ROW_LIMIT: usize = 200;

/// The three import kinds, each with its own endpoint and parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ImportKind {
    Grades,
    Roster,
    Curriculum,
}

impl ImportKind {
    /// Parse the select-control value; anything unknown means grades.
    fn parse(raw: &str) -> Self {
        match raw {
            "roster" => ImportKind::Roster,
            "curriculum" => ImportKind::Curriculum,
            _ => ImportKind::Grades,
        }
    }
}

/// Optional submission parameters collected from the form controls.
#[derive(Clone, Debug, Default, PartialEq)]
struct ImportParams {
    class_code: String,
    semester: String,
    retake_policy: String,
    allow_update: bool,
    apply_fuzzy: bool,
    fuzzy_threshold: f64,
}

/// Fuzzy-match threshold from its free-text control; empty, zero and
/// garbage all fall back to the default.
fn parse_fuzzy_threshold(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v != 0.0 => v,
        _ => 0.78,
    }
}

/// Upload URL for one submission. The `preview` flag is the only
/// difference between the preview and commit phases.
fn import_url(kind: ImportKind, preview: bool, params: &ImportParams) -> String {
    let flag = u8::from(preview);
    let mut url = match kind {
        ImportKind::Roster => {
            let mut url = format!("/api/admin/import/class-roster?preview={flag}");
            if !params.class_code.is_empty() {
                url.push_str(&format!("&lop={}", encode_component(&params.class_code)));
            }
            url.push_str(&format!("&allow_update={}", u8::from(params.allow_update)));
            url
        }
        ImportKind::Curriculum => format!("/api/admin/import/curriculum?preview={flag}"),
        ImportKind::Grades => {
            let mut url = format!("/api/admin/import/grades?preview={flag}");
            if !params.class_code.is_empty() {
                url.push_str(&format!("&lop={}", encode_component(&params.class_code)));
            }
            if !params.semester.is_empty() {
                url.push_str(&format!("&hocky={}", encode_component(&params.semester)));
            }
            if !params.retake_policy.is_empty() {
                url.push_str(&format!(
                    "&retake_policy={}",
                    encode_component(&params.retake_policy)
                ));
            }
            url.push_str(&format!("&allow_update={}", u8::from(params.allow_update)));
            url.push_str(&format!("&apply_fuzzy={}", u8::from(params.apply_fuzzy)));
            url.push_str(&format!(
                "&fuzzy_threshold={}",
                encode_component(&params.fuzzy_threshold.to_string())
            ));
            url
        }
    };
    if kind != ImportKind::Curriculum {
        url.push_str("&create_missing_students=1");
    }
    url
}

#[component]
pub fn ImportPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let stores = expect_context::<PanelStores>();
    let import = stores.import;

    let kind_value = RwSignal::new("grades".to_owned());
    let class_code = RwSignal::new(String::new());
    let semester = RwSignal::new(String::new());
    let retake_policy = RwSignal::new(String::new());
    let allow_update = RwSignal::new(false);
    let apply_fuzzy = RwSignal::new(false);
    let fuzzy_raw = RwSignal::new("0.78".to_owned());
    let drag_over = RwSignal::new(false);

    let file_input_ref = NodeRef::<leptos::html::Input>::new();
    let issues_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        if session.with(|s| s.identity.is_none()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let _ = ensure_classes(api, stores.class_cache).await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = api;
    });

    // Both the picker and the drop target funnel into the hidden input;
    // the name shown below comes from whichever path ran last.
    let on_pick = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(input) = file_input_ref.get_untracked() {
            input.click();
        }
    };

    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let name = file_input_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|list| list.get(0))
                .map(|file| file.name());
            import.update(|s| s.file_name = name);
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
        #[cfg(feature = "hydrate")]
        {
            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                if files.length() == 0 {
                    return;
                }
                if let Some(input) = file_input_ref.get_untracked() {
                    input.set_files(Some(&files));
                }
                let name = files.get(0).map(|file| file.name());
                import.update(|s| s.file_name = name);
            }
        }
    };

    let on_submit = move |preview: bool| {
        // Drop, don't queue, while a request is pending.
        if import.get_untracked().busy {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_input_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|list| list.get(0))
            else {
                show_toast(ui, ToastLevel::Warning, "No file selected");
                return;
            };
            let kind = ImportKind::parse(&kind_value.get_untracked());
            let params = ImportParams {
                class_code: class_code.get_untracked().trim().to_owned(),
                semester: semester.get_untracked().trim().to_owned(),
                retake_policy: retake_policy.get_untracked(),
                allow_update: allow_update.get_untracked(),
                apply_fuzzy: apply_fuzzy.get_untracked(),
                fuzzy_threshold: parse_fuzzy_threshold(&fuzzy_raw.get_untracked()),
            };
            let url = import_url(kind, preview, &params);
            let mode = if preview { ImportMode::Preview } else { ImportMode::Commit };

            let mut started = false;
            import.update(|s| started = s.begin(mode));
            if !started {
                return;
            }

            leptos::task::spawn_local(async move {
                let result = api.post_multipart(&url, &file).await;
                import.update(|s| s.advance_progress());
                let committed_counts = match result {
                    Ok(data) => {
                        let report = ImportReport::from_value(&data);
                        let counts = (
                            report.summary.created.unwrap_or(0),
                            report.summary.updated.unwrap_or(0),
                            report.summary.skipped.unwrap_or(0),
                        );
                        import.update(|s| s.report = Some(report));
                        Some(counts)
                    }
                    Err(err) => {
                        show_toast(ui, ToastLevel::Danger, format!("Import failed: {err}"));
                        None
                    }
                };
                // Shared exit path: the lock is released whether the
                // request succeeded or not.
                import.update(|s| s.finish());
                if let Some((created, updated, skipped)) = committed_counts {
                    if !preview {
                        show_toast(
                            ui,
                            ToastLevel::Success,
                            format!("Committed: +{created} new, {updated} updated, {skipped} skipped."),
                        );
                        if let Some(el) = issues_ref.get_untracked() {
                            el.scroll_into_view();
                        }
                    }
                }
                gloo_timers::future::sleep(std::time::Duration::from_millis(400)).await;
                import.update(|s| s.settle_progress());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (preview, ui);
    };

    let picked_label = move || {
        import
            .get()
            .file_name
            .map(|name| format!("Selected: {name}"))
            .unwrap_or_default()
    };

    view! {
        <AdminShell active=Some(Panel::Import)>
            <h1 class="page-title">"Import"</h1>

            <div class="import-controls">
                <label class="dialog__label">
                    "Kind"
                    <select
                        class="dialog__input"
                        on:change=move |ev| kind_value.set(event_target_value(&ev))
                    >
                        <option value="grades">"Grade sheet"</option>
                        <option value="roster">"Class roster"</option>
                        <option value="curriculum">"Curriculum"</option>
                    </select>
                </label>
                <label class="dialog__label">
                    "Class"
                    <select
                        class="dialog__input"
                        on:change=move |ev| class_code.set(event_target_value(&ev))
                    >
                        <option value="">"-- Filter by class --"</option>
                        {move || {
                            stores
                                .class_cache
                                .get()
                                .classes
                                .unwrap_or_default()
                                .into_iter()
                                .map(|class| {
                                    view! { <option value=class.code.clone()>{class.option_label()}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Term"
                    <input
                        class="dialog__input"
                        placeholder="e.g. 2024-HK1"
                        prop:value=move || semester.get()
                        on:input=move |ev| semester.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Retake policy"
                    <select
                        class="dialog__input"
                        on:change=move |ev| retake_policy.set(event_target_value(&ev))
                    >
                        <option value="">"Default"</option>
                        <option value="keep-latest">"Keep latest"</option>
                        <option value="keep-best">"Keep best"</option>
                    </select>
                </label>
                <label class="dialog__label dialog__label--check">
                    <input
                        type="checkbox"
                        prop:checked=move || allow_update.get()
                        on:change=move |ev| allow_update.set(event_target_checked(&ev))
                    />
                    "Allow updates"
                </label>
                <label class="dialog__label dialog__label--check">
                    <input
                        type="checkbox"
                        prop:checked=move || apply_fuzzy.get()
                        on:change=move |ev| apply_fuzzy.set(event_target_checked(&ev))
                    />
                    "Fuzzy name matching"
                </label>
                <label class="dialog__label">
                    "Fuzzy threshold"
                    <input
                        class="dialog__input"
                        prop:value=move || fuzzy_raw.get()
                        on:input=move |ev| fuzzy_raw.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <div
                class=move || {
                    if drag_over.get() { "dropzone dropzone--dragover" } else { "dropzone" }
                }
                on:dragenter=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    drag_over.set(true);
                }
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    drag_over.set(true);
                }
                on:dragleave=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    drag_over.set(false);
                }
                on:drop=on_drop
            >
                <p>"Drop a file here, or"</p>
                <button class="btn" on:click=on_pick>
                    "Choose file"
                </button>
                <input
                    class="dropzone__input"
                    type="file"
                    accept=".csv,.xlsx"
                    node_ref=file_input_ref
                    on:change=on_file_change
                />
                <p class="dropzone__picked">{picked_label}</p>
            </div>

            <div class="import-actions">
                <button
                    class="btn"
                    disabled=move || import.get().busy
                    on:click=move |_| on_submit(true)
                >
                    "Preview"
                </button>
                <button
                    class="btn btn--primary"
                    disabled=move || import.get().busy
                    on:click=move |_| on_submit(false)
                >
                    "Commit"
                </button>
                <span class="import-actions__spacer"></span>
                <a href="/api/admin/templates/roster.csv" rel="external" class="btn btn--small">
                    "Roster template"
                </a>
                <a href="/api/admin/templates/grades.xlsx" rel="external" class="btn btn--small">
                    "Grades template"
                </a>
            </div>

            <Show when=move || import.get().progress.is_some()>
                <div class="progress">
                    <div
                        class="progress__bar"
                        style:width=move || format!("{}%", import.get().progress.unwrap_or(0))
                    ></div>
                </div>
            </Show>

            {move || {
                import
                    .get()
                    .report
                    .map(|report| {
                        let badge = import.get().mode;
                        view! { <ImportResult report=report badge=badge issues_ref=issues_ref/> }
                    })
            }}
        </AdminShell>
    }
}

/// Result block: summary counters, mode badge, bounded preview table and
/// the warning list.
#[component]
fn ImportResult(
    report: ImportReport,
    badge: Option<ImportMode>,
    issues_ref: NodeRef<leptos::html::Div>,
) -> impl IntoView {
    let summary = report.summary.clone();
    let columns = preview_columns(&report.preview);
    let rows: Vec<_> = report.preview.iter().take(PREVIEW_ROW_LIMIT).cloned().collect();
    let warnings = report.warnings;

    view! {
        <section class="panel-section">
            <div class="panel-section__header">
                <h2 class="panel-section__title">"Result"</h2>
                {badge
                    .map(|mode| {
                        view! { <span class=mode.badge_class()>{mode.badge_label()}</span> }
                    })}
            </div>

            <div class="import-summary">
                <div class="import-summary__row">
                    <span>"Total rows"</span>
                    <b>{count_label(summary.total_rows)}</b>
                </div>
                <div class="import-summary__row">
                    <span>"Created"</span>
                    <b>{count_label(summary.created)}</b>
                </div>
                <div class="import-summary__row">
                    <span>"Updated"</span>
                    <b>{count_label(summary.updated)}</b>
                </div>
                <div class="import-summary__row">
                    <span>"Skipped"</span>
                    <b>{count_label(summary.skipped)}</b>
                </div>
                <div class="import-summary__row">
                    <span>"Warnings"</span>
                    <b>{summary.warning_count}</b>
                </div>
            </div>

            {if rows.is_empty() {
                view! { <div class="empty-placeholder">"No preview data."</div> }.into_any()
            } else {
                view! {
                    <div class="table-wrap">
                        <table class="table table--compact">
                            <thead>
                                <tr>
                                    {columns
                                        .iter()
                                        .map(|column| view! { <th>{column.clone()}</th> })
                                        .collect::<Vec<_>>()}
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                {columns
                                                    .iter()
                                                    .map(|column| view! { <td>{preview_cell(row, column)}</td> })
                                                    .collect::<Vec<_>>()}
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    </div>
                }
                    .into_any()
            }}

            <div class="import-issues" node_ref=issues_ref>
                {if warnings.is_empty() {
                    view! { <span class="import-issues__ok">"No warnings."</span> }.into_any()
                } else {
                    view! {
                        <ul class="import-issues__list">
                            {warnings
                                .into_iter()
                                .map(|warning| view! { <li>{warning}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }}
            </div>
        </section>
    }
}
