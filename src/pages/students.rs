//! Students panel: searchable list, transcript detail, editor and delete.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::components::confirm::ConfirmDialog;
use crate::components::shell::AdminShell;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::api::{ApiClient, encode_component};
use crate::net::types::{StudentRecord, TranscriptRow};
#[cfg(feature = "hydrate")]
use crate::state::panels::ensure_classes;
use crate::state::panels::PanelStores;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastLevel;
use crate::state::ui::{Panel, UiState};

/// List URL with optional search and class filter; page size is pinned the
/// way the backend expects it.
fn students_url(query: &str, class_code: &str, page: u32) -> String {
    let mut url = String::from("/api/admin/students?");
    if !query.is_empty() {
        url.push_str(&format!("q={}&", encode_component(query)));
    }
    if !class_code.is_empty() {
        url.push_str(&format!("lop={}&", encode_component(class_code)));
    }
    url.push_str(&format!("page={page}&page_size=50"));
    url
}

fn student_endpoint(student_id: &str) -> String {
    format!("/api/admin/students/{}", encode_component(student_id))
}

/// Create/update body; identifiers and contact fields are trimmed.
fn student_payload(id: &str, name: &str, class_code: &str, email: &str) -> Value {
    serde_json::json!({
        "MaSV": id.trim(),
        "HoTen": name.trim(),
        "Lop": class_code.trim(),
        "Email": email.trim(),
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct StudentDetail {
    student: StudentRecord,
    transcript: Vec<TranscriptRow>,
}

/// Whether the editor dialog creates a new student or edits an existing
/// one (identifier locked).
#[derive(Clone, Debug, PartialEq, Eq)]
enum EditorMode {
    Create,
    Edit(String),
}

#[component]
pub fn StudentsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let stores = expect_context::<PanelStores>();
    let students = stores.students;

    let query = RwSignal::new(String::new());
    let class_filter = RwSignal::new(String::new());
    let refresh = RwSignal::new(0u32);

    let detail = RwSignal::new(None::<StudentDetail>);
    let editor = RwSignal::new(None::<EditorMode>);
    let pending_delete = RwSignal::new(None::<String>);

    // Class dropdown options, fetched once and shared with the import
    // panel.
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

    Effect::new(move || {
        refresh.get();
        if session.with(|s| s.identity.is_none()) {
            return;
        }
        let url = students_url(&query.get_untracked(), &class_filter.get_untracked(), 1);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.get_json(&url).await {
                Ok(data) => students.update(|s| {
                    s.items = StudentRecord::list(&data);
                    s.loaded = true;
                    s.error = None;
                }),
                Err(err) => {
                    show_toast(ui, ToastLevel::Danger, format!("Failed to load students: {err}"));
                    students.update(|s| {
                        s.loaded = true;
                        s.error = Some(err.to_string());
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (url, api, ui);
    });

    let reload = Callback::new(move |()| refresh.update(|n| *n += 1));

    let open_detail = Callback::new(move |student_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let profile_url = student_endpoint(&student_id);
            let transcript_url = format!("{profile_url}/transcript");
            let (profile, transcript) =
                futures::join!(api.get_json(&profile_url), api.get_json(&transcript_url));
            match (profile, transcript) {
                (Ok(profile), Ok(transcript)) => {
                    let student =
                        StudentRecord::from_value(&profile).unwrap_or_else(|| StudentRecord {
                            id: student_id.clone(),
                            name: String::new(),
                            class_code: String::new(),
                            email: String::new(),
                        });
                    detail.set(Some(StudentDetail {
                        student,
                        transcript: TranscriptRow::list(&transcript),
                    }));
                }
                (Err(err), _) | (_, Err(err)) => {
                    show_toast(ui, ToastLevel::Danger, format!("Could not load detail: {err}"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = student_id;
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(student_id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.delete(&student_endpoint(&student_id)).await {
                Ok(_) => {
                    show_toast(ui, ToastLevel::Success, "Student deleted");
                    reload.run(());
                }
                Err(err) => show_toast(ui, ToastLevel::Danger, err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = student_id;
    });

    view! {
        <AdminShell active=Some(Panel::Students)>
            <h1 class="page-title">"Students"</h1>

            <div class="filter-bar">
                <input
                    class="dialog__input"
                    type="search"
                    placeholder="Search id or name"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            reload.run(());
                        }
                    }
                />
                <select
                    class="dialog__input filter-bar__select"
                    on:change=move |ev| class_filter.set(event_target_value(&ev))
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
                <button class="btn" on:click=move |_| reload.run(())>
                    "Search"
                </button>
                <span class="filter-bar__spacer"></span>
                <button
                    class="btn btn--primary"
                    on:click=move |_| editor.set(Some(EditorMode::Create))
                >
                    "+ Add Student"
                </button>
            </div>

            <Show
                when=move || !students.get().items.is_empty()
                fallback=move || view! { <div class="empty-placeholder">"No students."</div> }
            >
                <div class="table-wrap">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Student ID"</th>
                                <th>"Full Name"</th>
                                <th>"Class"</th>
                                <th>"Email"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                students
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|student| {
                                        let detail_id = student.id.clone();
                                        let edit_id = student.id.clone();
                                        let delete_id = student.id.clone();
                                        view! {
                                            <tr>
                                                <td>{student.id.clone()}</td>
                                                <td>{student.name.clone()}</td>
                                                <td>{student.class_code.clone()}</td>
                                                <td>{student.email.clone()}</td>
                                                <td class="table__cell--actions">
                                                    <button
                                                        class="btn btn--small btn--primary"
                                                        on:click=move |_| open_detail.run(detail_id.clone())
                                                    >
                                                        "Detail"
                                                    </button>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| {
                                                            editor.set(Some(EditorMode::Edit(edit_id.clone())))
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| pending_delete.set(Some(delete_id.clone()))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>

            {move || {
                detail
                    .get()
                    .map(|d| view! { <StudentDetailDialog detail=d on_close=Callback::new(move |()| detail.set(None))/> })
            }}

            {move || {
                editor
                    .get()
                    .map(|mode| {
                        view! {
                            <StudentEditorDialog
                                mode=mode
                                on_cancel=Callback::new(move |()| editor.set(None))
                                on_saved=Callback::new(move |()| {
                                    editor.set(None);
                                    reload.run(());
                                })
                            />
                        }
                    })
            }}

            {move || {
                pending_delete
                    .get()
                    .map(|student_id| {
                        view! {
                            <ConfirmDialog
                                title="Delete Student"
                                message=format!("Delete student {student_id}?")
                                on_confirm=confirm_delete
                                on_cancel=Callback::new(move |()| pending_delete.set(None))
                            />
                        }
                    })
            }}
        </AdminShell>
    }
}

/// Profile header plus transcript table; letter grades fall back to the
/// 10-point mapping only when the server omitted them.
#[component]
fn StudentDetailDialog(detail: StudentDetail, on_close: Callback<()>) -> impl IntoView {
    let title = format!("{} – {}", detail.student.name, detail.student.id);
    let transcript = detail.transcript;

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <div>
                    <b>"Class: "</b>
                    {detail.student.class_code}
                </div>
                <div>
                    <b>"Email: "</b>
                    {detail.student.email}
                </div>
                {if transcript.is_empty() {
                    view! { <div class="empty-placeholder">"No transcript yet."</div> }.into_any()
                } else {
                    view! {
                        <div class="table-wrap">
                            <table class="table table--compact">
                                <thead>
                                    <tr>
                                        <th>"Course"</th>
                                        <th>"Name"</th>
                                        <th>"Credits"</th>
                                        <th>"Score (10)"</th>
                                        <th>"Letter"</th>
                                        <th>"Result"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {transcript
                                        .into_iter()
                                        .map(|row| {
                                            view! {
                                                <tr>
                                                    <td>{row.course_code}</td>
                                                    <td>{row.course_name}</td>
                                                    <td>{row.credits}</td>
                                                    <td>{row.score}</td>
                                                    <td>{row.letter}</td>
                                                    <td>{row.result}</td>
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
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Create/edit dialog; the identifier is locked while editing and the form
/// is pre-populated from server state.
#[component]
fn StudentEditorDialog(mode: EditorMode, on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let ui = expect_context::<RwSignal<UiState>>();

    let id = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let class_code = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    let editing = matches!(mode, EditorMode::Edit(_));
    if let EditorMode::Edit(student_id) = mode {
        id.set(student_id.clone());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Ok(data) = api.get_json(&student_endpoint(&student_id)).await {
                if let Some(record) = StudentRecord::from_value(&data) {
                    id.set(record.id);
                    name.set(record.name);
                    class_code.set(record.class_code);
                    email.set(record.email);
                }
            }
        });
    }

    let on_save = move |_| {
        let body = student_payload(
            &id.get_untracked(),
            &name.get_untracked(),
            &class_code.get_untracked(),
            &email.get_untracked(),
        );
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = if editing {
                api.put_json(&student_endpoint(&id.get_untracked()), &body).await
            } else {
                api.post_json("/api/admin/students", &body).await
            };
            match result {
                Ok(_) => {
                    show_toast(ui, ToastLevel::Success, "Student saved");
                    on_saved.run(());
                }
                Err(err) => show_toast(ui, ToastLevel::Danger, err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (body, editing, api, ui, on_saved);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if editing { "Edit Student" } else { "Add Student" }}</h2>
                <label class="dialog__label">
                    "Student ID"
                    <input
                        class="dialog__input"
                        prop:value=move || id.get()
                        disabled=editing
                        on:input=move |ev| id.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Full Name"
                    <input
                        class="dialog__input"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Class"
                    <input
                        class="dialog__input"
                        prop:value=move || class_code.get()
                        on:input=move |ev| class_code.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=on_save>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
