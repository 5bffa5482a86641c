//! Catalog panel: majors, classes and courses with shared editor plumbing.
//!
//! The editor dialog is driven by a per-kind field table instead of three
//! hand-written forms; the payload builder and item lookup are pure so the
//! backend field names stay visible in one place.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::components::confirm::ConfirmDialog;
use crate::components::shell::AdminShell;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::api::encode_component;
#[cfg(feature = "hydrate")]
use crate::net::types::{ClassRecord, CourseRecord, MajorRecord};
use crate::net::types::{items_of, pick_bool, pick_string};
use crate::state::panels::PanelStores;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastLevel;
use crate::state::ui::{Panel, UiState};

/// The three catalog resources, sharing one editor dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CatalogKind {
    Major,
    Class,
    Course,
}

/// Input widget for an editor field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FieldInput {
    Text,
    Number,
    Checkbox,
}

/// One editor field: backend key, label, widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FieldSpec {
    key: &'static str,
    label: &'static str,
    input: FieldInput,
}

const MAJOR_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "MaNganh", label: "Code", input: FieldInput::Text },
    FieldSpec { key: "TenNganh", label: "Name", input: FieldInput::Text },
];

const CLASS_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "MaLop", label: "Class code", input: FieldInput::Text },
    FieldSpec { key: "TenLop", label: "Name", input: FieldInput::Text },
];

const COURSE_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "MaHP", label: "Course code", input: FieldInput::Text },
    FieldSpec { key: "TenHP", label: "Name", input: FieldInput::Text },
    FieldSpec { key: "SoTinChi", label: "Credits", input: FieldInput::Number },
    FieldSpec { key: "TinhDiemTichLuy", label: "Counts toward GPA", input: FieldInput::Checkbox },
];

impl CatalogKind {
    fn title(self) -> &'static str {
        match self {
            CatalogKind::Major => "Major",
            CatalogKind::Class => "Class",
            CatalogKind::Course => "Course",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            CatalogKind::Major => "major",
            CatalogKind::Class => "class",
            CatalogKind::Course => "course",
        }
    }

    fn base_endpoint(self) -> &'static str {
        match self {
            CatalogKind::Major => "/api/admin/majors",
            CatalogKind::Class => "/api/admin/classes",
            CatalogKind::Course => "/api/admin/courses",
        }
    }

    fn fields(self) -> &'static [FieldSpec] {
        match self {
            CatalogKind::Major => MAJOR_FIELDS,
            CatalogKind::Class => CLASS_FIELDS,
            CatalogKind::Course => COURSE_FIELDS,
        }
    }
}

/// Request body from the editor's field values: text fields trimmed
/// strings, checkboxes booleans.
fn catalog_payload(values: &[(FieldSpec, String, bool)]) -> Value {
    let mut body = serde_json::Map::new();
    for (spec, text, flag) in values {
        let value = match spec.input {
            FieldInput::Checkbox => Value::Bool(*flag),
            FieldInput::Text | FieldInput::Number => Value::String(text.trim().to_owned()),
        };
        body.insert((*spec).key.to_owned(), value);
    }
    Value::Object(body)
}

/// Find a catalog item by its identifier, whichever code field the record
/// uses.
fn find_item(data: &Value, id: &str) -> Option<Value> {
    items_of(data)
        .into_iter()
        .find(|item| {
            pick_string(item, &["MaNganh", "MaLop", "MaHP", "code"]).as_deref() == Some(id)
        })
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let stores = expect_context::<PanelStores>();
    let catalog = stores.catalog;

    let refresh = RwSignal::new(0u32);
    let editor = RwSignal::new(None::<(CatalogKind, Option<String>)>);
    let pending_delete = RwSignal::new(None::<(CatalogKind, String)>);

    Effect::new(move || {
        refresh.get();
        if session.with(|s| s.identity.is_none()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let (majors, classes, courses) = futures::join!(
                api.get_json("/api/admin/majors"),
                api.get_json("/api/admin/classes"),
                api.get_json("/api/admin/courses"),
            );
            catalog.update(|s| {
                match majors {
                    Ok(data) => {
                        s.majors = MajorRecord::list(&data);
                        s.majors_error = None;
                    }
                    Err(_) => s.majors_error = Some("Could not load majors.".to_owned()),
                }
                match classes {
                    Ok(data) => {
                        s.classes = ClassRecord::list(&data);
                        s.classes_error = None;
                    }
                    Err(_) => s.classes_error = Some("Could not load classes.".to_owned()),
                }
                match courses {
                    Ok(data) => {
                        s.courses = CourseRecord::list(&data);
                        s.courses_error = None;
                    }
                    Err(_) => s.courses_error = Some("Could not load courses.".to_owned()),
                }
                s.loaded = true;
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = api;
    });

    let reload = Callback::new(move |()| refresh.update(|n| *n += 1));

    let confirm_delete = Callback::new(move |()| {
        let Some((kind, id)) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let url = format!("{}/{}", kind.base_endpoint(), encode_component(&id));
            match api.delete(&url).await {
                Ok(_) => {
                    show_toast(ui, ToastLevel::Success, "Deleted");
                    reload.run(());
                }
                Err(err) => show_toast(ui, ToastLevel::Danger, err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (kind, id, ui);
    });

    let major_rows = move || {
        catalog
            .get()
            .majors
            .into_iter()
            .map(|major| (major.code.clone(), vec![major.code, major.name]))
            .collect::<Vec<_>>()
    };
    let class_rows = move || {
        catalog
            .get()
            .classes
            .into_iter()
            .map(|class| (class.code.clone(), vec![class.code, class.name]))
            .collect::<Vec<_>>()
    };
    let course_rows = move || {
        catalog
            .get()
            .courses
            .into_iter()
            .map(|course| {
                (
                    course.code.clone(),
                    vec![
                        course.code,
                        course.name,
                        course.credits.map_or_else(String::new, |c| c.to_string()),
                        if course.counts_toward_gpa { "Yes" } else { "No" }.to_owned(),
                    ],
                )
            })
            .collect::<Vec<_>>()
    };

    view! {
        <AdminShell active=Some(Panel::Catalog)>
            <h1 class="page-title">"Catalog"</h1>

            <CatalogSection
                kind=CatalogKind::Major
                heading="Majors"
                columns=vec!["Code", "Name"]
                rows=Signal::derive(major_rows)
                error=Signal::derive(move || catalog.get().majors_error)
                editor=editor
                pending_delete=pending_delete
            />
            <CatalogSection
                kind=CatalogKind::Class
                heading="Classes"
                columns=vec!["Class code", "Name"]
                rows=Signal::derive(class_rows)
                error=Signal::derive(move || catalog.get().classes_error)
                editor=editor
                pending_delete=pending_delete
            />
            <CatalogSection
                kind=CatalogKind::Course
                heading="Courses"
                columns=vec!["Course code", "Name", "Credits", "GPA"]
                rows=Signal::derive(course_rows)
                error=Signal::derive(move || catalog.get().courses_error)
                editor=editor
                pending_delete=pending_delete
            />

            {move || {
                editor
                    .get()
                    .map(|(kind, id)| {
                        view! {
                            <CatalogEditorDialog
                                kind=kind
                                id=id
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
                    .map(|(kind, id)| {
                        view! {
                            <ConfirmDialog
                                title="Delete Catalog Entry"
                                message=format!("Delete {} {id}?", kind.noun())
                                on_confirm=confirm_delete
                                on_cancel=Callback::new(move |()| pending_delete.set(None))
                            />
                        }
                    })
            }}
        </AdminShell>
    }
}

/// One catalog table with add/edit/delete wiring; rows are pre-flattened
/// `(id, cells)` pairs.
#[component]
fn CatalogSection(
    kind: CatalogKind,
    heading: &'static str,
    columns: Vec<&'static str>,
    rows: Signal<Vec<(String, Vec<String>)>>,
    error: Signal<Option<String>>,
    editor: RwSignal<Option<(CatalogKind, Option<String>)>>,
    pending_delete: RwSignal<Option<(CatalogKind, String)>>,
) -> impl IntoView {
    view! {
        <section class="panel-section">
            <div class="panel-section__header">
                <h2 class="panel-section__title">{heading}</h2>
                <button class="btn btn--small" on:click=move |_| editor.set(Some((kind, None)))>
                    "+ Add"
                </button>
            </div>
            {move || {
                if let Some(message) = error.get() {
                    return view! { <div class="empty-placeholder">{message}</div> }.into_any();
                }
                let items = rows.get();
                if items.is_empty() {
                    return view! {
                        <div class="empty-placeholder">{format!("No {} entries.", kind.noun())}</div>
                    }
                        .into_any();
                }
                view! {
                    <table class="table table--compact">
                        <thead>
                            <tr>
                                {columns.iter().map(|c| view! { <th>{*c}</th> }).collect::<Vec<_>>()}
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {items
                                .into_iter()
                                .map(|(id, cells)| {
                                    let edit_id = id.clone();
                                    let delete_id = id.clone();
                                    view! {
                                        <tr>
                                            {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}
                                            <td class="table__cell--actions">
                                                <button
                                                    class="btn btn--small"
                                                    on:click=move |_| {
                                                        editor.set(Some((kind, Some(edit_id.clone()))))
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    on:click=move |_| {
                                                        pending_delete.set(Some((kind, delete_id.clone())))
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }}
        </section>
    }
}

/// Per-field editor state: the backing signals for one input row.
#[derive(Clone, Copy)]
struct FieldState {
    spec: FieldSpec,
    text: RwSignal<String>,
    flag: RwSignal<bool>,
}

/// Spec-table-driven editor; creating leaves the form blank, editing locks
/// the identifier field and pre-populates from server state.
#[component]
fn CatalogEditorDialog(
    kind: CatalogKind,
    id: Option<String>,
    on_cancel: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let ui = expect_context::<RwSignal<UiState>>();

    let fields: Vec<FieldState> = kind
        .fields()
        .iter()
        .map(|spec| FieldState {
            spec: *spec,
            text: RwSignal::new(String::new()),
            flag: RwSignal::new(false),
        })
        .collect();

    let editing = id.is_some();
    if let Some(item_id) = id.clone() {
        if let Some(first) = fields.first() {
            first.text.set(item_id.clone());
        }
        let fields = fields.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Ok(data) = api.get_json(kind.base_endpoint()).await {
                if let Some(item) = find_item(&data, &item_id) {
                    for field in &fields {
                        match field.spec.input {
                            FieldInput::Checkbox => {
                                field.flag.set(pick_bool(&item, &[field.spec.key]).unwrap_or(false));
                            }
                            FieldInput::Text | FieldInput::Number => {
                                field
                                    .text
                                    .set(pick_string(&item, &[field.spec.key]).unwrap_or_default());
                            }
                        }
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (fields, item_id, api);
    }

    let save_fields = fields.clone();
    let save_id = id.clone();
    let on_save = move |_| {
        let values: Vec<(FieldSpec, String, bool)> = save_fields
            .iter()
            .map(|f| (f.spec, f.text.get_untracked(), f.flag.get_untracked()))
            .collect();
        let body = catalog_payload(&values);
        let target = save_id.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match target {
                Some(item_id) => {
                    let url = format!("{}/{}", kind.base_endpoint(), encode_component(&item_id));
                    api.put_json(&url, &body).await
                }
                None => api.post_json(kind.base_endpoint(), &body).await,
            };
            match result {
                Ok(_) => {
                    show_toast(ui, ToastLevel::Success, "Catalog entry saved");
                    on_saved.run(());
                }
                Err(err) => show_toast(ui, ToastLevel::Danger, err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (body, target, ui, on_saved);
    };

    let title = format!("{} {}", kind.title(), if editing { "(Edit)" } else { "(Add)" });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                {fields
                    .iter()
                    .enumerate()
                    .map(|(index, field)| {
                        let field = *field;
                        let locked = editing && index == 0;
                        match field.spec.input {
                            FieldInput::Checkbox => {
                                view! {
                                    <label class="dialog__label dialog__label--check">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || field.flag.get()
                                            on:change=move |ev| field.flag.set(event_target_checked(&ev))
                                        />
                                        {field.spec.label}
                                    </label>
                                }
                                    .into_any()
                            }
                            input_kind => {
                                view! {
                                    <label class="dialog__label">
                                        {field.spec.label}
                                        <input
                                            class="dialog__input"
                                            type=if input_kind == FieldInput::Number { "number" } else { "text" }
                                            disabled=locked
                                            prop:value=move || field.text.get()
                                            on:input=move |ev| field.text.set(event_target_value(&ev))
                                        />
                                    </label>
                                }
                                    .into_any()
                            }
                        }
                    })
                    .collect::<Vec<_>>()}
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
