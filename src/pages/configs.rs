//! Configs panel: system key/value editor with bulk save.

#[cfg(test)]
#[path = "configs_test.rs"]
mod configs_test;

use std::collections::HashMap;

use leptos::prelude::*;
use serde_json::Value;

use crate::components::shell::AdminShell;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::api::ApiClient;
use crate::net::types::ConfigEntry;
#[cfg(feature = "hydrate")]
use crate::net::types::config_entries;
use crate::state::panels::PanelStores;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastLevel;
use crate::state::ui::{Panel, UiState};

/// `{values: {key: value}}` body for the bulk save endpoint, with pending
/// edits layered over the loaded entries.
fn config_payload(entries: &[ConfigEntry], edits: &HashMap<String, String>) -> Value {
    let mut values = serde_json::Map::new();
    for entry in entries {
        let value = edits.get(&entry.key).unwrap_or(&entry.value);
        values.insert(entry.key.clone(), Value::String(value.clone()));
    }
    serde_json::json!({ "values": values })
}

#[component]
pub fn ConfigsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let stores = expect_context::<PanelStores>();
    let configs = stores.configs;

    // Inputs stay uncontrolled; keystrokes land here so typing never
    // re-renders the table.
    let edits = RwSignal::new(HashMap::<String, String>::new());

    Effect::new(move || {
        if session.with(|s| s.identity.is_none()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.get_json("/api/admin/configs").await {
                Ok(data) => {
                    edits.set(HashMap::new());
                    configs.update(|s| {
                        s.entries = config_entries(&data);
                        s.loaded = true;
                        s.error = None;
                    });
                }
                Err(err) => {
                    show_toast(ui, ToastLevel::Danger, format!("Failed to load configs: {err}"));
                    configs.update(|s| {
                        s.loaded = true;
                        s.error = Some(err.to_string());
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, ui);
    });

    let on_save = move |_| {
        let body = config_payload(&configs.get_untracked().entries, &edits.get_untracked());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.put_json("/api/admin/configs", &body).await {
                Ok(_) => show_toast(ui, ToastLevel::Success, "Configuration saved"),
                Err(err) => show_toast(ui, ToastLevel::Danger, err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = body;
    };

    view! {
        <AdminShell active=Some(Panel::Configs)>
            <h1 class="page-title">"Configs"</h1>
            <Show
                when=move || !configs.get().entries.is_empty()
                fallback=move || view! { <div class="empty-placeholder">"No configuration entries."</div> }
            >
                <div class="table-wrap">
                    <table class="table table--compact">
                        <thead>
                            <tr>
                                <th>"Key"</th>
                                <th>"Description"</th>
                                <th>"Value"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                configs
                                    .get()
                                    .entries
                                    .into_iter()
                                    .map(|entry| {
                                        let key = entry.key.clone();
                                        view! {
                                            <tr>
                                                <td>
                                                    <code>{entry.key.clone()}</code>
                                                </td>
                                                <td class="table__cell--small">{entry.description}</td>
                                                <td class="table__cell--input">
                                                    <input
                                                        class="dialog__input"
                                                        value=entry.value
                                                        on:input=move |ev| {
                                                            let value = event_target_value(&ev);
                                                            edits
                                                                .update(|m| {
                                                                    m.insert(key.clone(), value);
                                                                });
                                                        }
                                                    />
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>
                <div class="page-actions">
                    <button class="btn btn--primary" on:click=on_save>
                        "Save"
                    </button>
                </div>
            </Show>
        </AdminShell>
    }
}
