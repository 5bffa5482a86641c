//! Import-log panel: audit trail of past import runs.

use leptos::prelude::*;

use crate::components::shell::AdminShell;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::types::ImportLogRecord;
use crate::state::panels::PanelStores;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastLevel;
use crate::state::ui::{Panel, UiState};

#[component]
pub fn LogsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let stores = expect_context::<PanelStores>();
    let logs = stores.logs;

    Effect::new(move || {
        if session.with(|s| s.identity.is_none()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.get_json("/api/admin/import/logs").await {
                Ok(data) => logs.update(|s| {
                    s.items = ImportLogRecord::list(&data);
                    s.loaded = true;
                    s.error = None;
                }),
                Err(err) => {
                    show_toast(ui, ToastLevel::Danger, format!("Failed to load logs: {err}"));
                    logs.update(|s| {
                        s.loaded = true;
                        s.error = Some(err.to_string());
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, ui);
    });

    view! {
        <AdminShell active=Some(Panel::Logs)>
            <h1 class="page-title">"Import Logs"</h1>
            <Show
                when=move || !logs.get().items.is_empty()
                fallback=move || view! { <div class="empty-placeholder">"No log entries yet."</div> }
            >
                <div class="table-wrap">
                    <table class="table table--compact">
                        <thead>
                            <tr>
                                <th>"Time"</th>
                                <th>"User"</th>
                                <th>"Endpoint"</th>
                                <th>"File"</th>
                                <th>"Summary"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                logs.get()
                                    .items
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <tr>
                                                <td>{entry.at}</td>
                                                <td>{entry.actor}</td>
                                                <td>{entry.endpoint}</td>
                                                <td class="table__cell--small">{entry.filename}</td>
                                                <td class="table__cell--small">{entry.summary}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </AdminShell>
    }
}
