//! Users panel: read-only account listing.

use leptos::prelude::*;

use crate::components::shell::AdminShell;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::types::UserRecord;
use crate::state::panels::PanelStores;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastLevel;
use crate::state::ui::{Panel, UiState};

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let stores = expect_context::<PanelStores>();
    let users = stores.users;

    Effect::new(move || {
        if session.with(|s| s.identity.is_none()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.get_json("/api/admin/users").await {
                Ok(data) => users.update(|s| {
                    s.items = UserRecord::list(&data);
                    s.loaded = true;
                    s.error = None;
                }),
                Err(err) => {
                    show_toast(ui, ToastLevel::Danger, format!("Failed to load users: {err}"));
                    users.update(|s| {
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
        <AdminShell active=Some(Panel::Users)>
            <h1 class="page-title">"Users"</h1>
            <Show
                when=move || !users.get().items.is_empty()
                fallback=move || view! { <div class="empty-placeholder">"No users."</div> }
            >
                <div class="table-wrap">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Username"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                users
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|user| {
                                        view! {
                                            <tr>
                                                <td>{user.username}</td>
                                                <td>{user.email}</td>
                                                <td>{user.role}</td>
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
