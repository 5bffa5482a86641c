//! Topbar chrome: sidebar toggle, theme cycle, identity, login/logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast::show_toast;
use crate::net::api::ApiClient;
use crate::state::panels::PanelStores;
use crate::state::session::SessionState;
use crate::state::ui::{ToastLevel, UiState};

#[component]
pub fn Topbar() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let stores = expect_context::<PanelStores>();
    let navigate = use_navigate();

    let on_theme = move |_| {
        let next = crate::util::theme::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    let on_login = move |_| ui.update(|u| u.login_open = true);

    // Logout clears the credential and resets every panel, whichever one
    // is active, then lands back on the dashboard.
    let navigate_home = navigate.clone();
    let on_logout = move |_| {
        api.sign_out_quietly();
        stores.clear_all();
        show_toast(ui, ToastLevel::Info, "Signed out");
        navigate_home("/", NavigateOptions::default());
    };

    view! {
        <header class="topbar">
            <button
                class="btn topbar__nav-toggle"
                on:click=move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open)
                title="Toggle navigation"
            >
                "☰"
            </button>
            <span class="topbar__spacer"></span>
            <button class="btn topbar__theme-toggle" on:click=on_theme title="Cycle theme">
                {move || format!("Theme: {}", ui.get().theme.as_str())}
            </button>
            <span class="topbar__whoami">{move || session.get().identity_label()}</span>
            <Show
                when=move || session.get().is_authenticated()
                fallback=move || {
                    view! {
                        <button class="btn topbar__login" on:click=on_login>
                            "Login"
                        </button>
                    }
                }
            >
                <button class="btn topbar__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
