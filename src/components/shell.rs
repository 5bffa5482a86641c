//! Page chrome shared by every panel route.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::components::toast::ToastStack;
use crate::components::topbar::Topbar;
use crate::net::api::ApiClient;
use crate::pages::login::LoginDialog;
use crate::state::session::SessionState;
use crate::state::ui::{Panel, UiState};
use crate::util::auth::install_auth_gate;

/// Layout wrapper rendered by each panel page: sidebar + topbar chrome,
/// the toast stack, and the login dialog overlay. Installing the auth gate
/// here means every panel is gated identically.
#[component]
pub fn AdminShell(active: Option<Panel>, children: Children) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    install_auth_gate(api, session, ui);

    view! {
        <div class="shell">
            <Sidebar active=active/>
            <div class="shell__main">
                <Topbar/>
                <main class="shell__content">{children()}</main>
            </div>
            <ToastStack/>
            <Show when=move || ui.get().login_open>
                <LoginDialog/>
            </Show>
        </div>
    }
}
