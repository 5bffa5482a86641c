//! Shared auth gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every panel must apply identical gating: no credential opens the login
//! dialog, a credential without a cached identity re-validates against the
//! identity endpoint before panel data loads.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Install the gate effect. Installed once by the shell so it covers
/// whichever panel is active.
pub fn install_auth_gate(api: ApiClient, session: RwSignal<SessionState>, ui: RwSignal<UiState>) {
    Effect::new(move || {
        let state = session.get();
        if state.token.is_none() {
            ui.update(|u| u.login_open = true);
            return;
        }
        if state.identity.is_none() {
            // Fresh page load: only the credential survived. Re-derive the
            // identity; failure drops the credential and reopens login.
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                if !api.refresh_identity().await {
                    ui.update(|u| u.login_open = true);
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = api;
        }
    });
}
