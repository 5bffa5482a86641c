//! Login dialog gating the whole console.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::toast::show_toast;
use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::state::session::{BrowserStore, save_credential};
use crate::state::session::SessionState;
use crate::state::ui::{ToastLevel, UiState};

/// Strip a trailing `@domain` suffix — admins habitually paste their full
/// institutional email into the username field.
fn normalize_username(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.split_once('@') {
        Some((local, _)) => local.to_owned(),
        None => trimmed.to_owned(),
    }
}

/// Trim and require both fields before any request is sent.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((normalize_username(username), password.to_owned()))
}

/// Modal login form. Opened by the auth gate and by unauthorized
/// responses; closes itself only on a successful sign-in.
#[component]
pub fn LoginDialog() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let (user, pass) =
            match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
                Ok(pair) => pair,
                Err(message) => {
                    show_toast(ui, ToastLevel::Warning, message);
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = api.login(&user, &pass).await;
            busy.set(false);
            match outcome {
                Ok((token, identity)) => {
                    if !save_credential(&BrowserStore, &token) {
                        show_toast(ui, ToastLevel::Danger, "Login failed: empty access token");
                        return;
                    }
                    session.update(|s| {
                        s.token = Some(token);
                        s.identity = Some(identity);
                    });
                    ui.update(|u| u.login_open = false);
                    password.set(String::new());
                    show_toast(ui, ToastLevel::Success, "Signed in");
                }
                Err(err) => show_toast(ui, ToastLevel::Danger, format!("Login failed: {err}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass, api, session);
            busy.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--login" on:click=move |ev| ev.stop_propagation()>
                <h2>"Sign In"</h2>
                <form
                    class="login-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="dialog__label">
                        "Username or email"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="admin@vui.edu.vn"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Password"
                        <input
                            class="dialog__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
