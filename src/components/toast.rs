//! Transient notification stack.
//!
//! Toasts are the only user-facing error channel: read failures, write
//! failures and success confirmations all land here, so no failure is ever
//! fatal to the page.

use leptos::prelude::*;

use crate::state::ui::{ToastLevel, UiState};

const TOAST_DISMISS_MS: u64 = 2500;

/// Queue a toast and schedule its auto-dismissal.
pub fn show_toast(ui: RwSignal<UiState>, level: ToastLevel, message: impl Into<String>) {
    let message = message.into();
    let mut id = 0;
    ui.update(|u| id = u.push_toast(level, message));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DISMISS_MS)).await;
        ui.update(|u| u.dismiss_toast(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Fixed-position stack rendering the queued toasts; clicking dismisses.
#[component]
pub fn ToastStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-stack">
            {move || {
                ui.get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=toast.level.class()
                                on:click=move |_| ui.update(|u| u.dismiss_toast(id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
