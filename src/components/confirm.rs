//! Shared delete-confirmation dialog.
//!
//! Every destructive action routes through this component so declining is
//! always possible before any request is issued.

use leptos::prelude::*;

/// Modal confirmation; `on_confirm` fires only on the explicit Delete
/// button, backdrop clicks cancel.
#[component]
pub fn ConfirmDialog(
    title: &'static str,
    message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__danger">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
