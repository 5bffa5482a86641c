//! Sidebar navigation between panels.

use leptos::prelude::*;

use crate::state::ui::{Panel, UiState};

/// Panel navigation; the active panel's link is highlighted, and the
/// whole rail collapses behind the topbar toggle on narrow screens.
#[component]
pub fn Sidebar(active: Option<Panel>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class=move || {
            if ui.get().sidebar_open { "sidebar sidebar--open" } else { "sidebar" }
        }>
            <div class="sidebar__brand">"RegDesk"</div>
            {Panel::ALL
                .into_iter()
                .map(|panel| {
                    let class = if active == Some(panel) {
                        "sidebar__link sidebar__link--active"
                    } else {
                        "sidebar__link"
                    };
                    view! {
                        <a class=class href=panel.href()>
                            {panel.title()}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
