//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::shell::AdminShell;
use crate::net::api::ApiClient;
use crate::pages::{
    catalog::CatalogPage, configs::ConfigsPage, dashboard::DashboardPage, import::ImportPage,
    logs::LogsPage, students::StudentsPage, users::UsersPage, warnings::WarningsPage,
};
use crate::state::panels::PanelStores;
use crate::state::session::{BrowserStore, SessionState, load_credential};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, chrome and panel-state contexts plus the API
/// client, restores persisted state (credential, theme), and sets up
/// client-side routing — one route per panel.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    let stores = PanelStores::new();
    let api = ApiClient::new(session, ui);

    provide_context(session);
    provide_context(ui);
    provide_context(stores);
    provide_context(api);

    // Boot: apply the persisted theme and restore the credential (legacy
    // key migration included). Identity is re-derived by the auth gate.
    Effect::new(move || {
        let mode = crate::util::theme::read_preference();
        crate::util::theme::apply(mode);
        ui.update(|u| u.theme = mode);
        if let Some(token) = load_credential(&BrowserStore) {
            session.update(|s| s.token = Some(token));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/regdesk.css"/>
        <Title text="RegDesk"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("import") view=ImportPage/>
                <Route path=StaticSegment("students") view=StudentsPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("configs") view=ConfigsPage/>
                <Route path=StaticSegment("warnings") view=WarningsPage/>
                <Route path=StaticSegment("logs") view=LogsPage/>
                <Route path=StaticSegment("catalog") view=CatalogPage/>
            </Routes>
        </Router>
    }
}

/// Unknown page identifiers render the shell with nothing loaded.
#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <AdminShell active=None>
            <div class="empty-placeholder">"Page not found."</div>
        </AdminShell>
    }
}
