//! Dashboard panel: headline KPI tiles.

use leptos::prelude::*;

use crate::components::shell::AdminShell;
use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::types::DashboardKpis;
use crate::state::panels::PanelStores;
use crate::state::session::SessionState;
use crate::state::ui::Panel;
use crate::util::grades::percent_label;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let stores = expect_context::<PanelStores>();
    let dashboard = stores.dashboard;

    Effect::new(move || {
        if session.with(|s| s.identity.is_none()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // A failed fetch renders zero KPIs; `—` is reserved for the
            // signed-out state.
            let kpis = match api.get_json("/api/admin/dashboard-analytics").await {
                Ok(data) => DashboardKpis::from_value(&data),
                Err(_) => DashboardKpis::default(),
            };
            dashboard.update(|d| d.kpis = Some(kpis));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = api;
    });

    let students_label = move || {
        dashboard
            .get()
            .kpis
            .map_or_else(|| "—".to_owned(), |k| k.total_students.to_string())
    };
    let courses_label = move || {
        dashboard
            .get()
            .kpis
            .map_or_else(|| "—".to_owned(), |k| k.total_courses.to_string())
    };
    let pass_rate_label = move || {
        dashboard
            .get()
            .kpis
            .map_or_else(|| "—".to_owned(), |k| percent_label(k.pass_rate))
    };

    view! {
        <AdminShell active=Some(Panel::Dashboard)>
            <h1 class="page-title">"Dashboard"</h1>
            <div class="kpi-grid">
                <div class="kpi-card">
                    <span class="kpi-card__label">"Students"</span>
                    <span class="kpi-card__value">{students_label}</span>
                </div>
                <div class="kpi-card">
                    <span class="kpi-card__label">"Courses"</span>
                    <span class="kpi-card__value">{courses_label}</span>
                </div>
                <div class="kpi-card">
                    <span class="kpi-card__label">"Pass Rate"</span>
                    <span class="kpi-card__value">{pass_rate_label}</span>
                </div>
            </div>
        </AdminShell>
    }
}
