//! Warnings panel: rule management, on-demand scan, and case listing.

#[cfg(test)]
#[path = "warnings_test.rs"]
mod warnings_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::components::shell::AdminShell;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::api::ApiClient;
use crate::net::types::WarningCaseRecord;
#[cfg(feature = "hydrate")]
use crate::net::types::{WarningRuleRecord, pick_i64};
use crate::state::panels::PanelStores;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastLevel;
use crate::state::ui::{Panel, UiState};

/// How a warning case is rendered: badge severity plus phrasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseSeverity {
    High,
    Medium,
}

impl CaseSeverity {
    pub fn badge_class(self) -> &'static str {
        match self {
            CaseSeverity::High => "badge badge--danger",
            CaseSeverity::Medium => "badge badge--warning",
        }
    }
}

/// Severity and human phrasing for a case, keyed on the rule code.
/// Unrecognized codes fall back to the raw value with high severity.
fn present_case(case: &WarningCaseRecord) -> (CaseSeverity, String) {
    match case.code.as_str() {
        "GPA_BELOW" => (
            CaseSeverity::High,
            format!("GPA: {} (< {})", case.value, case.threshold),
        ),
        "AVG_BELOW" => (
            CaseSeverity::High,
            format!("Average: {} (< {})", case.value, case.threshold),
        ),
        "FAIL_COUNT" => (
            CaseSeverity::Medium,
            format!("Failed courses: {} (>= {})", case.value, case.threshold),
        ),
        "DEBT_OVER" => (
            CaseSeverity::Medium,
            format!("Credit debt: {} (>= {})", case.value, case.threshold),
        ),
        _ => (CaseSeverity::High, case.value.clone()),
    }
}

/// Parse a `CODE:threshold` rule expression into the create body. A bare
/// code (or an empty threshold) gets threshold 0.
fn rule_payload(expr: &str) -> Option<Value> {
    let expr = expr.trim();
    if expr.is_empty() {
        return None;
    }
    let body = match expr.split_once(':') {
        Some((code, threshold)) if !threshold.trim().is_empty() => {
            let code = code.trim();
            serde_json::json!({
                "Code": code.to_uppercase(),
                "Name": code,
                "Threshold": threshold.trim().parse::<f64>().unwrap_or(0.0),
            })
        }
        _ => serde_json::json!({
            "Code": expr.to_uppercase(),
            "Name": expr,
            "Threshold": 0,
        }),
    };
    Some(body)
}

#[component]
pub fn WarningsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let stores = expect_context::<PanelStores>();
    let warnings = stores.warnings;

    let rule_expr = RwSignal::new(String::new());
    let scanning = RwSignal::new(false);
    let refresh = RwSignal::new(0u32);

    Effect::new(move || {
        refresh.get();
        if session.with(|s| s.identity.is_none()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let (rules, cases) = futures::join!(
                api.get_json("/api/admin/warning/rules"),
                api.get_json("/api/admin/warning/cases"),
            );
            warnings.update(|s| {
                match rules {
                    Ok(data) => {
                        s.rules = WarningRuleRecord::list(&data);
                        s.rules_error = None;
                    }
                    Err(err) => s.rules_error = Some(err.to_string()),
                }
                match cases {
                    Ok(data) => {
                        s.cases = WarningCaseRecord::list(&data);
                        s.cases_error = None;
                    }
                    Err(err) => s.cases_error = Some(err.to_string()),
                }
                s.loaded = true;
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = api;
    });

    let on_add_rule = move |_| {
        let Some(body) = rule_payload(&rule_expr.get_untracked()) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.post_json("/api/admin/warning/rules", &body).await {
                Ok(_) => {
                    show_toast(ui, ToastLevel::Success, "Rule added");
                    rule_expr.set(String::new());
                    refresh.update(|n| *n += 1);
                }
                Err(err) => show_toast(ui, ToastLevel::Danger, err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (body, ui);
    };

    let on_scan = move |_| {
        if scanning.get_untracked() {
            return;
        }
        scanning.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = api
                .post_json("/api/admin/warning/scan", &serde_json::json!({}))
                .await;
            scanning.set(false);
            match outcome {
                Ok(data) => {
                    let created = pick_i64(&data, &["created"]).unwrap_or(0);
                    show_toast(
                        ui,
                        ToastLevel::Success,
                        format!("Scan finished. {created} new warnings."),
                    );
                    refresh.update(|n| *n += 1);
                }
                Err(err) => show_toast(ui, ToastLevel::Danger, err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        scanning.set(false);
    };

    view! {
        <AdminShell active=Some(Panel::Warnings)>
            <h1 class="page-title">"Warnings"</h1>

            <section class="panel-section">
                <h2 class="panel-section__title">"Rules"</h2>
                <div class="rule-form">
                    <input
                        class="dialog__input"
                        placeholder="e.g. GPA_BELOW:2.0"
                        prop:value=move || rule_expr.get()
                        on:input=move |ev| rule_expr.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" on:click=on_add_rule>
                        "Add Rule"
                    </button>
                    <button class="btn" on:click=on_scan disabled=move || scanning.get()>
                        {move || if scanning.get() { "Scanning..." } else { "Run Scan" }}
                    </button>
                </div>
                <Show
                    when=move || !warnings.get().rules.is_empty()
                    fallback=move || view! { <div class="empty-placeholder">"No rules defined."</div> }
                >
                    <table class="table table--compact">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Rule"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                warnings
                                    .get()
                                    .rules
                                    .into_iter()
                                    .map(|rule| {
                                        view! {
                                            <tr>
                                                <td>{rule.id}</td>
                                                <td>{rule.label}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </section>

            <section class="panel-section">
                <h2 class="panel-section__title">"Cases"</h2>
                <Show
                    when=move || !warnings.get().cases.is_empty()
                    fallback=move || view! { <div class="empty-placeholder">"No warnings."</div> }
                >
                    <div class="table-wrap">
                        <table class="table table--compact">
                            <thead>
                                <tr>
                                    <th>"Student"</th>
                                    <th>"Warning"</th>
                                    <th>"Detail"</th>
                                    <th>"Time"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    warnings
                                        .get()
                                        .cases
                                        .into_iter()
                                        .map(|case| {
                                            let (severity, detail) = present_case(&case);
                                            view! {
                                                <tr>
                                                    <td>{case.student_id.clone()}</td>
                                                    <td>
                                                        <span class=severity
                                                            .badge_class()>{case.display_code.clone()}</span>
                                                    </td>
                                                    <td>{detail}</td>
                                                    <td class="table__cell--small">{case.at.clone()}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </div>
                </Show>
            </section>
        </AdminShell>
    }
}
