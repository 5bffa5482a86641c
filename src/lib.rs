//! # regdesk
//!
//! Leptos + WASM admin console for an academic-records backend. The client
//! authenticates an administrator, routes between panels (dashboard,
//! import, students, users, configs, warnings, logs, catalog), and renders
//! server JSON into tables and modal editors, issuing CRUD calls back to
//! the REST API.
//!
//! This crate contains pages, components, application state, and the
//! session-aware network layer. The backend itself is a separate service
//! and out of scope here.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
