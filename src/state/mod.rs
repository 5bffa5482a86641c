//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `ui` chrome, per-panel data) so
//! individual components can depend on small focused models. Everything is
//! provided through Leptos context — there is no ambient global session.

pub mod panels;
pub mod session;
pub mod ui;
