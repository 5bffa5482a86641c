//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and shared dialogs while reading/writing
//! shared state from Leptos context providers; panel-specific rendering
//! stays in `pages`.

pub mod confirm;
pub mod shell;
pub mod sidebar;
pub mod toast;
pub mod topbar;
