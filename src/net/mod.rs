//! Networking modules for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the session-aware HTTP client and its error taxonomy; `types`
//! normalizes the backend's loosely-typed payloads into the records the
//! panels render.

pub mod api;
pub mod types;
