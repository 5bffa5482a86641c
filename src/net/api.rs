//! Session-aware REST client for the admin API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side and
//! native test builds get stubs returning errors, since these endpoints are
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<Value, ApiError>`. An unauthorized or
//! forbidden response clears the stored credential and opens the login
//! dialog exactly once, then surfaces the failure to the caller — callers
//! never retry on their own. Other failures carry the best message the
//! response body offered.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;
use serde_json::Value;
use thiserror::Error;

#[cfg(feature = "hydrate")]
use crate::net::types::{extract_login_token, login_identity, me_identity};
use crate::state::session::{BrowserStore, Identity, SessionState, clear_credential};
use crate::state::ui::UiState;

/// Failure raised by an API call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// 401/403; the credential has already been cleared and the login
    /// dialog opened. Displays as the bare status code.
    #[error("{0}")]
    Unauthorized(u16),
    /// Any other non-success status, with the server's message when the
    /// body carried one.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// Transport failure before a status was available.
    #[error("{0}")]
    Network(String),
    /// A 2xx response missing a field the contract promises.
    #[error("{0}")]
    Payload(String),
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

/// Best-effort error message from a response body: conventional fields
/// first, then the bare status code.
pub(crate) fn error_message(data: &Value, status: u16) -> String {
    for key in ["message", "error", "msg"] {
        if let Some(message) = data.get(key).and_then(Value::as_str) {
            if !message.is_empty() {
                return message.to_owned();
            }
        }
    }
    status.to_string()
}

/// Uniform response parsing: JSON when declared, raw text otherwise, an
/// empty object when parsing fails. Non-success statuses become `Http`
/// failures carrying the extracted message.
pub(crate) fn parse_body(status: u16, content_type: &str, text: &str) -> Result<Value, ApiError> {
    let is_json = content_type.contains("application/json");
    let data = if is_json {
        serde_json::from_str(text).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
    } else if text.is_empty() {
        Value::Object(serde_json::Map::new())
    } else {
        Value::String(text.to_owned())
    };
    if !(200..300).contains(&status) {
        return Err(ApiError::Http {
            status,
            message: error_message(&data, status),
        });
    }
    Ok(data)
}

/// Percent-encode one query-string component (RFC 3986 unreserved kept).
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Explicit session-aware API client, provided through context and handed
/// to every panel — construction wires the session dependency, there is no
/// ambient singleton.
#[derive(Clone, Copy)]
pub struct ApiClient {
    session: RwSignal<SessionState>,
    ui: RwSignal<UiState>,
}

impl ApiClient {
    pub fn new(session: RwSignal<SessionState>, ui: RwSignal<UiState>) -> Self {
        Self { session, ui }
    }

    pub fn session(&self) -> RwSignal<SessionState> {
        self.session
    }

    /// Drop the credential and identity without opening the login dialog.
    pub fn sign_out_quietly(&self) {
        clear_credential(&BrowserStore);
        self.session.update(|s| {
            s.token = None;
            s.identity = None;
        });
    }

    /// Unauthorized-response handling: clear the credential and bring up
    /// the login dialog.
    pub fn invalidate(&self) {
        self.sign_out_quietly();
        self.ui.update(|u| u.login_open = true);
    }

    #[cfg(feature = "hydrate")]
    fn authorized(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match self.session.get_untracked().token {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    #[cfg(feature = "hydrate")]
    async fn exchange(
        request: Result<gloo_net::http::Request, gloo_net::Error>,
    ) -> Result<(u16, String, String), ApiError> {
        let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let content_type = response.headers().get("content-type").unwrap_or_default();
        let text = response.text().await.unwrap_or_default();
        Ok((status, content_type, text))
    }

    /// Auth-guarded request path used by every admin endpoint.
    #[cfg(feature = "hydrate")]
    async fn run(
        &self,
        request: Result<gloo_net::http::Request, gloo_net::Error>,
    ) -> Result<Value, ApiError> {
        let (status, content_type, text) = Self::exchange(request).await?;
        if status == 401 || status == 403 {
            self.invalidate();
            return Err(ApiError::Unauthorized(status));
        }
        parse_body(status, &content_type, &text)
    }

    /// Request path for the auth endpoints themselves, where 401 is an
    /// answer rather than a session-invalidation event.
    #[cfg(feature = "hydrate")]
    async fn run_public(
        &self,
        request: Result<gloo_net::http::Request, gloo_net::Error>,
    ) -> Result<Value, ApiError> {
        let (status, content_type, text) = Self::exchange(request).await?;
        parse_body(status, &content_type, &text)
    }

    pub async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.run(self.authorized(gloo_net::http::Request::get(path)).build())
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(unavailable())
        }
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.run(self.authorized(gloo_net::http::Request::post(path)).json(body))
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(unavailable())
        }
    }

    pub async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.run(self.authorized(gloo_net::http::Request::put(path)).json(body))
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(unavailable())
        }
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.run(self.authorized(gloo_net::http::Request::delete(path)).build())
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(unavailable())
        }
    }

    /// Submit a file as `multipart/form-data` under the `file` field; query
    /// parameters are already part of `path`.
    #[cfg(feature = "hydrate")]
    pub async fn post_multipart(&self, path: &str, file: &web_sys::File) -> Result<Value, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("multipart form unavailable".to_owned()))?;
        form.append_with_blob("file", file)
            .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;
        self.run(self.authorized(gloo_net::http::Request::post(path)).body(form))
            .await
    }

    /// Submit credentials; on a 404 retry once against the legacy alias
    /// route. Returns the issued token and the best-known identity.
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, Identity), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({ "username": username, "password": password });
            let mut outcome = self
                .run_public(gloo_net::http::Request::post("/api/auth/login").json(&body))
                .await;
            if matches!(&outcome, Err(ApiError::Http { status: 404, .. })) {
                outcome = self
                    .run_public(gloo_net::http::Request::post("/login").json(&body))
                    .await;
            }
            let data = outcome?;
            let token = extract_login_token(&data)
                .ok_or_else(|| ApiError::Payload("login response carried no access token".to_owned()))?;
            Ok((token, login_identity(&data, username)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password);
            Err(unavailable())
        }
    }

    /// Ask the server who the stored credential belongs to and cache the
    /// identity. Any failure — 401 included — means "not signed in": the
    /// credential is dropped and `false` returned, nothing is raised.
    pub async fn refresh_identity(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let outcome = self
                .run_public(self.authorized(gloo_net::http::Request::get("/api/auth/me")).build())
                .await;
            match outcome {
                Ok(data) => {
                    let identity = me_identity(&data);
                    self.session.update(|s| s.identity = Some(identity));
                    true
                }
                Err(_) => {
                    self.sign_out_quietly();
                    false
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}
