//! REST API helpers for communicating with the iReserve backend.
//!
//! In the browser (`csr`): real HTTP calls via `gloo-net`, each carrying the
//! session's current `Authorization` header.
//! Native builds: stubs returning an error since the session only talks to
//! the backend from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. A 401 from any endpoint
//! ends the session through `SessionHandle::handle_unauthorized` before the
//! error is returned, so the header never outlives a rejected token.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::Value;
use session::SessionHandle;

/// Endpoint answering with the signed-in user when the token is still good.
pub const CURRENT_USER_PATH: &str = "/auth/me";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(method: ApiMethod, status: u16) -> String {
    format!("{method:?} request failed: {status}").to_lowercase()
}

#[cfg(any(test, feature = "csr"))]
const SESSION_EXPIRED_MESSAGE: &str = "session expired; please sign in again";

/// Send one request and decode the JSON reply.
pub async fn send_json<T: DeserializeOwned>(
    handle: &SessionHandle,
    method: ApiMethod,
    path: &str,
    body: Option<&Value>,
) -> Result<T, String> {
    #[cfg(feature = "csr")]
    {
        use gloo_net::http::Request;

        let url = handle.config().endpoint(path);
        let builder = match method {
            ApiMethod::Get => Request::get(&url),
            ApiMethod::Post => Request::post(&url),
            ApiMethod::Put => Request::put(&url),
            ApiMethod::Patch => Request::patch(&url),
            ApiMethod::Delete => Request::delete(&url),
        };
        let builder = match handle.auth_header().value() {
            Some(value) => builder.header(session::authenticator::AUTHORIZATION, &value),
            None => builder,
        };
        let sent = match body {
            Some(json) => builder.json(json).map_err(|e| e.to_string())?.send().await,
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| e.to_string())?;

        if session::is_unauthorized(resp.status()) {
            handle.handle_unauthorized();
            return Err(SESSION_EXPIRED_MESSAGE.to_owned());
        }
        if !resp.ok() {
            return Err(request_failed_message(method, resp.status()));
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (handle, method, path, body);
        Err("api requests are only available in the browser".to_owned())
    }
}

/// GET `path` and decode the JSON reply.
pub async fn get_json<T: DeserializeOwned>(handle: &SessionHandle, path: &str) -> Result<T, String> {
    send_json(handle, ApiMethod::Get, path, None).await
}

/// Ask the backend whether the stored token is still accepted. A revoked
/// token comes back as 401, which signs the session out.
pub async fn confirm_session(handle: &SessionHandle) -> Result<(), String> {
    get_json::<Value>(handle, CURRENT_USER_PATH).await.map(|_| ())
}
