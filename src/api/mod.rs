//! API Client
//!
//! HTTP bindings to the checklist backend, organized by resource. This module
//! owns the fetch plumbing: JSON headers, bearer-token attachment and error
//! normalization. Failures never retry; a failed call surfaces immediately.

pub mod auth;
pub mod checklist;
pub mod types;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config;
use crate::error::{AppError, AppResult};
use crate::token;
use types::ErrorResponse;

fn transport(fallback: &str) -> AppError {
    AppError::transport(None, fallback)
}

/// Execute one request against the backend and return the response body text.
///
/// Non-2xx responses are normalized into `AppError::Transport`, preferring the
/// server's structured `detail` message over the per-operation fallback. The
/// stored token, when present, is attached as a bearer header; 401 gets no
/// special handling here (session verification is the session store's job).
async fn send_raw(
    method: &str,
    path: &str,
    body: Option<String>,
    fallback: &str,
) -> AppResult<String> {
    let url = format!("{}{}", config::api_base_url(), path);

    let headers = Headers::new().map_err(|_| transport(fallback))?;
    let _ = headers.set("Accept", "application/json");
    if body.is_some() {
        let _ = headers.set("Content-Type", "application/json");
    }
    if let Some(token) = token::load() {
        let _ = headers.set("Authorization", &format!("Bearer {}", token));
    }

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_headers(&headers);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|_| transport(fallback))?;
    let window = web_sys::window().ok_or_else(|| transport(fallback))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| transport(fallback))?;
    let resp: Response = resp_value.dyn_into().map_err(|_| transport(fallback))?;

    let text = match resp.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    if !resp.ok() {
        let detail = serde_json::from_str::<ErrorResponse>(&text)
            .ok()
            .map(|e| e.detail);
        return Err(AppError::transport(detail, fallback));
    }
    Ok(text)
}

fn parse<T: DeserializeOwned>(text: &str, fallback: &str) -> AppResult<T> {
    serde_json::from_str(text).map_err(|_| transport(fallback))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str, fallback: &str) -> AppResult<T> {
    let text = send_raw("GET", path, None, fallback).await?;
    parse(&text, fallback)
}

pub(crate) async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: &B,
    fallback: &str,
) -> AppResult<T> {
    let body = serde_json::to_string(body).map_err(|_| transport(fallback))?;
    let text = send_raw(method, path, Some(body), fallback).await?;
    parse(&text, fallback)
}

/// Bodyless request that still returns a JSON entity (the toggle PATCH)
pub(crate) async fn send_empty<T: DeserializeOwned>(
    method: &str,
    path: &str,
    fallback: &str,
) -> AppResult<T> {
    let text = send_raw(method, path, None, fallback).await?;
    parse(&text, fallback)
}

/// DELETE; the 204 body is discarded
pub(crate) async fn delete(path: &str, fallback: &str) -> AppResult<()> {
    send_raw("DELETE", path, None, fallback).await.map(|_| ())
}
