//! HTTP transport for upload requests via `window.fetch`.
//!
//! Each request is sent independently. Nothing is cancelled when a new
//! drop arrives while an earlier upload is still in flight; the app
//! discards the superseded response instead (see
//! [`dropcycle_core::LatestUpload`]).

use dropcycle_core::{HttpResponse, UploadRequest};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Errors that keep a request from producing an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// A browser API call returned an error (including network failures,
    /// which `fetch` reports as a rejected promise).
    #[error("browser API error: {0}")]
    JsError(String),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<JsValue> for TransportError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Send `request` and wait for its response.
///
/// Non-2xx statuses are a normal response with `ok == false`, not an
/// error.
///
/// # Errors
///
/// Returns [`TransportError::Encode`] if the body cannot be serialized
/// and [`TransportError::JsError`] if `fetch` rejects or any browser API
/// call fails.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn send(request: &UploadRequest) -> Result<HttpResponse, TransportError> {
    let window =
        web_sys::window().ok_or_else(|| TransportError::JsError("no global window".into()))?;

    let body = request.body_json()?;
    let headers = web_sys::Headers::new()?;
    headers.set("Content-Type", "application/json")?;

    let init = web_sys::RequestInit::new();
    init.set_method(request.method.as_str());
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    let fetch_request = web_sys::Request::new_with_str_and_init(&request.url, &init)?;
    let value = JsFuture::from(window.fetch_with_request(&fetch_request)).await?;
    let response: web_sys::Response = value
        .dyn_into()
        .map_err(|e| TransportError::JsError(format!("fetch did not return a Response: {e:?}")))?;

    debug!(url = %request.url, status = response.status(), "upload response");

    Ok(HttpResponse {
        request_url: request.url.clone(),
        ok: response.ok(),
        status: response.status(),
    })
}

/// [`send`], turning transport errors into a status-0 failure response
/// so the session sees every request complete.
#[allow(clippy::future_not_send)]
pub async fn send_or_fail(request: &UploadRequest) -> HttpResponse {
    match send(request).await {
        Ok(response) => response,
        Err(e) => {
            warn!(url = %request.url, error = %e, "upload did not get a response");
            HttpResponse::network_failure(request.url.as_str())
        }
    }
}
