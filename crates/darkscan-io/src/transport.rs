//! Multipart upload via `window.fetch`.

use darkscan_core::{AnalysisError, AnalysisRequest, HttpResponse, SelectedFile, Transport};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::{BrowserError, window};

/// Sends analysis requests with the browser's `fetch`.
///
/// No timeout is applied beyond the browser's own, and requests are
/// never aborted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    #[allow(clippy::future_not_send)] // WASM is single-threaded; JsFuture is !Send
    async fn send(&self, request: AnalysisRequest) -> Result<HttpResponse, AnalysisError> {
        Ok(post_form(request).await?)
    }
}

/// POST the file as the single part of a `FormData` body.
///
/// The body of a non-2xx response is not read.
#[allow(clippy::future_not_send)] // WASM is single-threaded; JsFuture is !Send
async fn post_form(request: AnalysisRequest) -> Result<HttpResponse, BrowserError> {
    let window = window()?;
    let AnalysisRequest {
        endpoint,
        field_name,
        file: SelectedFile { name, bytes },
    } = request;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes.as_slice()));
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)?;
    // The blob holds its own copy.
    drop(bytes);

    let form = web_sys::FormData::new()?;
    form.append_with_blob_and_filename(&field_name, &blob, &name)?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);
    let fetch_request = web_sys::Request::new_with_str_and_init(&endpoint, &init)?;

    let value = JsFuture::from(window.fetch_with_request(&fetch_request)).await?;
    let response: web_sys::Response = value
        .dyn_into()
        .map_err(|_| BrowserError::JsError("fetch did not resolve to a Response".into()))?;

    let status = response.status();
    let body = if response.ok() {
        JsFuture::from(response.text()?)
            .await?
            .as_string()
            .unwrap_or_default()
    } else {
        String::new()
    };

    Ok(HttpResponse { status, body })
}
