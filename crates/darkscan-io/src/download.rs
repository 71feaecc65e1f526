//! Report download via Blob URLs.
//!
//! Dioxus has no built-in file download API. [`BrowserDownload`]
//! creates a `Blob`, generates an object URL for it, and
//! programmatically clicks a temporary `<a download>` element. The
//! object URL is the temporary handle that
//! [`darkscan_core::save_report`] releases once the click has been
//! dispatched.

use darkscan_core::{DownloadTarget, ExportError, Report};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

use crate::error::{BrowserError, window};

/// Saves reports through the browser's download flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserDownload;

impl DownloadTarget for BrowserDownload {
    /// The `blob:` object URL.
    type Handle = String;

    fn acquire(&self, report: &Report) -> Result<String, ExportError> {
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(&report.contents));

        let opts = BlobPropertyBag::new();
        opts.set_type(report.mime_type);

        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts)
            .map_err(BrowserError::from)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(BrowserError::from)?;
        Ok(url)
    }

    fn trigger(&self, url: &String, report: &Report) -> Result<(), ExportError> {
        click_download_link(url, &report.filename)?;
        Ok(())
    }

    fn release(&self, url: &String) {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            debug!(error = ?e, "failed to revoke object URL");
        }
    }
}

fn click_download_link(url: &str, filename: &str) -> Result<(), BrowserError> {
    let document = window()?
        .document()
        .ok_or_else(|| BrowserError::JsError("no document".into()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| BrowserError::JsError(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| BrowserError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // The download is already initiated; a failed removal is not a
    // failed download.
    let _ = body.remove_child(&anchor);

    Ok(())
}
