//! Browser API failures and their mapping onto core errors.

use darkscan_core::{AnalysisError, ExportError};
use wasm_bindgen::JsValue;

/// A browser API call failed or a required object was missing.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

impl From<BrowserError> for ExportError {
    fn from(err: BrowserError) -> Self {
        match err {
            BrowserError::JsError(msg) => Self::Browser(msg),
        }
    }
}

impl From<BrowserError> for AnalysisError {
    fn from(err: BrowserError) -> Self {
        Self::Network(err.to_string())
    }
}

/// `window`, or an error saying it is missing.
pub(crate) fn window() -> Result<web_sys::Window, BrowserError> {
    web_sys::window().ok_or_else(|| BrowserError::JsError("no global window".into()))
}
