//! darkscan-io: Browser I/O and Dioxus component library.
//!
//! Implements the seams of `darkscan-core` against browser APIs
//! (`fetch` with `FormData`, Blob downloads, `window.alert`) and
//! provides the upload, results and export components for the
//! darkscan web application.
//!
//! Everything except [`SessionSignal`] requires a browser environment
//! (`wasm32-unknown-unknown` target).

pub mod components;
pub mod download;
pub mod error;
pub mod notice;
pub mod state;
pub mod transport;

pub use components::{ExportPanel, FileUpload, ResultsPanel};
pub use download::BrowserDownload;
pub use error::BrowserError;
pub use notice::WindowAlert;
pub use state::SessionSignal;
pub use transport::FetchTransport;
