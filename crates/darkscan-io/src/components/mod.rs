//! Dioxus UI components for darkscan.
//!
//! Provides the file picker with drag-and-drop, the results region,
//! and the export panel.

mod export;
mod results;
mod upload;

pub use export::ExportPanel;
pub use results::ResultsPanel;
pub use upload::FileUpload;
