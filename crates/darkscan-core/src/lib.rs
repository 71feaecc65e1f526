//! darkscan-core: Analysis session state and workflow logic (sans-IO).
//!
//! Models the upload -> analyze -> export workflow as an explicit
//! [`AnalysisSession`] plus two operations:
//!
//! - [`submit_for_analysis`] checks for a selected file, flips the
//!   session to its "Analyzing..." state, awaits a [`Transport`], and
//!   renders the outcome (or discards it if a newer request started).
//! - [`export_current_text`] turns the displayed text into a
//!   [`Report`] and hands it to a [`DownloadTarget`], releasing the
//!   temporary download handle on every path.
//!
//! This crate has **no I/O dependencies** -- the network call, the
//! blocking notice and the browser download are traits implemented
//! by `darkscan-io`.

pub mod controller;
pub mod prediction;
pub mod report;
pub mod selection;
pub mod session;
pub mod types;

pub use controller::{Notice, SessionHandle, Transport, submit_for_analysis};
pub use prediction::{AnalysisResult, interpret_response};
pub use report::{DownloadTarget, Report, export_current_text, save_report};
pub use selection::{FileSelection, PickTicket};
pub use session::{AnalysisSession, Completion, DisplayText, Phase, Ticket};
pub use types::{
    AnalysisConfig, AnalysisError, AnalysisRequest, ExportError, HttpResponse, SelectedFile,
};
