//! The page state of one analysis session.
//!
//! [`AnalysisSession`] owns the displayed text, the visibility of the
//! results region and the export-enabled flag. Each analysis attempt
//! gets a [`Ticket`]; completing with a ticket that is no longer
//! current leaves the session untouched, so when two requests overlap
//! the most recently *started* one decides what is shown.

use std::fmt;

use crate::prediction::AnalysisResult;
use crate::report::Report;
use crate::types::{ANALYZING_TEXT, AnalysisError, ERROR_TEXT, REPORT_MIME_TYPE, SUCCESS_PREFIX};

/// The text currently shown in the results region.
///
/// This is also exactly what an export writes out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayText(String);

impl DisplayText {
    /// Borrow the text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the most recent attempt stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has been submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Analyzing,
    /// The latest request produced a result.
    Succeeded,
    /// The latest request failed.
    Failed,
}

/// Identifies one analysis attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// What happened to a completion handed to [`AnalysisSession::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The outcome was rendered.
    Applied,
    /// A newer attempt had started; the outcome was dropped.
    Stale,
}

/// Build the success message for a rendered prediction.
#[must_use]
pub fn success_text(prediction: &str) -> String {
    format!("{SUCCESS_PREFIX}{prediction}")
}

/// Mutable UI state shared by the upload and export controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisSession {
    display: DisplayText,
    results_visible: bool,
    export_enabled: bool,
    phase: Phase,
    generation: u64,
}

impl AnalysisSession {
    /// A fresh session: empty text, results hidden, export disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The text in the results region.
    #[must_use]
    pub const fn display_text(&self) -> &DisplayText {
        &self.display
    }

    /// Whether the results region should be shown.
    #[must_use]
    pub const fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// Whether the export control should be enabled.
    #[must_use]
    pub const fn export_enabled(&self) -> bool {
        self.export_enabled
    }

    /// Phase of the most recent attempt.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Start a new attempt.
    ///
    /// Shows the placeholder, reveals the results region and revokes
    /// export eligibility until this attempt succeeds. Any ticket issued
    /// earlier becomes stale.
    pub fn begin(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.display.set(ANALYZING_TEXT);
        self.results_visible = true;
        self.export_enabled = false;
        self.phase = Phase::Analyzing;
        Ticket(self.generation)
    }

    /// Whether `ticket` belongs to the most recent attempt.
    #[must_use]
    pub const fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Render the outcome of the attempt identified by `ticket`.
    ///
    /// Success shows the templated message and enables export; any
    /// failure shows the generic error text and disables export.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: &Result<AnalysisResult, AnalysisError>,
    ) -> Completion {
        if !self.is_current(ticket) {
            return Completion::Stale;
        }
        match outcome {
            Ok(result) => {
                self.display.set(success_text(&result.prediction));
                self.export_enabled = true;
                self.phase = Phase::Succeeded;
            }
            Err(_) => {
                self.display.set(ERROR_TEXT);
                self.export_enabled = false;
                self.phase = Phase::Failed;
            }
        }
        Completion::Applied
    }

    /// Snapshot the displayed text as a plain-text report.
    ///
    /// Does not check [`Self::export_enabled`]; gating is the UI's job.
    #[must_use]
    pub fn report(&self, filename: &str) -> Report {
        Report {
            filename: filename.to_owned(),
            mime_type: REPORT_MIME_TYPE,
            contents: self.display.as_str().to_owned(),
        }
    }
}
