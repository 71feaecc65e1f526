//! Shared types for the darkscan analysis workflow.

use serde::{Deserialize, Serialize};

/// Analysis endpoint, resolved against the page origin.
pub const DEFAULT_ENDPOINT: &str = "/predict";

/// Multipart field key the service reads the capture from.
pub const FILE_FIELD: &str = "file";

/// Suggested filename for exported reports.
pub const REPORT_FILENAME: &str = "analysis_report.txt";

/// MIME type of exported reports.
pub const REPORT_MIME_TYPE: &str = "text/plain";

/// Placeholder shown while a request is in flight.
pub const ANALYZING_TEXT: &str = "Analyzing...";

/// Prefix of the success message; the rendered prediction follows it.
pub const SUCCESS_PREFIX: &str = "Analysis complete! Results: ";

/// Generic text shown for every transport or parse failure.
pub const ERROR_TEXT: &str = "Error analyzing file. See console for details.";

/// Blocking notice shown when analysis is triggered with no file.
pub const MISSING_FILE_NOTICE: &str = "Please select a PCAP file to analyze.";

/// Where requests go and how reports are named.
///
/// The defaults are the fixed values the application ships with;
/// nothing reads configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// URL the multipart request is POSTed to.
    pub endpoint: String,

    /// Form field name carrying the file bytes.
    pub field_name: String,

    /// Suggested filename for the exported report.
    pub report_filename: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            field_name: FILE_FIELD.to_owned(),
            report_filename: REPORT_FILENAME.to_owned(),
        }
    }
}

/// A file taken from the file picker.
///
/// The bytes are opaque: nothing here inspects or validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Original filename as reported by the browser.
    pub name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Create a new selected file.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// A single-part multipart upload, built fresh for every click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Target URL.
    pub endpoint: String,
    /// Form field name for the file part.
    pub field_name: String,
    /// The file being analyzed. Moved in; not kept after the request.
    pub file: SelectedFile,
}

impl AnalysisRequest {
    /// Wrap `file` for submission according to `config`.
    #[must_use]
    pub fn new(config: &AnalysisConfig, file: SelectedFile) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            field_name: config.field_name.clone(),
            file,
        }
    }
}

/// What the transport saw come back: a status code and the body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body decoded as text.
    pub body: String,
}

impl HttpResponse {
    /// Create a response from its parts.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Ways an analysis attempt can fail.
///
/// Everything except [`AnalysisError::UserInputMissing`] is shown to the
/// user as the same generic [`ERROR_TEXT`]; the variant and its detail
/// only reach the diagnostic log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Analysis was triggered with no file selected.
    #[error("no file selected")]
    UserInputMissing,

    /// The service answered with a non-2xx status.
    #[error("Server responded with status: {status}")]
    Transport {
        /// The HTTP status code received.
        status: u16,
    },

    /// The request could not complete (connectivity, CORS, aborted fetch).
    #[error("network request failed: {0}")]
    Network(String),

    /// A 2xx response whose body was not usable.
    #[error("invalid analysis response: {0}")]
    ResponseParse(String),
}

/// Errors that can occur when saving a report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    Browser(String),
}
