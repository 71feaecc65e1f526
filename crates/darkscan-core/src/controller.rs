//! The analyze action: file check, request dispatch, outcome rendering.
//!
//! The environment is reached through three small traits so the same
//! logic runs against the browser (`darkscan-io`) and against fakes in
//! tests:
//!
//! - [`SessionHandle`] gives short, synchronous access to the shared
//!   [`AnalysisSession`]. No borrow is held across the network await.
//! - [`Transport`] performs the POST.
//! - [`Notice`] shows a blocking message to the user.

use std::cell::RefCell;

use tracing::{debug, error, info};

use crate::prediction::interpret_response;
use crate::session::{AnalysisSession, Completion};
use crate::types::{
    AnalysisConfig, AnalysisError, AnalysisRequest, HttpResponse, MISSING_FILE_NOTICE,
    SelectedFile,
};

/// Shared access to the session state.
pub trait SessionHandle {
    /// Run `f` with exclusive access to the session.
    fn update<R>(&self, f: impl FnOnce(&mut AnalysisSession) -> R) -> R;

    /// Run `f` with shared access. Must not count as a change.
    fn read<R>(&self, f: impl FnOnce(&AnalysisSession) -> R) -> R;
}

impl SessionHandle for RefCell<AnalysisSession> {
    fn update<R>(&self, f: impl FnOnce(&mut AnalysisSession) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn read<R>(&self, f: impl FnOnce(&AnalysisSession) -> R) -> R {
        f(&self.borrow())
    }
}

/// Sends an [`AnalysisRequest`] and reports what came back.
// Futures are `!Send` by design: everything runs on the browser's
// single thread.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// POST `request` as multipart form data.
    ///
    /// A response with any status, including 4xx/5xx, is `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Network`] when no response was received.
    async fn send(&self, request: AnalysisRequest) -> Result<HttpResponse, AnalysisError>;
}

/// Blocking, modal-style message to the user.
pub trait Notice {
    /// Show `message` and wait for the user to dismiss it.
    fn alert(&self, message: &str);
}

/// Run one analysis attempt.
///
/// With no file, shows [`MISSING_FILE_NOTICE`], sends nothing, leaves
/// the session untouched and returns `None`.
///
/// Otherwise the session switches to "Analyzing..." before the request
/// is sent, then renders the outcome once the transport resolves. All
/// failures end as the generic error text plus an error-level log
/// record; nothing is propagated. If another attempt began while this
/// one was in flight, the outcome is discarded and
/// `Some(Completion::Stale)` is returned.
pub async fn submit_for_analysis<S, T, N>(
    session: &S,
    transport: &T,
    notice: &N,
    config: &AnalysisConfig,
    file: Option<SelectedFile>,
) -> Option<Completion>
where
    S: SessionHandle + ?Sized,
    T: Transport + ?Sized,
    N: Notice + ?Sized,
{
    let Some(file) = file else {
        notice.alert(MISSING_FILE_NOTICE);
        return None;
    };

    let request = AnalysisRequest::new(config, file);
    let ticket = session.update(AnalysisSession::begin);
    info!(
        file = %request.file.name,
        bytes = request.file.bytes.len(),
        endpoint = %request.endpoint,
        "analysis started"
    );

    let outcome = match transport.send(request).await {
        Ok(response) => interpret_response(&response),
        Err(e) => Err(e),
    };

    let completion = session.update(|s| s.complete(ticket, &outcome));
    match (completion, &outcome) {
        (Completion::Applied, Ok(result)) => {
            info!(prediction = %result.prediction, "analysis complete");
        }
        (Completion::Applied, Err(e)) => error!(error = %e, "analysis failed"),
        (Completion::Stale, Ok(result)) => {
            debug!(prediction = %result.prediction, "discarding result of superseded analysis");
        }
        (Completion::Stale, Err(e)) => {
            debug!(error = %e, "discarding failure of superseded analysis");
        }
    }
    Some(completion)
}
