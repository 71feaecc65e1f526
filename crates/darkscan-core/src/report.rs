//! Report export.
//!
//! A [`Report`] is the displayed text wrapped as a plain-text file.
//! Saving goes through a [`DownloadTarget`], which hands out a
//! temporary handle (in the browser, an object URL). [`save_report`]
//! holds that handle in a guard that releases it on drop, so it is
//! freed whether triggering succeeds, fails, or the user later cancels
//! the save dialog.

use tracing::{error, info};

use crate::controller::SessionHandle;
use crate::session::AnalysisSession;
use crate::types::{AnalysisConfig, ExportError};

/// One exported file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Suggested filename for the save dialog.
    pub filename: String,
    /// MIME type of the contents.
    pub mime_type: &'static str,
    /// The text being saved.
    pub contents: String,
}

/// Something that can offer a [`Report`] to the user as a download.
pub trait DownloadTarget {
    /// Temporary resource backing one download.
    type Handle;

    /// Create the temporary resource for `report`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the resource cannot be created.
    fn acquire(&self, report: &Report) -> Result<Self::Handle, ExportError>;

    /// Start the save flow for an acquired resource.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the save flow cannot be started.
    fn trigger(&self, handle: &Self::Handle, report: &Report) -> Result<(), ExportError>;

    /// Free the temporary resource. Must not fail.
    fn release(&self, handle: &Self::Handle);
}

/// Releases its handle when dropped.
struct Lease<'a, D: DownloadTarget + ?Sized> {
    target: &'a D,
    handle: D::Handle,
}

impl<D: DownloadTarget + ?Sized> Drop for Lease<'_, D> {
    fn drop(&mut self) {
        self.target.release(&self.handle);
    }
}

/// Offer `report` through `target`.
///
/// The handle from [`DownloadTarget::acquire`] is released before this
/// returns, on every path.
///
/// # Errors
///
/// Returns the [`ExportError`] from acquiring or triggering.
pub fn save_report<D: DownloadTarget + ?Sized>(
    target: &D,
    report: &Report,
) -> Result<(), ExportError> {
    let lease = Lease {
        target,
        handle: target.acquire(report)?,
    };
    target.trigger(&lease.handle, report)
}

/// Export whatever the session currently displays.
///
/// Reads the display text verbatim, including error text, and saves it
/// under `config.report_filename`.
///
/// # Errors
///
/// Returns [`ExportError`] if the download could not be started. The
/// error is also logged.
pub fn export_current_text<S, D>(
    session: &S,
    target: &D,
    config: &AnalysisConfig,
) -> Result<(), ExportError>
where
    S: SessionHandle + ?Sized,
    D: DownloadTarget + ?Sized,
{
    let report = session.read(|s: &AnalysisSession| s.report(&config.report_filename));
    match save_report(target, &report) {
        Ok(()) => {
            info!(
                filename = %report.filename,
                bytes = report.contents.len(),
                "report exported"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "report export failed");
            Err(e)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Records every call; optionally fails at one step.
    #[derive(Default)]
    struct RecordingTarget {
        fail_acquire: bool,
        fail_trigger: bool,
        next_id: RefCell<u32>,
        live: RefCell<Vec<u32>>,
        triggered: RefCell<Vec<(u32, Report)>>,
        released: RefCell<Vec<u32>>,
    }

    impl DownloadTarget for RecordingTarget {
        type Handle = u32;

        fn acquire(&self, _report: &Report) -> Result<u32, ExportError> {
            if self.fail_acquire {
                return Err(ExportError::Browser("blob rejected".into()));
            }
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            self.live.borrow_mut().push(*next);
            Ok(*next)
        }

        fn trigger(&self, handle: &u32, report: &Report) -> Result<(), ExportError> {
            if self.fail_trigger {
                return Err(ExportError::Browser("no document body".into()));
            }
            self.triggered.borrow_mut().push((*handle, report.clone()));
            Ok(())
        }

        fn release(&self, handle: &u32) {
            self.live.borrow_mut().retain(|h| h != handle);
            self.released.borrow_mut().push(*handle);
        }
    }

    fn report(text: &str) -> Report {
        Report {
            filename: "analysis_report.txt".into(),
            mime_type: "text/plain",
            contents: text.into(),
        }
    }

    #[test]
    fn save_releases_after_trigger() {
        let target = RecordingTarget::default();
        save_report(&target, &report("hello")).unwrap();
        assert_eq!(target.triggered.borrow().len(), 1);
        assert_eq!(*target.released.borrow(), vec![1]);
        assert!(target.live.borrow().is_empty());
    }

    #[test]
    fn failed_trigger_still_releases() {
        let target = RecordingTarget {
            fail_trigger: true,
            ..RecordingTarget::default()
        };
        let err = save_report(&target, &report("hello")).unwrap_err();
        assert_eq!(err, ExportError::Browser("no document body".into()));
        assert_eq!(*target.released.borrow(), vec![1]);
        assert!(target.live.borrow().is_empty());
    }

    #[test]
    fn failed_acquire_releases_nothing() {
        let target = RecordingTarget {
            fail_acquire: true,
            ..RecordingTarget::default()
        };
        assert!(save_report(&target, &report("hello")).is_err());
        assert!(target.released.borrow().is_empty());
    }

    #[test]
    fn exporting_twice_creates_two_independent_downloads() {
        let session = RefCell::new(AnalysisSession::new());
        {
            let mut s = session.borrow_mut();
            let ticket = s.begin();
            s.complete(
                ticket,
                &Ok(crate::AnalysisResult {
                    prediction: "benign".into(),
                }),
            );
        }
        let target = RecordingTarget::default();
        let config = AnalysisConfig::default();

        export_current_text(&session, &target, &config).unwrap();
        export_current_text(&session, &target, &config).unwrap();

        let triggered = target.triggered.borrow();
        assert_eq!(triggered.len(), 2);
        assert_ne!(triggered[0].0, triggered[1].0);
        assert_eq!(triggered[0].1, triggered[1].1);
        assert_eq!(triggered[0].1.filename, "analysis_report.txt");
        assert_eq!(
            triggered[0].1.contents,
            session.borrow().display_text().as_str()
        );
        assert_eq!(*target.released.borrow(), vec![1, 2]);
        assert!(target.live.borrow().is_empty());
    }

    /// Counts how the session is accessed.
    #[derive(Default)]
    struct CountingHandle {
        session: RefCell<AnalysisSession>,
        updates: RefCell<usize>,
        reads: RefCell<usize>,
    }

    impl SessionHandle for CountingHandle {
        fn update<R>(&self, f: impl FnOnce(&mut AnalysisSession) -> R) -> R {
            *self.updates.borrow_mut() += 1;
            f(&mut self.session.borrow_mut())
        }

        fn read<R>(&self, f: impl FnOnce(&AnalysisSession) -> R) -> R {
            *self.reads.borrow_mut() += 1;
            f(&self.session.borrow())
        }
    }

    #[test]
    fn export_only_reads_the_session() {
        let handle = CountingHandle::default();
        let config = AnalysisConfig::default();

        export_current_text(&handle, &RecordingTarget::default(), &config).unwrap();
        let failing = RecordingTarget {
            fail_trigger: true,
            ..RecordingTarget::default()
        };
        assert!(export_current_text(&handle, &failing, &config).is_err());

        assert_eq!(*handle.updates.borrow(), 0);
        assert_eq!(*handle.reads.borrow(), 2);
    }

    #[test]
    fn export_does_not_touch_session() {
        let session = RefCell::new(AnalysisSession::new());
        session.borrow_mut().begin();
        let before = session.borrow().clone();
        let target = RecordingTarget {
            fail_trigger: true,
            ..RecordingTarget::default()
        };
        assert!(export_current_text(&session, &target, &AnalysisConfig::default()).is_err());
        assert_eq!(*session.borrow(), before);
    }
}
