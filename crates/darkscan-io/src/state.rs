//! The analysis session as a Dioxus signal.

use darkscan_core::{AnalysisSession, SessionHandle};
use dioxus::prelude::*;

/// Reactive handle to the page's [`AnalysisSession`].
///
/// Copyable like the signal it wraps, so event handlers and spawned
/// tasks can each hold one. Every write re-renders subscribers;
/// [`SessionHandle::read`] neither subscribes nor notifies.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionSignal(pub Signal<AnalysisSession>);

impl SessionSignal {
    /// Snapshot the current session, subscribing the caller to changes.
    #[must_use]
    pub fn snapshot(&self) -> AnalysisSession {
        self.0.cloned()
    }
}

impl SessionHandle for SessionSignal {
    fn update<R>(&self, f: impl FnOnce(&mut AnalysisSession) -> R) -> R {
        let mut signal = self.0;
        signal.with_mut(f)
    }

    fn read<R>(&self, f: impl FnOnce(&AnalysisSession) -> R) -> R {
        f(&self.0.peek())
    }
}
