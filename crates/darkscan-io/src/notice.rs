//! Blocking notices via `window.alert`.

use darkscan_core::Notice;
use tracing::warn;

/// Shows notices with the browser's modal `alert` dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowAlert;

impl Notice for WindowAlert {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            warn!(notice = message, "no window to show notice in");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            warn!(error = ?e, notice = message, "alert() failed");
        }
    }
}
