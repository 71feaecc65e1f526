//! Export panel with the report download button.

use darkscan_core::{AnalysisConfig, export_current_text};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdDownload;

use crate::download::BrowserDownload;
use crate::state::SessionSignal;

/// Props for the [`ExportPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ExportPanelProps {
    /// The session whose display text is exported.
    session: SessionSignal,
    /// Supplies the report filename.
    config: AnalysisConfig,
}

/// "Download Report" button, enabled only after a successful analysis.
#[component]
pub fn ExportPanel(props: ExportPanelProps) -> Element {
    let session = props.session;
    let status = use_memo(move || {
        let s = session.0.read();
        (s.export_enabled(), s.phase())
    });
    let enabled = status().0;
    let mut export_error = use_signal(|| Option::<String>::None);

    // Clear stale export errors when a new analysis changes the outcome.
    use_effect(move || {
        let _ = status();
        export_error.set(None);
    });

    let on_click = {
        let config = props.config;
        move |_| {
            if let Err(e) = export_current_text(&session, &BrowserDownload, &config) {
                export_error.set(Some(format!("Download failed: {e}")));
            } else {
                export_error.set(None);
            }
        }
    };

    rsx! {
        div { class: "export-panel",
            if let Some(ref err) = export_error() {
                p { class: "text-error", "{err}" }
            }

            button {
                id: "downloadReportButton",
                class: if enabled { "btn btn-primary" } else { "btn btn-primary disabled" },
                disabled: !enabled,
                onclick: on_click,
                Icon { width: 16, height: 16, icon: LdDownload }
                " Download Report"
            }
        }
    }
}
