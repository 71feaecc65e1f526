use darkscan_core::{AnalysisConfig, AnalysisSession, FileSelection, submit_for_analysis};
use darkscan_io::{
    ExportPanel, FetchTransport, FileUpload, ResultsPanel, SessionSignal, WindowAlert,
};
use dioxus::prelude::*;

fn main() {
    // Routes `tracing` events to the browser console.
    dioxus::logger::initialize_default();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "darkscan starting");
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the analysis session and the picked file, and wires the upload,
/// analyze, results and export controls together.
fn app() -> Element {
    // --- Application state ---
    let session = SessionSignal(use_signal(AnalysisSession::new));
    let selection = use_signal(FileSelection::new);
    let config = use_hook(AnalysisConfig::default);

    // --- Analyze handler ---
    // The picker keeps its file between clicks, so every click submits
    // its own copy. While a newly picked file is still being read the
    // picker counts as empty. Overlapping clicks each run to completion;
    // the session ignores all but the latest.
    let on_analyze = {
        let config = config.clone();
        move |_| {
            let file = selection.peek().current().cloned();
            let config = config.clone();
            spawn(async move {
                submit_for_analysis(&session, &FetchTransport, &WindowAlert, &config, file).await;
            });
        }
    };

    let state = session.snapshot();

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div { class: "page",
            header { class: "page-header",
                h1 { class: "title", "darkscan" }
                p { class: "text-muted",
                    "Upload a packet capture and get a traffic verdict"
                }
            }

            main { class: "page-body",
                FileUpload { selection: selection }

                button {
                    id: "analyzeButton",
                    class: "btn btn-primary",
                    onclick: on_analyze,
                    "Analyze"
                }

                ResultsPanel {
                    text: state.display_text().to_string(),
                    visible: state.results_visible(),
                }

                ExportPanel { session: session, config: config.clone() }
            }
        }
    }
}
