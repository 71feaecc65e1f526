//! Results region showing the session's display text.

use dioxus::prelude::*;

/// Props for the [`ResultsPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ResultsPanelProps {
    /// Status, result or error text to show.
    text: String,
    /// Hidden until the first analysis starts.
    visible: bool,
}

/// The in-page status/result/error region.
#[component]
pub fn ResultsPanel(props: ResultsPanelProps) -> Element {
    let class = if props.visible {
        "results"
    } else {
        "results hidden"
    };

    rsx! {
        div { id: "results", class: "{class}",
            h3 { class: "panel-heading", "Analysis" }
            pre { id: "analysisContent", class: "analysis-content", "{props.text}" }
        }
    }
}
