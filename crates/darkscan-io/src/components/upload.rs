//! File picker component with drag-and-drop.

use darkscan_core::{FileSelection, SelectedFile};
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use tracing::warn;

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// What the picker holds. Empty while a newly picked file is read.
    selection: Signal<FileSelection>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Holds at most one file. Any file type is accepted; the bytes are
/// read once on selection and stored in `selection`.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut filename = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut selection = props.selection;

    // Shared by the picker and drag-and-drop paths. Only the first
    // file of a multi-file drop is used.
    let process_files = move |files: Vec<FileData>| async move {
        let ticket = selection.write().begin_pick();
        filename.set(None);
        let Some(file) = files.first() else {
            selection.write().finish_pick(ticket, None);
            return;
        };
        let name = file.name();
        let (picked, failure) = match file.read_bytes().await {
            Ok(bytes) => (Some(SelectedFile::new(name.clone(), bytes.to_vec())), None),
            Err(e) => {
                warn!(file = %name, error = %e, "failed to read picked file");
                (None, Some(format!("Failed to read file: {e}")))
            }
        };
        let shown = picked.is_some().then_some(name);
        // A newer pick owns the picker now.
        if selection.write().finish_pick(ticket, picked) {
            filename.set(shown);
            error.set(failure);
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "upload-zone upload-zone--active"
    } else {
        "upload-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            if let Some(ref name) = filename() {
                p { class: "upload-name", "Selected: {name}" }
            }

            if let Some(ref err) = error() {
                p { class: "text-error", "{err}" }
            }

            p { class: "text-secondary", "Drop a capture file here or " }

            label { class: "btn btn-primary",
                input {
                    id: "pcapFile",
                    r#type: "file",
                    class: "hidden",
                    onchange: handle_files,
                }
                Icon { width: 16, height: 16, icon: LdUpload }
                " Choose File"
            }
        }
    }
}
