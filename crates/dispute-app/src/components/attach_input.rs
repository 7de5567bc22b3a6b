//! Attach control for the intake form.

use dioxus::prelude::*;
use dispute_core::util::format_size;
use dispute_core::{FilePicker, FileReference};

use crate::state::AppState;

#[component]
pub fn AttachInputField(on_file_selected: EventHandler<FileReference>) -> Element {
    let state = use_context::<AppState>();
    let selector = state.selector;
    let picker = state.picker;

    let on_pick = move |_| {
        let mut selector = selector;
        spawn(async move {
            let result = picker.pick().await;
            selector
                .write()
                .resolve(result, |file| on_file_selected.call(file));
        });
    };

    let label = selector.read().action_label();
    let selected = selector.read().selected().map(selection_caption);

    rsx! {
        div {
            style: "width: 100%; display: flex; flex-direction: column; align-items: stretch;",
            button {
                class: "intake-button",
                "data-variant": "outline",
                r#type: "button",
                onclick: on_pick,
                "{label}"
            }
            if let Some(caption) = selected {
                p { class: "attachment-name", "{caption}" }
            }
        }
    }
}

fn selection_caption(file: &FileReference) -> String {
    file.size_bytes.map_or_else(
        || file.upload_name().to_string(),
        |bytes| format!("{} ({})", file.upload_name(), format_size(bytes)),
    )
}
