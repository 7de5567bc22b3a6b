//! Browser file input synthesized with `web-sys`.

use std::cell::RefCell;
use std::rc::Rc;

use dispute_core::{Error, FileOrigin, FilePicker, FileReference, Result};
use futures_channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, File, HtmlInputElement, Url};

type PickSender = Rc<RefCell<Option<oneshot::Sender<Option<File>>>>>;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserInputPicker;

impl FilePicker for BrowserInputPicker {
    fn origin(&self) -> FileOrigin {
        FileOrigin::BrowserInput
    }

    async fn pick(&self) -> Result<Option<FileReference>> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| Error::Picker("no browser document available".to_string()))?;

        let input: HtmlInputElement = document
            .create_element("input")
            .map_err(|error| js_error("failed to create file input", &error))?
            .dyn_into()
            .map_err(|_| Error::Picker("created element is not an input".to_string()))?;
        input.set_type("file");

        let (sender, receiver) = oneshot::channel();
        let sender: PickSender = Rc::new(RefCell::new(Some(sender)));

        let change_input = input.clone();
        let change_sender = Rc::clone(&sender);
        let on_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let file = change_input.files().and_then(|files| files.get(0));
            resolve(&change_sender, file);
        });
        let cancel_sender = Rc::clone(&sender);
        let on_cancel = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            resolve(&cancel_sender, None);
        });

        input
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            .map_err(|error| js_error("failed to listen for file selection", &error))?;
        input
            .add_event_listener_with_callback("cancel", on_cancel.as_ref().unchecked_ref())
            .map_err(|error| js_error("failed to listen for cancellation", &error))?;
        input.click();

        // Listeners must stay alive until one of them fires.
        let picked = receiver.await.unwrap_or(None);
        drop(on_change);
        drop(on_cancel);

        let Some(file) = picked else {
            return Ok(None);
        };
        let object_url = Url::create_object_url_with_blob(&file)
            .map_err(|error| js_error("failed to create object URL", &error))?;

        Ok(Some(FileReference::from_browser_file(
            object_url,
            file.name(),
            file_size(file.size()),
            &file.type_(),
        )))
    }
}

fn resolve(sender: &PickSender, file: Option<File>) {
    if let Some(sender) = sender.borrow_mut().take() {
        let _ = sender.send(file);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn file_size(size: f64) -> u64 {
    size.max(0.0) as u64
}

fn js_error(context: &str, value: &JsValue) -> Error {
    Error::Picker(format!("{context}: {value:?}"))
}
