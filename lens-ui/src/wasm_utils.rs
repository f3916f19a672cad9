//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener attached through a `Closure` must keep that closure
//! alive for as long as it is attached. `closure.forget()` leaks it and leaves
//! the listener in place forever, so instead the closure is stored in a guard
//! whose `Drop` removes the listener:
//!
//! ```ignore
//! // Listener is attached when the guard is created
//! let listener = WindowEventListener::new("paste", callback)?;
//!
//! // Listener is removed when the guard is dropped
//! drop(listener);
//! ```
//!
//! With Dioxus, keep the guard in a `Signal<Option<WindowEventListener>>` owned
//! by the component; unmounting drops the signal and with it the listener.
//!
//! The same ownership rule applies to object URLs: [`ObjectUrl`] revokes its
//! URL on drop.

use wasm_bindgen_x::prelude::*;

use crate::error::InteropError;

/// A window event listener that removes itself when dropped.
pub struct WindowEventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl WindowEventListener {
    /// Attaches `callback` to the window for `event_name`.
    pub fn new(
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Result<Self, InteropError> {
        let window = web_sys_x::window().ok_or(InteropError::NoWindow)?;
        let target: web_sys_x::EventTarget = window.into();
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .map_err(|e| InteropError::Listener {
                event: event_name,
                reason: format!("{e:?}"),
            })?;

        Ok(Self {
            target,
            event_name,
            callback,
        })
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// A blob URL for displaying in-memory bytes, revoked on drop.
#[derive(Debug, PartialEq, Eq)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    pub fn from_bytes(data: &[u8], mime_type: &str) -> Result<Self, InteropError> {
        let uint8_array = js_sys_x::Uint8Array::from(data);
        let array = js_sys_x::Array::new();
        array.push(&uint8_array);

        let opts = web_sys_x::BlobPropertyBag::new();
        opts.set_type(mime_type);
        let blob = web_sys_x::Blob::new_with_u8_array_sequence_and_options(&array, &opts)
            .map_err(|e| InteropError::Blob(format!("{e:?}")))?;

        let url = web_sys_x::Url::create_object_url_with_blob(&blob)
            .map_err(|e| InteropError::ObjectUrl(format!("{e:?}")))?;
        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = web_sys_x::Url::revoke_object_url(&self.url);
    }
}

/// Files carried by a raw `paste` event.
///
/// Suppresses the browser's default paste. Returns `None` when the event
/// carries no clipboard data.
pub fn clipboard_files(event: &JsValue) -> Option<web_sys_x::FileList> {
    let event = event.dyn_ref::<web_sys_x::ClipboardEvent>()?;
    event.prevent_default();
    event.clipboard_data()?.files()
}

/// Read the full contents of a browser `File`
pub async fn read_web_file(file: &web_sys_x::File) -> Result<Vec<u8>, InteropError> {
    let buffer = wasm_bindgen_futures_x::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| InteropError::FileRead {
            name: file.name(),
            reason: format!("{e:?}"),
        })?;
    Ok(js_sys_x::Uint8Array::new(&buffer).to_vec())
}

/// Reset a file input so picking the same file again fires `change`
pub fn clear_input_value(id: &str) {
    let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    if let Some(input) = element.dyn_ref::<web_sys_x::HtmlInputElement>() {
        input.set_value("");
    }
}
