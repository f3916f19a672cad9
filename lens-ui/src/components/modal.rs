//! Native `<dialog>` shell for the image picker
//!
//! Escape reaches `on_close` through `cancel`; the backdrop click through the
//! outer container.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen_x::JsCast;

/// Counter for generating unique modal IDs
static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Invoke a zero-argument method (`showModal`/`close`) on the dialog element
fn call_dialog_method(element: &web_sys_x::Element, method: &str) {
    let Ok(value) = js_sys_x::Reflect::get(element, &method.into()) else {
        return;
    };
    if let Some(func) = value.dyn_ref::<js_sys_x::Function>() {
        let _ = func.call0(element);
    }
}

/// Modal that wraps its content in a native `<dialog>`
#[component]
pub fn Modal(
    /// Whether the modal is shown
    is_open: ReadSignal<bool>,
    /// Called on Escape or a backdrop click
    on_close: EventHandler<()>,
    /// Id of the element that titles the dialog
    #[props(default)]
    labelled_by: Option<String>,
    children: Element,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{}", id)
    });
    let dialog_id_for_effect = dialog_id.clone();

    use_effect(move || {
        let is_open = is_open();

        let Some(element) = web_sys_x::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&dialog_id_for_effect))
        else {
            return;
        };

        // showModal throws on an already open dialog
        match (is_open, element.has_attribute("open")) {
            (true, false) => call_dialog_method(&element, "showModal"),
            (false, true) => call_dialog_method(&element, "close"),
            _ => {}
        }
    });

    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/50",
            aria_labelledby: labelled_by.as_deref(),
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center",
                    onclick: move |_| on_close.call(()),
                    div { onclick: move |evt| evt.stop_propagation(), {children} }
                }
            }
        }
    }
}
