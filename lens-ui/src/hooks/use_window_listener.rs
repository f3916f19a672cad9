//! Component-scoped window event subscription

use crate::wasm_utils::WindowEventListener;
use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use wasm_bindgen_x::JsValue;

/// Listen for `event_name` on the window for as long as the component lives.
///
/// Attached once after the first render and removed when the component
/// unmounts, so remounting never stacks duplicate handlers. The handler runs
/// with the Dioxus runtime entered, so it may write signals, but no scope is
/// current: `spawn` is unavailable, and signals must be written with
/// `try_write` since a late event can arrive after unmount.
pub fn use_window_listener(event_name: &'static str, handler: impl FnMut(JsValue) + 'static) {
    let mut listener: Signal<Option<WindowEventListener>> = use_signal(|| None);
    let mut pending = Some(handler);

    // WORKAROUND: use_effect instead of use_hook so the web_sys_x::window() IPC
    // call runs after the render cycle, not inside it.
    use_effect(move || {
        let Some(mut handler) = pending.take() else {
            return;
        };

        // The callback runs from wasm-bindgen, outside the Dioxus runtime
        let runtime = Runtime::current();
        let attached = WindowEventListener::new(event_name, move |event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            handler(event);
        });

        match attached {
            Ok(attached) => {
                tracing::debug!("Attached window {event_name} listener");
                listener.set(Some(attached));
            }
            Err(e) => tracing::warn!("Could not attach window {event_name} listener: {e}"),
        }
    });

    use_drop(move || {
        // Detach outside scope teardown; dropping JS refs mid-diff trips the
        // webview IPC on desktop.
        if let Some(attached) = listener.write().take() {
            spawn(async move {
                drop(attached);
                tracing::debug!("Detached window {event_name} listener");
            });
        }
    });
}
