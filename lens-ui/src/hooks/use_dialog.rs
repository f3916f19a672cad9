//! Dialog controller hook

use crate::stores::dialog::DialogState;
use dioxus::prelude::*;

/// Copyable handle to a component's dialog state.
///
/// Reads subscribe the calling component; mutations re-render subscribers.
#[derive(Clone, Copy, PartialEq)]
pub struct DialogController {
    state: Signal<DialogState>,
}

impl DialogController {
    pub fn open(&self) -> bool {
        self.state.read().open()
    }

    pub fn drag_over(&self) -> bool {
        self.state.read().drag_over()
    }

    pub fn open_dialog(&self) {
        self.update(DialogState::open_dialog);
    }

    pub fn close_dialog(&self) {
        self.update(DialogState::close_dialog);
    }

    pub fn set_drag_over(&self) {
        self.update(DialogState::set_drag_over);
    }

    pub fn clear_drag_over(&self) {
        self.update(DialogState::clear_drag_over);
    }

    /// Run `f` against the state with write access
    pub fn update<R>(&self, f: impl FnOnce(&mut DialogState) -> R) -> R {
        let mut state = self.state;
        let mut guard = state.write();
        f(&mut guard)
    }
}

/// Dialog state for the calling component, closed and unhighlighted at first
pub fn use_dialog() -> DialogController {
    let state = use_signal(DialogState::default);
    DialogController { state }
}

/// Like [`use_dialog`], with an observer for open/closed transitions.
///
/// The observer runs while the dialog state is borrowed for writing, so it
/// must not read the controller; writing other signals is fine. Only the
/// observer passed on the first render is registered.
pub fn use_dialog_with(on_open_change: impl FnMut(bool) + 'static) -> DialogController {
    let state = use_signal(move || {
        let mut state = DialogState::default();
        state.on_open_change(on_open_change);
        state
    });
    DialogController { state }
}
