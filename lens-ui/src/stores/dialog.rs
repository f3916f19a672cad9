//! Dialog visibility and drag highlight state

use std::fmt;

type OpenObserver = Box<dyn FnMut(bool)>;

/// State behind the dialog controller: visibility plus drag highlight.
///
/// The two flags are independent. Each setter only touches its own flag and
/// is idempotent. When `open` actually changes, registered observers are
/// called with the new value, in registration order.
#[derive(Default)]
pub struct DialogState {
    open: bool,
    drag_over: bool,
    observers: Vec<OpenObserver>,
}

impl DialogState {
    pub fn open(&self) -> bool {
        self.open
    }

    pub fn drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn open_dialog(&mut self) {
        self.set_open(true);
    }

    pub fn close_dialog(&mut self) {
        self.set_open(false);
    }

    pub fn set_drag_over(&mut self) {
        self.drag_over = true;
    }

    pub fn clear_drag_over(&mut self) {
        self.drag_over = false;
    }

    /// Register an observer for open/closed transitions
    pub fn on_open_change(&mut self, observer: impl FnMut(bool) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn set_open(&mut self, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        for observer in &mut self.observers {
            observer(open);
        }
    }
}

impl fmt::Debug for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogState")
            .field("open", &self.open)
            .field("drag_over", &self.drag_over)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(state: &mut DialogState) -> Rc<RefCell<Vec<bool>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        state.on_open_change(move |open| sink.borrow_mut().push(open));
        seen
    }

    #[test]
    fn starts_closed_without_highlight() {
        let state = DialogState::default();
        assert!(!state.open());
        assert!(!state.drag_over());
    }

    #[test]
    fn open_and_close_toggle_visibility_only() {
        let mut state = DialogState::default();
        state.open_dialog();
        assert!(state.open());
        assert!(!state.drag_over());
        state.close_dialog();
        assert!(!state.open());
    }

    #[test]
    fn drag_flags_are_idempotent() {
        let mut state = DialogState::default();
        state.set_drag_over();
        state.set_drag_over();
        assert!(state.drag_over());
        assert!(!state.open());
        state.clear_drag_over();
        state.clear_drag_over();
        assert!(!state.drag_over());
    }

    #[test]
    fn observers_fire_only_on_real_transitions() {
        let mut state = DialogState::default();
        let seen = recording(&mut state);

        state.close_dialog();
        state.open_dialog();
        state.open_dialog();
        state.set_drag_over();
        state.close_dialog();
        state.close_dialog();
        state.open_dialog();

        assert_eq!(*seen.borrow(), vec![true, false, true]);
    }

    #[test]
    fn every_observer_is_notified() {
        let mut state = DialogState::default();
        let first = recording(&mut state);
        let second = recording(&mut state);
        state.open_dialog();
        assert_eq!(*first.borrow(), vec![true]);
        assert_eq!(*second.borrow(), vec![true]);
    }
}
