//! Event reactions of the search bar, over the dialog and selection models
//!
//! `SearchInputBar` routes its drag, drop, pick, and paste events through
//! these functions so the guards live in one place.

use super::dialog::DialogState;
use super::selection::{ImageSelection, SelectionTicket};

/// Where a staged file came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileSource {
    Picker,
    Drop,
    Paste,
}

impl FileSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileSource::Picker => "picker",
            FileSource::Drop => "drop",
            FileSource::Paste => "paste",
        }
    }
}

/// Drag enter/over: raise the highlight unless it is already up
pub fn drag_over(dialog: &mut DialogState) {
    if !dialog.drag_over() {
        dialog.set_drag_over();
    }
}

/// Drag leave: always lower the highlight
pub fn drag_leave(dialog: &mut DialogState) {
    dialog.clear_drag_over();
}

/// Drop: end the drag gesture, then start a selection if files came along.
///
/// The highlight is lowered even for an empty drop, since no drag-leave
/// follows a drop.
pub fn drop_files(
    dialog: &mut DialogState,
    selection: &mut ImageSelection,
    file_count: usize,
) -> Option<SelectionTicket> {
    dialog.clear_drag_over();
    selection.begin(file_count)
}

/// Picker change: start a selection if files came along
pub fn stage_files(selection: &mut ImageSelection, file_count: usize) -> Option<SelectionTicket> {
    selection.begin(file_count)
}

/// Paste: `None` means the event had no clipboard data at all
pub fn paste_files(
    selection: &mut ImageSelection,
    clipboard_file_count: Option<usize>,
) -> Option<SelectionTicket> {
    stage_files(selection, clipboard_file_count?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_types::SelectedImage;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Dialog plus selection, wired the way `SearchInputBar` wires them
    struct Harness {
        dialog: DialogState,
        selection: Rc<RefCell<ImageSelection>>,
    }

    impl Harness {
        fn new() -> Self {
            let selection = Rc::new(RefCell::new(ImageSelection::default()));
            let mut dialog = DialogState::default();
            let reset = selection.clone();
            dialog.on_open_change(move |_| {
                reset.borrow_mut().reset();
            });
            Self { dialog, selection }
        }

        fn image(&self) -> Option<SelectedImage> {
            self.selection.borrow().image().cloned()
        }

        fn pick(&mut self, files: &[SelectedImage]) {
            let ticket = stage_files(&mut self.selection.borrow_mut(), files.len());
            if let (Some(ticket), Some(first)) = (ticket, files.first()) {
                self.selection.borrow_mut().complete(ticket, first.clone());
            }
        }

        fn paste(&mut self, clipboard: Option<&[SelectedImage]>) {
            let count = clipboard.map(|files| files.len());
            let ticket = paste_files(&mut self.selection.borrow_mut(), count);
            if let (Some(ticket), Some(first)) = (ticket, clipboard.and_then(|files| files.first())) {
                self.selection.borrow_mut().complete(ticket, first.clone());
            }
        }

        fn drop_in(&mut self, files: &[SelectedImage]) {
            let ticket = drop_files(
                &mut self.dialog,
                &mut self.selection.borrow_mut(),
                files.len(),
            );
            if let (Some(ticket), Some(first)) = (ticket, files.first()) {
                self.selection.borrow_mut().complete(ticket, first.clone());
            }
        }
    }

    fn file(name: &str) -> SelectedImage {
        SelectedImage::new(name, vec![0xffu8, 0xd8, 0xff])
    }

    #[test]
    fn selection_is_cleared_on_every_open_change() {
        let mut h = Harness::new();
        let ops: [fn(&mut DialogState); 6] = [
            DialogState::open_dialog,
            DialogState::open_dialog,
            DialogState::close_dialog,
            DialogState::open_dialog,
            DialogState::close_dialog,
            DialogState::close_dialog,
        ];
        for op in ops {
            h.pick(&[file("staged.png")]);
            let was_open = h.dialog.open();
            op(&mut h.dialog);
            if h.dialog.open() != was_open {
                assert_eq!(h.image(), None);
            } else {
                assert!(h.image().is_some());
            }
        }
    }

    #[test]
    fn empty_pick_keeps_selection() {
        let mut h = Harness::new();
        h.dialog.open_dialog();
        let f1 = file("f1.png");
        h.pick(&[f1.clone()]);
        h.pick(&[]);
        assert_eq!(h.image(), Some(f1));
    }

    #[test]
    fn empty_drop_keeps_selection_and_lowers_highlight() {
        let mut h = Harness::new();
        h.dialog.open_dialog();
        let f1 = file("f1.png");
        h.pick(&[f1.clone()]);
        drag_over(&mut h.dialog);

        h.drop_in(&[]);

        assert_eq!(h.image(), Some(f1));
        assert!(!h.dialog.drag_over());
    }

    #[test]
    fn repeated_drag_over_is_stable() {
        let mut h = Harness::new();
        h.dialog.open_dialog();
        drag_over(&mut h.dialog);
        drag_over(&mut h.dialog);
        assert!(h.dialog.drag_over());
        assert!(h.dialog.open());
        assert_eq!(h.image(), None);
    }

    #[test]
    fn open_pick_close_scenario() {
        let mut h = Harness::new();
        assert!(!h.dialog.open());

        h.dialog.open_dialog();
        assert!(h.dialog.open());
        assert_eq!(h.image(), None);

        let f1 = file("f1.png");
        h.pick(&[f1.clone()]);
        assert_eq!(h.image(), Some(f1));

        h.dialog.close_dialog();
        assert!(!h.dialog.open());
        assert_eq!(h.image(), None);
    }

    #[test]
    fn drag_enter_then_leave_scenario() {
        let mut h = Harness::new();
        h.dialog.open_dialog();
        drag_over(&mut h.dialog);
        assert!(h.dialog.drag_over());
        drag_leave(&mut h.dialog);
        assert!(!h.dialog.drag_over());
    }

    #[test]
    fn drop_with_file_scenario() {
        let mut h = Harness::new();
        h.dialog.open_dialog();
        drag_over(&mut h.dialog);

        let f2 = file("f2.jpg");
        h.drop_in(&[f2.clone()]);

        assert_eq!(h.image(), Some(f2));
        assert!(!h.dialog.drag_over());
    }

    #[test]
    fn paste_replaces_staged_image() {
        let mut h = Harness::new();
        h.dialog.open_dialog();
        let f1 = file("f1.png");
        h.pick(&[f1]);

        // Clipboard with two files: only the first is staged
        let f3 = file("f3.png");
        h.paste(Some(&[f3.clone(), file("f4.png")][..]));

        assert_eq!(h.image(), Some(f3));
    }

    #[test]
    fn paste_without_files_keeps_selection() {
        let mut h = Harness::new();
        h.dialog.open_dialog();
        let f1 = file("f1.png");
        h.paste(Some(&[f1.clone()][..]));

        h.paste(None);
        assert_eq!(h.image(), Some(f1.clone()));

        h.paste(Some(&[][..]));
        assert_eq!(h.image(), Some(f1));
    }

    #[test]
    fn paste_while_closed_is_cleared_on_open() {
        let mut h = Harness::new();
        h.paste(Some(&[file("early.png")][..]));
        assert!(h.image().is_some());

        h.dialog.open_dialog();
        assert_eq!(h.image(), None);
    }

    #[test]
    fn close_during_read_discards_result() {
        let mut h = Harness::new();
        h.dialog.open_dialog();
        let ticket = stage_files(&mut h.selection.borrow_mut(), 1).unwrap();
        h.dialog.close_dialog();
        assert!(!h.selection.borrow_mut().complete(ticket, file("late.png")));
        assert_eq!(h.image(), None);
    }
}
