//! Staged image selection

use crate::display_types::SelectedImage;

/// Proof that a selection was started at a given generation.
///
/// Reading a file is asynchronous, so a selection is begun when the event
/// arrives and completed once the bytes are in. A ticket only applies while
/// nothing newer (a reset or another selection) has happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionTicket(u64);

/// The image currently staged for search, if any
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageSelection {
    image: Option<SelectedImage>,
    generation: u64,
}

impl ImageSelection {
    pub fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    /// Start a selection from an event carrying `file_count` files.
    ///
    /// Returns `None` and leaves everything untouched when there are no files.
    pub fn begin(&mut self, file_count: usize) -> Option<SelectionTicket> {
        if file_count == 0 {
            return None;
        }
        self.generation += 1;
        Some(SelectionTicket(self.generation))
    }

    /// Stage `image` if `ticket` is still current. Returns whether it was applied.
    pub fn complete(&mut self, ticket: SelectionTicket, image: SelectedImage) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.image = Some(image);
        true
    }

    /// Drop the staged image and invalidate any selection in flight.
    ///
    /// Returns the image that was staged, if any.
    pub fn reset(&mut self) -> Option<SelectedImage> {
        self.generation += 1;
        self.image.take()
    }
}
