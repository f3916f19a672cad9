//! Display types shared by the widget's components and hosts

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique selection IDs
static SELECTION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A single image file staged in the dialog.
///
/// Each pick, drop, or paste produces a fresh value with a new `id`; an
/// existing value is never mutated. Equality is by `id`, so comparing two
/// selections never touches the file contents.
#[derive(Clone)]
pub struct SelectedImage {
    pub id: u64,
    pub name: String,
    pub content_type: &'static str,
    pub bytes: Rc<[u8]>,
}

impl SelectedImage {
    pub fn new(name: impl Into<String>, bytes: impl Into<Rc<[u8]>>) -> Self {
        let name = name.into();
        Self {
            id: SELECTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
            content_type: content_type_for_name(&name),
            name,
            bytes: bytes.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl PartialEq for SelectedImage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedImage")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// MIME type for a file name, by extension
pub fn content_type_for_name(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_from_extension() {
        assert_eq!(content_type_for_name("cat.PNG"), "image/png");
        assert_eq!(content_type_for_name("photo.jpeg"), "image/jpeg");
        assert_eq!(content_type_for_name("a.b.webp"), "image/webp");
        assert_eq!(content_type_for_name("notes"), "application/octet-stream");
        assert_eq!(content_type_for_name("archive.zip"), "application/octet-stream");
    }

    #[test]
    fn each_selection_gets_a_new_id() {
        let a = SelectedImage::new("a.png", vec![1u8, 2, 3]);
        let b = SelectedImage::new("a.png", vec![1u8, 2, 3]);
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.size(), 3);
    }
}
