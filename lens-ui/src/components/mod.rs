//! Widget components

pub mod button;
pub mod icons;
pub mod image_picker_dialog;
pub mod modal;
pub mod search_input_bar;
pub mod utils;

pub use button::{Button, ButtonVariant, ChromelessButton};
pub use icons::{ImageIcon, ScanSearchIcon, SearchIcon, UploadIcon};
pub use image_picker_dialog::ImagePickerDialogView;
pub use modal::Modal;
pub use search_input_bar::SearchInputBar;
pub use utils::{drop_zone_class, format_file_size};
