//! Image picker dialog view
//!
//! Pure, props-based: every event is forwarded to the owner, and what the
//! drop zone shows is decided entirely by `selected_image` and
//! `drag_highlight`.

use std::rc::Rc;

use crate::components::button::{Button, ButtonVariant};
use crate::components::icons::{ImageIcon, UploadIcon};
use crate::components::modal::Modal;
use crate::components::utils::{drop_zone_class, format_file_size};
use crate::config::ImageSearchConfig;
use crate::display_types::SelectedImage;
use crate::wasm_utils::ObjectUrl;
use dioxus::prelude::*;

/// Modal with a drop zone, a hidden file input, and a preview of the staged image
#[component]
pub fn ImagePickerDialogView(
    visible: ReadSignal<bool>,
    on_request_close: EventHandler<()>,
    selected_image: Option<SelectedImage>,
    on_file_chosen: EventHandler<FormEvent>,
    on_drop: EventHandler<DragEvent>,
    on_drag_over: EventHandler<DragEvent>,
    on_drag_leave: EventHandler<DragEvent>,
    drag_highlight: bool,
    /// DOM id of the hidden file input (the upload link targets it)
    input_id: String,
    #[props(default)] config: ImageSearchConfig,
    /// Confirm action; the button is only rendered when set
    #[props(default)]
    on_submit: Option<EventHandler<SelectedImage>>,
    /// Cancel action; the button is only rendered when set
    #[props(default)]
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let title_id = format!("{input_id}-title");
    let zone_class = drop_zone_class(drag_highlight);
    let submit_target = selected_image.clone();

    rsx! {
        Modal {
            is_open: visible,
            on_close: on_request_close,
            labelled_by: Some(title_id.clone()),
            div { class: "bg-white text-gray-900 rounded-[10px] shadow-xl w-[600px] max-w-[calc(100vw-64px)]",
                h2 { id: "{title_id}", class: "px-6 pt-4 pb-4 text-xl font-medium",
                    "{config.dialog_title}"
                }

                // Drop zone
                div {
                    class: "mx-6 px-6 pb-6 rounded-[10px] flex flex-col items-center justify-center transition-colors {zone_class}",
                    ondragenter: move |evt| on_drag_over.call(evt),
                    ondragover: move |evt| on_drag_over.call(evt),
                    ondragleave: move |evt| on_drag_leave.call(evt),
                    ondrop: move |evt| on_drop.call(evt),

                    input {
                        r#type: "file",
                        id: "{input_id}",
                        class: "hidden",
                        accept: "{config.accept}",
                        onchange: move |evt| on_file_chosen.call(evt),
                    }

                    div { class: "pt-6 w-full text-center text-gray-600",
                        if let Some(image) = selected_image {
                            ImagePreview { key: "{image.id}", image }
                        } else {
                            div { class: "flex flex-col items-center gap-3",
                                UploadIcon { class: "w-8 h-8 text-gray-400" }
                                p {
                                    "{config.drop_prompt} "
                                    label {
                                        r#for: "{input_id}",
                                        class: "text-[blueviolet] cursor-pointer hover:underline",
                                        "{config.upload_label}"
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "flex gap-2 justify-end px-6 py-2 min-h-[16px]",
                    if let Some(on_cancel) = on_cancel {
                        Button {
                            variant: ButtonVariant::Text,
                            onclick: move |_| on_cancel.call(()),
                            "{config.cancel_label}"
                        }
                    }
                    if let Some(on_submit) = on_submit {
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: submit_target.is_none(),
                            onclick: move |_| {
                                if let Some(image) = submit_target.clone() {
                                    on_submit.call(image);
                                }
                            },
                            "{config.submit_label}"
                        }
                    }
                }
            }
        }
    }
}

/// Preview of one staged image.
///
/// Keyed by the image id at the call site, so the blob URL is created once per
/// image and revoked when a newer image replaces this component.
#[component]
fn ImagePreview(image: SelectedImage) -> Element {
    let url = use_hook(|| match ObjectUrl::from_bytes(&image.bytes, image.content_type) {
        Ok(url) => Some(Rc::new(url)),
        Err(e) => {
            tracing::warn!("No preview for {}: {e}", image.name);
            None
        }
    });
    let size = format_file_size(image.size());

    rsx! {
        figure { class: "flex flex-col gap-2",
            if let Some(url) = url {
                img {
                    src: "{url.as_str()}",
                    alt: "{image.name}",
                    class: "w-full h-auto rounded-[10px]",
                }
            } else {
                div { class: "flex items-center justify-center py-10",
                    ImageIcon { class: "w-10 h-10 text-gray-400" }
                }
            }
            figcaption { class: "text-xs text-gray-500 truncate", "{image.name} · {size}" }
        }
    }
}
