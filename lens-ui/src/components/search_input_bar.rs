//! Search bar with a "search by image" dialog
//!
//! Owns the staged image and the dialog controller. Picking, dropping, or
//! pasting a file stages it; any open/close transition clears it.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::components::button::ChromelessButton;
use crate::components::icons::{ScanSearchIcon, SearchIcon};
use crate::components::image_picker_dialog::ImagePickerDialogView;
use crate::config::ImageSearchConfig;
use crate::display_types::SelectedImage;
use crate::hooks::{use_dialog_with, use_window_listener};
use crate::stores::image_search::{
    drag_leave, drag_over, drop_files, paste_files, stage_files, FileSource,
};
use crate::stores::selection::{ImageSelection, SelectionTicket};
use crate::wasm_utils::{clear_input_value, clipboard_files, read_web_file};
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};

/// Counter for generating unique file input IDs
static INPUT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Called with the staged image whenever it changes
type ImageChangeHandler = Option<EventHandler<Option<SelectedImage>>>;

/// Read a file delivered by a Dioxus event and stage it under `ticket`
async fn stage_event_file(
    selection: Signal<ImageSelection>,
    ticket: SelectionTicket,
    file: FileData,
    source: FileSource,
    on_change: ImageChangeHandler,
) {
    let name = file.name();
    match file.read_bytes().await {
        Ok(bytes) => {
            let image = SelectedImage::new(name, bytes.to_vec());
            commit(selection, ticket, image, source, on_change);
        }
        Err(e) => tracing::warn!("Failed to read {name} from {}: {e}", source.as_str()),
    }
}

fn commit(
    mut selection: Signal<ImageSelection>,
    ticket: SelectionTicket,
    image: SelectedImage,
    source: FileSource,
    on_change: ImageChangeHandler,
) {
    let staged = image.clone();
    // Signals are gone if the component unmounted during the read
    let accepted = match selection.try_write() {
        Ok(mut guard) => guard.complete(ticket, image),
        Err(_) => false,
    };
    if !accepted {
        tracing::debug!("Discarded stale {} selection {}", source.as_str(), staged.name);
        return;
    }
    tracing::debug!(
        "Staged {} ({} bytes) from {}",
        staged.name,
        staged.size(),
        source.as_str()
    );
    if let Some(handler) = on_change {
        handler.call(Some(staged));
    }
}

/// Search field plus an image-search button that opens the picker dialog
#[component]
pub fn SearchInputBar(
    #[props(default)] config: ImageSearchConfig,
    /// Text search; the search button does nothing without it
    #[props(default)]
    on_search: Option<EventHandler<String>>,
    /// Fires whenever the staged image changes, including clears
    #[props(default)]
    on_image_change: Option<EventHandler<Option<SelectedImage>>>,
    /// Confirm action for the dialog; without it the dialog has no action buttons
    #[props(default)]
    on_image_submit: Option<EventHandler<SelectedImage>>,
) -> Element {
    let input_id = use_hook(|| {
        let id = INPUT_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("image-search-input-{}", id)
    });
    let mut query = use_signal(String::new);
    let mut selection = use_signal(ImageSelection::default);
    let dialog = use_dialog_with(move |open| {
        tracing::debug!("Image search dialog {}", if open { "opened" } else { "closed" });
        let cleared = selection.write().reset();
        if let (Some(handler), Some(_)) = (on_image_change, cleared) {
            handler.call(None);
        }
    });

    // Global paste: lives exactly as long as this component.
    // The listener runs with the runtime entered but no current scope, so the
    // read is driven by spawn_local and re-enters the runtime to commit.
    let runtime = use_hook(Runtime::current);
    use_window_listener("paste", move |event| {
        let files = clipboard_files(&event);
        // Signals may already be dropped if a paste lands before the
        // deferred listener cleanup ran.
        let Ok(mut guard) = selection.try_write() else {
            return;
        };
        let ticket = paste_files(&mut guard, files.as_ref().map(|f| f.length() as usize));
        drop(guard);
        let (Some(ticket), Some(file)) = (ticket, files.and_then(|f| f.get(0))) else {
            return;
        };
        let runtime = runtime.clone();
        wasm_bindgen_futures_x::spawn_local(async move {
            let read = read_web_file(&file).await;
            let _guard = RuntimeGuard::new(runtime);
            match read {
                Ok(bytes) => {
                    let image = SelectedImage::new(file.name(), bytes);
                    commit(selection, ticket, image, FileSource::Paste, on_image_change);
                }
                Err(e) => tracing::warn!("{e}"),
            }
        });
    });

    let staged = selection.read().image().cloned();

    let input_id_for_change = input_id.clone();
    let handle_file_chosen = move |evt: FormEvent| {
        let input_id = input_id_for_change.clone();
        async move {
            let files = evt.files();
            let Some(ticket) = stage_files(&mut selection.write(), files.len()) else {
                return;
            };
            clear_input_value(&input_id);
            if let Some(file) = files.into_iter().next() {
                stage_event_file(selection, ticket, file, FileSource::Picker, on_image_change).await;
            }
        }
    };

    let handle_drag_over = move |evt: DragEvent| {
        evt.prevent_default();
        if !dialog.drag_over() {
            dialog.update(drag_over);
        }
    };

    let handle_drag_leave = move |evt: DragEvent| {
        evt.prevent_default();
        dialog.update(drag_leave);
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        let files = evt.files();
        let ticket = dialog.update(|state| drop_files(state, &mut selection.write(), files.len()));
        let (Some(ticket), Some(file)) = (ticket, files.into_iter().next()) else {
            return;
        };
        stage_event_file(selection, ticket, file, FileSource::Drop, on_image_change).await;
    };

    let submit_search = move || {
        if let Some(handler) = on_search {
            handler.call(query());
        }
    };

    let on_submit = on_image_submit.map(|handler| {
        EventHandler::new(move |image: SelectedImage| {
            handler.call(image);
            dialog.close_dialog();
        })
    });
    let on_cancel = on_image_submit.map(|_| EventHandler::new(move |_: ()| dialog.close_dialog()));

    rsx! {
        div {
            form {
                class: "flex items-center w-[400px] px-1 py-0.5 bg-white rounded shadow",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    submit_search();
                },
                input {
                    r#type: "text",
                    class: "flex-1 ml-2 bg-transparent text-gray-900 placeholder-gray-500 focus:outline-none",
                    placeholder: "{config.placeholder}",
                    aria_label: "{config.search_input_aria_label}",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                }
                ChromelessButton {
                    class: Some("p-2.5 text-gray-600 hover:text-gray-900".to_string()),
                    aria_label: Some(config.search_aria_label.clone()),
                    onclick: move |_| submit_search(),
                    SearchIcon {}
                }
                div { class: "w-px h-7 m-1 bg-gray-300" }
                ChromelessButton {
                    class: Some("p-2.5 text-gray-600 hover:text-gray-900".to_string()),
                    aria_label: Some(config.image_search_aria_label.clone()),
                    onclick: move |_| dialog.open_dialog(),
                    ScanSearchIcon {}
                }
            }

            ImagePickerDialogView {
                visible: dialog.open(),
                on_request_close: move |_| dialog.close_dialog(),
                selected_image: staged,
                on_file_chosen: handle_file_chosen,
                on_drop: handle_drop,
                on_drag_over: handle_drag_over,
                on_drag_leave: handle_drag_leave,
                drag_highlight: dialog.drag_over(),
                input_id: input_id.clone(),
                config: config.clone(),
                on_submit,
                on_cancel,
            }
        }
    }
}
