//! lens web - Demo host for the image search widget
//!
//! Mounts `SearchInputBar` on an otherwise empty page and shows what the
//! widget reports back through its host callbacks.

pub mod storage;

use dioxus::prelude::*;
use lens_ui::{format_file_size, SearchInputBar, SelectedImage};
use tracing::info;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(storage::load_config);
    let mut staged = use_signal(|| None::<SelectedImage>);
    let mut last_query = use_signal(|| None::<String>);
    let mut submitted = use_signal(Vec::<String>::new);

    let staged_label = match staged() {
        Some(image) => format!(
            "{} ({}, {})",
            image.name,
            format_file_size(image.size()),
            image.content_type
        ),
        None => "none".to_string(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        main { class: "min-h-screen bg-gray-100 flex flex-col items-center gap-6 pt-16",
            SearchInputBar {
                config,
                on_search: Some(EventHandler::new(move |query: String| {
                    info!("Text search requested: {query:?}");
                    last_query.set(Some(query));
                })),
                on_image_change: Some(EventHandler::new(move |image: Option<SelectedImage>| {
                    match &image {
                        Some(image) => info!("Staged image {} ({} bytes)", image.name, image.size()),
                        None => info!("Staged image cleared"),
                    }
                    staged.set(image);
                })),
                on_image_submit: Some(EventHandler::new(move |image: SelectedImage| {
                    info!("Image search submitted: {}", image.name);
                    submitted.write().push(image.name);
                })),
            }

            section { class: "w-[400px] text-sm text-gray-600 flex flex-col gap-1",
                p { "Staged: {staged_label}" }
                if let Some(query) = last_query() {
                    p { "Last query: {query}" }
                }
                for (i, name) in submitted.read().iter().enumerate() {
                    p { key: "{i}", "Submitted: {name}" }
                }
            }
        }
    }
}
