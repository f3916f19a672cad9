//! Icon components using Lucide icon set (https://lucide.dev)
//!
//! All icons use stroke="currentColor" so they inherit text color from Tailwind classes.
//! Default size is w-5 h-5, override with the `class` prop.

use dioxus::prelude::*;

/// Shared 24x24 stroked frame every Lucide icon is drawn in
#[component]
fn LucideSvg(class: &'static str, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

/// Magnifying glass (text search)
#[component]
pub fn SearchIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}

/// Magnifier inside a viewfinder (search by image)
#[component]
pub fn ScanSearchIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M3 7V5a2 2 0 0 1 2-2h2" }
            path { d: "M17 3h2a2 2 0 0 1 2 2v2" }
            path { d: "M21 17v2a2 2 0 0 1-2 2h-2" }
            path { d: "M7 21H5a2 2 0 0 1-2-2v-2" }
            circle { cx: "12", cy: "12", r: "3" }
            path { d: "m16 16-1.9-1.9" }
        }
    }
}

/// Upload arrow over a tray
#[component]
pub fn UploadIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M12 3v12" }
            path { d: "m17 8-5-5-5 5" }
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
        }
    }
}

/// Picture placeholder, shown when a preview cannot be built
#[component]
pub fn ImageIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            rect {
                x: "3",
                y: "3",
                width: "18",
                height: "18",
                rx: "2",
                ry: "2",
            }
            circle { cx: "9", cy: "9", r: "2" }
            path { d: "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21" }
        }
    }
}
