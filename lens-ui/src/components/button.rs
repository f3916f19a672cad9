//! Button components

use dioxus::prelude::*;

/// Chromeless button - accessibility and click handling without visual
/// styling. Used for the search bar's icon buttons and by [`Button`].
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: r#type.unwrap_or("button"),
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Filled accent - confirms the dialog
    Primary,
    /// Text only - dismisses the dialog
    Text,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-blue-600 hover:bg-blue-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
            }
            ButtonVariant::Text => "text-blue-600 hover:bg-blue-50",
        }
    }
}

/// Dialog action button
#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class = format!(
        "inline-flex items-center gap-2 px-4 py-2 text-sm font-medium uppercase rounded-md transition-colors {}",
        variant.class()
    );

    rsx! {
        ChromelessButton { disabled, class: Some(class), onclick, {children} }
    }
}
