//! Unstyled button primitive

use dioxus::prelude::*;

/// Chromeless button - accessibility attributes and click handling without
/// visual styling. Callers style it through `class`.
#[component]
pub fn ChromelessButton(
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    /// Rendered as `aria-pressed` for toggle buttons
    #[props(default)]
    aria_pressed: Option<bool>,
    #[props(default)] style: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            id: id.as_deref(),
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_pressed: aria_pressed.map(|p| if p { "true" } else { "false" }),
            style: style.as_deref(),
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
