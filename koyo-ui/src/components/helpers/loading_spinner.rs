//! Loading spinner component

use dioxus::prelude::*;

/// Spinner placeholder, hidden from assistive technology
#[component]
pub fn LoadingSpinner(#[props(default = "spinner")] class: &'static str) -> Element {
    rsx! {
        div { class: "{class}", aria_hidden: "true" }
    }
}
