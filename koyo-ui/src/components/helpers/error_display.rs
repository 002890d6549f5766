//! Error display component

use dioxus::prelude::*;

/// Error box shown in place of content that could not be prepared
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div { class: "error-display", role: "alert",
            p { "{message}" }
        }
    }
}
