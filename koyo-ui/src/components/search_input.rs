//! Search text input

use dioxus::prelude::*;

/// Text input for the gallery search
#[component]
pub fn SearchInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] aria_label: Option<&'static str>,
    #[props(default)] id: Option<String>,
) -> Element {
    rsx! {
        input {
            r#type: "search",
            class: "search-input",
            id: id.as_deref(),
            value: "{value}",
            placeholder,
            aria_label,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
