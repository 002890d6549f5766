//! Top bar view component
//!
//! Section menu, search box, clear button and theme toggle. Slides out of
//! view while `hidden` is set.

use crate::components::icons::XIcon;
use crate::components::{ChromelessButton, SearchInput};
use crate::display_types::PageSection;
use dioxus::prelude::*;
use koyo_common::Theme;

/// Id of the search input
const SEARCH_INPUT_ID: &str = "gallery-search";

#[component]
pub fn TopBarView(
    hidden: bool,
    query: String,
    theme: Theme,
    on_nav_click: EventHandler<PageSection>,
    on_query_change: EventHandler<String>,
    on_clear_query: EventHandler<()>,
    on_toggle_theme: EventHandler<()>,
) -> Element {
    let bar_class = if hidden { "topbar topbar-hidden" } else { "topbar" };
    let is_autumn = theme == Theme::Autumn;

    rsx! {
        div { class: "{bar_class}",
            nav { class: "topbar-inner",
                ul { class: "menu",
                    for section in PageSection::ALL {
                        li { key: "{section.label()}", class: "menu-item",
                            ChromelessButton {
                                class: Some("menu-btn".to_string()),
                                onclick: move |_| on_nav_click.call(section),
                                {section.label()}
                            }
                        }
                    }
                }
                div { class: "top-controls",
                    SearchInput {
                        id: Some(SEARCH_INPUT_ID.to_string()),
                        value: query,
                        on_input: move |value| on_query_change.call(value),
                        placeholder: "Buscar gallery o contact",
                        aria_label: "Buscar",
                    }
                    ChromelessButton {
                        class: Some("icon-btn".to_string()),
                        title: Some("Clear search".to_string()),
                        aria_label: Some("Limpiar búsqueda".to_string()),
                        onclick: move |_| on_clear_query.call(()),
                        XIcon {}
                    }
                    ChromelessButton {
                        class: Some("icon-btn".to_string()),
                        aria_label: Some("Cambiar tema".to_string()),
                        aria_pressed: Some(is_autumn),
                        onclick: move |_| on_toggle_theme.call(()),
                        "🍁"
                    }
                }
            }
        }
    }
}
