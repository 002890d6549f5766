//! Site layout view component
//!
//! Root element of the page. Carries the theme as `data-theme` so the
//! stylesheet can switch palettes, and provides slots for the top bar and
//! for overlays rendered above the page.

use dioxus::prelude::*;
use koyo_common::Theme;

/// Site layout view (pure, props-based)
#[component]
pub fn SiteLayoutView(
    theme: Theme,
    /// Page sections
    children: Element,
    /// Optional top bar
    #[props(default)]
    top_bar: Option<Element>,
    /// Optional overlays (the lightbox)
    #[props(default)]
    extra: Option<Element>,
) -> Element {
    rsx! {
        div { class: "app", "data-theme": theme.as_str(),
            if let Some(tb) = top_bar {
                {tb}
            }
            {children}
            if let Some(ex) = extra {
                {ex}
            }
        }
    }
}
