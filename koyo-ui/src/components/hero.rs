//! Hero section

use crate::components::ChromelessButton;
use dioxus::prelude::*;

/// Decorative image shown beside the hero text, served from the public dir
const HERO_IMAGE_URL: &str = "/lado-removebg-preview.png";

#[component]
pub fn HeroView(on_learn_more: EventHandler<()>) -> Element {
    rsx! {
        main { class: "hero",
            section { id: "home", class: "hero-left",
                div { class: "badge", "Kōyō Gallery" }
                h1 { class: "hero-title", "紅葉" }
                p { class: "hero-description",
                    "Una galería de fotografía que celebra momentos, retratos y composición. Explora la cultura tradicional y descubre historias visuales."
                }
                ChromelessButton {
                    class: Some("hero-cta cta-btn".to_string()),
                    onclick: move |_| on_learn_more.call(()),
                    "Learn more"
                }
                div { class: "hashtag", "#KōyōGallery" }
            }
            section { class: "hero-right",
                div {
                    class: "hero-image",
                    style: "background-image: url('{HERO_IMAGE_URL}')",
                    aria_hidden: "true",
                }
                div { class: "red-ornament large", aria_hidden: "true" }
                div { class: "red-ornament small", aria_hidden: "true" }
            }
        }
    }
}
