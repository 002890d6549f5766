//! Gallery section view - pure rendering, no data fetching
//!
//! Accepts `ReadStore<GalleryState>` and filters the images by the current
//! query. Thumbnails report the image's index in the full sequence, so the
//! lightbox navigates over every image regardless of the filter.

use crate::components::helpers::LoadingSpinner;
use crate::components::icons::ImageIcon;
use crate::components::ChromelessButton;
use crate::stores::gallery::{GalleryState, GalleryStateStoreExt};
use dioxus::prelude::*;
use koyo_common::{filter_images, is_contact_query, ImageItem};

#[component]
pub fn GallerySectionView(
    state: ReadStore<GalleryState>,
    /// Called with the absolute index of the clicked thumbnail
    on_open: EventHandler<usize>,
    on_contact_click: EventHandler<()>,
) -> Element {
    let images = state.images().read().clone();
    let query = state.query().read().clone();

    let visible: Vec<(usize, ImageItem)> = filter_images(&images, &query)
        .into_iter()
        .map(|(index, img)| (index, img.clone()))
        .collect();
    let show_contact_hint = is_contact_query(&query);

    rsx! {
        section { id: "gallery", class: "gallery-section",
            div { class: "gallery-inner",
                h2 { "Galería" }
                p {
                    "Japón ofrece una combinación única de tradición y modernidad: templos y jardines que invitan a la contemplación, celebraciones estacionales como el hanami y el kōyō, y una estética cuidada en la vida diaria, desde la arquitectura hasta la gastronomía, que celebra la simplicidad, el detalle y el respeto por la naturaleza. Explora estas imágenes para descubrir momentos y escenas que transmiten esa sensibilidad cultural."
                }
                if images.is_empty() {
                    LoadingSpinner {}
                } else if visible.is_empty() {
                    div { class: "gallery-empty",
                        ImageIcon { class: "icon-large" }
                        p { "Ninguna foto coincide con \"{query}\"" }
                    }
                } else {
                    div { class: "gallery-grid",
                        for (index , img) in visible {
                            Thumbnail { key: "{index}", index, image: img, on_open }
                        }
                    }
                }
                if show_contact_hint {
                    div {
                        class: "contact-signal",
                        role: "status",
                        aria_live: "polite",
                        "Parece que buscas información de contacto o viajes. Puedes ir a la sección "
                        ChromelessButton {
                            class: Some("linkish".to_string()),
                            onclick: move |_| on_contact_click.call(()),
                            "Contact"
                        }
                        "."
                    }
                }
            }
        }
    }
}

#[component]
fn Thumbnail(index: usize, image: ImageItem, on_open: EventHandler<usize>) -> Element {
    let position = index + 1;

    rsx! {
        div { class: "thumb-wrap",
            ChromelessButton {
                class: Some("thumb".to_string()),
                style: Some(format!("background-image: url('{}')", image.source)),
                aria_label: Some(format!("Abrir imagen {position}")),
                onclick: move |_| on_open.call(index),
                span { class: "visually-hidden", "Abrir imagen {position}" }
            }
            div { class: "thumb-caption", "{image.description}" }
        }
    }
}
