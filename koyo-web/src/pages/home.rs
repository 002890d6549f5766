use crate::gallery_data;
use dioxus::prelude::*;
use koyo_common::{ImageItem, Selection, TopBarVisibility};
use koyo_ui::dom;
use koyo_ui::stores::{GalleryState, GalleryStateStoreExt};
use koyo_ui::{
    use_persisted_theme, use_top_bar_visibility, ContactSectionView, ErrorDisplay,
    GallerySectionView, HeroView, Lightbox, PageSection, SiteLayoutView, TopBarView,
};

fn scroll_to(section: PageSection) {
    match section.anchor_id() {
        Some(id) => dom::scroll_to_section(id),
        None => dom::scroll_to_top(),
    }
}

#[component]
pub fn Home() -> Element {
    let images = use_hook(|| {
        gallery_data::load_images().map_err(|e| {
            tracing::error!("Failed to load gallery manifest: {e}");
            e.to_string()
        })
    });

    match images {
        Ok(images) => rsx! {
            GalleryPage { images }
        },
        Err(message) => rsx! {
            ErrorDisplay { message: format!("No se pudo cargar la galería: {message}") }
        },
    }
}

/// The whole page. Owns the search query, the theme and the lightbox
/// selection; every view below it is props-driven.
#[component]
fn GalleryPage(images: Vec<ImageItem>) -> Element {
    let total = images.len();
    let state = use_store({
        let images = images.clone();
        move || GalleryState {
            images,
            query: String::new(),
        }
    });
    let mut selection = use_signal(Selection::default);
    let mut theme = use_persisted_theme();
    let top_bar = use_top_bar_visibility();

    let selection_read: ReadSignal<Selection> = selection.into();
    let query = state.query().read().clone();

    rsx! {
        SiteLayoutView {
            theme: theme(),
            top_bar: rsx! {
                TopBarView {
                    hidden: top_bar() == TopBarVisibility::Hidden,
                    query,
                    theme: theme(),
                    on_nav_click: move |section: PageSection| scroll_to(section),
                    on_query_change: move |value: String| {
                        state.query().set(value);
                    },
                    on_clear_query: move |_| {
                        state.query().set(String::new());
                    },
                    on_toggle_theme: move |_| {
                        let next = theme().toggled();
                        theme.set(next);
                    },
                }
            },
            extra: rsx! {
                Lightbox {
                    images,
                    selection: selection_read,
                    on_close: move |_| selection.set(Selection::Closed),
                    on_prev: move |_| {
                        let prev = selection().prev(total);
                        selection.set(prev);
                    },
                    on_next: move |_| {
                        let next = selection().next(total);
                        selection.set(next);
                    },
                }
            },
            HeroView { on_learn_more: move |_| scroll_to(PageSection::Gallery) }
            GallerySectionView {
                state,
                on_open: move |index: usize| {
                    if let Some(opened) = Selection::open_at(index, total) {
                        selection.set(opened);
                    }
                },
                on_contact_click: move |_| scroll_to(PageSection::Contact),
            }
            ContactSectionView {}
        }
    }
}
