//! Gallery state store

use dioxus::prelude::*;
use koyo_common::ImageItem;

/// State for the gallery section
///
/// The lightbox selection is not part of the store: the page owns it as a
/// signal so the lightbox can subscribe to it on its own.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct GalleryState {
    /// All images, in navigation order
    pub images: Vec<ImageItem>,
    /// Current search text
    pub query: String,
}
