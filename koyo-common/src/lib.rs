//! koyo-common - Pure gallery model shared by the UI crates
//!
//! No DOM access and no I/O: everything here can be unit tested natively.

mod focus_trap;
mod image_item;
mod image_load;
mod lightbox_key;
mod manifest;
mod scroll;
mod search;
mod selection;
mod theme;

pub use focus_trap::{focus_step, wrap_target, FocusStep, TabDirection};
pub use image_item::ImageItem;
pub use image_load::{ImageLoad, LoadStatus};
pub use lightbox_key::{LightboxCommand, LightboxRequest, RequestQueue};
pub use manifest::{parse_manifest, ManifestError};
pub use scroll::{ScrollTracker, TopBarVisibility, SCROLL_THRESHOLD_PX};
pub use search::{filter_images, is_contact_query, CONTACT_KEYWORDS};
pub use selection::{next_index, prev_index, Selection};
pub use theme::{ParseThemeError, Theme, THEME_STORAGE_KEY};
