//! Shared UI components

pub mod button;
pub mod contact;
pub mod gallery;
pub mod helpers;
pub mod hero;
pub mod icons;
pub mod lightbox;
pub mod search_input;
pub mod site_layout;
pub mod top_bar;

pub use button::ChromelessButton;
pub use contact::ContactSectionView;
pub use gallery::GallerySectionView;
pub use helpers::{ErrorDisplay, LoadingSpinner};
pub use hero::HeroView;
pub use icons::{ChevronLeftIcon, ChevronRightIcon, ImageIcon, XIcon};
pub use lightbox::Lightbox;
pub use search_input::SearchInput;
pub use site_layout::SiteLayoutView;
pub use top_bar::TopBarView;
