//! Display types for UI components

pub use koyo_common::{ImageItem, Selection, Theme};

/// Sections of the page reachable from the top bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSection {
    Home,
    Gallery,
    Contact,
}

impl PageSection {
    pub const ALL: [PageSection; 3] = [Self::Home, Self::Gallery, Self::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Gallery => "Gallery",
            Self::Contact => "Contact",
        }
    }

    /// Anchor id of the section. Home scrolls to the top of the page instead.
    pub fn anchor_id(&self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::Gallery => Some("gallery"),
            Self::Contact => Some("contact"),
        }
    }
}
