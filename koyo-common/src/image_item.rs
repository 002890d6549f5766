use serde::Deserialize;

/// One photo in the gallery: where to load it from and its caption.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ImageItem {
    pub source: String,
    #[serde(default)]
    pub description: String,
}

impl ImageItem {
    pub fn new(source: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            description: description.into(),
        }
    }
}
