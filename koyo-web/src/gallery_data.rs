//! Images shown by the gallery
//!
//! The list is embedded at build time from `assets/gallery.json`; the image
//! files themselves are served from `public/`.

use koyo_common::{parse_manifest, ImageItem, ManifestError};

const MANIFEST: &str = include_str!("../assets/gallery.json");

pub fn load_images() -> Result<Vec<ImageItem>, ManifestError> {
    parse_manifest(MANIFEST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_manifest_is_valid() {
        let images = load_images().unwrap();
        assert_eq!(images.len(), 6);
        assert_eq!(images[0].source, "/1.jpg");
        assert!(images.iter().all(|img| !img.description.is_empty()));
    }
}
