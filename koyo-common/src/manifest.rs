//! Static image manifest
//!
//! The gallery's images are a JSON array embedded in the web crate:
//!
//! ```json
//! [{ "source": "/1.jpg", "description": "Foto 1 ..." }]
//! ```

use crate::image_item::ImageItem;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid manifest JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("manifest has no images")]
    Empty,
    #[error("image {index} has an empty source")]
    MissingSource { index: usize },
}

/// Parse and validate the manifest, keeping its order.
pub fn parse_manifest(json: &str) -> Result<Vec<ImageItem>, ManifestError> {
    let images: Vec<ImageItem> = serde_json::from_str(json)?;
    if images.is_empty() {
        return Err(ManifestError::Empty);
    }
    if let Some(index) = images.iter().position(|img| img.source.trim().is_empty()) {
        return Err(ManifestError::MissingSource { index });
    }
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order() {
        let images = parse_manifest(
            r#"[
                {"source": "/1.jpg", "description": "uno"},
                {"source": "/2.jpg", "description": "dos"}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            images,
            vec![ImageItem::new("/1.jpg", "uno"), ImageItem::new("/2.jpg", "dos")]
        );
    }

    #[test]
    fn test_description_is_optional() {
        let images = parse_manifest(r#"[{"source": "/1.jpg"}]"#).unwrap();
        assert_eq!(images[0].description, "");
    }

    #[test]
    fn test_empty_manifest_rejected() {
        assert!(matches!(parse_manifest("[]"), Err(ManifestError::Empty)));
    }

    #[test]
    fn test_blank_source_rejected() {
        let err = parse_manifest(r#"[{"source": "/1.jpg"}, {"source": "  "}]"#).unwrap_err();
        assert!(matches!(err, ManifestError::MissingSource { index: 1 }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_manifest("{"), Err(ManifestError::Json(_))));
    }
}
