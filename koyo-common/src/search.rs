use crate::image_item::ImageItem;

/// Query fragments that suggest the visitor is looking for travel info
pub const CONTACT_KEYWORDS: &[&str] = &[
    "contact",
    "aerolinea",
    "aerolínea",
    "aerolíneas",
    "aerolineas",
    "flight",
    "vuelo",
    "viaje",
];

/// Images whose description contains `query`, case-insensitively.
///
/// Each match carries its index in the full sequence, which is what the
/// lightbox navigates over. A blank query matches everything.
pub fn filter_images<'a>(images: &'a [ImageItem], query: &str) -> Vec<(usize, &'a ImageItem)> {
    let query = query.trim().to_lowercase();
    images
        .iter()
        .enumerate()
        .filter(|(_, img)| query.is_empty() || img.description.to_lowercase().contains(&query))
        .collect()
}

/// Whether the query looks like a contact or travel search.
pub fn is_contact_query(query: &str) -> bool {
    let query = query.to_lowercase();
    !query.trim().is_empty() && CONTACT_KEYWORDS.iter().any(|k| query.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images() -> Vec<ImageItem> {
        vec![
            ImageItem::new("/1.jpg", "Kyoto, paisaje otoñal"),
            ImageItem::new("/2.jpg", "Retrato en kimono"),
            ImageItem::new("/3.jpg", "Plato tradicional de Kyoto"),
        ]
    }

    #[test]
    fn test_blank_query_keeps_all() {
        let imgs = images();
        assert_eq!(filter_images(&imgs, "").len(), 3);
        assert_eq!(filter_images(&imgs, "   ").len(), 3);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_keeps_absolute_index() {
        let imgs = images();
        let found: Vec<usize> = filter_images(&imgs, "KYOTO").iter().map(|(i, _)| *i).collect();
        assert_eq!(found, vec![0, 2]);
    }

    #[test]
    fn test_no_match() {
        let imgs = images();
        assert!(filter_images(&imgs, "sushi").is_empty());
    }

    #[test]
    fn test_contact_query() {
        assert!(is_contact_query("Vuelos a Tokio"));
        assert!(is_contact_query("aerolíneas"));
        assert!(is_contact_query("CONTACT"));
        assert!(!is_contact_query("kimono"));
        assert!(!is_contact_query(""));
    }
}
