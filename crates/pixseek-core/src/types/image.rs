//! Image result records as returned by the image service.

use serde::{Deserialize, Serialize};

/// One image in a page of search results.
///
/// Field names follow the service's JSON (`largeImageURL`, `webformatURL`),
/// which does not match serde's camelCase rule, so each URL is renamed
/// explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHit {
    /// Service-side identifier, used only as a render key
    #[serde(default)]
    pub id: u64,
    /// Full-size image opened in the lightbox
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    /// Medium-size image shown in the gallery grid
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    /// Comma separated tags, used as alt text and lightbox caption
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub downloads: u64,
}

impl ImageHit {
    /// The four counters rendered under each gallery image, in display order.
    pub fn stats(&self) -> [(&'static str, u64); 4] {
        [
            ("Likes", self.likes),
            ("Views", self.views),
            ("Comments", self.comments),
            ("Downloads", self.downloads),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_fields() {
        let json = r#"{
            "id": 195893,
            "pageURL": "https://pixabay.com/en/blossom-bloom-flower-195893/",
            "type": "photo",
            "tags": "blossom, bloom, flower",
            "previewURL": "https://cdn.pixabay.com/photo/2013/10/15/09/12/flower-195893_150.jpg",
            "webformatURL": "https://pixabay.com/get/35bbf209e13e39d2_640.jpg",
            "largeImageURL": "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg",
            "views": 7671,
            "downloads": 6439,
            "likes": 5,
            "comments": 2,
            "user_id": 48777,
            "user": "Josch13"
        }"#;

        let hit: ImageHit = serde_json::from_str(json).unwrap();
        assert_eq!(hit.id, 195893);
        assert_eq!(hit.tags, "blossom, bloom, flower");
        assert_eq!(hit.webformat_url, "https://pixabay.com/get/35bbf209e13e39d2_640.jpg");
        assert_eq!(hit.large_image_url, "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg");
        assert_eq!(hit.likes, 5);
        assert_eq!(hit.views, 7671);
        assert_eq!(hit.comments, 2);
        assert_eq!(hit.downloads, 6439);
    }

    #[test]
    fn test_missing_urls_rejected() {
        let json = r#"{ "id": 1, "tags": "cat" }"#;
        assert!(serde_json::from_str::<ImageHit>(json).is_err());
    }

    #[test]
    fn test_stats_order() {
        let hit = ImageHit {
            id: 1,
            large_image_url: "l".into(),
            webformat_url: "w".into(),
            tags: "cat".into(),
            likes: 1,
            views: 2,
            comments: 3,
            downloads: 4,
        };
        let labels: Vec<_> = hit.stats().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, ["Likes", "Views", "Comments", "Downloads"]);
        assert_eq!(hit.stats()[3].1, 4);
    }
}
