//! Episode catalog bundled with the widget.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::models::Episode;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("episode {id:?} is missing `{field}`")]
    MissingField { id: String, field: &'static str },
    #[error("episode id {0:?} appears more than once")]
    DuplicateId(String),
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    episodes: Vec<Episode>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    episodes: Vec<Episode>,
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        let mut seen = HashSet::new();
        for episode in &document.episodes {
            if episode.id.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    id: episode.title.clone(),
                    field: "id",
                });
            }
            for (field, value) in [("title", &episode.title), ("media_url", &episode.media_url)] {
                if value.trim().is_empty() {
                    return Err(CatalogError::MissingField {
                        id: episode.id.clone(),
                        field,
                    });
                }
            }
            if !seen.insert(episode.id.as_str()) {
                return Err(CatalogError::DuplicateId(episode.id.clone()));
            }
        }
        Ok(Self {
            episodes: document.episodes,
        })
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// The whole catalog as a playback queue, in listing order.
    pub fn to_queue(&self) -> Vec<Episode> {
        self.episodes.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_fields() {
        let raw = r#"{"episodes": [{
            "id": "a",
            "title": "Faladev #30",
            "members": "Diego e Richard",
            "thumbnail": "https://cdn.test/a.jpg",
            "duration": 3981,
            "url": "https://cdn.test/a.m4a",
            "publishedAt": "8 Jan 21"
        }]}"#;
        let catalog = Catalog::from_json(raw).unwrap();
        let episode = &catalog.episodes()[0];
        assert_eq!(episode.members, "Diego e Richard");
        assert_eq!(episode.thumbnail_url, "https://cdn.test/a.jpg");
        assert_eq!(episode.duration_seconds, 3981);
        assert_eq!(episode.media_url, "https://cdn.test/a.m4a");
        assert_eq!(episode.published_at.as_deref(), Some("8 Jan 21"));
    }

    #[test]
    fn rejects_blank_media_url() {
        let raw = r#"{"episodes": [{"id": "a", "title": "A", "media_url": " "}]}"#;
        match Catalog::from_json(raw) {
            Err(CatalogError::MissingField { id, field }) => {
                assert_eq!(id, "a");
                assert_eq!(field, "media_url");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let raw = r#"{"episodes": [
            {"id": "a", "title": "A", "media_url": "https://cdn.test/a.mp3"},
            {"id": "a", "title": "B", "media_url": "https://cdn.test/b.mp3"}
        ]}"#;
        assert!(matches!(
            Catalog::from_json(raw),
            Err(CatalogError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("{\"episodes\": ["),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = Catalog::from_json(include_str!("../assets/episodes.json")).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn queue_keeps_listing_order() {
        let raw = r#"{"episodes": [
            {"id": "b", "title": "B", "media_url": "https://cdn.test/b.mp3"},
            {"id": "a", "title": "A", "media_url": "https://cdn.test/a.mp3"}
        ]}"#;
        let catalog = Catalog::from_json(raw).unwrap();
        let ids: Vec<_> = catalog.to_queue().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["b", "a"]);
    }
}
