use serde::{Deserialize, Serialize};

/// A single podcast episode. Never mutated once it has been handed to the
/// playback queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Episode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub members: String,
    #[serde(default, alias = "thumbnail")]
    pub thumbnail_url: String,
    #[serde(default, alias = "duration")]
    pub duration_seconds: u32,
    #[serde(alias = "url")]
    pub media_url: String,
    #[serde(default, alias = "publishedAt")]
    pub published_at: Option<String>,
}

#[cfg(test)]
impl Episode {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        duration_seconds: u32,
        media_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_seconds,
            media_url: media_url.into(),
            ..Self::default()
        }
    }
}
