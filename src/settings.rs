use serde::{Deserialize, Serialize};
use tracing::warn;

const DEFAULT_VOLUME: f64 = 0.8;

/// Presentation settings for the widget, loaded from `assets/settings.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub tagline: String,
    pub date_locale: String,
    pub date_pattern: String,
    pub empty_message: String,
    pub volume: f64,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            tagline: "The best for you to always listen".to_string(),
            date_locale: "en_US".to_string(),
            date_pattern: "%a, %-d %B".to_string(),
            empty_message: "Select a podcast to listen to".to_string(),
            volume: DEFAULT_VOLUME,
        }
    }
}

impl WidgetSettings {
    /// Parse settings, falling back to defaults when the document is unusable.
    pub fn from_json_or_default(raw: &str) -> Self {
        match serde_json::from_str::<WidgetSettings>(raw) {
            Ok(mut settings) => {
                settings.volume = normalize_volume(settings.volume);
                settings
            }
            Err(err) => {
                warn!(%err, "invalid widget settings, using defaults");
                Self::default()
            }
        }
    }
}

/// Accepts both `0..1` and `0..100` style volumes.
fn normalize_volume(mut value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_VOLUME;
    }
    if value > 1.0 {
        value /= 100.0;
    }
    value.clamp(0.0, 1.0)
}
