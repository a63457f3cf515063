//! Formatting helpers shared by the header and the player.

use chrono::{Locale, NaiveDate};
use tracing::warn;

const FALLBACK_LOCALE: Locale = Locale::en_US;

/// Render elapsed seconds as `MM:SS`. Minutes keep counting past 59, there is
/// no hour field.
pub fn format_duration(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Floor a media-element time to whole seconds. NaN, infinite and negative
/// values collapse to zero.
pub fn whole_seconds(time: f64) -> u32 {
    if !time.is_finite() || time <= 0.0 {
        return 0;
    }
    time.floor().min(u32::MAX as f64) as u32
}

/// Localized date line shown in the header, e.g. `Mon, 19 April`.
pub fn format_header_date(date: NaiveDate, pattern: &str, locale: &str) -> String {
    let locale = Locale::try_from(locale).unwrap_or_else(|_| {
        warn!(locale, "unknown date locale, falling back to en_US");
        FALLBACK_LOCALE
    });
    date.format_localized(pattern, locale).to_string()
}
