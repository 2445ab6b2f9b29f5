use serde::Deserialize;
use std::time::Duration;

/// On-disk shape of `videos.toml`: one `[app]` section plus any number of
/// `[[videos]]` entries.
#[derive(Deserialize, Default)]
pub struct CatalogFile {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub videos: Vec<VideoSection>,
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct AppSection {
    pub name: String,
    pub tagline: String,
    pub categories: Vec<String>,
    pub videos_per_page: usize,
    pub age_gate: bool,
    /// Narrow/touch-primary viewport hint: controls never auto-hide.
    pub touch_primary: bool,
}

impl Default for AppSection {
    fn default() -> Self {
        AppSection {
            name: "DriveStream".to_string(),
            tagline: "Stream your videos, your way".to_string(),
            categories: Vec::new(),
            videos_per_page: 12,
            age_gate: false,
            touch_primary: false,
        }
    }
}

#[derive(Deserialize)]
pub struct VideoSection {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Parse a configured "MM:SS" or "HH:MM:SS" duration. Anything else reads
/// as unknown, not as an error: duration here is display-only.
pub fn parse_duration(text: &str) -> Option<Duration> {
    let parts: Vec<u64> = text
        .split(':')
        .map(|p| p.parse::<u64>().ok())
        .collect::<Option<_>>()?;

    let secs = match parts.as_slice() {
        [mins, secs] => mins * 60 + secs,
        [hours, mins, secs] => hours * 3600 + mins * 60 + secs,
        _ => return None,
    };

    Some(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_parse_both_forms() {
        assert_eq!(parse_duration("12:34"), Some(Duration::from_secs(754)));
        assert_eq!(
            parse_duration("1:02:03"),
            Some(Duration::from_secs(3723))
        );
        assert_eq!(parse_duration("nope"), None);
        assert_eq!(parse_duration("1:2:3:4"), None);
    }
}
