use anyhow::{Result, anyhow};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use xxhash_rust::xxh3::xxh3_64;

pub mod app_core;
pub mod catalog;
pub mod database;
pub mod domain;
pub mod key_handler;
pub mod player;
pub mod tui;
pub mod ui_state;

pub use catalog::Catalog;
pub use database::Database;
pub use player::PlaybackController;

// ~30fps
pub const REFRESH_RATE: Duration = Duration::from_millis(33);

/// Stable id for a catalog entry, hashed from its stream url and title.
/// Entries keep their id across reorderings of the config file.
pub fn entry_signature(url: &str, title: &str) -> u64 {
    let mut data = Vec::with_capacity(url.len() + title.len() + 1);
    data.extend_from_slice(url.as_bytes());
    data.push(0x1f);
    data.extend_from_slice(title.as_bytes());

    xxh3_64(&data)
}

pub enum DurationStyle {
    Clean,
    Compact,
}

pub fn get_readable_duration(duration: Duration, style: DurationStyle) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    match style {
        DurationStyle::Clean => match (hours, mins) {
            (0, 0) => format!("{secs:02}s"),
            (0, _) => format!("{mins}m {secs:02}s"),
            _ => format!("{hours}h {mins}m"),
        },
        DurationStyle::Compact => match hours {
            0 => format!("{mins}:{secs:02}"),
            _ => format!("{hours}:{mins:02}:{secs:02}"),
        },
    }
}

pub fn truncate_at_last_space(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }

    let byte_limit = s
        .char_indices()
        .map(|(i, _)| i)
        .nth(limit)
        .unwrap_or(s.len());

    match s[..byte_limit].rfind(' ') {
        Some(last_space) => {
            let mut truncated = s[..last_space].to_string();
            truncated.push('…');
            truncated
        }
        None => {
            let char_boundary = s[..byte_limit]
                .char_indices()
                .map(|(i, _)| i)
                .last()
                .unwrap_or(0);

            let mut truncated = s[..char_boundary].to_string();
            truncated.push('…');
            truncated
        }
    }
}

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    if path_str == "~" {
        return Err(anyhow!("A bare home directory is not a valid media path!"));
    }

    if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory!"))?;
        return Ok(home.join(&path_str[2..]));
    }

    Err(anyhow!("Error reading path with tilde (~)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_durations() {
        assert_eq!(
            get_readable_duration(Duration::from_secs(754), DurationStyle::Compact),
            "12:34"
        );
        assert_eq!(
            get_readable_duration(Duration::from_secs(3 * 3600 + 62), DurationStyle::Compact),
            "3:01:02"
        );
        assert_eq!(
            get_readable_duration(Duration::ZERO, DurationStyle::Compact),
            "0:00"
        );
    }

    #[test]
    fn signature_is_stable_and_distinct() {
        let a = entry_signature("https://host/a.mp4", "First");
        assert_eq!(a, entry_signature("https://host/a.mp4", "First"));
        assert_ne!(a, entry_signature("https://host/a.mp4", "Second"));
        assert_ne!(a, entry_signature("https://host/b.mp4", "First"));
    }
}
