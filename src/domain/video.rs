use crate::{DurationStyle, get_readable_duration, player::MediaSource};
use std::{sync::Arc, time::Duration};

/// One entry of the video catalog. Display metadata (duration, resolution,
/// size) is owned here, not by the playback controller.
#[derive(Default)]
pub struct VideoEntry {
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) stream_url: String,
    pub(crate) categories: Vec<Arc<String>>,
    pub(crate) duration: Option<Duration>,
    pub(crate) resolution: Option<String>,
    pub(crate) size: Option<String>,
    pub(crate) featured: bool,
}

impl VideoEntry {
    pub fn media_source(&self) -> MediaSource {
        MediaSource::new(&self.stream_url, &self.title)
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.as_str() == category)
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    pub fn resolution(&self) -> Option<&str> {
        self.resolution.as_deref()
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }
}

pub trait VideoInfo {
    fn get_id(&self) -> u64;
    fn get_title(&self) -> &str;
    fn get_url(&self) -> &str;
    fn get_duration(&self) -> Option<Duration>;

    fn get_duration_str(&self) -> String {
        match self.get_duration() {
            Some(d) => get_readable_duration(d, DurationStyle::Compact),
            None => "--:--".to_string(),
        }
    }
}

impl VideoInfo for VideoEntry {
    fn get_id(&self) -> u64 {
        self.id
    }

    fn get_title(&self) -> &str {
        &self.title
    }

    fn get_url(&self) -> &str {
        &self.stream_url
    }

    fn get_duration(&self) -> Option<Duration> {
        self.duration
    }
}
