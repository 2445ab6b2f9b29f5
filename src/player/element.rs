use anyhow::Result;
use crossbeam_channel::Receiver;
use std::time::Duration;

/// Externally supplied media descriptor. Immutable for the lifetime of a
/// controller binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaSource {
    pub stream_url: String,
    pub title: String,
}

impl MediaSource {
    pub fn new(stream_url: &str, title: &str) -> Self {
        MediaSource {
            stream_url: stream_url.to_string(),
            title: title.to_string(),
        }
    }
}

/// Lifecycle signals emitted by a media element. The controller mirrors
/// these into its published state; it never reorders or coalesces them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElementSignal {
    Play,
    Pause,
    TimeUpdate(Duration),
    DurationKnown(Duration),
    FullscreenChange(bool),
    Ended,
}

/// The platform playback primitive the controller wraps. Implementations
/// decode and render the media; the controller only forwards intents and
/// listens for the resulting signals.
pub trait MediaElement {
    /// Attach a new source. A failed load is not fatal: the element simply
    /// never confirms a duration and transport intents stay unconfirmed.
    fn load(&mut self, source: &MediaSource) -> Result<()>;

    /// Replace the signal subscription. Only the most recently returned
    /// receiver is live; prior receivers go silent.
    fn subscribe(&mut self) -> Receiver<ElementSignal>;

    fn play(&mut self);
    fn pause(&mut self);
    fn seek(&mut self, to: Duration);
    fn set_volume(&mut self, volume: f32);
    fn set_muted(&mut self, muted: bool);
    fn set_rate(&mut self, rate: f32);
    fn request_fullscreen(&mut self, enter: bool);

    /// Polling backends flush pending signals from here. Event-driven
    /// backends may leave this empty.
    fn pump(&mut self) {}
}
