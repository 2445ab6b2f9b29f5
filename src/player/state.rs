use std::time::Duration;

/// Playback rates the controller will accept. Anything else is rejected
/// outright rather than clamped.
pub const PLAYBACK_RATES: [f32; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

/// Transport state owned exclusively by the controller. `is_playing`,
/// `duration` and `is_fullscreen` mirror element signals and are never set
/// optimistically on intent.
#[derive(Clone, Copy, Debug)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub current_time: Duration,
    pub duration: Option<Duration>,
    pub volume: f32,
    pub is_muted: bool,
    pub playback_rate: f32,
    pub is_fullscreen: bool,
    pub controls_visible: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        PlaybackState {
            is_playing: false,
            current_time: Duration::ZERO,
            duration: None,
            volume: 1.0,
            is_muted: false,
            playback_rate: 1.0,
            is_fullscreen: false,
            controls_visible: true,
        }
    }
}

impl PlaybackState {
    /// Fraction of the media played, for progress rendering. Zero while the
    /// duration is unknown.
    pub fn fraction_played(&self) -> f32 {
        match self.duration {
            Some(d) if !d.is_zero() => {
                (self.current_time.as_secs_f32() / d.as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// The element never confirmed metadata; the source is not (yet)
    /// playable.
    pub fn is_ready(&self) -> bool {
        self.duration.is_some()
    }
}
