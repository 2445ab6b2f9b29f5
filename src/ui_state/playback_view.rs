use crate::{domain::VideoEntry, player::PlaybackState};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;

/// Screen regions of the playback view, published by the renderer each
/// frame so mouse input can tell primary gestures from control-surface
/// clicks.
#[derive(Clone, Copy, Default)]
pub struct PlayerRegions {
    pub surface: Rect,
    pub controls: Rect,
    pub progress: Rect,
    pub btn_play: Rect,
    pub btn_skip_back: Rect,
    pub btn_skip_fwd: Rect,
    pub btn_speed: Rect,
    pub btn_mute: Rect,
    pub btn_fullscreen: Rect,
}

impl PlayerRegions {
    pub fn on_controls(&self, pos: Position) -> bool {
        self.controls.contains(pos)
    }

    pub fn on_surface(&self, pos: Position) -> bool {
        self.surface.contains(pos) && !self.controls.contains(pos)
    }

    /// Horizontal position on the progress bar as a seek fraction.
    pub fn progress_fraction(&self, pos: Position) -> Option<f32> {
        if !self.progress.contains(pos) || self.progress.width == 0 {
            return None;
        }

        let offset = pos.x.saturating_sub(self.progress.x);
        Some(f32::from(offset) / f32::from(self.progress.width))
    }
}

/// The controller's published snapshot plus the entry it is bound to.
/// Read-only from the UI's perspective; the app refreshes it every frame.
pub struct PlaybackView {
    pub snapshot: PlaybackState,
    pub now_playing: Option<Arc<VideoEntry>>,
    pub regions: Option<PlayerRegions>,
}

impl PlaybackView {
    pub fn new() -> Self {
        PlaybackView {
            snapshot: PlaybackState::default(),
            now_playing: None,
            regions: None,
        }
    }
}
