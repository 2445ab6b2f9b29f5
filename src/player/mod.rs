mod backend_rodio;
mod controller;
mod element;
mod gesture;
mod state;

#[cfg(test)]
pub(crate) mod mock;

pub use backend_rodio::RodioElement;
pub use controller::PlaybackController;
pub use element::{ElementSignal, MediaElement, MediaSource};
pub use gesture::{GestureState, TapOutcome};
pub use state::{PLAYBACK_RATES, PlaybackState};

use std::time::Duration;

/// Window in which a second primary gesture upgrades a tap to a double tap.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

/// Idle time after which the control bar hides during playback.
pub const CONTROLS_HIDE_DELAY: Duration = Duration::from_millis(3000);
