use super::{
    CONTROLS_HIDE_DELAY, ElementSignal, GestureState, MediaElement, MediaSource, PLAYBACK_RATES,
    PlaybackState, TapOutcome,
};
use anyhow::{Result, anyhow};
use crossbeam_channel::Receiver;
use std::time::{Duration, Instant};

/// Translates user intents and media-element signals into one consistent
/// [`PlaybackState`], and runs the auto-hide and tap-disambiguation timers.
///
/// All methods run on the UI thread; timers are plain deadlines fired from
/// [`tick`](Self::tick), which the main loop calls once per frame. Rebinding
/// or tearing down cancels both deadlines and swaps the signal subscription
/// before any new state can be touched, so a stale timer can never mutate
/// state belonging to a newer source.
pub struct PlaybackController<E: MediaElement> {
    element: E,
    state: PlaybackState,
    source: Option<MediaSource>,
    signals: Option<Receiver<ElementSignal>>,
    gesture: GestureState,
    hide_deadline: Option<Instant>,
    touch_primary: bool,
}

impl<E: MediaElement> PlaybackController<E> {
    /// `touch_primary` is caller-supplied: on narrow/touch-primary viewports
    /// auto-hide is disabled and controls stay visible.
    pub fn new(element: E, touch_primary: bool) -> Self {
        PlaybackController {
            element,
            state: PlaybackState::default(),
            source: None,
            signals: None,
            gesture: GestureState::new(),
            hide_deadline: None,
            touch_primary,
        }
    }

    /// Attach a new source. Cancels pending timers, drops the previous
    /// signal subscription and resets transport state, atomically with
    /// respect to the new binding. Volume and mute are user preferences and
    /// survive the rebind; everything else returns to defaults.
    ///
    /// A load failure is reported to the caller for display but leaves the
    /// controller in a valid "nothing plays" state.
    pub fn bind(&mut self, source: MediaSource) -> Result<()> {
        self.gesture.reset();
        self.hide_deadline = None;
        self.signals = None;

        self.state = PlaybackState {
            volume: self.state.volume,
            is_muted: self.state.is_muted,
            is_fullscreen: self.state.is_fullscreen,
            ..PlaybackState::default()
        };

        let loaded = self.element.load(&source);
        self.signals = Some(self.element.subscribe());
        self.source = Some(source);

        // Re-apply retained preferences to the fresh element state
        self.element.set_volume(self.state.volume);
        self.element.set_muted(self.state.is_muted);
        self.element.set_rate(self.state.playback_rate);

        loaded
    }

    /// Detach from the current source. Same cancellation discipline as
    /// [`bind`](Self::bind); used when the playback view unmounts.
    pub fn unbind(&mut self) {
        self.gesture.reset();
        self.hide_deadline = None;
        self.signals = None;
        self.source = None;

        self.state = PlaybackState {
            volume: self.state.volume,
            is_muted: self.state.is_muted,
            ..PlaybackState::default()
        };
    }

    /// Read-only snapshot for rendering. No external writes.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Request play or pause from the element. `is_playing` only changes
    /// once the element confirms with its own signal, so a blocked or failed
    /// start never shows as playing.
    pub fn toggle_play(&mut self) {
        if self.source.is_none() {
            return;
        }

        match self.state.is_playing {
            true => self.element.pause(),
            false => self.element.play(),
        }
    }

    /// Request a relative time change, clamped to `[0, duration]`. A no-op
    /// while the duration is unknown: seeking before metadata arrives is a
    /// normal race, not a fault.
    pub fn skip(&mut self, delta_seconds: f32) {
        let Some(duration) = self.state.duration else {
            return;
        };

        let target = (self.state.current_time.as_secs_f32() + delta_seconds)
            .clamp(0.0, duration.as_secs_f32());
        self.element.seek(Duration::from_secs_f32(target));
    }

    /// Request an absolute position as a fraction of the duration. A no-op
    /// while the duration is unknown.
    pub fn seek_to_fraction(&mut self, fraction: f32) {
        let Some(duration) = self.state.duration else {
            return;
        };

        self.element.seek(duration.mul_f32(fraction.clamp(0.0, 1.0)));
    }

    /// Volume is controller-owned; the element has no confirming signal for
    /// it. Independent of mute.
    pub fn set_volume(&mut self, volume: f32) {
        self.state.volume = volume.clamp(0.0, 1.0);
        self.element.set_volume(self.state.volume);
    }

    /// Flip mute without touching the stored volume.
    pub fn toggle_mute(&mut self) {
        self.state.is_muted = !self.state.is_muted;
        self.element.set_muted(self.state.is_muted);
    }

    /// Rates outside the allow-list are rejected with the prior rate
    /// retained, keeping the invariant checkable instead of silently
    /// clamping.
    pub fn set_playback_rate(&mut self, rate: f32) -> Result<()> {
        if !PLAYBACK_RATES.contains(&rate) {
            return Err(anyhow!("Unsupported playback rate: {rate}"));
        }

        self.state.playback_rate = rate;
        self.element.set_rate(rate);
        Ok(())
    }

    /// Ask the platform to enter or leave fullscreen. `is_fullscreen` flips
    /// only on the platform's confirmation signal.
    pub fn toggle_fullscreen(&mut self) {
        self.element.request_fullscreen(!self.state.is_fullscreen);
    }

    /// One primary gesture on the playback surface (outside the control
    /// bar). A lone tap toggles play once the 300 ms window closes; a second
    /// tap inside the window toggles fullscreen and suppresses the single
    /// tap entirely.
    pub fn handle_primary_gesture(&mut self, now: Instant) {
        if let TapOutcome::DoubleTap = self.gesture.tap(now) {
            self.toggle_fullscreen();
        }

        self.note_activity(now);
    }

    /// Any pointer movement or touch start. Shows the controls and restarts
    /// the hide timer; rapid calls just keep pushing the same deadline.
    pub fn note_activity(&mut self, now: Instant) {
        self.state.controls_visible = true;

        if !self.touch_primary {
            self.hide_deadline = Some(now + CONTROLS_HIDE_DELAY);
        }
    }

    /// Cooperative scheduling pump: drains element signals in order, then
    /// fires whichever deadlines have come due. Called once per frame.
    pub fn tick(&mut self, now: Instant) {
        self.element.pump();
        self.drain_signals();

        if let TapOutcome::SingleTap = self.gesture.tick(now) {
            self.toggle_play();
        }

        if let Some(deadline) = self.hide_deadline {
            if now >= deadline {
                self.hide_deadline = None;
                // Never auto-hide while paused
                if self.state.is_playing {
                    self.state.controls_visible = false;
                }
            }
        }
    }

    fn drain_signals(&mut self) {
        let Some(rx) = &self.signals else {
            return;
        };

        while let Ok(signal) = rx.try_recv() {
            match signal {
                ElementSignal::Play => self.state.is_playing = true,
                ElementSignal::Pause => self.state.is_playing = false,
                ElementSignal::TimeUpdate(t) => {
                    self.state.current_time = match self.state.duration {
                        Some(d) => t.min(d),
                        None => t,
                    };
                }
                ElementSignal::DurationKnown(d) => {
                    // Once known, the duration is immutable per source
                    if self.state.duration.is_none() {
                        self.state.duration = Some(d);
                    }
                }
                ElementSignal::FullscreenChange(fs) => self.state.is_fullscreen = fs,
                ElementSignal::Ended => {
                    self.state.is_playing = false;
                    if let Some(d) = self.state.duration {
                        self.state.current_time = d;
                    }
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn element(&self) -> &E {
        &self.element
    }

    #[cfg(test)]
    pub(crate) fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::mock::MockElement;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    fn ms(m: u64) -> Duration {
        Duration::from_millis(m)
    }

    fn bound_controller() -> PlaybackController<MockElement> {
        let mut ctl = PlaybackController::new(MockElement::new(), false);
        ctl.bind(MediaSource::new("file:///tmp/clip.mp4", "Clip"))
            .unwrap();
        ctl
    }

    fn with_duration(ctl: &mut PlaybackController<MockElement>, d: Duration) {
        ctl.element_mut().emit(ElementSignal::DurationKnown(d));
        ctl.tick(Instant::now());
    }

    // P1: state mirrors the element, not the intent
    #[test]
    fn is_playing_waits_for_element_confirmation() {
        let mut ctl = bound_controller();
        let now = Instant::now();

        ctl.toggle_play();
        assert_eq!(ctl.element().play_calls, 1);
        assert!(!ctl.state().is_playing, "no optimistic play state");

        ctl.element_mut().emit(ElementSignal::Play);
        ctl.tick(now);
        assert!(ctl.state().is_playing);

        ctl.toggle_play();
        assert_eq!(ctl.element().pause_calls, 1);
        assert!(ctl.state().is_playing, "still playing until Pause arrives");

        ctl.element_mut().emit(ElementSignal::Pause);
        ctl.tick(now);
        assert!(!ctl.state().is_playing);
    }

    // P2: double tap suppresses the single-tap action entirely
    #[test]
    fn double_tap_toggles_fullscreen_only() {
        let mut ctl = bound_controller();
        let t0 = Instant::now();

        ctl.handle_primary_gesture(t0);
        ctl.handle_primary_gesture(t0 + ms(100));
        ctl.tick(t0 + secs(1));

        assert_eq!(ctl.element().fullscreen_requests, vec![true]);
        assert_eq!(ctl.element().play_calls, 0);
        assert_eq!(ctl.element().pause_calls, 0);
    }

    // P3: a lone tap toggles play after the window closes
    #[test]
    fn single_tap_toggles_play_after_timeout() {
        let mut ctl = bound_controller();
        let t0 = Instant::now();

        ctl.handle_primary_gesture(t0);

        ctl.tick(t0 + ms(299));
        assert_eq!(ctl.element().play_calls, 0);

        ctl.tick(t0 + ms(300));
        assert_eq!(ctl.element().play_calls, 1);
        assert!(ctl.element().fullscreen_requests.is_empty());
    }

    // P4: skip clamps to [0, duration]
    #[test]
    fn skip_clamps_to_media_bounds() {
        let mut ctl = bound_controller();
        with_duration(&mut ctl, secs(100));

        ctl.element_mut().emit(ElementSignal::TimeUpdate(secs(95)));
        ctl.tick(Instant::now());
        ctl.skip(10.0);
        ctl.tick(Instant::now());
        assert_eq!(ctl.state().current_time, secs(100));

        ctl.element_mut().emit(ElementSignal::TimeUpdate(secs(5)));
        ctl.tick(Instant::now());
        ctl.skip(-10.0);
        ctl.tick(Instant::now());
        assert_eq!(ctl.state().current_time, secs(0));
    }

    #[test]
    fn seeks_are_noops_while_duration_is_unknown() {
        let mut ctl = bound_controller();

        ctl.skip(10.0);
        ctl.seek_to_fraction(0.5);

        assert!(ctl.element().seeks.is_empty());
        assert_eq!(ctl.state().current_time, Duration::ZERO);
    }

    #[test]
    fn seek_to_fraction_targets_the_scaled_position() {
        let mut ctl = bound_controller();
        with_duration(&mut ctl, secs(200));

        ctl.seek_to_fraction(0.25);
        assert_eq!(ctl.element().seeks, vec![secs(50)]);
    }

    // P5: mute and volume are independent
    #[test]
    fn mute_round_trip_preserves_volume() {
        let mut ctl = bound_controller();

        ctl.set_volume(0.4);
        ctl.toggle_mute();
        assert!(ctl.state().is_muted);
        assert_eq!(ctl.state().volume, 0.4);

        ctl.toggle_mute();
        assert!(!ctl.state().is_muted);
        assert_eq!(ctl.state().volume, 0.4);
        assert_eq!(ctl.element().mutes, vec![true, false]);
    }

    // P6: rebinding defuses pending timers and stale subscriptions
    #[test]
    fn rebind_cancels_pending_timers() {
        let mut ctl = bound_controller();
        let t0 = Instant::now();

        ctl.element_mut().emit(ElementSignal::Play);
        ctl.tick(t0);
        ctl.note_activity(t0); // arm hide timer
        ctl.handle_primary_gesture(t0 + ms(10)); // arm gesture timer

        ctl.bind(MediaSource::new("file:///tmp/other.mp4", "Other"))
            .unwrap();
        let play_calls_at_bind = ctl.element().play_calls;

        ctl.tick(t0 + secs(10));
        assert_eq!(
            ctl.element().play_calls,
            play_calls_at_bind,
            "stale gesture timer must not fire"
        );
        assert!(
            ctl.state().controls_visible,
            "stale hide timer must not touch the new binding"
        );
        assert!(!ctl.state().is_playing);
        assert_eq!(ctl.state().current_time, Duration::ZERO);
    }

    #[test]
    fn rebind_drops_the_old_subscription() {
        let mut ctl = bound_controller();

        // Signal queued for the old binding, not yet drained
        ctl.element_mut().emit(ElementSignal::Play);

        ctl.bind(MediaSource::new("file:///tmp/other.mp4", "Other"))
            .unwrap();
        ctl.tick(Instant::now());

        assert!(!ctl.state().is_playing, "stale signal must not leak across bind");
        assert_eq!(ctl.element().loads.len(), 2);
        assert_eq!(ctl.element().loads[1].title, "Other");
    }

    // P7: auto-hide respects play state
    #[test]
    fn controls_hide_only_while_playing() {
        let mut ctl = bound_controller();
        let t0 = Instant::now();

        ctl.element_mut().emit(ElementSignal::Play);
        ctl.tick(t0);
        ctl.note_activity(t0);
        ctl.tick(t0 + ms(3000));
        assert!(!ctl.state().controls_visible);

        // Paused: the deadline passes but the controls stay up
        ctl.element_mut().emit(ElementSignal::Pause);
        ctl.tick(t0 + ms(3100));
        ctl.note_activity(t0 + ms(3200));
        ctl.tick(t0 + secs(60));
        assert!(ctl.state().controls_visible);
    }

    #[test]
    fn touch_primary_disables_auto_hide() {
        let mut ctl = PlaybackController::new(MockElement::new(), true);
        ctl.bind(MediaSource::new("file:///tmp/clip.mp4", "Clip"))
            .unwrap();
        let t0 = Instant::now();

        ctl.element_mut().emit(ElementSignal::Play);
        ctl.tick(t0);
        ctl.note_activity(t0);
        ctl.tick(t0 + secs(30));

        assert!(ctl.state().controls_visible);
    }

    // P8: rate allow-list
    #[test]
    fn playback_rate_allow_list() {
        let mut ctl = bound_controller();

        assert!(ctl.set_playback_rate(0.9).is_err());
        assert_eq!(ctl.state().playback_rate, 1.0);

        ctl.set_playback_rate(1.5).unwrap();
        assert_eq!(ctl.state().playback_rate, 1.5);
        assert_eq!(ctl.element().rates.last(), Some(&1.5));
    }

    #[test]
    fn unplayable_source_surfaces_as_not_ready() {
        let mut element = MockElement::new();
        element.fail_loads = true;
        let mut ctl = PlaybackController::new(element, false);

        let bound = ctl.bind(MediaSource::new("https://cdn.example/clip.mp4", "Clip"));
        assert!(bound.is_err());

        // Controller stays usable: nothing confirms, nothing crashes
        ctl.toggle_play();
        ctl.tick(Instant::now());
        assert!(!ctl.state().is_playing);
        assert!(!ctl.state().is_ready());
    }

    #[test]
    fn duration_is_immutable_once_known() {
        let mut ctl = bound_controller();
        with_duration(&mut ctl, secs(100));

        ctl.element_mut().emit(ElementSignal::DurationKnown(secs(50)));
        ctl.tick(Instant::now());

        assert_eq!(ctl.state().duration, Some(secs(100)));
    }

    #[test]
    fn fullscreen_mirrors_platform_signal() {
        let mut ctl = bound_controller();

        ctl.toggle_fullscreen();
        assert!(!ctl.state().is_fullscreen, "no optimistic fullscreen");

        ctl.element_mut().emit(ElementSignal::FullscreenChange(true));
        ctl.tick(Instant::now());
        assert!(ctl.state().is_fullscreen);

        ctl.toggle_fullscreen();
        assert_eq!(ctl.element().fullscreen_requests, vec![true, false]);
    }

    #[test]
    fn ended_signal_parks_the_transport_at_the_end() {
        let mut ctl = bound_controller();
        with_duration(&mut ctl, secs(80));

        ctl.element_mut().emit(ElementSignal::Play);
        ctl.element_mut().emit(ElementSignal::Ended);
        ctl.tick(Instant::now());

        assert!(!ctl.state().is_playing);
        assert_eq!(ctl.state().current_time, secs(80));
    }

    #[test]
    fn bind_reapplies_volume_and_mute_but_resets_rate() {
        let mut ctl = bound_controller();

        ctl.set_volume(0.3);
        ctl.toggle_mute();
        ctl.set_playback_rate(2.0).unwrap();

        ctl.bind(MediaSource::new("file:///tmp/other.mp4", "Other"))
            .unwrap();

        assert_eq!(ctl.state().volume, 0.3);
        assert!(ctl.state().is_muted);
        assert_eq!(ctl.state().playback_rate, 1.0);
        assert_eq!(ctl.element().volumes.last(), Some(&0.3));
        assert_eq!(ctl.element().rates.last(), Some(&1.0));
    }
}
