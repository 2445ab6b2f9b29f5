use super::DOUBLE_TAP_WINDOW;
use std::time::Instant;

/// What a tap or a clock tick resolved to.
#[derive(Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// Still inside the disambiguation window.
    Pending,
    /// The window elapsed with exactly one tap.
    SingleTap,
    /// A second tap landed inside the window. The pending single tap is
    /// cancelled, never fired.
    DoubleTap,
}

/// Single- vs. double-tap disambiguation with one owned deadline. The
/// deadline is cancelled and replaced atomically, so re-entrant taps cannot
/// race a half-cleared counter.
#[derive(Default)]
pub struct GestureState {
    deadline: Option<Instant>,
}

impl GestureState {
    pub fn new() -> Self {
        GestureState::default()
    }

    /// Feed one primary gesture into the machine.
    pub fn tap(&mut self, now: Instant) -> TapOutcome {
        match self.deadline {
            None => {
                self.deadline = Some(now + DOUBLE_TAP_WINDOW);
                TapOutcome::Pending
            }
            Some(_) => {
                self.reset();
                TapOutcome::DoubleTap
            }
        }
    }

    /// Fire the pending single tap once its window has elapsed.
    pub fn tick(&mut self, now: Instant) -> TapOutcome {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.reset();
                TapOutcome::SingleTap
            }
            _ => TapOutcome::Pending,
        }
    }

    /// Cancel any pending tap. Used on rebind and teardown.
    pub fn reset(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn single_tap_fires_only_after_window() {
        let mut gesture = GestureState::new();
        let t0 = Instant::now();

        assert_eq!(gesture.tap(t0), TapOutcome::Pending);
        assert_eq!(gesture.tick(t0 + Duration::from_millis(299)), TapOutcome::Pending);
        assert_eq!(gesture.tick(t0 + Duration::from_millis(300)), TapOutcome::SingleTap);

        // Machine is back to idle
        assert!(!gesture.is_pending());
        assert_eq!(gesture.tick(t0 + Duration::from_secs(1)), TapOutcome::Pending);
    }

    #[test]
    fn second_tap_inside_window_is_a_double_tap() {
        let mut gesture = GestureState::new();
        let t0 = Instant::now();

        assert_eq!(gesture.tap(t0), TapOutcome::Pending);
        assert_eq!(gesture.tap(t0 + Duration::from_millis(100)), TapOutcome::DoubleTap);

        // The cancelled single tap never fires
        assert_eq!(gesture.tick(t0 + Duration::from_secs(1)), TapOutcome::Pending);
    }

    #[test]
    fn taps_outside_window_stay_single() {
        let mut gesture = GestureState::new();
        let t0 = Instant::now();

        gesture.tap(t0);
        assert_eq!(gesture.tick(t0 + Duration::from_millis(301)), TapOutcome::SingleTap);

        // A later tap starts a fresh window instead of doubling
        assert_eq!(gesture.tap(t0 + Duration::from_millis(400)), TapOutcome::Pending);
    }

    #[test]
    fn reset_cancels_pending_tap() {
        let mut gesture = GestureState::new();
        let t0 = Instant::now();

        gesture.tap(t0);
        gesture.reset();
        assert_eq!(gesture.tick(t0 + Duration::from_secs(1)), TapOutcome::Pending);
    }
}
