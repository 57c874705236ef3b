//! One-shot delayed transitions driven by the fixed-timestep tick.
//!
//! Sessions never spawn real timers. They arm a [`PendingTransition`] and the
//! caller feeds elapsed milliseconds through `tick()`; the transition fires on
//! the tick that exhausts the countdown. Restarting a session drops any armed
//! countdown, so a stale transition can never land in a fresh session.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingTransition {
    remaining_ms: Option<u32>,
}

impl PendingTransition {
    pub const fn idle() -> Self {
        Self { remaining_ms: None }
    }

    /// Arm (or re-arm) the countdown.
    pub fn schedule(&mut self, delay_ms: u32) {
        self.remaining_ms = Some(delay_ms);
    }

    pub fn cancel(&mut self) {
        self.remaining_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining_ms.is_some()
    }

    pub fn remaining_ms(&self) -> Option<u32> {
        self.remaining_ms
    }

    /// Advance by `elapsed_ms`. Returns `true` exactly once, when the
    /// countdown reaches zero; the transition is then disarmed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let Some(remaining) = self.remaining_ms else {
            return false;
        };

        let left = remaining.saturating_sub(elapsed_ms);
        if left == 0 {
            self.remaining_ms = None;
            true
        } else {
            self.remaining_ms = Some(left);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_never_fires() {
        let mut t = PendingTransition::idle();
        assert!(!t.advance(10_000));
        assert!(!t.is_pending());
    }

    #[test]
    fn test_fires_once_after_delay() {
        let mut t = PendingTransition::idle();
        t.schedule(500);

        assert!(!t.advance(16));
        assert_eq!(t.remaining_ms(), Some(484));

        let mut fired = 0;
        for _ in 0..100 {
            if t.advance(16) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert!(!t.is_pending());
    }

    #[test]
    fn test_overshoot_fires() {
        let mut t = PendingTransition::idle();
        t.schedule(10);
        assert!(t.advance(16));
    }

    #[test]
    fn test_cancel_disarms() {
        let mut t = PendingTransition::idle();
        t.schedule(100);
        t.cancel();
        assert!(!t.advance(200));
    }

    #[test]
    fn test_reschedule_restarts_countdown() {
        let mut t = PendingTransition::idle();
        t.schedule(100);
        t.advance(90);
        t.schedule(100);
        assert!(!t.advance(90));
        assert!(t.advance(10));
    }
}
