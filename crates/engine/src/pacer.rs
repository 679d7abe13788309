//! Fixed-rate tick timing.
//!
//! The pacer owns only a deadline. Callers pass the current `Instant`, so the
//! same type drives the terminal loop and deterministic tests.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next_tick: Instant,
}

impl FramePacer {
    /// First tick is due one interval after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_tick: now + interval,
        }
    }

    pub fn from_fps(fps: u32, now: Instant) -> Self {
        let fps = fps.max(1);
        Self::new(Duration::from_secs(1) / fps, now)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next tick (zero when overdue).
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    /// Returns true once per elapsed interval and schedules the next tick.
    ///
    /// If the loop fell more than one interval behind, the deadline is reset
    /// relative to `now` instead of replaying missed ticks.
    pub fn tick_due(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }
        self.next_tick += self.interval;
        if self.next_tick <= now {
            self.next_tick = now + self.interval;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_due_before_interval() {
        let t0 = Instant::now();
        let mut p = FramePacer::new(Duration::from_millis(16), t0);
        assert!(!p.tick_due(t0));
        assert!(!p.tick_due(t0 + Duration::from_millis(15)));
        assert_eq!(p.timeout(t0 + Duration::from_millis(10)), Duration::from_millis(6));
    }

    #[test]
    fn due_once_per_interval() {
        let t0 = Instant::now();
        let mut p = FramePacer::new(Duration::from_millis(16), t0);
        let t1 = t0 + Duration::from_millis(16);
        assert!(p.tick_due(t1));
        assert!(!p.tick_due(t1));
        assert!(p.tick_due(t0 + Duration::from_millis(32)));
    }

    #[test]
    fn overdue_timeout_is_zero_and_does_not_burst() {
        let t0 = Instant::now();
        let mut p = FramePacer::new(Duration::from_millis(16), t0);
        let late = t0 + Duration::from_millis(200);
        assert_eq!(p.timeout(late), Duration::ZERO);
        assert!(p.tick_due(late));
        assert!(!p.tick_due(late));
        assert_eq!(p.timeout(late), Duration::from_millis(16));
    }

    #[test]
    fn from_fps_interval() {
        let p = FramePacer::from_fps(50, Instant::now());
        assert_eq!(p.interval(), Duration::from_millis(20));
    }
}
