//! Tick scheduling for paced simulation runs.

use std::time::{Duration, Instant};

/// Periodic activation scheduler.
///
/// A ticker decides *when* a generation is due; it never advances anything
/// itself. The deterministic core is [`Ticker::poll_at`], which takes the
/// current instant explicitly; [`Ticker::poll`] feeds it the wall clock.
///
/// Construction takes no clock reading, so the type is inert on targets
/// without a monotonic clock (the browser host drives ticks there with its
/// own timer). The first poll after arming only anchors the schedule; the
/// first activation comes one full interval later, like a timer that was
/// just started.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    /// Instant of the last activation (or arming). `None` until first poll.
    anchor: Option<Instant>,
}

impl Ticker {
    /// Create a ticker firing once per `interval`.
    ///
    /// A zero interval fires on every poll once armed.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            anchor: None,
        }
    }

    /// Interval between activations.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the interval and restart the schedule.
    ///
    /// The next activation comes one full new interval after the next poll,
    /// the same as cancelling a timer and starting a fresh one.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        self.anchor = None;
    }

    /// Forget the schedule anchor; the next poll re-anchors without firing.
    pub fn rearm(&mut self) {
        self.anchor = None;
    }

    /// Check for a due activation at the given instant.
    ///
    /// Fires at most once per call and re-anchors from `now`, so a late
    /// caller gets a single activation rather than a burst of catch-up
    /// ticks.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.anchor {
            None => {
                self.anchor = Some(now);
                false
            }
            Some(anchor) => {
                if now.duration_since(anchor) >= self.interval {
                    self.anchor = Some(now);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Check for a due activation against the wall clock.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// Time remaining until the next activation, for driver sleeps.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        match self.anchor {
            None => Duration::ZERO,
            Some(anchor) => self.interval.saturating_sub(now.duration_since(anchor)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_first_poll_only_anchors() {
        let t0 = base();
        let mut ticker = Ticker::new(Duration::from_millis(100));

        assert!(!ticker.poll_at(t0));
        assert!(!ticker.poll_at(t0 + Duration::from_millis(99)));
        assert!(ticker.poll_at(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn test_reanchors_after_firing() {
        let t0 = base();
        let mut ticker = Ticker::new(Duration::from_millis(100));

        ticker.poll_at(t0);
        assert!(ticker.poll_at(t0 + Duration::from_millis(100)));
        assert!(!ticker.poll_at(t0 + Duration::from_millis(150)));
        assert!(ticker.poll_at(t0 + Duration::from_millis(210)));
    }

    #[test]
    fn test_missed_intervals_collapse_to_one() {
        let t0 = base();
        let mut ticker = Ticker::new(Duration::from_millis(100));

        ticker.poll_at(t0);
        // Ten intervals late: one activation, re-anchored from the late poll.
        assert!(ticker.poll_at(t0 + Duration::from_millis(1000)));
        assert!(!ticker.poll_at(t0 + Duration::from_millis(1050)));
        assert!(ticker.poll_at(t0 + Duration::from_millis(1100)));
    }

    #[test]
    fn test_set_interval_restarts_schedule() {
        let t0 = base();
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.poll_at(t0);

        ticker.set_interval(Duration::from_millis(30));
        assert_eq!(ticker.interval(), Duration::from_millis(30));
        // Re-anchor first, then the new cadence applies.
        assert!(!ticker.poll_at(t0 + Duration::from_millis(10)));
        assert!(!ticker.poll_at(t0 + Duration::from_millis(30)));
        assert!(ticker.poll_at(t0 + Duration::from_millis(40)));
    }

    #[test]
    fn test_rearm_forgets_anchor() {
        let t0 = base();
        let mut ticker = Ticker::new(Duration::from_millis(50));
        ticker.poll_at(t0);

        ticker.rearm();
        assert!(!ticker.poll_at(t0 + Duration::from_millis(500)));
        assert!(ticker.poll_at(t0 + Duration::from_millis(550)));
    }

    #[test]
    fn test_zero_interval_fires_every_poll() {
        let t0 = base();
        let mut ticker = Ticker::new(Duration::ZERO);

        assert!(!ticker.poll_at(t0));
        assert!(ticker.poll_at(t0));
        assert!(ticker.poll_at(t0));
    }

    #[test]
    fn test_time_until_due() {
        let t0 = base();
        let mut ticker = Ticker::new(Duration::from_millis(100));

        assert_eq!(ticker.time_until_due(t0), Duration::ZERO);
        ticker.poll_at(t0);
        assert_eq!(
            ticker.time_until_due(t0 + Duration::from_millis(40)),
            Duration::from_millis(60)
        );
        // Overdue saturates to zero.
        assert_eq!(
            ticker.time_until_due(t0 + Duration::from_millis(140)),
            Duration::ZERO
        );
    }
}
