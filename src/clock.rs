use std::time::{Duration, Instant};

/// Gates how often the simulation advances, independent of the render rate.
/// Missed ticks are dropped rather than batched: a stalled frame loop gets
/// one tick when it resumes, never a catch-up burst.
pub struct TickClock {
    interval: Duration,
    last_advance: Instant,
}

impl TickClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_advance: now,
        }
    }

    pub fn should_advance(&self, now: Instant) -> bool {
        now.duration_since(self.last_advance) >= self.interval
    }

    pub fn commit(&mut self, now: Instant) {
        self.last_advance = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(300);

    #[test]
    fn test_gate_stays_closed_before_interval() {
        let t0 = Instant::now();
        let clock = TickClock::new(INTERVAL, t0);
        assert!(!clock.should_advance(t0));
        assert!(!clock.should_advance(t0 + Duration::from_millis(299)));
    }

    #[test]
    fn test_gate_opens_at_interval() {
        let t0 = Instant::now();
        let clock = TickClock::new(INTERVAL, t0);
        assert!(clock.should_advance(t0 + INTERVAL));
        assert!(clock.should_advance(t0 + Duration::from_millis(301)));
    }

    #[test]
    fn test_commit_closes_gate_again() {
        let t0 = Instant::now();
        let mut clock = TickClock::new(INTERVAL, t0);
        let t1 = t0 + INTERVAL;
        assert!(clock.should_advance(t1));
        clock.commit(t1);
        assert!(!clock.should_advance(t1));
        assert!(clock.should_advance(t1 + INTERVAL));
    }

    #[test]
    fn test_missed_ticks_are_dropped_not_batched() {
        let t0 = Instant::now();
        let mut clock = TickClock::new(INTERVAL, t0);
        // A ten-interval stall still yields a single open gate.
        let t1 = t0 + INTERVAL * 10;
        assert!(clock.should_advance(t1));
        clock.commit(t1);
        assert!(!clock.should_advance(t1));
        assert!(!clock.should_advance(t1 + Duration::from_millis(299)));
    }
}
