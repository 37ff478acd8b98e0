use std::time::{Duration, Instant};

/// A repeating timer, polled from the render loop.
///
/// While disarmed it never fires. Arming an armed ticker does nothing, so there
/// is only ever one schedule no matter how often it gets re-armed. When polled
/// late it catches up on missed ticks, but at most `max_catch_up` per poll; the
/// rest are dropped rather than piling up.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    max_catch_up: usize,
    next_tick: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration, max_catch_up: usize) -> Self {
        assert!(!interval.is_zero(), "Ticker interval must be non-zero");
        assert!(max_catch_up >= 1, "Ticker must fire at least once per poll");
        Ticker {
            interval,
            max_catch_up,
            next_tick: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Schedules the first tick for `now`. Returns false if the ticker was
    /// already running.
    pub fn arm(&mut self, now: Instant) -> bool {
        if self.next_tick.is_some() {
            return false;
        }
        self.next_tick = Some(now);
        true
    }

    pub fn disarm(&mut self) {
        self.next_tick = None;
    }

    /// Returns how many ticks have come due since the last poll.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut next_tick = match self.next_tick {
            Some(t) => t,
            None => return 0,
        };

        let mut count = 0;
        while next_tick <= now && count < self.max_catch_up {
            count += 1;
            next_tick += self.interval;
        }
        if next_tick <= now {
            next_tick = now + self.interval;
        }

        self.next_tick = Some(next_tick);
        count
    }
}
