//! Single-shot timer delaying the submit callback

use std::time::{Duration, Instant};

/// A one-time deadline that is armed once and fires once.
///
/// The timer never reads the clock itself; callers pass `now` in so the
/// event loop and tests drive it the same way.
#[derive(Debug, Clone)]
pub struct SingleShotTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl SingleShotTimer {
    /// Artificial latency before the submit callback runs (1 second)
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start counting from `now`. Re-arming an armed timer keeps the
    /// original deadline.
    pub fn arm(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.delay);
        }
    }

    /// Returns true exactly once, on the first call at or after the deadline
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for SingleShotTimer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}
