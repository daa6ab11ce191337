use instant::Instant;
use std::time::Duration;

/// Monotonic time since the app started, the time base handed to the store.
#[derive(Clone, Copy)]
pub struct AppClock {
    start: Instant,
}

impl Default for AppClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AppClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.start.elapsed()
    }
}
