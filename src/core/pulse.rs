//! Transient "pulse" that brightens the connection lines after a step advance.
//!
//! A trigger jumps to full intensity and arms a single decay schedule:
//! half intensity after 200ms, off after 600ms. The schedule is stored with
//! the value, so a retrigger replaces it instead of racing with an older one.
//! Time is passed in as a `Duration` since app start, which keeps the pulse
//! independent of any real clock.

use crate::core::constants::{PULSE_HALF_AFTER_MS, PULSE_OFF_AFTER_MS};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PulseLevel {
    #[default]
    Off,
    Half,
    Full,
}

impl PulseLevel {
    #[inline]
    pub fn intensity(self) -> f32 {
        match self {
            PulseLevel::Off => 0.0,
            PulseLevel::Half => 0.5,
            PulseLevel::Full => 1.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Pulse {
    level: PulseLevel,
    armed_at: Option<Duration>,
}

impl Pulse {
    pub fn level(&self) -> PulseLevel {
        self.level
    }

    pub fn intensity(&self) -> f32 {
        self.level.intensity()
    }

    pub fn is_decaying(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Go to full intensity and restart the decay schedule from `now`.
    pub fn trigger(&mut self, now: Duration) {
        self.level = PulseLevel::Full;
        self.armed_at = Some(now);
    }

    /// Apply every decay step that is due at `now`. Returns `true` if the
    /// level changed.
    pub fn poll(&mut self, now: Duration) -> bool {
        let Some(t0) = self.armed_at else {
            return false;
        };
        let elapsed = now.saturating_sub(t0);
        let next = if elapsed >= Duration::from_millis(PULSE_OFF_AFTER_MS) {
            self.armed_at = None;
            PulseLevel::Off
        } else if elapsed >= Duration::from_millis(PULSE_HALF_AFTER_MS) {
            PulseLevel::Half
        } else {
            PulseLevel::Full
        };
        let changed = next != self.level;
        self.level = next;
        changed
    }
}
