//! Single source of truth for navigation and form content.
//!
//! The store is a plain struct owned by the app root and shared with the
//! view layer and the frame loop. Every mutation that changes observable
//! state bumps `revision`, which the view compares against the last value it
//! rendered to decide whether to redraw.

use crate::core::constants::TOTAL_STEPS;
use crate::core::error::{CoreError, CoreResult};
use crate::core::form::{FormData, FormField};
use crate::core::pulse::Pulse;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiMode {
    #[default]
    Hero,
    Wizard,
    Review,
    Submitted,
}

impl UiMode {
    pub const ALL: [UiMode; 4] = [
        UiMode::Hero,
        UiMode::Wizard,
        UiMode::Review,
        UiMode::Submitted,
    ];

    pub fn key(self) -> &'static str {
        match self {
            UiMode::Hero => "hero",
            UiMode::Wizard => "wizard",
            UiMode::Review => "review",
            UiMode::Submitted => "submitted",
        }
    }
}

impl fmt::Display for UiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for UiMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UiMode::ALL
            .iter()
            .copied()
            .find(|m| m.key() == s)
            .ok_or_else(|| CoreError::UnknownMode(s.to_string()))
    }
}

#[derive(Clone, Debug)]
pub struct FormStore {
    ui_mode: UiMode,
    loading: bool,
    step: usize,
    form: FormData,
    pulse: Pulse,
    revision: u64,
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStore {
    pub fn new() -> Self {
        Self {
            ui_mode: UiMode::default(),
            loading: true,
            step: 0,
            form: FormData::default(),
            pulse: Pulse::default(),
            revision: 0,
        }
    }

    // ---------------- Reads ----------------

    pub fn ui_mode(&self) -> UiMode {
        self.ui_mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        TOTAL_STEPS
    }

    pub fn is_first_step(&self) -> bool {
        self.step == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 >= TOTAL_STEPS
    }

    /// Fraction of the wizard completed, 0 on the first step and 1 on the last.
    pub fn progress(&self) -> f32 {
        self.step as f32 / (TOTAL_STEPS - 1) as f32
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn field(&self, field: FormField) -> &str {
        self.form.get(field)
    }

    pub fn pulse_intensity(&self) -> f32 {
        self.pulse.intensity()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ---------------- Mutations ----------------

    pub fn set_ui_mode(&mut self, mode: UiMode) {
        if self.ui_mode != mode {
            log::debug!("[store] ui mode {} -> {}", self.ui_mode, mode);
            self.ui_mode = mode;
            self.bump();
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            self.loading = loading;
            self.bump();
        }
    }

    /// Advance one step and pulse. At the last step this is a no-op and
    /// returns `false`.
    pub fn next_step(&mut self, now: Duration) -> bool {
        if self.step + 1 >= TOTAL_STEPS {
            return false;
        }
        self.step += 1;
        log::debug!("[store] step -> {}", self.step);
        self.bump();
        self.trigger_pulse(now);
        true
    }

    /// Go back one step. At step 0 this is a no-op and returns `false`.
    pub fn prev_step(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        log::debug!("[store] step -> {}", self.step);
        self.bump();
        true
    }

    /// Jump straight to `step`. Out-of-range values are rejected and leave
    /// the store untouched.
    pub fn go_to_step(&mut self, step: usize) -> CoreResult<()> {
        if step >= TOTAL_STEPS {
            return Err(CoreError::StepOutOfRange {
                step,
                total: TOTAL_STEPS,
            });
        }
        if self.step != step {
            self.step = step;
            log::debug!("[store] jump to step {}", step);
            self.bump();
        }
        Ok(())
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        if self.form.set(field, value) {
            self.bump();
        }
    }

    /// Back to an empty form on the first step of the hero screen.
    pub fn reset_form(&mut self) {
        self.step = 0;
        self.ui_mode = UiMode::Hero;
        self.form = FormData::default();
        log::debug!("[store] form reset");
        self.bump();
    }

    pub fn trigger_pulse(&mut self, now: Duration) {
        self.pulse.trigger(now);
        self.bump();
    }

    /// Apply pulse decays that are due at `now`.
    pub fn tick(&mut self, now: Duration) {
        if self.pulse.poll(now) {
            self.bump();
        }
    }

    #[inline]
    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
