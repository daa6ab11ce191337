//! User intents coming from buttons and the keyboard, applied to the store.

use crate::core::error::CoreResult;
use crate::core::store::{FormStore, UiMode};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    Start,
    Next,
    Prev,
    ToReview,
    BackToWizard,
    /// Leave the review screen to edit a specific step.
    EditStep(usize),
    Submit,
    Restart,
}

/// Modifier state of a key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyMods {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

/// Map a key press to an action for the current screen. Plain Enter and
/// arrows are left to the focused input.
pub fn action_for_key(key: &str, mods: KeyMods, mode: UiMode) -> Option<UiAction> {
    match (mode, key) {
        (UiMode::Hero, "Enter") => Some(UiAction::Start),
        (UiMode::Wizard, "Enter") if mods.ctrl || mods.meta => Some(UiAction::Next),
        (UiMode::Wizard, "ArrowRight") if mods.alt => Some(UiAction::Next),
        (UiMode::Wizard, "ArrowLeft") if mods.alt => Some(UiAction::Prev),
        (UiMode::Review, "Escape") => Some(UiAction::BackToWizard),
        (UiMode::Review, "Enter") if mods.ctrl || mods.meta => Some(UiAction::Submit),
        _ => None,
    }
}

impl FormStore {
    /// Apply `action` at time `now`. Only `EditStep` with a bad index fails.
    pub fn apply(&mut self, action: UiAction, now: Duration) -> CoreResult<()> {
        match action {
            UiAction::Start => self.set_ui_mode(UiMode::Wizard),
            UiAction::Next => {
                // Past the last step the wizard hands over to the review screen.
                if !self.next_step(now) {
                    self.set_ui_mode(UiMode::Review);
                }
            }
            UiAction::Prev => {
                self.prev_step();
            }
            UiAction::ToReview => self.set_ui_mode(UiMode::Review),
            UiAction::BackToWizard => self.set_ui_mode(UiMode::Wizard),
            UiAction::EditStep(step) => {
                self.go_to_step(step)?;
                self.set_ui_mode(UiMode::Wizard);
            }
            UiAction::Submit => {
                log::info!("[form] briefing submitted for agent {:?}", self.form().agent_name);
                self.set_ui_mode(UiMode::Submitted);
            }
            UiAction::Restart => self.reset_form(),
        }
        Ok(())
    }
}
