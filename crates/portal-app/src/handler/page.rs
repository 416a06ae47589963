//! Handlers for the small page widgets: password toggles, success banners
//! and the change-password form

use crate::message::Message;
use crate::state::{FlashPhase, PageState};

use super::{UpdateAction, UpdateResult};

/// Start the success banner countdown
pub fn handle_page_loaded(state: &mut PageState) -> UpdateResult {
    if state.flashes.is_empty() || state.flashes.phase != FlashPhase::Visible {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::StartTimer {
        delay_ms: state.flash_timing.visible_ms,
        message: Box::new(Message::FlashVisibleElapsed),
    })
}

/// Flip the field relative to what the input showed when clicked
pub fn handle_password_toggle(state: &mut PageState, index: usize, revealed: bool) -> UpdateResult {
    if let Some(field) = state.passwords.get_mut(index) {
        field.toggle_from(revealed);
    }
    UpdateResult::none()
}

pub fn handle_flash_visible_elapsed(state: &mut PageState) -> UpdateResult {
    if state.flashes.phase != FlashPhase::Visible {
        return UpdateResult::none();
    }
    state.flashes.phase = FlashPhase::Fading;
    UpdateResult::action(UpdateAction::StartTimer {
        delay_ms: state.flash_timing.fade_ms,
        message: Box::new(Message::FlashFadeElapsed),
    })
}

pub fn handle_flash_fade_elapsed(state: &mut PageState) -> UpdateResult {
    if state.flashes.phase == FlashPhase::Fading {
        state.flashes.phase = FlashPhase::Removed;
    }
    UpdateResult::none()
}

pub fn handle_change_password_toggle(state: &mut PageState, visible: bool) -> UpdateResult {
    if let Some(form) = state.change_password.as_mut() {
        form.toggle_from(visible);
    }
    UpdateResult::none()
}
