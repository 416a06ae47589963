//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::PageState;

use super::{notifications, page, profile, UpdateResult};

/// Process a message and update state
/// Returns an optional action for the runtime
pub fn update(state: &mut PageState, message: Message) -> UpdateResult {
    match message {
        Message::PageLoaded => page::handle_page_loaded(state),

        Message::PasswordToggleClicked { index, revealed } => {
            page::handle_password_toggle(state, index, revealed)
        }

        // ─────────────────────────────────────────────────────────
        // Notification Panel
        // ─────────────────────────────────────────────────────────
        Message::NotificationIconClicked { visible } => {
            notifications::handle_icon_clicked(state, visible)
        }
        Message::DocumentClicked { inside, visible } => {
            notifications::handle_document_clicked(state, inside, visible)
        }
        Message::NotificationsLoaded { token, result } => {
            notifications::handle_loaded(state, token, result)
        }
        Message::NotificationsMarkedRead { result } => {
            notifications::handle_marked_read(state, result)
        }

        // ─────────────────────────────────────────────────────────
        // Profile Name
        // ─────────────────────────────────────────────────────────
        Message::EditNameClicked => profile::handle_edit_clicked(state),
        Message::SaveNameClicked | Message::NameEnterPressed => profile::handle_commit_requested(state),
        Message::NameBlurred { text } => profile::handle_blurred(state, text),
        Message::NameSaved { result } => profile::handle_saved(state, result),

        // ─────────────────────────────────────────────────────────
        // Success Banners
        // ─────────────────────────────────────────────────────────
        Message::FlashVisibleElapsed => page::handle_flash_visible_elapsed(state),
        Message::FlashFadeElapsed => page::handle_flash_fade_elapsed(state),

        Message::ChangePasswordToggleClicked { visible } => {
            page::handle_change_password_toggle(state, visible)
        }
    }
}
