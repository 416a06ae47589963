//! Notification panel handlers
//!
//! Every open issues a fresh fetch with a new [`RequestToken`]; responses for
//! older tokens are dropped so a slow earlier fetch can never overwrite a newer
//! one.

use portal_core::Notification;
use tracing::{debug, warn};

use crate::message::RequestToken;
use crate::state::{PageState, PanelContent, PanelPhase};

use super::{Task, UpdateResult};

/// Toggle the panel relative to its display at click time; opening starts a fetch
pub fn handle_icon_clicked(state: &mut PageState, visible: bool) -> UpdateResult {
    let Some(panel) = state.panel.as_mut() else {
        return UpdateResult::none();
    };

    panel.observe_visibility(visible);
    if panel.phase() != PanelPhase::Closed {
        panel.close();
        return UpdateResult::none();
    }

    let token = panel.open();
    debug!("Notification panel opened, fetching {}", token);
    UpdateResult::task(Task::FetchNotifications { token })
}

/// Close the panel on clicks outside the icon and panel
pub fn handle_document_clicked(state: &mut PageState, inside: bool, visible: bool) -> UpdateResult {
    if let Some(panel) = state.panel.as_mut() {
        panel.observe_visibility(visible);
        if !inside && panel.phase() != PanelPhase::Closed {
            panel.close();
        }
    }
    UpdateResult::none()
}

pub fn handle_loaded(
    state: &mut PageState,
    token: RequestToken,
    result: Result<Vec<Notification>, String>,
) -> UpdateResult {
    let Some(panel) = state.panel.as_mut() else {
        return UpdateResult::none();
    };

    let Some(pending) = panel.accept(token) else {
        debug!("Dropping stale notification response {}", token);
        return UpdateResult::none();
    };

    match result {
        Ok(notifications) => {
            debug!(
                "Rendering {} notifications (panel {:?})",
                notifications.len(),
                panel.phase()
            );
            panel.set_content(PanelContent::Loaded(notifications));
            if pending.mark_read {
                UpdateResult::task(Task::MarkNotificationsRead)
            } else {
                UpdateResult::none()
            }
        }
        Err(error) => {
            warn!("Failed to load notifications: {}", error);
            panel.set_content(PanelContent::Failed);
            UpdateResult::none()
        }
    }
}

pub fn handle_marked_read(state: &mut PageState, result: Result<(), String>) -> UpdateResult {
    match result {
        Ok(()) => {
            if let Some(panel) = state.panel.as_mut() {
                panel.hide_badge();
            }
        }
        Err(error) => warn!("Failed to mark notifications as read: {}", error),
    }
    UpdateResult::none()
}
