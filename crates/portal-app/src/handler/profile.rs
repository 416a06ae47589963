//! Inline profile name editor handlers

use tracing::{debug, warn};

use crate::state::PageState;

use super::{Task, UpdateAction, UpdateResult, NAME_SAVE_FAILED};

/// Enter edit mode and move the caret to the end
pub fn handle_edit_clicked(state: &mut PageState) -> UpdateResult {
    match state.name_editor.as_mut() {
        Some(editor) if editor.has_buttons => {
            editor.begin_edit();
            UpdateResult::action(UpdateAction::FocusNameAtEnd)
        }
        _ => UpdateResult::none(),
    }
}

/// Save click or Enter: blurring the field commits it
pub fn handle_commit_requested(state: &mut PageState) -> UpdateResult {
    if state.name_editor.is_none() {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::BlurName)
}

/// Commit the edit when the field loses focus while editable
pub fn handle_blurred(state: &mut PageState, text: String) -> UpdateResult {
    let Some(editor) = state.name_editor.as_mut() else {
        return UpdateResult::none();
    };
    if !editor.editing {
        return UpdateResult::none();
    }

    let full_name = text.trim().to_string();
    editor.end_edit(text);

    if full_name.is_empty() {
        debug!("Ignoring empty profile name");
        return UpdateResult::none();
    }

    UpdateResult::task(Task::SaveName { full_name })
}

pub fn handle_saved(state: &mut PageState, result: Result<String, String>) -> UpdateResult {
    let Some(editor) = state.name_editor.as_mut() else {
        return UpdateResult::none();
    };

    match result {
        Ok(confirmed) => {
            debug!("Profile name saved");
            editor.baseline = confirmed.clone();
            if !editor.editing {
                editor.show(confirmed);
            }
            UpdateResult::none()
        }
        Err(error) => {
            warn!("Failed to save profile name: {}", error);
            editor.revert();
            UpdateResult::action(UpdateAction::Alert {
                message: NAME_SAVE_FAILED.to_string(),
            })
        }
    }
}
