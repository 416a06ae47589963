//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `notifications`: Notification panel open/close, fetch results, mark-read
//! - `profile`: Inline profile name editor
//! - `page`: Password toggles, success banners, change-password form

pub(crate) mod notifications;
pub(crate) mod page;
pub(crate) mod profile;
pub(crate) mod update;


use crate::message::{Message, RequestToken};

// Re-export main entry point
pub use update::update;

/// Text of the alert shown when a name update fails
pub const NAME_SAVE_FAILED: &str = "Could not save name. Please try again.";

/// Actions that the runtime should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Run a network request in the background
    SpawnTask(Task),

    /// Deliver `message` after `delay_ms`
    StartTimer { delay_ms: u32, message: Box<Message> },

    /// Show a blocking alert
    Alert { message: String },

    /// Focus the name field and put the caret after its last character
    FocusNameAtEnd,

    /// Blur the name field, which commits the edit
    BlurName,
}

/// Background network requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// GET the notification list for the panel
    FetchNotifications { token: RequestToken },
    /// POST the mark-as-read request
    MarkNotificationsRead,
    /// POST a new profile name
    SaveName { full_name: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional action for the runtime to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            action: Some(action),
        }
    }

    pub fn task(task: Task) -> Self {
        Self::action(UpdateAction::SpawnTask(task))
    }
}
