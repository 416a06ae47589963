//! portal-app - Page state and orchestration for the warranty portal scripts
//!
//! This crate implements the TEA (The Elm Architecture) pattern: [`PageState`]
//! is the model, [`Message`] the events, and [`update()`] the only place state
//! changes. Side effects come back as [`UpdateAction`]s; network tasks are run
//! by [`actions::execute_task`] against a [`LocalPortalApi`] implementation.
//!
//! Nothing here depends on the browser, so the whole page lifecycle is tested
//! natively.

pub mod actions;
pub mod handler;
pub mod message;
pub mod process;
pub mod services;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types
pub use handler::{update, Task, UpdateAction, UpdateResult, NAME_SAVE_FAILED};
pub use message::{Message, RequestToken};
pub use process::process_message;
pub use services::{LocalPortalApi, PortalApi};
pub use state::{
    Badge, Disclosure, FlashBanners, FlashPhase, NameEditor, NameSnapshot, NotificationPanel,
    PageSnapshot, PageState, PanelContent, PanelPhase, PanelSnapshot, PasswordField,
};
