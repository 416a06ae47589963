//! Message types for the page (TEA pattern)

use std::fmt;

use portal_core::Notification;

/// Identifies one notification fetch.
///
/// Tokens increase monotonically per page; only the response carrying the
/// most recently issued token is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// All possible messages on the page
#[derive(Debug, Clone)]
pub enum Message {
    /// Listeners are installed; starts the success banner countdown
    PageLoaded,

    // ─────────────────────────────────────────────────────────
    // Password Fields
    // ─────────────────────────────────────────────────────────
    /// Eye icon of the password field at `index` was activated; `revealed` is
    /// true when the input's `type` attribute was `text` at click time
    PasswordToggleClicked { index: usize, revealed: bool },

    // ─────────────────────────────────────────────────────────
    // Notification Panel
    // ─────────────────────────────────────────────────────────
    /// Bell icon clicked; `visible` is true when the panel's `display` style
    /// was `block` at click time
    NotificationIconClicked { visible: bool },
    /// Any click on the document; `inside` is true when the target is within
    /// the bell icon or the panel
    DocumentClicked { inside: bool, visible: bool },
    /// Notification fetch finished
    NotificationsLoaded {
        token: RequestToken,
        result: Result<Vec<Notification>, String>,
    },
    /// Mark-as-read request finished
    NotificationsMarkedRead { result: Result<(), String> },

    // ─────────────────────────────────────────────────────────
    // Profile Name
    // ─────────────────────────────────────────────────────────
    /// Pencil button clicked
    EditNameClicked,
    /// Save button clicked
    SaveNameClicked,
    /// Enter pressed inside the name field
    NameEnterPressed,
    /// Name field lost focus; `text` is its current content
    NameBlurred { text: String },
    /// Name update finished; `Ok` carries the server-confirmed name
    NameSaved { result: Result<String, String> },

    // ─────────────────────────────────────────────────────────
    // Success Banners
    // ─────────────────────────────────────────────────────────
    /// Banners have been fully visible long enough; start fading
    FlashVisibleElapsed,
    /// Fade finished; remove banners
    FlashFadeElapsed,

    // ─────────────────────────────────────────────────────────
    // Change Password
    // ─────────────────────────────────────────────────────────
    /// "Change password" link clicked; `visible` is true when the form's
    /// `display` style was `block` at click time
    ChangePasswordToggleClicked { visible: bool },
}
