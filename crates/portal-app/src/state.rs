//! Page state (Model in TEA pattern)
//!
//! Each feature is optional: a feature whose elements are missing from the
//! page has no state and ignores its messages.

use portal_core::{FlashTiming, Notification};

use crate::message::RequestToken;

/// What the browser runtime found on the page at load time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    /// One entry per wired password toggle: `true` if the input starts as plain text
    pub password_fields: Vec<bool>,
    /// Present when both the bell icon and the panel exist
    pub notifications: Option<PanelSnapshot>,
    /// Present when the editable name element exists
    pub profile_name: Option<NameSnapshot>,
    /// Number of success banners on the page
    pub success_flashes: usize,
    /// Present when both toggle and form exist; `true` if the form starts shown
    pub change_password_form: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelSnapshot {
    /// Panel `display` style is `block`
    pub visible: bool,
    /// An unread badge element exists
    pub badge: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSnapshot {
    /// Current text content of the name element
    pub text: String,
    /// Both edit and save buttons exist
    pub has_buttons: bool,
}

/// Complete page state
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub passwords: Vec<PasswordField>,
    pub panel: Option<NotificationPanel>,
    pub name_editor: Option<NameEditor>,
    pub flashes: FlashBanners,
    pub change_password: Option<Disclosure>,
    pub flash_timing: FlashTiming,
}

impl PageState {
    pub fn new(snapshot: PageSnapshot, flash_timing: FlashTiming) -> Self {
        Self {
            passwords: snapshot
                .password_fields
                .into_iter()
                .map(PasswordField::new)
                .collect(),
            panel: snapshot.notifications.map(NotificationPanel::new),
            name_editor: snapshot.profile_name.map(NameEditor::new),
            flashes: FlashBanners::new(snapshot.success_flashes),
            change_password: snapshot
                .change_password_form
                .map(Disclosure::new),
            flash_timing,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Password Fields
// ─────────────────────────────────────────────────────────────────

/// Visibility of one password input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordField {
    /// Input shows plain text
    pub revealed: bool,
    /// Bumped on every toggle; the view writes only when it moves
    pub revision: u64,
}

impl PasswordField {
    pub fn new(revealed: bool) -> Self {
        Self {
            revealed,
            revision: 0,
        }
    }

    /// Flip from `revealed`, the state the input showed when clicked
    pub fn toggle_from(&mut self, revealed: bool) {
        self.revealed = !revealed;
        self.revision += 1;
    }

    /// Value for the input's `type` attribute
    pub fn input_type(&self) -> &'static str {
        if self.revealed {
            "text"
        } else {
            "password"
        }
    }

    /// Icon class that should be present; the other one is removed
    pub fn icon_class(&self) -> &'static str {
        if self.revealed {
            "fa-eye-slash"
        } else {
            "fa-eye"
        }
    }

    /// Icon class that should be absent
    pub fn hidden_icon_class(&self) -> &'static str {
        if self.revealed {
            "fa-eye"
        } else {
            "fa-eye-slash"
        }
    }

    /// `aria-label` and `title` for the toggle
    pub fn label(&self) -> &'static str {
        if self.revealed {
            "Hide password"
        } else {
            "Show password"
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Notification Panel
// ─────────────────────────────────────────────────────────────────

/// Lifecycle phase of the notification panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Closed,
    Loading,
    Rendered,
    Errored,
}

/// What the panel body currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    /// Server-rendered markup, untouched
    Initial,
    Loaded(Vec<Notification>),
    Failed,
}

/// Fetch issued on the latest open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFetch {
    pub token: RequestToken,
    /// Badge was showing when the fetch started
    pub mark_read: bool,
}

/// Unread badge next to the bell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Shown,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPanel {
    pub visible: bool,
    /// Bumped by `open`/`close`; the view writes `display` only when it moves
    pub visibility_revision: u64,
    pub content: PanelContent,
    pub badge: Option<Badge>,
    pub pending: Option<PendingFetch>,
    /// Bumped every time `content` changes; the view re-renders on change
    pub content_revision: u64,
    last_token: u64,
}

impl NotificationPanel {
    pub fn new(snapshot: PanelSnapshot) -> Self {
        Self {
            visible: snapshot.visible,
            visibility_revision: 0,
            content: PanelContent::Initial,
            badge: snapshot.badge.then_some(Badge::Shown),
            pending: None,
            content_revision: 0,
            last_token: 0,
        }
    }

    pub fn phase(&self) -> PanelPhase {
        if !self.visible {
            return PanelPhase::Closed;
        }
        if self.pending.is_some() {
            return PanelPhase::Loading;
        }
        match self.content {
            PanelContent::Failed => PanelPhase::Errored,
            PanelContent::Initial | PanelContent::Loaded(_) => PanelPhase::Rendered,
        }
    }

    pub fn badge_shown(&self) -> bool {
        self.badge == Some(Badge::Shown)
    }

    /// Adopt the visibility the page currently shows, without a view write
    pub fn observe_visibility(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Open the panel and issue a new fetch token
    pub fn open(&mut self) -> RequestToken {
        self.visible = true;
        self.visibility_revision += 1;
        self.last_token += 1;
        let token = RequestToken(self.last_token);
        self.pending = Some(PendingFetch {
            token,
            mark_read: self.badge_shown(),
        });
        token
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.visibility_revision += 1;
    }

    /// Take the pending fetch if `token` is the latest one
    pub fn accept(&mut self, token: RequestToken) -> Option<PendingFetch> {
        match self.pending {
            Some(pending) if pending.token == token => self.pending.take(),
            _ => None,
        }
    }

    pub fn set_content(&mut self, content: PanelContent) {
        self.content = content;
        self.content_revision += 1;
    }

    pub fn hide_badge(&mut self) {
        if self.badge.is_some() {
            self.badge = Some(Badge::Hidden);
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Profile Name
// ─────────────────────────────────────────────────────────────────

/// Inline editor for the profile's full name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEditor {
    /// Field is content-editable
    pub editing: bool,
    /// Bumped on entering or leaving edit mode
    pub mode_revision: u64,
    /// Last value the server confirmed (or the initial value)
    pub baseline: String,
    /// Text the view should show; applied when `text_revision` changes
    pub text: String,
    pub text_revision: u64,
    /// Edit and save buttons exist
    pub has_buttons: bool,
}

impl NameEditor {
    pub fn new(snapshot: NameSnapshot) -> Self {
        let baseline = snapshot.text.trim().to_string();
        Self {
            editing: false,
            mode_revision: 0,
            baseline,
            text: snapshot.text,
            text_revision: 0,
            has_buttons: snapshot.has_buttons,
        }
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
        self.mode_revision += 1;
    }

    /// Leave edit mode, recording the text the user left in the field
    pub fn end_edit(&mut self, text: String) {
        self.editing = false;
        self.mode_revision += 1;
        self.text = text;
    }

    /// Replace the displayed text
    pub fn show(&mut self, text: String) {
        self.text = text;
        self.text_revision += 1;
    }

    pub fn revert(&mut self) {
        self.show(self.baseline.clone());
    }
}

// ─────────────────────────────────────────────────────────────────
// Success Banners
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlashPhase {
    #[default]
    Visible,
    /// `hide` class applied, CSS fade running
    Fading,
    Removed,
}

/// All success banners present at load; they dismiss together
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlashBanners {
    pub count: usize,
    pub phase: FlashPhase,
}

impl FlashBanners {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            phase: FlashPhase::Visible,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

// ─────────────────────────────────────────────────────────────────
// Change Password
// ─────────────────────────────────────────────────────────────────

/// A container shown or hidden by a single toggle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    pub visible: bool,
    pub revision: u64,
}

impl Disclosure {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            revision: 0,
        }
    }

    /// Flip from `visible`, the state the container showed when clicked
    pub fn toggle_from(&mut self, visible: bool) {
        self.visible = !visible;
        self.revision += 1;
    }

    /// Value for the container's `display` style
    pub fn display(&self) -> &'static str {
        if self.visible {
            "block"
        } else {
            "none"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_field_toggle_twice_restores() {
        let mut field = PasswordField::default();
        let before = (field.input_type(), field.icon_class(), field.label());

        field.toggle_from(false);
        assert_eq!(field.input_type(), "text");
        assert_eq!(field.icon_class(), "fa-eye-slash");
        assert_eq!(field.hidden_icon_class(), "fa-eye");
        assert_eq!(field.label(), "Hide password");

        field.toggle_from(true);
        assert_eq!((field.input_type(), field.icon_class(), field.label()), before);
        assert_eq!(field.label(), "Show password");
        assert_eq!(field.revision, 2);
    }

    #[test]
    fn test_password_field_follows_input_over_stored_state() {
        let mut field = PasswordField::new(true);

        // Something else set the input back to `password` since the last click
        field.toggle_from(false);

        assert!(field.revealed);
        assert_eq!(field.revision, 1);
    }

    #[test]
    fn test_panel_tokens_are_monotonic() {
        let mut panel = NotificationPanel::new(PanelSnapshot::default());
        let first = panel.open();
        panel.close();
        let second = panel.open();

        assert!(second > first);
        assert!(panel.accept(first).is_none());
        assert_eq!(panel.accept(second).map(|p| p.token), Some(second));
        assert!(panel.accept(second).is_none());
    }

    #[test]
    fn test_panel_phase_transitions() {
        let mut panel = NotificationPanel::new(PanelSnapshot::default());
        assert_eq!(panel.phase(), PanelPhase::Closed);

        let token = panel.open();
        assert_eq!(panel.phase(), PanelPhase::Loading);

        panel.accept(token);
        panel.set_content(PanelContent::Failed);
        assert_eq!(panel.phase(), PanelPhase::Errored);

        panel.close();
        assert_eq!(panel.phase(), PanelPhase::Closed);
    }

    #[test]
    fn test_observed_visibility_does_not_bump_revision() {
        let mut panel = NotificationPanel::new(PanelSnapshot::default());
        panel.observe_visibility(true);
        assert_eq!(panel.phase(), PanelPhase::Rendered);
        assert_eq!(panel.visibility_revision, 0);

        panel.close();
        assert_eq!(panel.visibility_revision, 1);
    }

    #[test]
    fn test_pending_fetch_remembers_badge() {
        let mut panel = NotificationPanel::new(PanelSnapshot {
            visible: false,
            badge: true,
        });
        panel.open();
        assert!(panel.pending.unwrap().mark_read);

        panel.hide_badge();
        panel.close();
        panel.open();
        assert!(!panel.pending.unwrap().mark_read);
    }

    #[test]
    fn test_name_editor_baseline_is_trimmed() {
        let editor = NameEditor::new(NameSnapshot {
            text: "  Ada Lovelace \n".to_string(),
            has_buttons: true,
        });
        assert_eq!(editor.baseline, "Ada Lovelace");
        assert!(!editor.editing);
        assert_eq!(editor.mode_revision, 0);
    }

    #[test]
    fn test_disclosure_display() {
        let mut form = Disclosure::default();
        assert_eq!(form.display(), "none");
        form.toggle_from(false);
        assert_eq!(form.display(), "block");
        form.toggle_from(true);
        assert_eq!(form.display(), "none");
        assert_eq!(form.revision, 2);
    }
}
