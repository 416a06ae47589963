//! Page script configuration
//!
//! Every field has a default matching the portal's templates and routes, so
//! an empty JSON object (or no configuration at all) is valid.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub endpoints: Endpoints,
    pub selectors: Selectors,
    pub flash: FlashTiming,
    /// `EnvFilter` directives for the console logger
    pub log_filter: Option<String>,
}

impl PortalConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PortalConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.endpoints.entries() {
            if value.trim().is_empty() {
                return Err(Error::config(format!("endpoint '{name}' is empty")));
            }
        }
        for (name, value) in self.selectors.entries() {
            if value.trim().is_empty() {
                return Err(Error::config(format!("selector '{name}' is empty")));
            }
        }
        Ok(())
    }
}

/// Backend routes used by the scripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub notifications: String,
    pub mark_read: String,
    pub profile_name: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            notifications: "/get_notifications".to_string(),
            mark_read: "/mark_notifications_read".to_string(),
            profile_name: "/profile/name".to_string(),
        }
    }
}

impl Endpoints {
    fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("notifications", self.notifications.as_str()),
            ("mark_read", self.mark_read.as_str()),
            ("profile_name", self.profile_name.as_str()),
        ]
    }

    /// Resolve every endpoint against the page URL
    pub fn resolve(&self, base: &Url) -> Result<ResolvedEndpoints> {
        let join = |path: &str| {
            base.join(path)
                .map_err(|e| Error::config(format!("bad endpoint '{path}': {e}")))
        };
        Ok(ResolvedEndpoints {
            notifications: join(&self.notifications)?,
            mark_read: join(&self.mark_read)?,
            profile_name: join(&self.profile_name)?,
        })
    }
}

/// Absolute endpoint URLs for the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoints {
    pub notifications: Url,
    pub mark_read: Url,
    pub profile_name: Url,
}

/// CSS selectors the scripts bind to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub password_toggle: String,
    pub password_wrapper: String,
    pub notification_icon: String,
    pub notification_panel: String,
    pub notification_badge: String,
    pub editable_name: String,
    pub edit_name_button: String,
    pub save_name_button: String,
    pub success_flash: String,
    pub change_password_toggle: String,
    pub change_password_form: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            password_toggle: ".toggle-password".to_string(),
            password_wrapper: ".password-wrapper".to_string(),
            notification_icon: "#notification-icon".to_string(),
            notification_panel: "#notification-panel".to_string(),
            notification_badge: ".notification-badge".to_string(),
            editable_name: "#editable-name".to_string(),
            edit_name_button: "#edit-name-btn".to_string(),
            save_name_button: "#save-name-btn".to_string(),
            success_flash: ".flash.success".to_string(),
            change_password_toggle: "#change-password-toggle".to_string(),
            change_password_form: "#change-password-form".to_string(),
        }
    }
}

impl Selectors {
    fn entries(&self) -> [(&'static str, &str); 11] {
        [
            ("password_toggle", self.password_toggle.as_str()),
            ("password_wrapper", self.password_wrapper.as_str()),
            ("notification_icon", self.notification_icon.as_str()),
            ("notification_panel", self.notification_panel.as_str()),
            ("notification_badge", self.notification_badge.as_str()),
            ("editable_name", self.editable_name.as_str()),
            ("edit_name_button", self.edit_name_button.as_str()),
            ("save_name_button", self.save_name_button.as_str()),
            ("success_flash", self.success_flash.as_str()),
            ("change_password_toggle", self.change_password_toggle.as_str()),
            ("change_password_form", self.change_password_form.as_str()),
        ]
    }
}

/// Success banner timings in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashTiming {
    /// Time a banner stays fully visible
    pub visible_ms: u32,
    /// Length of the CSS fade before removal
    pub fade_ms: u32,
}

impl Default for FlashTiming {
    fn default() -> Self {
        Self {
            visible_ms: 1000,
            fade_ms: 300,
        }
    }
}
