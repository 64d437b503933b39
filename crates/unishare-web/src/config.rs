//! Page behaviour configuration
//!
//! Defaults match the markup rendered by the UniShare templates. Pages may
//! override any subset by passing a plain object to `initWithConfig`; keys
//! are camelCase.

use serde::{Deserialize, Serialize};

use crate::error::{WebError, WebResult};

/// Text shown by the confirmation gate when the caller passes no message.
pub const DEFAULT_CONFIRM_MESSAGE: &str =
    "Are you sure you want to delete this? This action cannot be undone.";

/// Upload limit enforced by the server, usable as `maxPreviewBytes`.
pub const SERVER_UPLOAD_LIMIT_BYTES: u64 = 16 * 1024 * 1024;

/// Top-level configuration for all page behaviours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviorConfig {
    /// Fallback text for the confirmation gate.
    pub confirm_message: String,
    /// Image preview settings.
    pub preview: PreviewConfig,
    /// Flash banner settings.
    pub alerts: AlertConfig,
    /// Mobile navigation settings.
    pub nav: NavConfig,
    /// Console log level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            confirm_message: DEFAULT_CONFIRM_MESSAGE.to_string(),
            preview: PreviewConfig::default(),
            alerts: AlertConfig::default(),
            nav: NavConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl BehaviorConfig {
    /// Reject configurations that could never match any markup.
    pub fn validate(&self) -> WebResult<()> {
        non_empty("preview.targetId", &self.preview.target_id)?;
        non_empty("alerts.selector", &self.alerts.selector)?;
        non_empty("nav.toggleId", &self.nav.toggle_id)?;
        non_empty("nav.menuId", &self.nav.menu_id)?;
        non_empty("nav.activeClass", &self.nav.active_class)?;
        if self.nav.active_class.contains(char::is_whitespace) {
            return Err(WebError::Config(format!(
                "nav.activeClass must be a single class name, got {:?}",
                self.nav.active_class
            )));
        }
        if self.preview.max_preview_bytes == Some(0) {
            return Err(WebError::Config(
                "preview.maxPreviewBytes must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Log level parsed from `log_level`.
    pub fn level(&self) -> log::Level {
        crate::logging::parse_level(&self.log_level)
    }
}

fn non_empty(key: &str, value: &str) -> WebResult<()> {
    if value.trim().is_empty() {
        return Err(WebError::Config(format!("{key} must not be empty")));
    }
    Ok(())
}

/// Image preview settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewConfig {
    /// Id of the `<img>` that receives the preview.
    pub target_id: String,
    /// Skip files larger than this. `None` previews any size.
    pub max_preview_bytes: Option<u64>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            target_id: "image-preview".to_string(),
            max_preview_bytes: None,
        }
    }
}

/// Flash banner auto-dismiss settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertConfig {
    /// Selector matching the banners present at init.
    pub selector: String,
    /// Delay before the fade starts.
    pub dismiss_after_ms: u32,
    /// Delay between the fade and removal.
    pub fade_out_ms: u32,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            selector: ".alert".to_string(),
            dismiss_after_ms: 5000,
            fade_out_ms: 300,
        }
    }
}

/// Mobile navigation toggle settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    /// Id of the control that receives clicks.
    pub toggle_id: String,
    /// Id of the menu whose class is flipped.
    pub menu_id: String,
    /// Class toggled on the menu.
    pub active_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_id: "nav-toggle".to_string(),
            menu_id: "nav-menu".to_string(),
            active_class: "active".to_string(),
        }
    }
}
