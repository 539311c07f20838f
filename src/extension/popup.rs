//! Toolbar popup: one toggle button and a status line

use super::tab::Browser;
use crate::protocol::Command;
use crate::utils::BoxscopeError;

pub const STATUS_ENABLED: &str = "CSS debugging is enabled";
pub const STATUS_DISABLED: &str = "CSS debugging is disabled";
pub const STATUS_NO_TAB: &str = "No active tab. Please open a web page.";
pub const STATUS_INJECTION_FAILED: &str = "Error injecting script. Check console.";
pub const STATUS_DELIVERY_FAILED: &str = "Error communicating with page. Try refreshing.";

/// Rendered popup state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    button_label: String,
    button_disabled: bool,
    status: String,
}

impl Default for Popup {
    fn default() -> Self {
        Self {
            button_label: "Enable".to_string(),
            button_disabled: false,
            status: String::new(),
        }
    }
}

impl Popup {
    /// Open the popup and query the active tab's status
    pub fn open(browser: &mut Browser) -> Self {
        let mut popup = Self::default();
        popup.inject_and_send(browser, Command::GetStatus);
        popup
    }

    /// Toggle-button click
    pub fn click_toggle(&mut self, browser: &mut Browser) {
        self.inject_and_send(browser, Command::Toggle);
    }

    /// Make sure the overlay is attached to the active tab, then deliver
    /// `command` and render the reply
    pub fn inject_and_send(&mut self, browser: &mut Browser, command: Command) {
        let Some(tab) = browser.active_tab_mut() else {
            log::error!("{}", BoxscopeError::NoActiveTab);
            self.status = STATUS_NO_TAB.to_string();
            return;
        };

        if let Err(err) = tab.inject() {
            log::warn!("script injection failed: {}", err);
            self.status = STATUS_INJECTION_FAILED.to_string();
            return;
        }

        match tab.send_command(&command) {
            Ok(response) => {
                if let Some(enabled) = response.enabled() {
                    self.update_button_state(enabled);
                }
            }
            Err(err) => {
                log::warn!("message sending failed: {}", err);
                if err.assumes_disabled() {
                    self.update_button_state(false);
                }
                self.status = STATUS_DELIVERY_FAILED.to_string();
            }
        }
    }

    /// Render the button and status line for `enabled`
    pub fn update_button_state(&mut self, enabled: bool) {
        if enabled {
            self.button_label = "Disable".to_string();
            self.button_disabled = true;
            self.status = STATUS_ENABLED.to_string();
        } else {
            self.button_label = "Enable".to_string();
            self.button_disabled = false;
            self.status = STATUS_DISABLED.to_string();
        }
    }

    pub fn button_label(&self) -> &str {
        &self.button_label
    }

    /// Whether the button carries the `disabled` class
    pub fn button_has_disabled_class(&self) -> bool {
        self.button_disabled
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}
