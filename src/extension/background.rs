//! Extension background: install hook, toolbar action, style queries

use super::tab::{Browser, TabId};
use crate::protocol::{Command, Response};
use crate::utils::{BoxscopeError, Result};
use std::collections::BTreeMap;

/// Background handlers; stateless apart from the browser it is handed
#[derive(Debug, Default, Clone, Copy)]
pub struct Background;

impl Background {
    pub fn new() -> Self {
        Self
    }

    pub fn on_installed(&self) {
        log::info!("{} {} installed", crate::NAME, crate::VERSION);
    }

    /// Toolbar icon clicked: attach to `tab` and toggle the overlay.
    ///
    /// Returns the new enabled flag; failures are logged and read as `None`.
    pub fn on_action_clicked(&self, browser: &mut Browser, tab_id: TabId) -> Option<bool> {
        let Some(tab) = browser.tab_mut(tab_id) else {
            log::error!("action clicked for unknown tab {}", tab_id);
            return None;
        };
        if let Err(err) = tab.inject() {
            log::warn!("error injecting into tab {}: {}", tab.id(), err);
            return None;
        }
        match tab.send_command(&Command::Toggle) {
            Ok(response) => {
                let enabled = response.enabled();
                if let Some(enabled) = enabled {
                    log::info!("tab {} overlay status: {}", tab.id(), enabled);
                }
                enabled
            }
            Err(err) => {
                log::warn!("error sending message to tab {}: {}", tab.id(), err);
                None
            }
        }
    }

    /// Every resolved property of the first element in `tab` matching
    /// `selector`; `Ok(None)` when nothing matches
    pub fn get_computed_style(
        &self,
        browser: &Browser,
        tab: TabId,
        selector: &str,
    ) -> Result<Option<BTreeMap<String, String>>> {
        let tab = browser.tab(tab).ok_or(BoxscopeError::NoActiveTab)?;
        tab.computed_style(selector)
    }

    /// Handle a message sent from a page in `sender`
    pub fn handle_message(
        &self,
        browser: &Browser,
        sender: TabId,
        command: &Command,
    ) -> Option<Response> {
        match command {
            Command::GetComputedStyle { selector } => {
                match self.get_computed_style(browser, sender, selector) {
                    Ok(style) => Some(Response::Style(style)),
                    Err(err) => {
                        log::warn!("getComputedStyle for `{}` failed: {}", selector, err);
                        None
                    }
                }
            }
            Command::Toggle | Command::GetStatus => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ComputedStyle, Document, Node};

    fn browser_with_box() -> (Browser, TabId) {
        let mut doc = Document::new();
        let body = doc.body();
        let id = doc
            .append(body, Node::element("div").with_attribute("id", "box"))
            .unwrap();
        doc.set_computed_style(
            id,
            ComputedStyle::new()
                .with("display", "block")
                .with("color", "rgb(0, 0, 0)"),
        );
        let mut browser = Browser::new();
        let tab = browser.open_tab("https://example.com/", doc);
        (browser, tab)
    }

    #[test]
    fn test_action_click_toggles() {
        let (mut browser, tab) = browser_with_box();
        let background = Background::new();
        background.on_installed();
        assert_eq!(background.on_action_clicked(&mut browser, tab), Some(true));
        assert_eq!(background.on_action_clicked(&mut browser, tab), Some(false));
        assert_eq!(background.on_action_clicked(&mut browser, TabId::new(99)), None);
    }

    #[test]
    fn test_get_computed_style() {
        let (browser, tab) = browser_with_box();
        let background = Background::new();

        let style = background
            .get_computed_style(&browser, tab, "#box")
            .unwrap()
            .unwrap();
        assert_eq!(style.get("display").map(String::as_str), Some("block"));
        assert_eq!(style.len(), 2);

        assert_eq!(
            background.get_computed_style(&browser, tab, "#missing").unwrap(),
            None
        );
    }

    #[test]
    fn test_handle_message() {
        let (browser, tab) = browser_with_box();
        let background = Background::new();
        let query = Command::GetComputedStyle {
            selector: ".nothing".to_string(),
        };
        assert_eq!(
            background.handle_message(&browser, tab, &query),
            Some(Response::Style(None))
        );
        assert_eq!(background.handle_message(&browser, tab, &Command::GetStatus), None);
    }
}
