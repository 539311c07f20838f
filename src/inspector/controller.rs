//! Interaction controller: enabled state, input routing, commands

use super::events::{InputEvent, MouseEvent};
use super::state::DebuggerState;
use super::stylesheet::{PAGE_STYLE_ID, page_outline_stylesheet};
use super::tooltip::TooltipController;
use crate::config::InspectorConfig;
use crate::dom::{Document, Node};
use crate::protocol::{Command, Response};

/// The overlay for one page.
///
/// Owns the [`DebuggerState`] and mediates every input event and command.
/// Disabled until toggled on.
#[derive(Debug, Clone)]
pub struct Inspector {
    config: InspectorConfig,
    tooltip: TooltipController,
    state: DebuggerState,
}

impl Inspector {
    /// Create an inspector; `prefers_dark` seeds the tooltip theme
    pub fn new(config: InspectorConfig, prefers_dark: bool) -> Self {
        Self {
            tooltip: TooltipController::new(config.clone()),
            config,
            state: DebuggerState::new(prefers_dark),
        }
    }

    /// Add the page-wide outline stylesheet to `<head>`.
    ///
    /// Returns true if it was already there.
    pub fn install(&self, doc: &mut Document) -> bool {
        if doc.query_selector(&format!("style#{PAGE_STYLE_ID}")).is_some() {
            return true;
        }
        let style = Node::element("style")
            .with_attribute("id", PAGE_STYLE_ID)
            .with_text(page_outline_stylesheet(&self.config));
        doc.append(doc.head(), style);
        false
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    pub fn state(&self) -> &DebuggerState {
        &self.state
    }

    /// Current enabled flag; no side effects
    pub fn status(&self) -> bool {
        self.state.enabled
    }

    /// Flip the enabled flag and return the new value.
    ///
    /// Enabling marks the document element; disabling removes the marker and
    /// any shown tooltip.
    pub fn toggle(&mut self, doc: &mut Document) -> bool {
        self.state.enabled = !self.state.enabled;
        let root = doc.document_element();
        if self.state.enabled {
            doc.add_class(root, &self.config.enabled_class);
        } else {
            self.tooltip.hide(doc, &mut self.state);
            doc.remove_class(root, &self.config.enabled_class);
        }
        log::info!(
            "overlay {}",
            if self.state.enabled { "enabled" } else { "disabled" }
        );
        self.state.enabled
    }

    /// Answer a command addressed to the page; `None` for commands the page
    /// does not handle
    pub fn handle_command(&mut self, doc: &mut Document, command: &Command) -> Option<Response> {
        match command {
            Command::Toggle => Some(Response::Status {
                enabled: self.toggle(doc),
            }),
            Command::GetStatus => Some(Response::Status {
                enabled: self.status(),
            }),
            Command::GetComputedStyle { .. } => None,
        }
    }

    /// Route one page event
    pub fn handle_event(&mut self, doc: &mut Document, event: &InputEvent) {
        match event {
            InputEvent::MouseOver(mouse) => self.on_mouse_over(doc, mouse),
            InputEvent::KeyDown(key) => {
                if key.key == "Escape" {
                    self.tooltip.hide(doc, &mut self.state);
                }
            }
            InputEvent::MouseDown(mouse) => {
                if self.tooltip.begin_drag(doc, &mut self.state, mouse) {
                    log::debug!("drag started at ({}, {})", mouse.client_x, mouse.client_y);
                }
            }
            InputEvent::MouseMove(mouse) => {
                self.tooltip
                    .drag_to(doc, &self.state, mouse.client_point());
            }
            InputEvent::MouseUp(_) => self.tooltip.end_drag(&mut self.state),
            InputEvent::ColorSchemeChanged { dark } => {
                self.state.is_dark_mode = *dark;
                self.tooltip.apply_theme(doc, &self.state);
            }
        }
    }

    fn on_mouse_over(&mut self, doc: &mut Document, mouse: &MouseEvent) {
        if !self.state.enabled || !mouse.modifiers.inspect_chord() {
            return;
        }
        if let Some(tooltip) = self.state.tooltip() {
            if doc.contains(tooltip.host, mouse.target) {
                return;
            }
        }
        if doc.element(mouse.target).is_none() || !doc.is_connected(mouse.target) {
            log::debug!("ignoring hover over non-element node {}", mouse.target);
            return;
        }
        self.tooltip
            .show(doc, &mut self.state, mouse.target, mouse.client_point());
    }
}
