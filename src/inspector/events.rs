//! Page input events consumed by the inspector

use crate::dom::{NodeId, Point};

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Middle,
    Right,
}

/// Keyboard modifier keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Only Ctrl held
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    /// Only Meta (Cmd) held
    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Default::default()
        }
    }

    /// Ctrl or Cmd, the chord that arms hover inspection
    pub fn inspect_chord(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse event data
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    /// Node the pointer is over
    pub target: NodeId,
    pub client_x: f64,
    pub client_y: f64,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// Create a new mouse event with the left button and no modifiers
    pub fn new(target: NodeId, client_x: f64, client_y: f64) -> Self {
        Self {
            target,
            client_x,
            client_y,
            button: MouseButton::Left,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    pub fn client_point(&self) -> Point {
        Point::new(self.client_x, self.client_y)
    }
}

/// Keyboard event data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyboardEvent {
    pub key: String,
    pub modifiers: Modifiers,
}

/// Events the page forwards to the inspector
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    MouseOver(MouseEvent),
    MouseDown(MouseEvent),
    MouseMove(MouseEvent),
    MouseUp(MouseEvent),
    KeyDown(KeyboardEvent),
    /// `(prefers-color-scheme: dark)` changed
    ColorSchemeChanged { dark: bool },
}

impl InputEvent {
    /// Pointer entered `target` at `(x, y)`
    pub fn mouse_over(target: NodeId, x: f64, y: f64, modifiers: Modifiers) -> Self {
        Self::MouseOver(MouseEvent::new(target, x, y).with_modifiers(modifiers))
    }

    /// Left button pressed on `target`
    pub fn mouse_down(target: NodeId, x: f64, y: f64) -> Self {
        Self::MouseDown(MouseEvent::new(target, x, y))
    }

    pub fn mouse_move(target: NodeId, x: f64, y: f64) -> Self {
        Self::MouseMove(MouseEvent::new(target, x, y))
    }

    pub fn mouse_up(target: NodeId, x: f64, y: f64) -> Self {
        Self::MouseUp(MouseEvent::new(target, x, y))
    }

    pub fn key_down(key: &str) -> Self {
        Self::KeyDown(KeyboardEvent {
            key: key.to_string(),
            modifiers: Modifiers::default(),
        })
    }
}
