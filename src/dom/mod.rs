//! Minimal page model for the inspector
//!
//! A host fills a [`Document`] with elements, their resolved styles and
//! layout boxes. The overlay reads it and mutates it the same way a page
//! script would: marker classes, inline positions, and an overlay subtree.

mod document;
mod node;
mod selector;
mod style;

pub use document::{Document, DomNode, NodeId, NodeKind};
pub use node::{ElementData, Node, NodeType};
pub use selector::{Selector, SelectorList};
pub use style::ComputedStyle;

/// Rectangle in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A point in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
