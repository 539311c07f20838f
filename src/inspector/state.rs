//! Per-page inspector state

use crate::dom::{NodeId, Point};

/// Everything the overlay tracks for one page.
///
/// The highlighted element and its tooltip share one `Option`, so one
/// never exists without the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebuggerState {
    pub enabled: bool,
    pub is_dark_mode: bool,
    pub active: Option<ActiveHighlight>,
}

impl DebuggerState {
    pub fn new(is_dark_mode: bool) -> Self {
        Self {
            enabled: false,
            is_dark_mode,
            active: None,
        }
    }

    /// The highlighted element, if a tooltip is shown
    pub fn highlighted(&self) -> Option<NodeId> {
        self.active.as_ref().map(|a| a.element)
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.active.as_ref().map(|a| &a.tooltip)
    }

    pub fn is_shown(&self) -> bool {
        self.active.is_some()
    }
}

/// The highlighted element together with the tooltip describing it
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveHighlight {
    pub element: NodeId,
    pub tooltip: Tooltip,
}

/// Handles into the mounted tooltip subtree
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Fixed-position host appended to `<body>`
    pub host: NodeId,
    /// `div.boxscope-tooltip` inside the host (or its shadow root)
    pub element: NodeId,
    pub drag: DragState,
}

/// Pointer drag of the tooltip
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub dragging: bool,
    /// Cursor position relative to the host's top-left at press time
    pub offset: Point,
}
