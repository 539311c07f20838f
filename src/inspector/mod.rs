//! Hover inspector overlay
//!
//! - Box model: margin/border/padding/content metrics of an element
//! - Visualizer: nested box diagram with edge labels
//! - Style panel: element title and allow-listed resolved properties
//! - Tooltip: placement, dragging, theme, teardown
//! - Controller: enabled state and event routing

mod box_model;
mod controller;
mod events;
mod state;
mod style_panel;
mod stylesheet;
mod theme;
mod tooltip;
mod visualizer;

pub use box_model::{BoxModel, ContentSize, EdgeMetrics, parse_px};
pub use controller::Inspector;
pub use events::{InputEvent, KeyboardEvent, Modifiers, MouseButton, MouseEvent};
pub use state::{ActiveHighlight, DebuggerState, DragState, Tooltip};
pub use style_panel::{
    ALLOWED_PROPERTIES, StylePropertyLine, collect_properties, element_title, is_informative,
    render_style_panel,
};
pub use stylesheet::{PAGE_STYLE_ID, page_outline_stylesheet, tooltip_stylesheet};
pub use theme::{Palette, Theme};
pub use tooltip::{
    OVERLAY_ATTRIBUTE, TOOLTIP_CLASS, TooltipController, clamp_to_viewport, estimate_size,
    initial_position,
};
pub use visualizer::{Layer, content_label, render_box_model};
