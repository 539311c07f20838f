//! Tooltip lifecycle: mount, position, drag, re-theme, teardown

use super::box_model::BoxModel;
use super::events::{MouseButton, MouseEvent};
use super::state::{ActiveHighlight, DebuggerState, DragState, Tooltip};
use super::style_panel::{collect_properties, element_title, render_style_panel};
use super::stylesheet::tooltip_stylesheet;
use super::theme::Theme;
use super::visualizer::render_box_model;
use crate::config::InspectorConfig;
use crate::dom::{Document, Node, NodeId, Point, Rect, Size};
use crate::utils::format_number;

/// Class of the tooltip element
pub const TOOLTIP_CLASS: &str = "boxscope-tooltip";

/// Attribute marking the overlay host element
pub const OVERLAY_ATTRIBUTE: &str = "data-boxscope-overlay";

// Rendered metrics of the tooltip chrome, used to estimate its footprint.
const TOOLTIP_PADDING: f64 = 10.0;
const TOOLTIP_BORDER: f64 = 1.0;
const TITLE_HEIGHT: f64 = 23.5;
const BOX_MODEL_HEIGHT: f64 = 150.0;
const STYLE_LINE_HEIGHT: f64 = 16.5;

/// Where a freshly shown tooltip goes: down-right of the cursor, flipped
/// left or up when the footprint would leave the viewport
pub fn initial_position(cursor: Point, viewport: Size, config: &InspectorConfig) -> Point {
    let mut x = cursor.x + config.cursor_offset;
    let mut y = cursor.y + config.cursor_offset;

    if x + config.footprint_width > viewport.width {
        x = cursor.x - config.flip_offset_x;
    }
    if y + config.footprint_height > viewport.height {
        y = cursor.y - config.flip_offset_y;
    }

    Point::new(x, y)
}

/// Keep a box of `size` at `position` inside the viewport.
///
/// The upper bound is applied before the lower one, so a box larger than
/// the viewport pins to 0.
pub fn clamp_to_viewport(position: Point, size: Size, viewport: Size) -> Point {
    Point::new(
        position.x.min(viewport.width - size.width).max(0.0),
        position.y.min(viewport.height - size.height).max(0.0),
    )
}

/// Estimated rendered size of a tooltip listing `style_lines` properties
pub fn estimate_size(style_lines: usize, config: &InspectorConfig) -> Size {
    let chrome = 2.0 * (TOOLTIP_PADDING + TOOLTIP_BORDER);
    let list = (style_lines as f64 * STYLE_LINE_HEIGHT).min(config.scroll_max_height);
    Size::new(
        config.tooltip_width + chrome,
        chrome + TITLE_HEIGHT + BOX_MODEL_HEIGHT + list,
    )
}

/// Builds, places and tears down the tooltip
#[derive(Debug, Clone)]
pub struct TooltipController {
    config: InspectorConfig,
}

impl TooltipController {
    pub fn new(config: InspectorConfig) -> Self {
        Self { config }
    }

    /// Show a tooltip for `target` near `cursor`, replacing any shown one.
    ///
    /// Returns false (and leaves nothing shown) if `target` is not an element.
    pub fn show(
        &self,
        doc: &mut Document,
        state: &mut DebuggerState,
        target: NodeId,
        cursor: Point,
    ) -> bool {
        self.hide(doc, state);

        let Some(model) = BoxModel::measure(doc, target) else {
            log::debug!("node {} is not an element, nothing to inspect", target);
            return false;
        };
        let lines = doc
            .computed_style(target)
            .map(collect_properties)
            .unwrap_or_default();
        let theme = Theme::from_dark(state.is_dark_mode);
        let palette = theme.palette();

        doc.add_class(target, &self.config.hover_class);

        let content = Node::element("div")
            .with_class(TOOLTIP_CLASS)
            .with_class(theme.class_name())
            .with_styles(&[("pointer-events", "auto"), ("cursor", "move")])
            .with_child(element_title(doc, target, &palette, &self.config.hover_class))
            .with_child(render_box_model(&model))
            .with_child(render_style_panel(&lines, &palette));

        let z_index = self.config.z_index.to_string();
        let host_node = Node::element("div")
            .with_attribute(OVERLAY_ATTRIBUTE, "")
            .with_styles(&[("position", "fixed"), ("z-index", z_index.as_str())]);
        let Some(host) = doc.append(doc.body(), host_node) else {
            doc.remove_class(target, &self.config.hover_class);
            return false;
        };

        let mount = if self.config.isolate_overlay {
            doc.attach_shadow(host).unwrap_or(host)
        } else {
            host
        };
        doc.append(
            mount,
            Node::element("style").with_text(tooltip_stylesheet(&self.config)),
        );
        let Some(element) = doc.append(mount, content) else {
            doc.remove(host);
            doc.remove_class(target, &self.config.hover_class);
            return false;
        };

        let position = initial_position(cursor, doc.viewport(), &self.config);
        let size = estimate_size(lines.len(), &self.config);
        place(doc, host, position, size);

        log::debug!(
            "tooltip for node {} at ({}, {}) with {} style lines",
            target,
            position.x,
            position.y,
            lines.len()
        );

        state.active = Some(ActiveHighlight {
            element: target,
            tooltip: Tooltip {
                host,
                element,
                drag: DragState::default(),
            },
        });
        true
    }

    /// Remove the tooltip and the hover marker; false if nothing was shown
    pub fn hide(&self, doc: &mut Document, state: &mut DebuggerState) -> bool {
        let Some(active) = state.active.take() else {
            return false;
        };
        doc.remove_class(active.element, &self.config.hover_class);
        doc.remove(active.tooltip.host);
        log::debug!("tooltip for node {} removed", active.element);
        true
    }

    /// Switch a shown tooltip to the current theme without rebuilding it
    pub fn apply_theme(&self, doc: &mut Document, state: &DebuggerState) {
        let Some(tooltip) = state.tooltip() else {
            return;
        };
        let theme = Theme::from_dark(state.is_dark_mode);
        if let Some(element) = doc.element_mut(tooltip.element) {
            element.toggle_class(theme.class_name(), true);
            element.toggle_class(theme.opposite_class_name(), false);
        }
    }

    /// Start dragging on a primary-button press inside the tooltip
    pub fn begin_drag(&self, doc: &Document, state: &mut DebuggerState, event: &MouseEvent) -> bool {
        let Some(active) = state.active.as_mut() else {
            return false;
        };
        if event.button != MouseButton::Left || !doc.contains(active.tooltip.element, event.target) {
            return false;
        }
        let rect = doc.bounding_rect(active.tooltip.host);
        active.tooltip.drag = DragState {
            dragging: true,
            offset: Point::new(event.client_x - rect.x, event.client_y - rect.y),
        };
        true
    }

    /// Follow the cursor while dragging, staying inside the viewport
    pub fn drag_to(&self, doc: &mut Document, state: &DebuggerState, cursor: Point) -> bool {
        let Some(tooltip) = state.tooltip() else {
            return false;
        };
        if !tooltip.drag.dragging {
            return false;
        }
        let size = doc.bounding_rect(tooltip.host).size();
        let wanted = Point::new(
            cursor.x - tooltip.drag.offset.x,
            cursor.y - tooltip.drag.offset.y,
        );
        let position = clamp_to_viewport(wanted, size, doc.viewport());
        place(doc, tooltip.host, position, size);
        true
    }

    pub fn end_drag(&self, state: &mut DebuggerState) {
        if let Some(active) = state.active.as_mut() {
            active.tooltip.drag.dragging = false;
        }
    }
}

fn place(doc: &mut Document, host: NodeId, position: Point, size: Size) {
    doc.set_style(host, "left", &format!("{}px", format_number(position.x)));
    doc.set_style(host, "top", &format!("{}px", format_number(position.y)));
    doc.set_bounding_rect(host, Rect::new(position.x, position.y, size.width, size.height));
}
