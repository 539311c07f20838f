//! Nested box model diagram

use super::box_model::{BoxModel, ContentSize, EdgeMetrics};
use crate::dom::Node;
use crate::utils::{format_number, to_fixed_1};

const LABEL_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("font-size", "8px"),
    ("pointer-events", "none"),
    ("user-select", "none"),
];

/// Box layers from outermost to innermost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Margin,
    Border,
    Padding,
    Content,
}

impl Layer {
    pub const ALL: [Layer; 4] = [Layer::Margin, Layer::Border, Layer::Padding, Layer::Content];

    pub fn name(&self) -> &'static str {
        match self {
            Layer::Margin => "margin",
            Layer::Border => "border",
            Layer::Padding => "padding",
            Layer::Content => "content",
        }
    }

    /// Class of the layer's box; the stylesheet gives each its own fill
    pub fn class_name(&self) -> &'static str {
        match self {
            Layer::Margin => "margin-box",
            Layer::Border => "border-box",
            Layer::Padding => "padding-box",
            Layer::Content => "content-box",
        }
    }
}

/// Build `div.box-model` holding margin ⊃ border ⊃ padding ⊃ content
pub fn render_box_model(model: &BoxModel) -> Node {
    let content = content_layer(&model.content);
    let padding = edge_layer(Layer::Padding, &model.padding).with_child(content);
    let border = edge_layer(Layer::Border, &model.border).with_child(padding);
    let margin = edge_layer(Layer::Margin, &model.margin).with_child(border);
    Node::element("div").with_class("box-model").with_child(margin)
}

fn layer_box(layer: Layer) -> Node {
    Node::element("div")
        .with_class(layer.class_name())
        .with_styles(&[("position", "relative")])
        .with_child(name_label(layer.name()))
}

fn name_label(text: &str) -> Node {
    Node::element("div")
        .with_class("layer-label")
        .with_styles(LABEL_STYLE)
        .with_styles(&[("top", "2px"), ("left", "2px"), ("font-weight", "bold")])
        .with_text(text)
}

fn edge_layer(layer: Layer, edges: &EdgeMetrics) -> Node {
    let sides: [(&str, f64, &[(&str, &str)]); 4] = [
        ("top", edges.top, &[("top", "2px"), ("width", "100%"), ("text-align", "center")]),
        ("bottom", edges.bottom, &[("bottom", "2px"), ("width", "100%"), ("text-align", "center")]),
        ("left", edges.left, &[("left", "2px"), ("top", "50%"), ("transform", "translateY(-50%)")]),
        ("right", edges.right, &[("right", "2px"), ("top", "50%"), ("transform", "translateY(-50%)")]),
    ];
    sides
        .into_iter()
        .fold(layer_box(layer), |node, (side, value, placement)| {
            node.with_child(
                Node::element("div")
                    .with_class("edge-label")
                    .with_attribute("data-edge", side)
                    .with_styles(LABEL_STYLE)
                    .with_styles(placement)
                    .with_text(format_number(value)),
            )
        })
}

fn content_layer(content: &ContentSize) -> Node {
    layer_box(Layer::Content).with_child(
        Node::element("div")
            .with_class("content-size")
            .with_styles(LABEL_STYLE)
            .with_styles(&[("bottom", "2px"), ("width", "100%"), ("text-align", "center")])
            .with_text(content_label(content)),
    )
}

/// `"88.0 × 38.0"`
pub fn content_label(content: &ContentSize) -> String {
    format!("{} × {}", to_fixed_1(content.width), to_fixed_1(content.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BoxModel {
        BoxModel {
            margin: EdgeMetrics::new(8.0, 8.0, 8.0, 8.0),
            border: EdgeMetrics::new(2.0, 2.0, 2.0, 2.0),
            padding: EdgeMetrics::new(4.0, 1.5, 4.0, 1.5),
            content: ContentSize {
                width: 88.0,
                height: -3.5,
            },
        }
    }

    #[test]
    fn test_layers_nest_in_order() {
        let tree = render_box_model(&sample());
        let mut node = &tree;
        for layer in Layer::ALL {
            node = node
                .children
                .iter()
                .find(|c| c.as_element().is_some_and(|e| e.has_class(layer.class_name())))
                .unwrap_or_else(|| panic!("missing {}", layer.name()));
        }
        assert!(node.find_by_class("content-size").is_some());
    }

    #[test]
    fn test_edge_labels() {
        let tree = render_box_model(&sample());
        let padding = tree.find_by_class("padding-box").unwrap();
        let labels: Vec<String> = padding
            .children
            .iter()
            .filter(|c| c.as_element().is_some_and(|e| e.has_class("edge-label")))
            .map(Node::text_content)
            .collect();
        assert_eq!(labels, vec!["4", "4", "1.5", "1.5"]);
    }

    #[test]
    fn test_content_label_keeps_negative() {
        let tree = render_box_model(&sample());
        let size = tree.find_by_class("content-size").unwrap();
        assert_eq!(size.text_content(), "88.0 × -3.5");
    }

    #[test]
    fn test_content_label_sub_pixel_ties() {
        let content = ContentSize {
            width: 88.25,
            height: -0.25,
        };
        assert_eq!(content_label(&content), "88.3 × -0.3");
    }
}
