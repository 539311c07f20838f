//! Element title and the filtered list of resolved properties

use super::theme::Palette;
use crate::dom::{ComputedStyle, Document, Node, NodeId};

/// Properties shown in the panel, in display order
pub const ALLOWED_PROPERTIES: [&str; 20] = [
    "display",
    "position",
    "width",
    "height",
    "background-color",
    "color",
    "font-size",
    "font-family",
    "line-height",
    "text-align",
    "vertical-align",
    "float",
    "clear",
    "z-index",
    "opacity",
    "transform",
    "transition",
    "box-shadow",
    "border-radius",
    "overflow",
];

/// Values treated as uninformative defaults
const SUPPRESSED_VALUES: [&str; 3] = ["none", "auto", "normal"];

/// One `name: value;` line of the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePropertyLine {
    pub name: String,
    pub value: String,
}

/// Whether a resolved value is worth showing
pub fn is_informative(value: &str) -> bool {
    !value.is_empty() && !SUPPRESSED_VALUES.contains(&value)
}

/// Allow-listed properties with informative values, in allow-list order
pub fn collect_properties(style: &ComputedStyle) -> Vec<StylePropertyLine> {
    ALLOWED_PROPERTIES
        .iter()
        .filter_map(|name| {
            let value = style.get_property_value(name);
            is_informative(value).then(|| StylePropertyLine {
                name: name.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}

/// `div.scroll-container` with one line per property
pub fn render_style_panel(lines: &[StylePropertyLine], palette: &Palette) -> Node {
    lines.iter().fold(
        Node::element("div").with_class("scroll-container"),
        |container, line| {
            container.with_child(
                Node::element("div")
                    .with_class("style-line")
                    .with_child(
                        Node::element("span")
                            .with_class("property-name")
                            .with_styles(&[("color", palette.property)])
                            .with_text(line.name.as_str()),
                    )
                    .with_text(format!(": {};", line.value)),
            )
        },
    )
}

/// Title such as `<div id="box" class="card">` with the tag, attribute
/// names and values in separate coloured spans.
///
/// `hidden_class` (the hover marker) is left out of the class list.
pub fn element_title(doc: &Document, id: NodeId, palette: &Palette, hidden_class: &str) -> Node {
    let title = Node::element("div")
        .with_class("element-title")
        .with_styles(&[("margin-bottom", "4px"), ("width", "100%")]);
    let Some(element) = doc.element(id) else {
        return title;
    };

    let span = |color: &str, text: &str| {
        Node::element("span")
            .with_styles(&[("color", color)])
            .with_text(text)
    };
    let attribute = |title: Node, name: &str, value: &str| {
        title
            .with_text(" ")
            .with_child(span(palette.attribute, name))
            .with_text("=\"")
            .with_child(span(palette.value, value))
            .with_text("\"")
    };

    let tag = element.tag_name.to_lowercase();
    let mut title = title.with_child(span(palette.tag, &format!("<{tag}")));

    if let Some(element_id) = element.id() {
        title = attribute(title, "id", element_id);
    }

    let classes: Vec<&str> = element
        .classes()
        .into_iter()
        .filter(|class| *class != hidden_class)
        .collect();
    if !classes.is_empty() {
        title = attribute(title, "class", &classes.join(" "));
    }

    title.with_child(span(palette.tag, ">"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::theme::Theme;

    #[test]
    fn test_sentinel_values_are_suppressed() {
        assert!(!is_informative(""));
        assert!(!is_informative("none"));
        assert!(!is_informative("auto"));
        assert!(!is_informative("normal"));
        assert!(is_informative("0px"));
        assert!(is_informative("static"));
        assert!(is_informative("None"));
    }

    #[test]
    fn test_collect_keeps_allow_list_order() {
        let style = ComputedStyle::new()
            .with("opacity", "1")
            .with("float", "none")
            .with("transform", "none")
            .with("width", "120px")
            .with("display", "block")
            .with("margin-top", "8px");
        let names: Vec<String> = collect_properties(&style)
            .into_iter()
            .map(|line| line.name)
            .collect();
        assert_eq!(names, vec!["display", "width", "opacity"]);
    }

    #[test]
    fn test_render_lines() {
        let lines = vec![StylePropertyLine {
            name: "color".to_string(),
            value: "red".to_string(),
        }];
        let panel = render_style_panel(&lines, &Theme::Dark.palette());
        assert_eq!(panel.text_content(), "color: red;");
        let name = panel.find_by_class("property-name").unwrap();
        assert_eq!(name.as_element().unwrap().style("color"), Some("#5cd5fb"));
    }

    #[test]
    fn test_title_hides_marker_class() {
        let mut doc = Document::new();
        let id = doc
            .append(
                doc.body(),
                Node::element("DIV")
                    .with_attribute("id", "box")
                    .with_attribute("class", "card boxscope-hover"),
            )
            .unwrap();
        let title = element_title(&doc, id, &Theme::Light.palette(), "boxscope-hover");
        assert_eq!(title.text_content(), r#"<div id="box" class="card">"#);
    }

    #[test]
    fn test_title_without_attributes() {
        let mut doc = Document::new();
        let id = doc
            .append(doc.body(), Node::element("span").with_attribute("class", "boxscope-hover"))
            .unwrap();
        let title = element_title(&doc, id, &Theme::Light.palette(), "boxscope-hover");
        assert_eq!(title.text_content(), "<span>");
    }
}
