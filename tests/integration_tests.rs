//! Integration tests for Boxscope
//!
//! These tests drive the overlay end to end: popup, injection, commands,
//! hover events and the rendered tooltip.

use boxscope::dom::{ComputedStyle, Document, Node, NodeId, Rect};
use boxscope::extension::{Background, Browser, Popup, TabId};
use boxscope::inspector::{
    BoxModel, Modifiers, clamp_to_viewport, collect_properties, initial_position, parse_px,
};
use boxscope::{Command, InputEvent, InspectorConfig, Response};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn card_page() -> (Document, NodeId) {
    let mut doc = Document::new();
    let body = doc.body();
    let card = doc
        .append(
            body,
            Node::element("div")
                .with_attribute("id", "box")
                .with_class("card"),
        )
        .unwrap();
    doc.set_computed_style(
        card,
        ComputedStyle::new()
            .with("display", "block")
            .with("width", "88px")
            .with("float", "none")
            .with("opacity", "1")
            .with_edges("margin", "8px")
            .with_edges("padding", "4px")
            .with_edges("border-width", "2px"),
    );
    doc.set_bounding_rect(card, Rect::new(20.0, 20.0, 100.0, 60.0));
    (doc, card)
}

fn browser_with_card() -> (Browser, TabId, NodeId) {
    let (doc, card) = card_page();
    let mut browser = Browser::new();
    let tab = browser.open_tab("https://example.com/", doc);
    (browser, tab, card)
}

fn hover(browser: &mut Browser, tab: TabId, target: NodeId, modifiers: Modifiers) {
    browser
        .tab_mut(tab)
        .unwrap()
        .dispatch(&InputEvent::mouse_over(target, 50.0, 50.0, modifiers));
}

#[test]
fn test_card_scenario() {
    let (mut browser, tab, card) = browser_with_card();
    let mut popup = Popup::open(&mut browser);
    popup.click_toggle(&mut browser);
    assert_eq!(popup.button_label(), "Disable");

    hover(&mut browser, tab, card, Modifiers::ctrl());

    let tab = browser.tab(tab).unwrap();
    let doc = tab.document();
    let tooltip = tab.inspector().unwrap().state().tooltip().unwrap();

    let title = doc
        .query_selector_within(tooltip.element, ".element-title")
        .unwrap();
    assert_eq!(doc.text_content(title), r#"<div id="box" class="card">"#);

    let size = doc
        .query_selector_within(tooltip.element, ".content-size")
        .unwrap();
    assert_eq!(doc.text_content(size), "88.0 × 48.0");

    let panel = doc
        .query_selector_within(tooltip.element, ".scroll-container")
        .unwrap();
    let listed = doc.text_content(panel);
    assert!(listed.contains("opacity: 1;"));
    assert!(listed.contains("width: 88px;"));
    assert!(!listed.contains("float"));
}

#[test]
fn test_single_highlight_and_tooltip() {
    let (mut doc, card) = card_page();
    let body = doc.body();
    let other = doc.append(body, Node::element("span")).unwrap();
    let mut browser = Browser::new();
    let tab = browser.open_tab("https://example.com/", doc);
    Popup::open(&mut browser).click_toggle(&mut browser);

    for target in [card, other, card, other] {
        hover(&mut browser, tab, target, Modifiers::ctrl());
        let doc = browser.tab(tab).unwrap().document();
        assert_eq!(doc.elements_with_class("boxscope-hover"), vec![target]);
        assert_eq!(doc.elements_with_class("boxscope-tooltip").len(), 1);
    }
}

#[test]
fn test_hover_without_chord_does_nothing() {
    let (mut browser, tab, card) = browser_with_card();
    Popup::open(&mut browser).click_toggle(&mut browser);
    hover(&mut browser, tab, card, Modifiers::default());
    let tab = browser.tab(tab).unwrap();
    assert!(!tab.inspector().unwrap().state().is_shown());
}

#[test]
fn test_status_is_idempotent_and_toggle_round_trips() {
    let (mut browser, tab, _) = browser_with_card();
    let tab = browser.tab_mut(tab).unwrap();
    tab.inject().unwrap();

    let status = tab.send_command(&Command::GetStatus).unwrap();
    assert_eq!(tab.send_command(&Command::GetStatus).unwrap(), status);

    tab.send_command(&Command::Toggle).unwrap();
    let back = tab.send_command(&Command::Toggle).unwrap();
    assert_eq!(back, status);
}

#[test]
fn test_disable_clears_tooltip_and_outline() {
    let (mut browser, tab, card) = browser_with_card();
    let mut popup = Popup::open(&mut browser);
    popup.click_toggle(&mut browser);
    hover(&mut browser, tab, card, Modifiers::meta());

    popup.click_toggle(&mut browser);
    assert_eq!(popup.status(), "CSS debugging is disabled");

    let doc = browser.tab(tab).unwrap().document();
    assert!(!doc.has_class(doc.document_element(), "boxscope-enabled"));
    assert!(doc.elements_with_class("boxscope-hover").is_empty());
    assert!(doc.elements_with_class("boxscope-tooltip").is_empty());
}

#[test]
fn test_escape_hides_tooltip() {
    let (mut browser, tab, card) = browser_with_card();
    Popup::open(&mut browser).click_toggle(&mut browser);
    hover(&mut browser, tab, card, Modifiers::ctrl());

    let tab = browser.tab_mut(tab).unwrap();
    tab.dispatch(&InputEvent::key_down("Escape"));
    assert!(!tab.document().has_class(card, "boxscope-hover"));
    assert!(tab.document().elements_with_class("boxscope-tooltip").is_empty());

    tab.dispatch(&InputEvent::key_down("Escape"));
    assert!(tab.inspector().unwrap().status());
}

#[test]
fn test_navigation_to_restricted_page() {
    let (mut browser, tab, _) = browser_with_card();
    let mut popup = Popup::open(&mut browser);
    popup.click_toggle(&mut browser);

    browser
        .tab_mut(tab)
        .unwrap()
        .navigate("chrome://newtab", Document::new());
    popup.click_toggle(&mut browser);
    assert_eq!(popup.status(), "Error injecting script. Check console.");
}

#[test]
fn test_background_style_query() {
    let (browser, tab, _) = browser_with_card();
    let background = Background::new();
    let query = Command::GetComputedStyle {
        selector: "div.card".to_string(),
    };
    let Some(Response::Style(Some(style))) = background.handle_message(&browser, tab, &query) else {
        panic!("expected a style map");
    };
    assert_eq!(style["margin-left"], "8px");
    assert_eq!(style["border-top-width"], "2px");
}

#[test]
fn test_config_changes_classes() {
    let config = InspectorConfig::from_json(r#"{"hover_class": "hl", "isolate_overlay": false}"#)
        .unwrap();
    let (doc, card) = card_page();
    let mut browser = Browser::new();
    let tab = boxscope::extension::Tab::new(TabId::new(7), "file:///tmp/page.html", doc)
        .with_config(config);
    let tab = browser.insert_tab(tab);
    Popup::open(&mut browser).click_toggle(&mut browser);
    hover(&mut browser, tab, card, Modifiers::ctrl());

    let doc = browser.tab(tab).unwrap().document();
    assert!(doc.has_class(card, "hl"));
    assert!(doc.query_selector(".boxscope-tooltip").is_some());
}

proptest! {
    #[test]
    fn test_parse_px_never_nan(s in "\\PC*") {
        let value = parse_px(&s);
        prop_assert!(value.is_finite());
    }

    #[test]
    fn test_content_size_identity(
        width in 0.0f64..2000.0,
        height in 0.0f64..2000.0,
        border in 0u32..40,
        padding in 0u32..80,
    ) {
        let style = ComputedStyle::new()
            .with_edges("border-width", &format!("{}px", border))
            .with_edges("padding", &format!("{}px", padding));
        let model = BoxModel::compute(&style, Rect::new(0.0, 0.0, width, height));
        prop_assert_eq!(model.border.left, border as f64);
        prop_assert_eq!(model.padding.bottom, padding as f64);
        let b = &model.border;
        let p = &model.padding;
        prop_assert_eq!(model.content.width, width - b.left - b.right - p.left - p.right);
        prop_assert_eq!(model.content.height, height - b.top - b.bottom - p.top - p.bottom);
    }

    #[test]
    fn test_initial_position_rule(x in 0.0f64..2000.0, y in 0.0f64..2000.0) {
        let config = InspectorConfig::default();
        let viewport = boxscope::dom::Size::new(1280.0, 800.0);
        let pos = initial_position(boxscope::dom::Point::new(x, y), viewport, &config);
        let expected_x = if x + 10.0 + 400.0 > 1280.0 { x - 310.0 } else { x + 10.0 };
        let expected_y = if y + 10.0 + 300.0 > 800.0 { y - 210.0 } else { y + 10.0 };
        prop_assert_eq!(pos.x, expected_x);
        prop_assert_eq!(pos.y, expected_y);
    }

    #[test]
    fn test_clamp_stays_non_negative(x in -5000.0f64..5000.0, y in -5000.0f64..5000.0) {
        let viewport = boxscope::dom::Size::new(1280.0, 800.0);
        let size = boxscope::dom::Size::new(372.0, 400.0);
        let pos = clamp_to_viewport(boxscope::dom::Point::new(x, y), size, viewport);
        prop_assert!(pos.x >= 0.0 && pos.x <= 1280.0 - 372.0);
        prop_assert!(pos.y >= 0.0 && pos.y <= 800.0 - 400.0);
    }

    #[test]
    fn test_filter_rule(value in prop_oneof![
        Just(String::new()),
        Just("none".to_string()),
        Just("auto".to_string()),
        Just("normal".to_string()),
        "[a-z0-9]{1,8}",
    ]) {
        let style = ComputedStyle::new().with("display", &value);
        let shown = !collect_properties(&style).is_empty();
        let informative = !value.is_empty() && !["none", "auto", "normal"].contains(&value.as_str());
        prop_assert_eq!(shown, informative);
    }
}
