//! Boxscope - CSS box-model hover inspector
//!
//! Demo driver: builds a sample page, enables the overlay through the popup,
//! hovers an element with Ctrl held and prints what the overlay rendered.

use boxscope::dom::{ComputedStyle, Document, Node, Rect};
use boxscope::extension::{Background, Browser, Popup, Tab, TabId};
use boxscope::inspector::Modifiers;
use boxscope::{InputEvent, InspectorConfig, NAME, VERSION};
use std::env;

struct Options {
    dark: bool,
    config: Option<String>,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        dark: false,
        config: None,
    };
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dark" => options.dark = true,
            "--config" => {
                options.config = Some(args.next().ok_or("--config needs a file path")?);
            }
            other => return Err(format!("unknown argument `{}`", other)),
        }
    }
    Ok(options)
}

fn sample_page(dark: bool) -> Document {
    let mut doc = Document::new();
    doc.set_prefers_dark_scheme(dark);
    let body = doc.body();

    let card = Node::element("div")
        .with_attribute("id", "box")
        .with_class("card")
        .with_text("Hello");
    if let Some(id) = doc.append(body, card) {
        doc.set_computed_style(
            id,
            ComputedStyle::new()
                .with("display", "block")
                .with("position", "static")
                .with("width", "88px")
                .with("height", "38px")
                .with("color", "rgb(0, 0, 0)")
                .with("font-size", "16px")
                .with("line-height", "normal")
                .with("float", "none")
                .with_edges("margin", "8px")
                .with_edges("padding", "5px")
                .with_edges("border-width", "1px"),
        );
        doc.set_bounding_rect(id, Rect::new(40.0, 60.0, 100.0, 50.0));
    }
    doc
}

fn run(options: Options) -> boxscope::Result<()> {
    let config = match &options.config {
        Some(path) => InspectorConfig::load(path)?,
        None => InspectorConfig::default(),
    };

    println!("🔍 {} v{}", NAME, VERSION);

    let background = Background::new();
    background.on_installed();

    let mut browser = Browser::new();
    let tab = Tab::new(TabId::new(1), "https://example.com/", sample_page(options.dark))
        .with_config(config);
    let tab_id = browser.insert_tab(tab);

    let mut popup = Popup::open(&mut browser);
    popup.click_toggle(&mut browser);
    println!("popup: [{}] {}", popup.button_label(), popup.status());

    if let Some(tab) = browser.tab_mut(tab_id) {
        if let Some(target) = tab.document().query_selector("#box") {
            tab.dispatch(&InputEvent::mouse_over(target, 120.0, 80.0, Modifiers::ctrl()));
        }
        let doc = tab.document();
        match tab.inspector().and_then(|i| i.state().tooltip()) {
            Some(tooltip) => println!("\n{}", doc.outer_html(tooltip.host)),
            None => println!("\nno tooltip shown"),
        }
    }

    let style = background.get_computed_style(&browser, tab_id, "#box")?;
    println!("\n{}", serde_json::to_string_pretty(&style)?);
    Ok(())
}

fn main() {
    env_logger::init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("usage: boxscope [--dark] [--config <file.json>]");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(options) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
