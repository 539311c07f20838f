//! Stylesheets injected into the page and into the overlay

use crate::config::InspectorConfig;

/// `id` of the `<style>` element carrying the page-wide outline rules
pub const PAGE_STYLE_ID: &str = "boxscope-page-style";

/// Rules outlining every element while the overlay is enabled, plus the
/// highlight of the hovered element
pub fn page_outline_stylesheet(config: &InspectorConfig) -> String {
    let enabled = &config.enabled_class;
    let hover = &config.hover_class;
    format!(
        "html.{enabled} body * {{ outline: 1px dashed rgba(255, 0, 100, 0.35) !important; }}\n\
         html.{enabled} .{hover} {{ outline: 2px solid rgba(30, 144, 255, 0.9) !important; \
         background-color: rgba(30, 144, 255, 0.08) !important; }}\n"
    )
}

/// Rules for the tooltip and the box model layers
pub fn tooltip_stylesheet(config: &InspectorConfig) -> String {
    let width = config.tooltip_width;
    let scroll = config.scroll_max_height;
    let z = config.z_index;
    format!(
        r#".boxscope-tooltip {{
  position: fixed;
  display: flex;
  flex-direction: column;
  align-items: center;
  backdrop-filter: blur(20px);
  padding: 10px;
  border-radius: 8px;
  z-index: {z};
  pointer-events: auto;
  cursor: move;
  width: {width}px;
  max-width: {width}px;
  overflow: auto;
  font-size: 13px;
  font-family: "SF Mono", Monaco, Consolas, monospace;
  line-height: 1.5;
  white-space: pre-wrap;
}}
.boxscope-tooltip.light {{ background: rgba(255, 255, 255, 0.65); color: #1a1b20; border: 1px solid rgba(0, 0, 0, 0.1); }}
.boxscope-tooltip.dark {{ background: rgba(36, 38, 43, 0.9); color: #e1e1e9; border: 1px solid rgba(255, 255, 255, 0.1); }}
.box-model {{ display: flex; flex-direction: column; width: 90%; margin: 0 auto; padding: 10px; font-size: 9px; box-sizing: border-box; }}
.margin-box, .border-box, .padding-box {{ position: relative; padding: 16px 0; box-sizing: border-box; }}
.margin-box {{ width: 100%; border: 1px dashed #ccc; background-color: rgba(255, 166, 0, 0.2); }}
.border-box {{ width: calc(100% - 32px); margin: 0 auto; border: 1px solid #999; background-color: rgba(128, 128, 128, 0.2); }}
.padding-box {{ width: calc(100% - 32px); margin: 0 auto; border: 1px dashed #666; background-color: rgba(0, 128, 0, 0.1); }}
.content-box {{ position: relative; width: calc(100% - 32px); margin: 0 auto; padding: 8px; background-color: rgba(0, 0, 255, 0.1); text-align: center; white-space: nowrap; box-sizing: border-box; }}
.scroll-container {{ pointer-events: auto; width: 100%; max-height: {scroll}px; overflow: auto; white-space: pre-wrap; font-size: 11px; }}
"#
    )
}
