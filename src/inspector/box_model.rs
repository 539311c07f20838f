//! Box model metrics derived from resolved style and layout

use crate::dom::{ComputedStyle, Document, NodeId, Rect};
use cssparser::{Parser, ParserInput, Token};

/// Per-side sizes of one box layer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeMetrics {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeMetrics {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Read `{prefix}-{side}{suffix}` for the four sides
    fn read(style: &ComputedStyle, prefix: &str, suffix: &str) -> Self {
        let side = |name: &str| parse_px(style.get_property_value(&format!("{prefix}-{name}{suffix}")));
        Self {
            top: side("top"),
            right: side("right"),
            bottom: side("bottom"),
            left: side("left"),
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Size of the content box; negative when borders and padding exceed the
/// layout box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentSize {
    pub width: f64,
    pub height: f64,
}

/// Margin, border, padding and content of one element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxModel {
    pub margin: EdgeMetrics,
    pub border: EdgeMetrics,
    pub padding: EdgeMetrics,
    pub content: ContentSize,
}

impl BoxModel {
    /// Compute metrics from a resolved style and the element's layout box
    pub fn compute(style: &ComputedStyle, rect: Rect) -> Self {
        let margin = EdgeMetrics::read(style, "margin", "");
        let border = EdgeMetrics::read(style, "border", "-width");
        let padding = EdgeMetrics::read(style, "padding", "");
        let content = ContentSize {
            width: rect.width - border.left - border.right - padding.left - padding.right,
            height: rect.height - border.top - border.bottom - padding.top - padding.bottom,
        };
        Self {
            margin,
            border,
            padding,
            content,
        }
    }

    /// Measure an element in a document; `None` if the node is not an element.
    ///
    /// An element with no resolved style measures as if every length were 0.
    pub fn measure(doc: &Document, id: NodeId) -> Option<Self> {
        doc.element(id)?;
        let rect = doc.bounding_rect(id);
        Some(match doc.computed_style(id) {
            Some(style) => Self::compute(style, rect),
            None => Self::compute(&ComputedStyle::default(), rect),
        })
    }
}

/// Leading number of a CSS length, unit ignored; `0.0` when there is none.
///
/// `"12.5px"` → 12.5, `"50%"` → 50, `"-4px"` → -4, `"auto"` → 0.
pub fn parse_px(text: &str) -> f64 {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parser.skip_whitespace();
    let start = parser.position();
    let (rounded, suffix_len) = match parser.next() {
        Ok(Token::Number { value, .. }) => (*value, 0),
        Ok(Token::Dimension { value, unit, .. }) => (*value, unit.len()),
        Ok(Token::Percentage { unit_value, .. }) => (*unit_value * 100.0, 1),
        _ => return 0.0,
    };
    // token values are f32; reparse the source digits at full precision
    let source = parser.slice_from(start);
    let value = source
        .get(..source.len().saturating_sub(suffix_len))
        .and_then(|digits| digits.parse::<f64>().ok())
        .unwrap_or(f64::from(rounded));
    if value.is_finite() { value } else { 0.0 }
}
