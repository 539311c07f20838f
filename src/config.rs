//! Inspector configuration

use crate::utils::{BoxscopeError, Result};
use serde::Deserialize;
use std::path::Path;

/// Tunables for the overlay.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// Distance from the cursor to the tooltip's top-left corner
    pub cursor_offset: f64,
    /// Horizontal footprint reserved when deciding whether to flip left
    pub footprint_width: f64,
    /// Vertical footprint reserved when deciding whether to flip up
    pub footprint_height: f64,
    /// Distance to the left of the cursor after a horizontal flip
    pub flip_offset_x: f64,
    /// Distance above the cursor after a vertical flip
    pub flip_offset_y: f64,
    /// Content width of the tooltip box
    pub tooltip_width: f64,
    /// Maximum height of the computed style list before it scrolls
    pub scroll_max_height: f64,
    pub z_index: i32,
    /// Marker class put on the highlighted element
    pub hover_class: String,
    /// Marker class put on the document element while enabled
    pub enabled_class: String,
    /// Render the tooltip inside a shadow root
    pub isolate_overlay: bool,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            cursor_offset: 10.0,
            footprint_width: 400.0,
            footprint_height: 300.0,
            flip_offset_x: 310.0,
            flip_offset_y: 210.0,
            tooltip_width: 350.0,
            scroll_max_height: 200.0,
            z_index: 999_999,
            hover_class: "boxscope-hover".to_string(),
            enabled_class: "boxscope-enabled".to_string(),
            isolate_overlay: true,
        }
    }
}

impl InspectorConfig {
    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Check that the values make sense together
    pub fn validate(&self) -> Result<()> {
        for (field, class) in [
            ("hover_class", &self.hover_class),
            ("enabled_class", &self.enabled_class),
        ] {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(BoxscopeError::Config(format!(
                    "{field} must be a single non-empty class name"
                )));
            }
        }
        if self.hover_class == self.enabled_class {
            return Err(BoxscopeError::Config(
                "hover_class and enabled_class must differ".to_string(),
            ));
        }
        if self.footprint_width <= 0.0 || self.footprint_height <= 0.0 {
            return Err(BoxscopeError::Config(
                "footprint must be positive".to_string(),
            ));
        }
        if self.tooltip_width <= 0.0 || self.scroll_max_height < 0.0 {
            return Err(BoxscopeError::Config(
                "tooltip dimensions must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(InspectorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = InspectorConfig::from_json(r#"{"isolate_overlay": false}"#).unwrap();
        assert!(!config.isolate_overlay);
        assert_eq!(config.footprint_width, 400.0);
        assert_eq!(config.hover_class, "boxscope-hover");
    }

    #[test]
    fn test_rejects_class_with_space() {
        let err = InspectorConfig::from_json(r#"{"hover_class": "a b"}"#).unwrap_err();
        assert!(matches!(err, BoxscopeError::Config(_)));
    }

    #[test]
    fn test_rejects_same_classes() {
        let err =
            InspectorConfig::from_json(r#"{"hover_class": "x", "enabled_class": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("must differ"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = InspectorConfig::from_json("{").unwrap_err();
        assert!(matches!(err, BoxscopeError::Protocol(_)));
    }
}
