//! Resolved style values as the host exposes them

use std::collections::BTreeMap;

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

/// Resolved (post-cascade) style of an element, keyed by CSS property name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedStyle {
    properties: BTreeMap<String, String>,
}

impl ComputedStyle {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a property value as text; absent properties read as ""
    pub fn get_property_value(&self, property: &str) -> &str {
        self.properties
            .get(property)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Set a property value
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(property.into(), value.into());
    }

    /// Builder form of [`ComputedStyle::set`]
    pub fn with(mut self, property: &str, value: &str) -> Self {
        self.set(property, value);
        self
    }

    /// Set the four per-side longhands of a box property.
    ///
    /// `margin` expands to `margin-top` etc., `border-width` to
    /// `border-top-width` etc.
    pub fn with_edges(mut self, property: &str, value: &str) -> Self {
        let (head, tail) = match property.split_once('-') {
            Some((head, tail)) => (head, Some(tail)),
            None => (property, None),
        };
        for side in SIDES {
            let name = match tail {
                Some(tail) => format!("{head}-{side}-{tail}"),
                None => format!("{head}-{side}"),
            };
            self.set(name, value);
        }
        self
    }

    /// Copy out every property
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.properties.clone()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_property_is_empty_string() {
        let style = ComputedStyle::new();
        assert!(style.is_empty());
        assert_eq!(style.get_property_value("display"), "");
    }

    #[test]
    fn test_with_edges_expands_sides() {
        let style = ComputedStyle::new()
            .with_edges("margin", "8px")
            .with_edges("border-width", "2px");
        assert_eq!(style.get_property_value("margin-left"), "8px");
        assert_eq!(style.get_property_value("border-bottom-width"), "2px");
        assert_eq!(style.len(), 8);
    }
}
