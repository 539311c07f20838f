//! Light and dark variants of the tooltip

/// Tooltip colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    /// Class put on the tooltip element
    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Class of the other variant
    pub fn opposite_class_name(&self) -> &'static str {
        match self {
            Theme::Light => "dark",
            Theme::Dark => "light",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                tag: "#a03166",
                attribute: "#a03166",
                value: "#0842a0",
                property: "#a626a4",
            },
            Theme::Dark => Palette {
                tag: "#a8c7fa",
                attribute: "#a8c7fa",
                value: "#fe8d59",
                property: "#5cd5fb",
            },
        }
    }
}

/// Syntax colours for the element title and property names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub tag: &'static str,
    pub attribute: &'static str,
    pub value: &'static str,
    pub property: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_classes() {
        assert_eq!(Theme::from_dark(true).class_name(), "dark");
        assert_eq!(Theme::from_dark(false).class_name(), "light");
        assert_eq!(Theme::Dark.opposite_class_name(), "light");
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
    }
}
