//! Owned node trees built before they are mounted into a document

/// Node types in a detached tree
#[derive(Debug, Clone, PartialEq)]
pub enum NodeType {
    /// Element node (e.g., <div>)
    Element(ElementData),
    /// Text node
    Text(String),
}

/// Data for element nodes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementData {
    /// Tag name (e.g., "div", "span")
    pub tag_name: String,
    /// Element attributes, in insertion order
    pub attributes: Vec<(String, String)>,
    /// Inline style declarations, in insertion order
    pub inline_style: Vec<(String, String)>,
}

impl ElementData {
    /// Create a new element
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: Vec::new(),
            inline_style: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute value
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Get the ID attribute, if non-empty
    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id").filter(|id| !id.is_empty())
    }

    /// Get class names
    pub fn classes(&self) -> Vec<&str> {
        self.get_attribute("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Check for a class name
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().contains(&class)
    }

    /// Add a class name if it is not already present
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let mut classes = self.classes();
        classes.push(class);
        let joined = classes.join(" ");
        self.set_attribute("class", joined);
    }

    /// Remove every occurrence of a class name
    pub fn remove_class(&mut self, class: &str) {
        if !self.has_class(class) {
            return;
        }
        let joined = self
            .classes()
            .into_iter()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attribute("class", joined);
    }

    /// Add or remove a class depending on `force`
    pub fn toggle_class(&mut self, class: &str, force: bool) {
        if force {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Get an inline style value
    pub fn style(&self, property: &str) -> Option<&str> {
        self.inline_style
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.as_str())
    }

    /// Set an inline style value
    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.inline_style.iter_mut().find(|(key, _)| *key == property) {
            Some(slot) => slot.1 = value,
            None => self.inline_style.push((property, value)),
        }
    }

    /// Serialized `style` attribute text
    pub fn style_text(&self) -> String {
        self.inline_style
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A node in a detached tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node type and data
    pub node_type: NodeType,
    /// Child nodes
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new node
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            children: Vec::new(),
        }
    }

    /// Create an element node
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self::new(NodeType::Element(ElementData::new(tag_name)))
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeType::Text(content.into()))
    }

    /// Add a class (no-op on text nodes)
    pub fn with_class(mut self, class: &str) -> Self {
        if let NodeType::Element(data) = &mut self.node_type {
            data.add_class(class);
        }
        self
    }

    /// Set an attribute (no-op on text nodes)
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        if let NodeType::Element(data) = &mut self.node_type {
            data.set_attribute(name, value);
        }
        self
    }

    /// Set inline styles (no-op on text nodes)
    pub fn with_styles(mut self, styles: &[(&str, &str)]) -> Self {
        if let NodeType::Element(data) = &mut self.node_type {
            for (property, value) in styles {
                data.set_style(*property, *value);
            }
        }
        self
    }

    /// Append a text child
    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.with_child(Node::text(content))
    }

    /// Append a child
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Get element data if this is an element
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        }
    }

    /// Concatenated text of this subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let NodeType::Text(text) = &self.node_type {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Depth-first search for the first element carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&Node> {
        if self.as_element().is_some_and(|e| e.has_class(class)) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(class))
    }
}
