//! Arena-backed document the overlay inspects and mutates

use super::node::{ElementData, Node, NodeType};
use super::selector::SelectorList;
use super::style::ComputedStyle;
use super::{Rect, Size};
use std::collections::HashMap;

/// Handle to a node in a [`Document`].
///
/// Handles stay valid as plain numbers after the node is removed; every
/// lookup through a dead handle returns `None` or does nothing.
pub type NodeId = u64;

/// Node kinds stored in the arena
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Document root
    Document,
    /// Element node
    Element(ElementData),
    /// Text node
    Text(String),
    /// Open shadow root attached to a host element
    ShadowRoot,
}

/// A node stored in the arena
#[derive(Debug, Clone)]
pub struct DomNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub shadow_root: Option<NodeId>,
    pub computed_style: ComputedStyle,
    pub bounding_box: Rect,
}

impl DomNode {
    fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            kind,
            parent: None,
            children: Vec::new(),
            shadow_root: None,
            computed_style: ComputedStyle::default(),
            bounding_box: Rect::default(),
        }
    }

    /// Get element data if this is an element
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.kind {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }
}

/// A page: node arena plus the viewport state a host exposes
#[derive(Debug, Clone)]
pub struct Document {
    nodes: HashMap<NodeId, DomNode>,
    next_id: NodeId,
    root: NodeId,
    document_element: NodeId,
    head: NodeId,
    body: NodeId,
    viewport: Size,
    prefers_dark: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with `<html>`, `<head>` and `<body>`
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: HashMap::new(),
            next_id: 0,
            root: 0,
            document_element: 0,
            head: 0,
            body: 0,
            viewport: Size::new(1280.0, 800.0),
            prefers_dark: false,
        };
        doc.root = doc.insert(NodeKind::Document);
        doc.document_element = doc.create_element("html");
        doc.head = doc.create_element("head");
        doc.body = doc.create_element("body");
        doc.append_child(doc.root, doc.document_element);
        doc.append_child(doc.document_element, doc.head);
        doc.append_child(doc.document_element, doc.body);
        doc
    }

    fn insert(&mut self, kind: NodeKind) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, DomNode::new(id, kind));
        id
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The `<html>` element
    pub fn document_element(&self) -> NodeId {
        self.document_element
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Size::new(width, height);
    }

    /// Whether `(prefers-color-scheme: dark)` currently matches
    pub fn prefers_dark_scheme(&self) -> bool {
        self.prefers_dark
    }

    pub fn set_prefers_dark_scheme(&mut self, dark: bool) {
        self.prefers_dark = dark;
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.insert(NodeKind::Element(ElementData::new(tag_name)))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.insert(NodeKind::Text(content.to_string()))
    }

    /// Append `child` to `parent`, moving it if it is already attached
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child
            || !self.nodes.contains_key(&parent)
            || !self.nodes.contains_key(&child)
            || self.contains(child, parent)
        {
            return false;
        }
        self.detach(child);
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(child);
        }
        true
    }

    /// Materialize a detached tree under `parent`, returning its root id
    pub fn append(&mut self, parent: NodeId, node: Node) -> Option<NodeId> {
        if !self.nodes.contains_key(&parent) {
            return None;
        }
        let Node {
            node_type,
            children,
        } = node;
        let kind = match node_type {
            NodeType::Element(data) => NodeKind::Element(data),
            NodeType::Text(text) => NodeKind::Text(text),
        };
        let id = self.insert(kind);
        self.append_child(parent, id);
        for child in children {
            self.append(id, child);
        }
        Some(id)
    }

    /// Attach an open shadow root to an element, or return the existing one
    pub fn attach_shadow(&mut self, host: NodeId) -> Option<NodeId> {
        let node = self.nodes.get(&host)?;
        node.as_element()?;
        if let Some(existing) = node.shadow_root {
            return Some(existing);
        }
        let shadow = self.insert(NodeKind::ShadowRoot);
        if let Some(node) = self.nodes.get_mut(&shadow) {
            node.parent = Some(host);
        }
        if let Some(node) = self.nodes.get_mut(&host) {
            node.shadow_root = Some(shadow);
        }
        Some(shadow)
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.nodes.get(&id).and_then(|n| n.parent) else {
            return;
        };
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.retain(|c| *c != id);
            if parent_node.shadow_root == Some(id) {
                parent_node.shadow_root = None;
            }
        }
        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent = None;
        }
    }

    /// Remove a node and its whole subtree, shadow trees included
    pub fn remove(&mut self, id: NodeId) -> bool {
        if id == self.root || !self.nodes.contains_key(&id) {
            return false;
        }
        self.detach(id);
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                pending.extend(node.children);
                pending.extend(node.shadow_root);
            }
        }
        true
    }

    /// Whether `node` is `ancestor` or a descendant of it, crossing shadow
    /// boundaries upward
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(&id).and_then(|n| n.parent);
        }
        false
    }

    /// Whether the node is reachable from the document root
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id) && self.contains(self.root, id)
    }

    pub fn get(&self, id: NodeId) -> Option<&DomNode> {
        self.nodes.get(&id)
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.nodes.get(&id).and_then(DomNode::as_element)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match self.nodes.get_mut(&id).map(|n| &mut n.kind) {
            Some(NodeKind::Element(data)) => Some(data),
            _ => None,
        }
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(element) = self.element_mut(id) {
            element.add_class(class);
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(element) = self.element_mut(id) {
            element.remove_class(class);
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }

    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some(element) = self.element_mut(id) {
            element.set_style(property, value);
        }
    }

    /// Resolved style of a node, if it exists
    pub fn computed_style(&self, id: NodeId) -> Option<&ComputedStyle> {
        self.nodes.get(&id).map(|n| &n.computed_style)
    }

    pub fn set_computed_style(&mut self, id: NodeId, style: ComputedStyle) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.computed_style = style;
        }
    }

    /// Layout box in viewport coordinates; zero for unknown nodes
    pub fn bounding_rect(&self, id: NodeId) -> Rect {
        self.nodes
            .get(&id)
            .map(|n| n.bounding_box)
            .unwrap_or_default()
    }

    pub fn set_bounding_rect(&mut self, id: NodeId, rect: Rect) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.bounding_box = rect;
        }
    }

    /// First element in document order matching the selector.
    ///
    /// Shadow trees are not searched.
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.query_selector_within(self.root, selector)
    }

    /// First descendant of `scope` matching the selector
    pub fn query_selector_within(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        let list = SelectorList::parse(selector)?;
        let mut stack: Vec<NodeId> = self
            .nodes
            .get(&scope)?
            .children
            .iter()
            .rev()
            .copied()
            .collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            if node.as_element().is_some_and(|e| list.matches(e)) {
                return Some(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    /// Every connected element carrying `class`, light and shadow trees included
    pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            if node.as_element().is_some_and(|e| e.has_class(class)) {
                found.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
            stack.extend(node.shadow_root);
        }
        found
    }

    /// Concatenated text of the light-tree descendants
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        if let NodeKind::Text(text) = &node.kind {
            out.push_str(text);
        }
        for child in &node.children {
            self.collect_text(*child, out);
        }
    }

    /// Number of live nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Serialize a subtree; shadow roots are written as declarative
    /// `<template shadowrootmode="open">` children
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        match &node.kind {
            NodeKind::Document => self.write_children(node, out),
            NodeKind::ShadowRoot => {
                out.push_str("<template shadowrootmode=\"open\">");
                self.write_children(node, out);
                out.push_str("</template>");
            }
            NodeKind::Text(text) => out.push_str(&escape_text(text)),
            NodeKind::Element(data) => {
                out.push('<');
                out.push_str(&data.tag_name);
                for (name, value) in &data.attributes {
                    out.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
                }
                if !data.inline_style.is_empty() {
                    out.push_str(&format!(
                        " style=\"{}\"",
                        escape_attribute(&data.style_text())
                    ));
                }
                out.push('>');
                if let Some(shadow) = node.shadow_root {
                    self.write_html(shadow, out);
                }
                self.write_children(node, out);
                out.push_str(&format!("</{}>", data.tag_name));
            }
        }
    }

    fn write_children(&self, node: &DomNode, out: &mut String) {
        for child in &node.children {
            self.write_html(*child, out);
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
