//! In-memory [`Dom`] for driving components without a browser.
//!
//! The tree starts as `<html><head/><body/></html>`. Layout metrics are not
//! computed: tests assign `scrollHeight`, `offsetTop` and `offsetHeight`
//! per element, and set the viewport's scroll offset and width directly.
//! Smooth scrolls land immediately and are recorded in [`HeadlessDom::scroll_log`].

#[cfg(test)]
#[path = "headless_test.rs"]
mod headless_test;

use std::cell::Cell;
use std::collections::BTreeMap;

use crate::dom::Dom;
use crate::selector::{ElementView, Selector};

/// Index of an element inside a [`HeadlessDom`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct NodeData {
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    scroll_height: f64,
    offset_top: f64,
    offset_height: f64,
}

impl ElementView for NodeData {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

const ROOT: NodeId = NodeId(0);
const HEAD: NodeId = NodeId(1);
const BODY: NodeId = NodeId(2);

#[derive(Debug, Clone)]
pub struct HeadlessDom {
    nodes: Vec<NodeData>,
    scroll_y: f64,
    inner_width: f64,
    scroll_log: Vec<f64>,
    layout_reads: Cell<usize>,
}

impl Default for HeadlessDom {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDom {
    #[must_use]
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            scroll_y: 0.0,
            inner_width: 1280.0,
            scroll_log: Vec::new(),
            layout_reads: Cell::new(0),
        };
        let root = dom.push("html");
        let head = dom.push("head");
        let body = dom.push("body");
        dom.link(root, head);
        dom.link(root, body);
        dom
    }

    fn push(&mut self, tag: &str) -> NodeId {
        self.nodes.push(NodeData { tag: tag.to_ascii_lowercase(), ..NodeData::default() });
        NodeId(self.nodes.len() - 1)
    }

    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    fn unlink(&mut self, child: NodeId) {
        if let Some(parent) = self.node_mut(child).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != child);
        }
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        self.unlink(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Create a `<tag>` with `classes` and append it under `parent`.
    pub fn append(&mut self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let id = self.push(tag);
        self.node_mut(id).classes = classes.iter().map(|c| (*c).to_owned()).collect();
        self.link(parent, id);
        id
    }

    pub fn set_scroll_height(&mut self, node: NodeId, px: f64) {
        self.node_mut(node).scroll_height = px;
    }

    pub fn set_offset_top(&mut self, node: NodeId, px: f64) {
        self.node_mut(node).offset_top = px;
    }

    pub fn set_offset_height(&mut self, node: NodeId, px: f64) {
        self.node_mut(node).offset_height = px;
    }

    pub fn set_scroll_y(&mut self, px: f64) {
        self.scroll_y = px;
    }

    pub fn set_inner_width(&mut self, px: f64) {
        self.inner_width = px;
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> &str {
        &self.node(node).tag
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> &str {
        &self.node(node).text
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).children
    }

    /// Target of every smooth scroll so far, oldest first.
    #[must_use]
    pub fn scroll_log(&self) -> &[f64] {
        &self.scroll_log
    }

    /// Number of `offsetHeight`/`offsetTop`/`scrollHeight` reads so far.
    #[must_use]
    pub fn layout_reads(&self) -> usize {
        self.layout_reads.get()
    }

    fn count_layout_read(&self) {
        self.layout_reads.set(self.layout_reads.get() + 1);
    }

    fn is_attached(&self, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if id == ROOT {
                return true;
            }
            cursor = self.node(id).parent;
        }
        false
    }

    /// Descendants of `scope` (exclusive) in document order.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(scope).children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }

    fn ancestors(&self, node: NodeId) -> Vec<&NodeData> {
        let mut out = Vec::new();
        let mut cursor = self.node(node).parent;
        while let Some(id) = cursor {
            out.push(self.node(id));
            cursor = self.node(id).parent;
        }
        out
    }

    fn select(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        let parsed = match Selector::parse(selector) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warn!("element not found: {selector} ({err})");
                return Vec::new();
            }
        };
        self.descendants(scope)
            .into_iter()
            .filter(|id| parsed.matches(self.node(*id), self.ancestors(*id)))
            .collect()
    }
}

impl Dom for HeadlessDom {
    type Node = NodeId;

    fn document_element(&self) -> Option<NodeId> {
        Some(ROOT)
    }

    fn body(&self) -> Option<NodeId> {
        Some(BODY)
    }

    fn head(&self) -> Option<NodeId> {
        Some(HEAD)
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.select(ROOT, selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(ROOT, selector)
    }

    fn query_within(&self, scope: &NodeId, selector: &str) -> Option<NodeId> {
        self.select(*scope, selector).into_iter().next()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(ROOT)
            .into_iter()
            .find(|n| self.node(*n).attrs.get("id").is_some_and(|v| v == id))
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.node(*node).parent
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let mut cursor = Some(*node);
        while let Some(id) = cursor {
            if id == *ancestor {
                return true;
            }
            cursor = self.node(id).parent;
        }
        false
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let data = self.node(*node);
        if name == "class" {
            return (!data.classes.is_empty()).then(|| data.classes.join(" "));
        }
        data.attrs.get(name).cloned()
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        let data = self.node_mut(*node);
        if name == "class" {
            data.classes = value.split_whitespace().map(str::to_owned).collect();
        } else {
            data.attrs.insert(name.to_owned(), value.to_owned());
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        ElementView::has_class(self.node(*node), class)
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        let data = self.node_mut(*node);
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        self.node_mut(*node).classes.retain(|c| c != class);
    }

    fn style(&self, node: &NodeId, property: &str) -> Option<String> {
        self.node(*node).style.get(property).cloned()
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        let style = &mut self.node_mut(*node).style;
        if value.is_empty() {
            style.remove(property);
        } else {
            style.insert(property.to_owned(), value.to_owned());
        }
    }

    fn scroll_height(&self, node: &NodeId) -> f64 {
        self.count_layout_read();
        self.node(*node).scroll_height
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.count_layout_read();
        self.node(*node).offset_top
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.count_layout_read();
        self.node(*node).offset_height
    }

    fn create_element(&mut self, tag: &str) -> Option<NodeId> {
        Some(self.push(tag))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        if self.contains(child, parent) {
            log::debug!("refusing to append {child:?} into its own subtree");
            return;
        }
        self.link(*parent, *child);
    }

    fn remove(&mut self, node: &NodeId) {
        if *node == ROOT || !self.is_attached(*node) {
            return;
        }
        self.unlink(*node);
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        let children = std::mem::take(&mut self.node_mut(*node).children);
        for child in children {
            self.node_mut(child).parent = None;
        }
        self.node_mut(*node).text = text.to_owned();
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn inner_width(&self) -> f64 {
        self.inner_width
    }

    fn smooth_scroll_to(&mut self, top: f64) {
        self.scroll_log.push(top);
        self.scroll_y = top.max(0.0);
    }
}
