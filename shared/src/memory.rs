//! In-memory element tree implementing [`ContentDom`].
//!
//! Used by native tests and any non-browser host that wants to run the
//! language synchronizer. Text is modelled the way `textContent` behaves:
//! reading concatenates the node's own text with its descendants', and
//! writing detaches every child and stores the new text on the node.

use std::cell::RefCell;

use crate::{
    dom::ContentDom,
    selector::{Selector, SelectorNode},
};

/// Handle to an element in a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Description of an element to append, built fluently.
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
}

impl ElementSpec {
    /// Start an element with the given tag name.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Set (or replace) an attribute.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
        self
    }

    /// Set the `id` attribute.
    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Add a class to the `class` attribute.
    #[must_use]
    pub fn class(self, class: &str) -> Self {
        let classes = self
            .attrs
            .iter()
            .find(|(key, _)| key == "class")
            .map(|(_, value)| format!("{value} {class}"))
            .unwrap_or_else(|| class.to_string());
        self.attr("class", &classes)
    }

    /// Set the element's own text.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Annotate with both language attributes and show the Chinese text.
    #[must_use]
    pub fn bilingual(self, zh: &str, en: &str) -> Self {
        self.attr("data-zh", zh).attr("data-en", en).text(zh)
    }
}

/// An element tree rooted at an implicit document node.
#[derive(Debug)]
pub struct MemoryDom {
    nodes: RefCell<Vec<NodeData>>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

struct NodeView<'a> {
    nodes: &'a [NodeData],
    id: NodeId,
}

impl<'a> SelectorNode for NodeView<'a> {
    fn tag_name(&self) -> &str {
        &self.nodes[self.id.0].tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.nodes[self.id.0]
            .attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn parent_element(&self) -> Option<Self> {
        // 文档根节点不是元素，不参与匹配
        self.nodes[self.id.0]
            .parent
            .filter(|parent| parent.0 != ROOT.0)
            .map(|id| NodeView {
                nodes: self.nodes,
                id,
            })
    }
}

const ROOT: NodeId = NodeId(0);

impl MemoryDom {
    /// An empty document.
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![NodeData {
                tag: "#document".to_string(),
                attrs: Vec::new(),
                text: String::new(),
                parent: None,
                children: Vec::new(),
            }]),
        }
    }

    /// The document node. Append top-level elements to it.
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Append `spec` as the last child of `parent`.
    pub fn append(&self, parent: NodeId, spec: ElementSpec) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(NodeData {
            tag: spec.tag,
            attrs: spec.attrs,
            text: spec.text,
            parent: Some(parent),
            children: Vec::new(),
        });
        nodes[parent.0].children.push(id);
        id
    }

    /// Set an attribute on an existing element.
    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let attrs = &mut nodes[node.0].attrs;
        match attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => attrs.push((name.to_string(), value.to_string())),
        }
    }

    /// Text of every element in document order, for whole-page comparisons.
    pub fn snapshot(&self) -> Vec<String> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        for id in Self::descendants(&nodes, ROOT) {
            out.push(Self::collect_text(&nodes, id));
        }
        out
    }

    fn descendants(nodes: &[NodeData], scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = nodes[scope.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    fn collect_text(nodes: &[NodeData], id: NodeId) -> String {
        let mut text = nodes[id.0].text.clone();
        for child in &nodes[id.0].children {
            text.push_str(&Self::collect_text(nodes, *child));
        }
        text
    }

    fn select(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        let selector = match Selector::parse(selector) {
            Ok(selector) => selector,
            Err(err) => {
                tracing::warn!("ignoring invalid selector `{selector}`: {err}");
                return Vec::new();
            },
        };
        let nodes = self.nodes.borrow();
        Self::descendants(&nodes, scope)
            .into_iter()
            .filter(|id| {
                selector.matches(&NodeView {
                    nodes: &nodes,
                    id: *id,
                })
            })
            .collect()
    }
}

impl ContentDom for MemoryDom {
    type Node = NodeId;

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(ROOT, selector)
    }

    fn query_within(&self, scope: &NodeId, selector: &str) -> Vec<NodeId> {
        self.select(*scope, selector)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0]
            .attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    fn text(&self, node: &NodeId) -> String {
        Self::collect_text(&self.nodes.borrow(), *node)
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let children = std::mem::take(&mut nodes[node.0].children);
        for child in children {
            nodes[child.0].parent = None;
        }
        nodes[node.0].text = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_within_only_sees_descendants() {
        let dom = MemoryDom::new();
        let first = dom.append(dom.root(), ElementSpec::new("div").class("skill-category"));
        let second = dom.append(dom.root(), ElementSpec::new("div").class("skill-category"));
        dom.append(first, ElementSpec::new("span").text("Python"));
        dom.append(second, ElementSpec::new("span").text("Git"));

        let spans = dom.query_within(&second, "span");
        assert_eq!(spans.len(), 1);
        assert_eq!(dom.text(&spans[0]), "Git");
        assert_eq!(dom.query_all(".skill-category span").len(), 2);
    }

    #[test]
    fn set_text_detaches_children() {
        let dom = MemoryDom::new();
        let item = dom.append(dom.root(), ElementSpec::new("a").class("page-nav-item"));
        let icon = dom.append(item, ElementSpec::new("i").class("icon"));
        dom.append(item, ElementSpec::new("span").text("关于"));
        assert_eq!(dom.text(&item), "关于");

        dom.set_text(&item, "About");
        assert_eq!(dom.text(&item), "About");
        assert!(dom.query_all(".page-nav-item span").is_empty());
        assert!(dom.query_all(".icon").is_empty());
        assert_eq!(dom.text(&icon), "");
    }

    #[test]
    fn invalid_selector_yields_nothing() {
        let dom = MemoryDom::new();
        dom.append(dom.root(), ElementSpec::new("p").text("x"));
        assert!(dom.query_all("p:hover").is_empty());
        assert!(dom.query_first("[").is_none());
    }

    #[test]
    fn class_builder_accumulates() {
        let dom = MemoryDom::new();
        let node = dom.append(dom.root(), ElementSpec::new("DIV").class("a").class("b"));
        assert_eq!(dom.attribute(&node, "class").as_deref(), Some("a b"));
        assert_eq!(dom.query_all("div.a.b"), vec![node]);
    }

    #[test]
    fn snapshot_lists_document_order() {
        let dom = MemoryDom::new();
        let outer = dom.append(dom.root(), ElementSpec::new("div").text("A"));
        dom.append(outer, ElementSpec::new("p").text("B"));
        dom.append(dom.root(), ElementSpec::new("p").text("C"));
        assert_eq!(dom.snapshot(), vec!["AB", "B", "C"]);
    }
}
