//! Page access used by the language synchronizer.

/// The slice of the Document Object Model the language synchronizer needs.
///
/// Implemented by the browser adapter in the frontend crate and by
/// [`crate::memory::MemoryDom`] for native tests. Every query returns a
/// fresh list; implementations must not cache results between calls since
/// the page can change underneath them.
///
/// Failed lookups (unknown selector, missing node) surface as empty results,
/// never as errors.
pub trait ContentDom {
    /// Handle to a single element.
    type Node: Clone + PartialEq;

    /// All elements in document order matching `selector`.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// Descendants of `scope` in document order matching `selector`.
    fn query_within(&self, scope: &Self::Node, selector: &str) -> Vec<Self::Node>;

    /// Value of attribute `name`, if present.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Concatenated text content of the node.
    fn text(&self, node: &Self::Node) -> String;

    /// Replace the node's content with a single text value.
    fn set_text(&self, node: &Self::Node, text: &str);

    /// First element matching `selector`.
    fn query_first(&self, selector: &str) -> Option<Self::Node> {
        self.query_all(selector).into_iter().next()
    }

    /// First descendant of `scope` matching `selector`.
    fn query_first_within(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node> {
        self.query_within(scope, selector).into_iter().next()
    }

    /// Whether attribute `name` is present (an empty value still counts).
    fn has_attribute(&self, node: &Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }
}
