use portfolio_shared::ContentDom;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, NodeList};

/// [`ContentDom`] over the live browser document.
#[derive(Debug, Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    /// The current window's document, if there is one.
    pub fn current() -> Option<Self> {
        web_sys::window()
            .and_then(|win| win.document())
            .map(|document| Self {
                document,
            })
    }
}

fn collect_elements(result: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    match result {
        Ok(list) => (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(err) => {
            tracing::warn!("querySelectorAll(`{selector}`) failed: {err:?}");
            Vec::new()
        },
    }
}

impl ContentDom for WebDom {
    type Node = Element;

    fn query_all(&self, selector: &str) -> Vec<Element> {
        collect_elements(self.document.query_selector_all(selector), selector)
    }

    fn query_within(&self, scope: &Element, selector: &str) -> Vec<Element> {
        collect_elements(scope.query_selector_all(selector), selector)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn has_attribute(&self, node: &Element, name: &str) -> bool {
        node.has_attribute(name)
    }
}
