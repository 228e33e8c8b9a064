use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

/// Smoothly scroll the window to `top` (clamped at zero).
pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_top(top.max(0.0));
        options.set_left(0.0);
        window.scroll_with_scroll_to_options(&options);
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// All elements matching `selector`, as `HtmlElement`s.
pub fn query_html_elements(selector: &str) -> Vec<HtmlElement> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    match document.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect(),
        Err(err) => {
            tracing::warn!("querySelectorAll(`{selector}`) failed: {err:?}");
            Vec::new()
        },
    }
}

pub fn query_html_element(selector: &str) -> Option<HtmlElement> {
    window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Document-relative top of the element an in-page `href` points at.
pub fn anchor_offset_top(href: &str) -> Option<f64> {
    if href.len() < 2 || !href.starts_with('#') {
        return None;
    }
    let document = window()?.document()?;
    // 用 id 查找，避免 href 中的特殊字符被当作选择器解析
    let target: Element = document.get_element_by_id(&href[1..])?;
    let target: HtmlElement = target.dyn_into().ok()?;
    Some(f64::from(target.offset_top()))
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        tracing::debug!("failed to set {property}: {err:?}");
    }
}
