//! DOM helpers for scrolling and keyboard focus
//!
//! All helpers are best-effort: a missing window or element is a no-op.

use wasm_bindgen_x::JsCast;

/// Selector for controls that take part in the lightbox focus trap
pub const FOCUSABLE_SELECTOR: &str = "button, a, [tabindex]";

pub fn document() -> Option<web_sys_x::Document> {
    web_sys_x::window().and_then(|w| w.document())
}

pub fn html_element_by_id(id: &str) -> Option<web_sys_x::HtmlElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys_x::HtmlElement>()
        .ok()
}

/// The element that currently has keyboard focus
pub fn active_element() -> Option<web_sys_x::HtmlElement> {
    document()?
        .active_element()?
        .dyn_into::<web_sys_x::HtmlElement>()
        .ok()
}

pub fn focus(element: &web_sys_x::HtmlElement) {
    if element.focus().is_err() {
        tracing::debug!("focus() rejected by the browser");
    }
}

/// Focusable controls inside the element with `container_id`, in DOM order.
pub fn focusable_within(container_id: &str) -> Vec<web_sys_x::HtmlElement> {
    let Some(container) = document().and_then(|d| d.get_element_by_id(container_id)) else {
        return vec![];
    };
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return vec![];
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys_x::HtmlElement>().ok())
        .collect()
}

pub fn window_scroll_y() -> f64 {
    web_sys_x::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn scroll_to_top() {
    let Some(window) = web_sys_x::window() else {
        return;
    };
    let options = web_sys_x::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys_x::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scroll a page section into view by its anchor id.
pub fn scroll_to_section(id: &str) {
    let Some(element) = document().and_then(|d| d.get_element_by_id(id)) else {
        tracing::warn!("No section with id '{id}' to scroll to");
        return;
    };
    let options = web_sys_x::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys_x::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
