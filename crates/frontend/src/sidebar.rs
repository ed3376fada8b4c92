//! Sidebar visibility toggle

use crate::dom;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Display value the sidebar should switch to
pub fn next_display(current: &str) -> &'static str {
    if current == "none" { "block" } else { "none" }
}

/// Flip the sidebar between hidden and shown
pub fn toggle_sidebar(selector: &str) {
    let Some(sidebar) = dom::query(selector).and_then(|e| e.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    let style = sidebar.style();
    let current = style.get_property_value("display").unwrap_or_default();
    let _ = style.set_property("display", next_display(&current));
}

/// Bind the toggle control; both the control and the sidebar must exist
pub fn bind_toggle(toggle_selector: &str, sidebar_selector: &str) -> Option<EventListener> {
    let toggle = dom::query(toggle_selector)?;
    dom::query(sidebar_selector)?;

    let sidebar_selector = sidebar_selector.to_string();
    Some(EventListener::new(&toggle, "click", move |_| {
        toggle_sidebar(&sidebar_selector);
    }))
}
