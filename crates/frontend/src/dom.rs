//! Guarded DOM access
//!
//! Every helper tolerates a missing window, document or element and turns
//! the operation into a no-op.

use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Node};

/// Class Bootstrap-style markup uses for a displayed modal
pub const MODAL_SHOWN_CLASS: &str = "show";

/// Class added to `<body>` while a modal is open
pub const MODAL_OPEN_BODY_CLASS: &str = "modal-open";

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Root `<html>` element, where theme custom properties live
pub fn root_element() -> Option<HtmlElement> {
    document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Show the warning modal
///
/// The modal is driven by its class and style alone, so outside clicks and
/// Escape have no dismiss path. It goes away only through [`hide_modal`].
pub fn show_modal(id: &str) {
    let Some(modal) = html_element_by_id(id) else {
        debug!(id, "Warning modal not present, nothing to show");
        return;
    };

    let _ = modal.set_attribute("aria-modal", "true");
    let _ = modal.remove_attribute("aria-hidden");
    let _ = modal.style().set_property("display", "block");
    let _ = modal.class_list().add_1(MODAL_SHOWN_CLASS);

    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.class_list().add_1(MODAL_OPEN_BODY_CLASS);
    }
}

pub fn hide_modal(id: &str) {
    let Some(modal) = html_element_by_id(id) else {
        debug!(id, "Warning modal not present, nothing to hide");
        return;
    };

    let _ = modal.class_list().remove_1(MODAL_SHOWN_CLASS);
    let _ = modal.style().set_property("display", "none");
    let _ = modal.remove_attribute("aria-modal");
    let _ = modal.set_attribute("aria-hidden", "true");

    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.class_list().remove_1(MODAL_OPEN_BODY_CLASS);
    }
}

pub fn is_modal_shown(id: &str) -> bool {
    html_element_by_id(id).is_some_and(|modal| modal.class_list().contains(MODAL_SHOWN_CLASS))
}

/// Whether `event` was aimed at `element` or one of its descendants
pub fn event_within(element: &Element, event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|node| element.contains(Some(&node)))
}

pub fn set_countdown(id: &str, seconds: u64) {
    if let Some(counter) = element_by_id(id) {
        counter.set_text_content(Some(&seconds.to_string()));
    }
}

/// Hard navigation to a same-origin path
pub fn navigate(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(error) = window.location().set_href(path) {
        warn!(path, ?error, "Navigation failed");
    }
}

/// Page origin, e.g. `https://example.edu`
pub fn origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
