//! Defensive DOM lookup helpers.
//!
//! Every binding the hooks rely on is resolved through these helpers so a
//! missing element degrades the feature to a no-op for that mount instead of
//! raising. Hydrate-only; server builds never touch the DOM.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

/// First descendant of `root` matching `selector`, if any.
#[cfg(feature = "hydrate")]
pub fn query(root: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    root.query_selector(selector).ok().flatten()
}

/// Document-wide lookup by element id.
#[cfg(feature = "hydrate")]
pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Nearest ancestor (or self) of the event target matching `selector`.
#[cfg(feature = "hydrate")]
pub fn closest_from_event(ev: &web_sys::Event, selector: &str) -> Option<web_sys::Element> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}

/// The event target itself, when it carries the given class.
#[cfg(feature = "hydrate")]
pub fn event_target_with_class(ev: &web_sys::Event, class: &str) -> Option<web_sys::HtmlElement> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
        .filter(|el| el.class_list().contains(class))
}

/// Set one inline style property, ignoring elements without a style surface.
#[cfg(feature = "hydrate")]
pub fn set_style(el: &web_sys::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}
