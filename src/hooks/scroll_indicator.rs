//! Vertical scroll-edge indicator hook.
//!
//! Binds to a container whose structural contract is three descendants
//! identified by fixed class names: `.scroll-content` (the scrollable child)
//! and the `.scroll-indicator-top` / `.scroll-indicator-bottom` markers.
//! Visibility is recomputed on every scroll event, after DOM mutations
//! (debounced so one mutation burst measures once), shortly after mount, and
//! after host re-renders. If the scrollable child is missing the mount is a
//! no-op.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

#[cfg(feature = "hydrate")]
use crate::hooks::{INITIAL_CHECK_DELAY_MS, SETTLE_DELAY_MS};
#[cfg(feature = "hydrate")]
use crate::util::debounce::Debounce;
#[cfg(feature = "hydrate")]
use crate::util::dom;
#[cfg(feature = "hydrate")]
use crate::util::scroll_edges::{display_value, edge_visibility};

/// Scroll-edge indicator behavior for one mounted container.
///
/// Holds every browser handle it creates (listener closure, mutation
/// observer, timers) so teardown is guaranteed: `destroyed` — or plain drop —
/// releases them all and no recomputation can fire afterwards.
#[cfg(feature = "hydrate")]
pub struct ScrollIndicator {
    root: web_sys::Element,
    scroll_target: Option<web_sys::Element>,
    scroll_listener: Option<Closure<dyn FnMut()>>,
    observer: Option<web_sys::MutationObserver>,
    observer_cb: Option<Closure<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>>,
    settle: Debounce,
    initial_check: Option<Timeout>,
}

#[cfg(feature = "hydrate")]
impl ScrollIndicator {
    /// Attach the behavior to `root`.
    pub fn mounted(root: web_sys::Element) -> Self {
        let mut hook = Self {
            root,
            scroll_target: None,
            scroll_listener: None,
            observer: None,
            observer_cb: None,
            settle: Debounce::new(SETTLE_DELAY_MS),
            initial_check: None,
        };

        let Some(content) = dom::query(&hook.root, ".scroll-content") else {
            return hook;
        };

        // Scroll events recompute synchronously.
        let root_for_scroll = hook.root.clone();
        let listener = Closure::wrap(Box::new(move || recompute(&root_for_scroll)) as Box<dyn FnMut()>);
        let _ = content.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());

        // Content mutations (tab switches, streamed updates) recompute after
        // layout settles; the debounce collapses each burst into one run.
        let settle = hook.settle.clone();
        let root_for_mutation = hook.root.clone();
        let observer_cb = Closure::wrap(Box::new(move |_records: js_sys::Array, _obs: web_sys::MutationObserver| {
            let root = root_for_mutation.clone();
            settle.schedule(move || recompute(&root));
        })
            as Box<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>);
        if let Ok(observer) = web_sys::MutationObserver::new(observer_cb.as_ref().unchecked_ref()) {
            let init = web_sys::MutationObserverInit::new();
            init.set_child_list(true);
            init.set_subtree(true);
            init.set_character_data(true);
            let _ = observer.observe_with_options(&content, &init);
            hook.observer = Some(observer);
        }

        // One-shot check shortly after mount for initially async content.
        let root_for_initial = hook.root.clone();
        hook.initial_check = Some(Timeout::new(INITIAL_CHECK_DELAY_MS, move || {
            recompute(&root_for_initial);
        }));

        hook.scroll_target = Some(content);
        hook.scroll_listener = Some(listener);
        hook.observer_cb = Some(observer_cb);
        hook
    }

    /// Host re-render notification; recompute once layout settles.
    pub fn updated(&self) {
        let root = self.root.clone();
        self.settle.schedule(move || recompute(&root));
    }

    /// Detach the behavior and release every browser handle.
    pub fn destroyed(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let (Some(target), Some(listener)) = (self.scroll_target.take(), self.scroll_listener.take()) {
            let _ = target.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        }
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.observer_cb = None;
        self.settle.cancel();
        self.initial_check = None;
    }
}

#[cfg(feature = "hydrate")]
impl Drop for ScrollIndicator {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Re-read geometry and toggle both indicators. Missing elements: no-op.
#[cfg(feature = "hydrate")]
fn recompute(root: &web_sys::Element) {
    let Some(content) = dom::query(root, ".scroll-content") else {
        return;
    };
    let (Some(top), Some(bottom)) = (
        dom::query(root, ".scroll-indicator-top"),
        dom::query(root, ".scroll-indicator-bottom"),
    ) else {
        return;
    };

    let edges = edge_visibility(
        f64::from(content.scroll_top()),
        f64::from(content.client_height()),
        f64::from(content.scroll_height()),
    );
    dom::set_style(&top, "display", display_value(edges.leading));
    dom::set_style(&bottom, "display", display_value(edges.trailing));
}
