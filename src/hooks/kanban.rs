//! Kanban board controller hook.
//!
//! Binds to the horizontally scrollable board element and owns three
//! behaviors: a one-shot initial scroll offset that previews the first and
//! last columns, left/right scroll-edge indicators (targeting the fixed
//! `scroll-indicator-left` / `scroll-indicator-right` element ids), and card
//! drag-and-drop. A drop translates directly into one `move_card` event on
//! the outbound channel — no DOM reorder, no response handling, no rollback;
//! the server owns final placement.
//!
//! The drag session is private instance state, so multiple boards on one
//! page cannot interfere. Browser drag events are serialized, so the session
//! has a single writer by construction.

#[cfg(test)]
#[path = "kanban_test.rs"]
mod kanban_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "hydrate")]
use crate::net::push::{ClientEvent, EventSender};
use crate::net::types::MoveCard;
#[cfg(feature = "hydrate")]
use crate::util::dom;
#[cfg(feature = "hydrate")]
use crate::util::scroll_edges::{edge_visibility, initial_board_offset, opacity_value};

/// Opacity applied to the card under drag as pickup feedback.
pub const DRAG_FEEDBACK_OPACITY: &str = "0.5";

/// At most one card is in flight per board controller; `end` always clears,
/// whether or not a drop landed.
#[derive(Debug)]
pub struct DragSession<T> {
    subject: Option<T>,
}

// Manual impl: the derive would require `T: Default`, and element handles
// have no default.
impl<T> Default for DragSession<T> {
    fn default() -> Self {
        Self { subject: None }
    }
}

impl<T> DragSession<T> {
    pub fn begin(&mut self, card: T) {
        self.subject = Some(card);
    }

    pub fn subject(&self) -> Option<&T> {
        self.subject.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.subject.is_some()
    }

    /// Close the session, returning the subject so feedback can be undone.
    pub fn end(&mut self) -> Option<T> {
        self.subject.take()
    }
}

/// Build the move intent for a drop, if every required attribute resolved.
///
/// Position is always 0: fine-grained ordering is not computed client-side.
pub fn move_intent(
    card_id: Option<String>,
    column_id: Option<String>,
    new_status: Option<String>,
) -> Option<MoveCard> {
    Some(MoveCard::new(card_id?, column_id?, new_status?))
}

/// Board controller for one mounted kanban container.
#[cfg(feature = "hydrate")]
pub struct KanbanScroll {
    root: web_sys::Element,
    session: Rc<RefCell<DragSession<web_sys::HtmlElement>>>,
    scroll_listener: Option<Closure<dyn FnMut()>>,
    dragstart: Option<Closure<dyn FnMut(web_sys::DragEvent)>>,
    dragend: Option<Closure<dyn FnMut(web_sys::DragEvent)>>,
    dragover: Option<Closure<dyn FnMut(web_sys::DragEvent)>>,
    drop_listener: Option<Closure<dyn FnMut(web_sys::DragEvent)>>,
}

#[cfg(feature = "hydrate")]
impl KanbanScroll {
    /// Attach the controller to the board element.
    pub fn mounted(root: web_sys::Element, sender: EventSender) -> Self {
        let mut hook = Self {
            root,
            session: Rc::new(RefCell::new(DragSession::default())),
            scroll_listener: None,
            dragstart: None,
            dragend: None,
            dragover: None,
            drop_listener: None,
        };

        let root_for_scroll = hook.root.clone();
        let scroll_listener =
            Closure::wrap(Box::new(move || update_indicators(&root_for_scroll)) as Box<dyn FnMut()>);
        hook.add_listener("scroll", scroll_listener.as_ref().unchecked_ref());
        hook.scroll_listener = Some(scroll_listener);

        // Position once so both end columns show a preview sliver, then seed
        // the indicators from the resulting geometry.
        apply_initial_offset(&hook.root);
        update_indicators(&hook.root);

        let session = Rc::clone(&hook.session);
        let dragstart = Closure::wrap(Box::new(move |ev: web_sys::DragEvent| {
            let Some(card) = dom::event_target_with_class(&ev, "kanban-card") else {
                return;
            };
            if let Some(dt) = ev.data_transfer() {
                dt.set_effect_allowed("move");
            }
            dom::set_style(&card, "opacity", DRAG_FEEDBACK_OPACITY);
            session.borrow_mut().begin(card);
        }) as Box<dyn FnMut(web_sys::DragEvent)>);
        hook.add_listener("dragstart", dragstart.as_ref().unchecked_ref());
        hook.dragstart = Some(dragstart);

        let session = Rc::clone(&hook.session);
        let dragend = Closure::wrap(Box::new(move |_ev: web_sys::DragEvent| {
            if let Some(card) = session.borrow_mut().end() {
                dom::set_style(&card, "opacity", "1");
            }
        }) as Box<dyn FnMut(web_sys::DragEvent)>);
        hook.add_listener("dragend", dragend.as_ref().unchecked_ref());
        hook.dragend = Some(dragend);

        let dragover = Closure::wrap(Box::new(move |ev: web_sys::DragEvent| {
            // Default must be prevented for the drop event to fire at all.
            ev.prevent_default();
            if dom::closest_from_event(&ev, ".kanban-cards").is_some() {
                if let Some(dt) = ev.data_transfer() {
                    dt.set_drop_effect("move");
                }
            }
        }) as Box<dyn FnMut(web_sys::DragEvent)>);
        hook.add_listener("dragover", dragover.as_ref().unchecked_ref());
        hook.dragover = Some(dragover);

        let session = Rc::clone(&hook.session);
        let drop_listener = Closure::wrap(Box::new(move |ev: web_sys::DragEvent| {
            ev.prevent_default();
            let Some(target) = dom::closest_from_event(&ev, ".kanban-cards") else {
                return;
            };
            let session = session.borrow();
            let Some(card) = session.subject() else {
                return;
            };
            let intent = move_intent(
                card.get_attribute("data-request-id"),
                target.get_attribute("data-column-id"),
                target.get_attribute("data-column-status"),
            );
            if let Some(intent) = intent {
                let _ = sender.send(&ClientEvent::move_card(&intent));
            }
        }) as Box<dyn FnMut(web_sys::DragEvent)>);
        hook.add_listener("drop", drop_listener.as_ref().unchecked_ref());
        hook.drop_listener = Some(drop_listener);

        hook
    }

    /// Detach the controller and release every listener.
    pub fn destroyed(mut self) {
        self.teardown();
    }

    fn add_listener(&self, name: &str, callback: &js_sys::Function) {
        let _ = self.root.add_event_listener_with_callback(name, callback);
    }

    fn remove_listener(&self, name: &str, callback: &js_sys::Function) {
        let _ = self.root.remove_event_listener_with_callback(name, callback);
    }

    fn teardown(&mut self) {
        if let Some(listener) = self.scroll_listener.take() {
            self.remove_listener("scroll", listener.as_ref().unchecked_ref());
        }
        if let Some(listener) = self.dragstart.take() {
            self.remove_listener("dragstart", listener.as_ref().unchecked_ref());
        }
        if let Some(listener) = self.dragend.take() {
            self.remove_listener("dragend", listener.as_ref().unchecked_ref());
        }
        if let Some(listener) = self.dragover.take() {
            self.remove_listener("dragover", listener.as_ref().unchecked_ref());
        }
        if let Some(listener) = self.drop_listener.take() {
            self.remove_listener("drop", listener.as_ref().unchecked_ref());
        }
        if let Some(card) = self.session.borrow_mut().end() {
            dom::set_style(&card, "opacity", "1");
        }
    }
}

#[cfg(feature = "hydrate")]
impl Drop for KanbanScroll {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Scroll just past the "new" column, keeping preview slivers of the "new"
/// and "completed" columns visible. Skipped when either column is absent.
#[cfg(feature = "hydrate")]
fn apply_initial_offset(root: &web_sys::Element) {
    let Some(new_column) = dom::query(root, r#"[data-column-status="new"]"#) else {
        return;
    };
    if dom::query(root, r#"[data-column-status="completed"]"#).is_none() {
        return;
    }
    let Some(new_column) = new_column.dyn_ref::<web_sys::HtmlElement>().cloned() else {
        return;
    };

    let max_scroll = f64::from(root.scroll_width() - root.client_width());
    let offset = initial_board_offset(f64::from(new_column.offset_width()), max_scroll);
    #[allow(clippy::cast_possible_truncation)]
    root.set_scroll_left(offset.round() as i32);
}

/// Fade the horizontal indicators at their respective edges.
#[cfg(feature = "hydrate")]
fn update_indicators(root: &web_sys::Element) {
    let (Some(left), Some(right)) = (
        dom::element_by_id("scroll-indicator-left"),
        dom::element_by_id("scroll-indicator-right"),
    ) else {
        return;
    };

    let edges = edge_visibility(
        f64::from(root.scroll_left()),
        f64::from(root.client_width()),
        f64::from(root.scroll_width()),
    );
    dom::set_style(&left, "opacity", opacity_value(edges.leading));
    dom::set_style(&right, "opacity", opacity_value(edges.trailing));
}
