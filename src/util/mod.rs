//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component and
//! hook logic to improve reuse and testability. Geometry math lives here as
//! pure functions so it can be exercised without a DOM.

pub mod debounce;
pub mod dom;
pub mod scroll_edges;
