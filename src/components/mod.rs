//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the structural markup the hooks bind to (fixed class
//! names and data attributes) and drive the imperative hook lifecycle from
//! Leptos effects and cleanup callbacks.

pub mod kanban_board;
pub mod scroll_region;
