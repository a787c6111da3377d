//! Imperative DOM behaviors with an explicit lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each hook binds to one server-rendered element and is driven by three
//! inbound lifecycle notifications from the host UI: construction via
//! `mounted`, re-render via `updated`, and teardown via `destroyed` (or
//! simply dropping the hook — `Drop` runs the same cleanup). Hooks keep no
//! authoritative state: they re-read DOM geometry on demand and publish
//! intents on the outbound event channel.

pub mod kanban;
pub mod scroll_indicator;

/// Delay before recomputing after a mutation burst or component re-render,
/// letting layout settle before geometry is measured.
pub const SETTLE_DELAY_MS: u32 = 50;

/// Delay before the one-shot post-mount recomputation, covering content that
/// loads asynchronously right after attach.
pub const INITIAL_CHECK_DELAY_MS: u32 = 100;
