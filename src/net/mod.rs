//! Outbound event schema and sender.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire payloads this client emits and `push` wraps the
//! channel the host application drains into its persistent connection. The
//! transport itself (socket lifecycle, reconnects, acknowledgments) lives in
//! the host; nothing here waits for a response.

pub mod push;
pub mod types;
