//! # deskboard-client
//!
//! Leptos + WASM interaction layer for the request-desk kanban board.
//! The server owns all request and column state; this crate renders the
//! board markup and attaches the imperative DOM behaviors (scroll-edge
//! indicators, card drag-and-drop) that the server-rendered page needs.
//!
//! Card moves are published as fire-and-forget events on an outbound
//! channel; the host application forwards them over its persistent
//! connection and the server remains the single authority on ordering
//! and placement.

pub mod app;
pub mod components;
pub mod hooks;
pub mod net;
pub mod state;
pub mod util;
