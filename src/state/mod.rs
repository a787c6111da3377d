//! Presentation data for the board surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server is the single authority on card placement; these types only
//! describe the snapshot the page renders. No client-side mutation of card
//! placement exists — the board is redrawn from server state.

pub mod board;
