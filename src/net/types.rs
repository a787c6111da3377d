//! Wire payloads for the client/server boundary.
//!
//! These types mirror what the server-side board handler consumes, so serde
//! round-trips stay lossless and the server can validate moves without any
//! client-side interpretation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A requested card relocation, produced on drop and processed
/// authoritatively by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCard {
    /// The dragged card's request identifier.
    pub card_id: String,
    /// Target column identifier.
    pub column_id: String,
    /// Slot within the target column. Always 0 from this client; the server
    /// owns fine-grained ordering.
    pub position: i64,
    /// Status the card takes on in the target column.
    pub new_status: String,
}

impl MoveCard {
    pub fn new(
        card_id: impl Into<String>,
        column_id: impl Into<String>,
        new_status: impl Into<String>,
    ) -> Self {
        Self {
            card_id: card_id.into(),
            column_id: column_id.into(),
            position: 0,
            new_status: new_status.into(),
        }
    }
}
