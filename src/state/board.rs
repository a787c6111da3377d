//! Board snapshot types rendered by the kanban components.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a request; doubles as the column ordering on the
/// board and as the `data-column-status` marker value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    New,
    InProgress,
    Waiting,
    Completed,
}

impl CardStatus {
    /// Wire/markup name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Waiting => "waiting",
            Self::Completed => "completed",
        }
    }
}

/// One request shown as a draggable card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Request identifier, exposed as `data-request-id` on the card element.
    pub id: String,
    pub title: String,
}

/// A drop target grouping cards by status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column identifier, exposed as `data-column-id` on the card list.
    pub id: String,
    pub status: CardStatus,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}
