//! Fire-and-forget event publication toward the server.
//!
//! DESIGN
//! ======
//! Hooks never talk to the socket directly. They publish serialized events on
//! an unbounded channel; the host application drains the receiver into its
//! persistent connection. A closed channel drops the event with a warning —
//! there is no client-observed failure mode beyond that, and the server is
//! solely responsible for rejecting invalid moves.

#[cfg(test)]
#[path = "push_test.rs"]
mod push_test;

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use serde::{Deserialize, Serialize};

use crate::net::types::MoveCard;

/// Envelope for one event pushed over the host connection.
///
/// The id is client-generated so the host can correlate log lines; the
/// server never acknowledges it back to this crate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientEvent {
    pub id: String,
    pub event: String,
    pub payload: serde_json::Value,
}

impl ClientEvent {
    pub fn new(event: &str, payload: &impl Serialize) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            event: event.to_owned(),
            payload: serde_json::to_value(payload).unwrap_or(serde_json::Value::Null),
        }
    }

    /// The one event this crate emits: a card move intent.
    pub fn move_card(intent: &MoveCard) -> Self {
        Self::new("move_card", intent)
    }

    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Clonable sender half of the outbound event channel.
#[derive(Clone)]
pub struct EventSender {
    tx: Option<UnboundedSender<String>>,
}

impl EventSender {
    /// Build a connected sender plus the receiver the host drains.
    pub fn channel() -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = unbounded();
        (Self { tx: Some(tx) }, rx)
    }

    /// Sender with no backing channel; every send reports `false`. Used for
    /// server rendering and tests.
    pub fn disconnected() -> Self {
        Self { tx: None }
    }

    /// Publish one event. Returns `false` when no connection is wired up or
    /// the host has dropped the receiver.
    pub fn send(&self, event: &ClientEvent) -> bool {
        let Some(tx) = &self.tx else {
            return false;
        };
        let sent = tx.unbounded_send(event.encode()).is_ok();
        if !sent {
            leptos::logging::warn!("event channel closed; dropping {}", event.event);
        }
        sent
    }
}

impl Default for EventSender {
    fn default() -> Self {
        Self::disconnected()
    }
}
