use super::*;

#[test]
fn move_card_event_builds_expected_envelope() {
    let intent = MoveCard::new("42", "c3", "in_progress");
    let event = ClientEvent::move_card(&intent);
    assert_eq!(event.event, "move_card");
    assert!(!event.id.is_empty());
    assert_eq!(
        event.payload,
        serde_json::json!({
            "card_id": "42",
            "column_id": "c3",
            "position": 0,
            "new_status": "in_progress",
        })
    );
}

#[test]
fn encode_round_trips_through_json() {
    let event = ClientEvent::move_card(&MoveCard::new("42", "c3", "waiting"));
    let back: ClientEvent = serde_json::from_str(&event.encode()).expect("decode");
    assert_eq!(back, event);
}

#[test]
fn connected_sender_delivers_exactly_one_message_per_drop() {
    let (sender, mut rx) = EventSender::channel();
    let event = ClientEvent::move_card(&MoveCard::new("42", "c3", "in_progress"));
    assert!(sender.send(&event));

    let raw = rx.try_next().expect("open channel").expect("one message");
    let delivered: ClientEvent = serde_json::from_str(&raw).expect("decode");
    assert_eq!(delivered, event);
    assert!(rx.try_next().is_err(), "no extra messages queued");
}

#[test]
fn disconnected_sender_reports_failure_without_panicking() {
    let sender = EventSender::disconnected();
    let event = ClientEvent::move_card(&MoveCard::new("42", "c3", "new"));
    assert!(!sender.send(&event));
}

#[test]
fn dropped_receiver_reports_failure() {
    let (sender, rx) = EventSender::channel();
    drop(rx);
    let event = ClientEvent::move_card(&MoveCard::new("42", "c3", "new"));
    assert!(!sender.send(&event));
}
