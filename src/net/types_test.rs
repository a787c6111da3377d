use super::*;

#[test]
fn move_card_pins_position_to_zero() {
    let intent = MoveCard::new("42", "c3", "in_progress");
    assert_eq!(intent.position, 0);
}

#[test]
fn move_card_serializes_with_wire_field_names() {
    let intent = MoveCard::new("42", "c3", "in_progress");
    let value = serde_json::to_value(&intent).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "card_id": "42",
            "column_id": "c3",
            "position": 0,
            "new_status": "in_progress",
        })
    );
}

#[test]
fn move_card_round_trips() {
    let intent = MoveCard::new("42", "c3", "in_progress");
    let raw = serde_json::to_string(&intent).expect("serialize");
    let back: MoveCard = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, intent);
}
