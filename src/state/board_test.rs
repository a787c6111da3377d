use super::*;

#[test]
fn status_wire_names_match_markup_markers() {
    for (status, name) in [
        (CardStatus::New, "new"),
        (CardStatus::InProgress, "in_progress"),
        (CardStatus::Waiting, "waiting"),
        (CardStatus::Completed, "completed"),
    ] {
        assert_eq!(status.as_str(), name);
        assert_eq!(
            serde_json::to_value(status).expect("serialize"),
            serde_json::json!(name)
        );
    }
}

#[test]
fn column_deserializes_without_cards() {
    let column: Column = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "status": "new",
        "title": "New",
    }))
    .expect("deserialize");
    assert_eq!(column.status, CardStatus::New);
    assert!(column.cards.is_empty());
}

#[test]
fn column_round_trips_with_cards() {
    let column = Column {
        id: "c3".to_owned(),
        status: CardStatus::InProgress,
        title: "In progress".to_owned(),
        cards: vec![Card {
            id: "42".to_owned(),
            title: "Fix the printer".to_owned(),
        }],
    };
    let raw = serde_json::to_string(&column).expect("serialize");
    let back: Column = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, column);
}
