use super::*;

/// Stand-in for a browser element handle: no `Default`, like
/// `web_sys::HtmlElement`.
struct OpaqueHandle;

#[test]
fn idle_session_needs_no_default_subject() {
    let session: DragSession<OpaqueHandle> = DragSession::default();
    assert!(!session.is_active());
}

#[test]
fn session_starts_idle() {
    let session: DragSession<String> = DragSession::default();
    assert!(!session.is_active());
    assert_eq!(session.subject(), None);
}

#[test]
fn begin_records_the_subject() {
    let mut session = DragSession::default();
    session.begin("card-1".to_owned());
    assert!(session.is_active());
    assert_eq!(session.subject(), Some(&"card-1".to_owned()));
}

#[test]
fn end_clears_and_returns_the_subject() {
    let mut session = DragSession::default();
    session.begin("card-1".to_owned());
    assert_eq!(session.end(), Some("card-1".to_owned()));
    assert!(!session.is_active());
    // Ending an idle session is harmless; dragend fires unconditionally.
    assert_eq!(session.end(), None);
}

#[test]
fn begin_replaces_a_stale_subject() {
    let mut session = DragSession::default();
    session.begin("card-1".to_owned());
    session.begin("card-2".to_owned());
    assert_eq!(session.end(), Some("card-2".to_owned()));
}

#[test]
fn move_intent_requires_every_attribute() {
    assert_eq!(move_intent(None, Some("c3".into()), Some("new".into())), None);
    assert_eq!(move_intent(Some("42".into()), None, Some("new".into())), None);
    assert_eq!(move_intent(Some("42".into()), Some("c3".into()), None), None);
}

#[test]
fn move_intent_builds_the_drop_payload() {
    let intent = move_intent(
        Some("42".into()),
        Some("c3".into()),
        Some("in_progress".into()),
    )
    .expect("complete attributes");
    assert_eq!(intent.card_id, "42");
    assert_eq!(intent.column_id, "c3");
    assert_eq!(intent.new_status, "in_progress");
    assert_eq!(intent.position, 0);
}
