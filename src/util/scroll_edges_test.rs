use super::*;

#[test]
fn at_top_hides_leading_and_shows_trailing() {
    let edges = edge_visibility(0.0, 300.0, 900.0);
    assert_eq!(
        edges,
        EdgeVisibility {
            leading: false,
            trailing: true
        }
    );
}

#[test]
fn at_bottom_hides_trailing_and_shows_leading() {
    // scrollTop == scrollHeight - clientHeight
    let edges = edge_visibility(600.0, 300.0, 900.0);
    assert_eq!(
        edges,
        EdgeVisibility {
            leading: true,
            trailing: false
        }
    );
}

#[test]
fn mid_scroll_shows_both() {
    let edges = edge_visibility(300.0, 300.0, 900.0);
    assert!(edges.leading);
    assert!(edges.trailing);
}

#[test]
fn slack_band_counts_as_edge() {
    // Exactly EDGE_SLACK_PX from either edge still classifies as "at edge".
    assert!(!edge_visibility(5.0, 300.0, 900.0).leading);
    assert!(edge_visibility(5.1, 300.0, 900.0).leading);
    assert!(!edge_visibility(595.0, 300.0, 900.0).trailing);
    assert!(edge_visibility(594.9, 300.0, 900.0).trailing);
}

#[test]
fn unscrollable_content_hides_both() {
    let edges = edge_visibility(0.0, 300.0, 300.0);
    assert!(!edges.leading);
    assert!(!edges.trailing);
}

#[test]
fn initial_offset_scrolls_past_new_column() {
    // 200-wide "new" column: 200 - 60 + 32, not clamped when plenty of room.
    assert!((initial_board_offset(200.0, 1000.0) - 172.0).abs() < f64::EPSILON);
}

#[test]
fn initial_offset_clamps_to_preserve_completed_preview() {
    // maxScroll - preview caps the offset.
    assert!((initial_board_offset(200.0, 180.0) - 120.0).abs() < f64::EPSILON);
}

#[test]
fn style_values_match_indicator_contract() {
    assert_eq!(display_value(true), "flex");
    assert_eq!(display_value(false), "none");
    assert_eq!(opacity_value(true), "1");
    assert_eq!(opacity_value(false), "0");
}
