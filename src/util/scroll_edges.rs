//! Scroll-edge classification and board offset math.
//!
//! DESIGN
//! ======
//! Indicator visibility is a pure function of current scroll geometry; the
//! hooks re-read the DOM and call into here on every trigger, so nothing has
//! to be cached or invalidated. The same classification serves both axes:
//! "leading" is top/left and "trailing" is bottom/right.

#[cfg(test)]
#[path = "scroll_edges_test.rs"]
mod scroll_edges_test;

/// Tolerance applied at both edges, absorbing sub-pixel rounding jitter in
/// browser-reported scroll offsets.
pub const EDGE_SLACK_PX: f64 = 5.0;

/// Column content deliberately left visible past the viewport edge as a
/// scroll affordance.
pub const COLUMN_PREVIEW_PX: f64 = 60.0;

/// Column gap plus margin allowance used when computing the initial board
/// offset.
pub const COLUMN_GAP_PX: f64 = 32.0;

/// Whether the leading (top/left) and trailing (bottom/right) indicators
/// should be shown for one scrollable container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeVisibility {
    /// Show the "more content before" marker.
    pub leading: bool,
    /// Show the "more content after" marker.
    pub trailing: bool,
}

/// Classify a scroll position and derive indicator visibility.
///
/// `offset` is `scrollTop`/`scrollLeft`, `viewport` is the client size and
/// `content` the scroll size along the same axis. An indicator is hidden
/// exactly when the container sits within [`EDGE_SLACK_PX`] of that edge.
pub fn edge_visibility(offset: f64, viewport: f64, content: f64) -> EdgeVisibility {
    let at_leading = offset <= EDGE_SLACK_PX;
    let at_trailing = offset + viewport >= content - EDGE_SLACK_PX;
    EdgeVisibility {
        leading: !at_leading,
        trailing: !at_trailing,
    }
}

/// Initial horizontal offset for the kanban board.
///
/// Scrolls just past the "new" column so a [`COLUMN_PREVIEW_PX`] sliver of it
/// stays visible on the left, clamped so the "completed" column keeps a
/// preview sliver on the right instead of being fully scrolled past.
/// Containers too narrow to show both previews can yield a negative value;
/// it is applied as-is and the browser clamps it to zero.
pub fn initial_board_offset(new_column_width: f64, max_scroll: f64) -> f64 {
    let target = new_column_width - COLUMN_PREVIEW_PX + COLUMN_GAP_PX;
    target.min(max_scroll - COLUMN_PREVIEW_PX)
}

/// `display` value for the vertical indicators.
pub fn display_value(visible: bool) -> &'static str {
    if visible { "flex" } else { "none" }
}

/// `opacity` value for the horizontal indicators.
pub fn opacity_value(visible: bool) -> &'static str {
    if visible { "1" } else { "0" }
}
