//! Assertion utilities for robot testing
//!
//! Helpers for validating swipe view state after a scripted gesture.

use swipeview_ui::{ContentView, SwipeView};
use swipeview_ui_graphics::Rect;

/// Assert that a value is within an expected range.
///
/// Offsets go through `f32` arithmetic, so exact comparisons are brittle
/// once a drag is split into several steps.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that the content sits at the given translation.
pub fn assert_translation(view: &SwipeView, x: f32, y: f32, msg: &str) {
    let content = view
        .content()
        .unwrap_or_else(|| panic!("{}: swipe view has no content", msg));
    assert_approx_eq(content.translation_x(), x, 0.001, &format!("{} - translation x", msg));
    assert_approx_eq(content.translation_y(), y, 0.001, &format!("{} - translation y", msg));
}

/// Assert that the view is closed: content at rest, no row, touches reach
/// the content.
pub fn assert_closed(view: &SwipeView, msg: &str) {
    assert_translation(view, 0.0, 0.0, msg);
    assert!(
        view.item_row().is_none(),
        "{}: expected no item row, found {:?}",
        msg,
        view.item_row()
    );
    assert!(
        !view.content().is_some_and(ContentView::is_input_transparent),
        "{}: content is still input-transparent",
        msg
    );
}

/// Assert that a counter-style value reached an expected count.
pub fn assert_count(actual: u32, expected: u32, msg: &str) {
    assert_eq!(
        actual, expected,
        "{}: expected {} invocations, got {}",
        msg, expected, actual
    );
}
