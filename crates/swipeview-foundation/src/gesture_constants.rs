//! Shared gesture constants for swipe handling.
//!
//! These values are in logical pixels unless stated otherwise. They are the
//! defaults of `SwipeViewSpec` and can be overridden per view.

/// Default swipe threshold in logical pixels.
///
/// Used as the full travel distance for Execute-mode horizontal swipes and as
/// the upper bound for vertical swipes (which are further capped by the
/// content's height request).
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 250.0;

/// Width given to a Reveal-mode swipe item that does not request its own.
pub const SWIPE_ITEM_WIDTH: f32 = 80.0;

/// Fraction of the threshold the offset must reach on release to commit.
///
/// Compared with `>=`, so an offset of exactly this fraction commits.
pub const SWIPE_COMMIT_FRACTION: f64 = 0.6;

/// Offsets at or below this magnitude count as "back at rest" while moving.
pub const SWIPE_REST_EPSILON: f32 = f32::EPSILON;
