//! Offset and threshold math for a swipe in a locked direction.
//!
//! The threshold is how far the content may travel for a direction. It
//! depends on the collection being uncovered:
//!
//! - Reveal, horizontal: the sum of the items' width requests.
//! - Execute, horizontal: the configured swipe threshold.
//! - Either mode, vertical: the configured swipe threshold, capped by the
//!   content's height request.
//!
//! A missing collection yields a threshold of zero.

use crate::gesture_constants::{DEFAULT_SWIPE_THRESHOLD, SWIPE_COMMIT_FRACTION};
use crate::nodes::input::gestures::swipe::SwipeDirection;
use crate::swipe_items::{SwipeItems, SwipeMode};
use swipeview_ui_graphics::Point;

/// Inputs to the threshold computation that come from the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeGeometry {
    pub swipe_threshold: f32,
    pub content_height_request: f32,
}

impl Default for SwipeGeometry {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            content_height_request: 0.0,
        }
    }
}

impl SwipeGeometry {
    pub fn new(swipe_threshold: f32, content_height_request: f32) -> Self {
        Self {
            swipe_threshold,
            content_height_request,
        }
    }

    /// Maximum travel for `direction` given the collection it uncovers.
    pub fn threshold(&self, direction: SwipeDirection, items: Option<&SwipeItems>) -> f32 {
        let Some(items) = items else {
            return 0.0;
        };

        if !direction.is_horizontal() {
            return self.vertical_threshold();
        }

        match items.mode() {
            SwipeMode::Reveal => items.total_width_request(),
            SwipeMode::Execute => self.swipe_threshold,
        }
    }

    fn vertical_threshold(&self) -> f32 {
        if self.swipe_threshold > self.content_height_request {
            self.content_height_request
        } else {
            self.swipe_threshold
        }
    }

    /// Offset along the locked direction's axis.
    pub fn raw_offset(initial: Point, current: Point, direction: SwipeDirection) -> f32 {
        if direction.is_horizontal() {
            current.x - initial.x
        } else {
            current.y - initial.y
        }
    }

    /// Restricts `offset` to the sign `direction` allows and caps its
    /// magnitude at `threshold`.
    pub fn clamp_offset(direction: SwipeDirection, offset: f32, threshold: f32) -> f32 {
        let offset = if direction.is_negative() {
            offset.min(0.0)
        } else {
            offset.max(0.0)
        };

        if offset.abs() > threshold {
            if direction.is_negative() {
                -threshold
            } else {
                threshold
            }
        } else {
            offset
        }
    }

    /// Fully open translation for `direction`.
    pub fn open_offset(direction: SwipeDirection, threshold: f32) -> f32 {
        if direction.is_negative() {
            -threshold
        } else {
            threshold
        }
    }

    /// Whether releasing at `offset` commits, using the default fraction.
    pub fn reaches_commit(offset: f32, threshold: f32) -> bool {
        Self::reaches_commit_fraction(offset, threshold, SWIPE_COMMIT_FRACTION)
    }

    /// Whether `|offset| >= fraction × threshold`.
    ///
    /// Evaluated in `f64` so that an offset of exactly the fraction commits
    /// for thresholds such as 80 or 250.
    pub fn reaches_commit_fraction(offset: f32, threshold: f32, fraction: f64) -> bool {
        f64::from(offset.abs()) >= fraction * f64::from(threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swipe_items::SwipeItem;

    fn reveal_items(widths: &[f32]) -> SwipeItems {
        widths
            .iter()
            .map(|w| SwipeItem::new("item").with_width_request(*w))
            .collect()
    }

    #[test]
    fn missing_collection_has_zero_threshold() {
        let geometry = SwipeGeometry::default();
        assert_eq!(geometry.threshold(SwipeDirection::Left, None), 0.0);
        assert_eq!(geometry.threshold(SwipeDirection::Down, None), 0.0);
    }

    #[test]
    fn reveal_horizontal_threshold_sums_width_requests() {
        let geometry = SwipeGeometry::new(250.0, 60.0);
        let items = reveal_items(&[40.0, 40.0]);
        assert_eq!(geometry.threshold(SwipeDirection::Right, Some(&items)), 80.0);
    }

    #[test]
    fn execute_horizontal_threshold_is_configured_value() {
        let geometry = SwipeGeometry::new(250.0, 60.0);
        let items = reveal_items(&[40.0]).with_mode(SwipeMode::Execute);
        assert_eq!(geometry.threshold(SwipeDirection::Left, Some(&items)), 250.0);
    }

    #[test]
    fn vertical_threshold_is_capped_by_height_request_in_both_modes() {
        let geometry = SwipeGeometry::new(250.0, 60.0);
        let reveal = reveal_items(&[40.0]);
        let execute = reveal_items(&[40.0]).with_mode(SwipeMode::Execute);
        assert_eq!(geometry.threshold(SwipeDirection::Up, Some(&reveal)), 60.0);
        assert_eq!(geometry.threshold(SwipeDirection::Down, Some(&execute)), 60.0);

        let tall = SwipeGeometry::new(100.0, 400.0);
        assert_eq!(tall.threshold(SwipeDirection::Down, Some(&reveal)), 100.0);
    }

    #[test]
    fn raw_offset_follows_locked_axis() {
        let initial = Point::new(10.0, 20.0);
        let current = Point::new(-5.0, 70.0);
        assert_eq!(
            SwipeGeometry::raw_offset(initial, current, SwipeDirection::Left),
            -15.0
        );
        assert_eq!(
            SwipeGeometry::raw_offset(initial, current, SwipeDirection::Right),
            -15.0
        );
        assert_eq!(
            SwipeGeometry::raw_offset(initial, current, SwipeDirection::Down),
            50.0
        );
    }

    #[test]
    fn clamp_rejects_wrong_sign_and_caps_magnitude() {
        assert_eq!(SwipeGeometry::clamp_offset(SwipeDirection::Left, 30.0, 80.0), 0.0);
        assert_eq!(SwipeGeometry::clamp_offset(SwipeDirection::Left, -30.0, 80.0), -30.0);
        assert_eq!(SwipeGeometry::clamp_offset(SwipeDirection::Left, -100.0, 80.0), -80.0);
        assert_eq!(SwipeGeometry::clamp_offset(SwipeDirection::Right, -30.0, 80.0), 0.0);
        assert_eq!(SwipeGeometry::clamp_offset(SwipeDirection::Right, 100.0, 80.0), 80.0);
        assert_eq!(SwipeGeometry::clamp_offset(SwipeDirection::Up, -100.0, 60.0), -60.0);
        assert_eq!(SwipeGeometry::clamp_offset(SwipeDirection::Down, 100.0, 60.0), 60.0);
    }

    #[test]
    fn clamp_is_monotonic_and_bounded() {
        let threshold = 80.0;
        let mut previous_left = f32::NEG_INFINITY;
        let mut previous_left_magnitude = f32::INFINITY;
        let mut previous_right = f32::NEG_INFINITY;
        for step in -400..=400 {
            let offset = step as f32 * 0.5;
            let left = SwipeGeometry::clamp_offset(SwipeDirection::Left, offset, threshold);
            let right = SwipeGeometry::clamp_offset(SwipeDirection::Right, offset, threshold);

            assert!(left <= 0.0 && left.abs() <= threshold);
            assert!(right >= 0.0 && right.abs() <= threshold);
            assert!(left >= previous_left);
            assert!(left.abs() <= previous_left_magnitude);
            assert!(right >= previous_right);
            previous_left = left;
            previous_left_magnitude = left.abs();
            previous_right = right;
        }
    }

    #[test]
    fn commit_boundary_is_inclusive() {
        assert!(SwipeGeometry::reaches_commit(48.0, 80.0));
        assert!(SwipeGeometry::reaches_commit(-48.0, 80.0));
        assert!(!SwipeGeometry::reaches_commit(47.999, 80.0));
        assert!(SwipeGeometry::reaches_commit(150.0, 250.0));
        assert!(!SwipeGeometry::reaches_commit(149.99, 250.0));
        assert!(SwipeGeometry::reaches_commit(60.0, 100.0));
    }

    #[test]
    fn open_offset_points_away_from_revealed_edge() {
        assert_eq!(SwipeGeometry::open_offset(SwipeDirection::Left, 80.0), -80.0);
        assert_eq!(SwipeGeometry::open_offset(SwipeDirection::Down, 60.0), 60.0);
    }
}
