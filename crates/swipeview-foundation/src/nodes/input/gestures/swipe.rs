//! Swipe direction classification.
//!
//! A swipe is classified from the initial touch point and the move that
//! locks its direction. The angle between the two points is quantized into
//! one of four compass directions using fixed, half-open 90° sectors centred
//! on the axes:
//!
//! | angle (degrees)          | direction |
//! |--------------------------|-----------|
//! | `[45, 135)`              | Up        |
//! | `[0, 45) ∪ [315, 360)`   | Right     |
//! | `[225, 315)`             | Down      |
//! | `[135, 225)`             | Left      |
//!
//! Angles are measured in screen coordinates (y grows downward), so a drag
//! towards a smaller y is "Up". The math runs in `f64` so that sector
//! boundaries resolve identically on every platform.

use std::f64::consts::PI;
use swipeview_ui_graphics::{Point, Rect};
use swipeview_ui_layout::Axis;

/// Direction a swipe gesture travels in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    /// Classifies the swipe from `initial` to `current`.
    pub fn between(initial: Point, current: Point) -> Self {
        Self::from_angle(angle_from_points(initial, current))
    }

    /// Quantizes an angle in degrees into a direction.
    ///
    /// Angles outside `[0, 360)` fall through to `Left`.
    pub fn from_angle(angle: f64) -> Self {
        if in_range(angle, 45.0, 135.0) {
            SwipeDirection::Up
        } else if in_range(angle, 0.0, 45.0) || in_range(angle, 315.0, 360.0) {
            SwipeDirection::Right
        } else if in_range(angle, 225.0, 315.0) {
            SwipeDirection::Down
        } else {
            SwipeDirection::Left
        }
    }

    /// Axis the content moves along for this direction.
    pub fn axis(self) -> Axis {
        match self {
            SwipeDirection::Left | SwipeDirection::Right => Axis::Horizontal,
            SwipeDirection::Up | SwipeDirection::Down => Axis::Vertical,
        }
    }

    pub fn is_horizontal(self) -> bool {
        self.axis().is_horizontal()
    }

    /// True when the content translates towards negative coordinates.
    pub fn is_negative(self) -> bool {
        matches!(self, SwipeDirection::Left | SwipeDirection::Up)
    }

    /// Edge whose items this swipe uncovers.
    ///
    /// Dragging the content to the left slides it off the right-hand items,
    /// and so on for every direction.
    pub fn revealed_edge(self) -> SwipeEdge {
        match self {
            SwipeDirection::Left => SwipeEdge::Right,
            SwipeDirection::Right => SwipeEdge::Left,
            SwipeDirection::Up => SwipeEdge::Bottom,
            SwipeDirection::Down => SwipeEdge::Top,
        }
    }
}

/// Edge of the container a swipe item collection is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl SwipeEdge {
    pub const ALL: [SwipeEdge; 4] = [
        SwipeEdge::Left,
        SwipeEdge::Right,
        SwipeEdge::Top,
        SwipeEdge::Bottom,
    ];

    /// Direction of the swipe that uncovers this edge.
    pub fn revealing_direction(self) -> SwipeDirection {
        match self {
            SwipeEdge::Left => SwipeDirection::Right,
            SwipeEdge::Right => SwipeDirection::Left,
            SwipeEdge::Top => SwipeDirection::Down,
            SwipeEdge::Bottom => SwipeDirection::Up,
        }
    }
}

fn in_range(angle: f64, start: f64, end: f64) -> bool {
    angle >= start && angle < end
}

/// Angle in degrees, in `[0, 360)`, of the vector from `p1` to `p2`.
///
/// 0° points right and angles grow counter-clockwise on screen.
pub fn angle_from_points(p1: Point, p2: Point) -> f64 {
    let (x1, y1) = (f64::from(p1.x), f64::from(p1.y));
    let (x2, y2) = (f64::from(p2.x), f64::from(p2.y));
    let rad = (y1 - y2).atan2(x2 - x1) + PI;
    (rad * 180.0 / PI + 180.0) % 360.0
}

/// Strict hit test of `(px, py)` against the rectangle at `(x, y)` sized
/// `width` × `height`. Points on the boundary are outside.
pub fn point_in_rect(x: f32, y: f32, width: f32, height: f32, px: f32, py: f32) -> bool {
    Rect::new(x, y, width, height).contains_strict(px, py)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_boundaries_are_half_open() {
        assert_eq!(SwipeDirection::from_angle(0.0), SwipeDirection::Right);
        assert_eq!(SwipeDirection::from_angle(44.999), SwipeDirection::Right);
        assert_eq!(SwipeDirection::from_angle(45.0), SwipeDirection::Up);
        assert_eq!(SwipeDirection::from_angle(134.999), SwipeDirection::Up);
        assert_eq!(SwipeDirection::from_angle(135.0), SwipeDirection::Left);
        assert_eq!(SwipeDirection::from_angle(224.999), SwipeDirection::Left);
        assert_eq!(SwipeDirection::from_angle(225.0), SwipeDirection::Down);
        assert_eq!(SwipeDirection::from_angle(314.999), SwipeDirection::Down);
        assert_eq!(SwipeDirection::from_angle(315.0), SwipeDirection::Right);
        assert_eq!(SwipeDirection::from_angle(359.999), SwipeDirection::Right);
    }

    #[test]
    fn every_whole_degree_maps_to_its_sector() {
        for degree in 0..360 {
            let expected = match degree {
                45..=134 => SwipeDirection::Up,
                135..=224 => SwipeDirection::Left,
                225..=314 => SwipeDirection::Down,
                _ => SwipeDirection::Right,
            };
            assert_eq!(
                SwipeDirection::from_angle(f64::from(degree)),
                expected,
                "angle {degree}"
            );
        }
    }

    #[test]
    fn axis_aligned_drags_classify_by_screen_direction() {
        let origin = Point::new(100.0, 100.0);
        assert_eq!(
            SwipeDirection::between(origin, Point::new(150.0, 100.0)),
            SwipeDirection::Right
        );
        assert_eq!(
            SwipeDirection::between(origin, Point::new(50.0, 100.0)),
            SwipeDirection::Left
        );
        assert_eq!(
            SwipeDirection::between(origin, Point::new(100.0, 50.0)),
            SwipeDirection::Up
        );
        assert_eq!(
            SwipeDirection::between(origin, Point::new(100.0, 150.0)),
            SwipeDirection::Down
        );
    }

    #[test]
    fn shallow_diagonal_keeps_dominant_axis() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(
            SwipeDirection::between(origin, Point::new(-30.0, 10.0)),
            SwipeDirection::Left
        );
        assert_eq!(
            SwipeDirection::between(origin, Point::new(10.0, 30.0)),
            SwipeDirection::Down
        );
    }

    #[test]
    fn angle_is_normalized() {
        let origin = Point::new(0.0, 0.0);
        for target in [
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(-1.0, 0.0),
            Point::new(0.0, -1.0),
            Point::new(-3.0, -7.0),
        ] {
            let angle = angle_from_points(origin, target);
            assert!((0.0..360.0).contains(&angle), "{angle}");
        }
    }

    #[test]
    fn revealed_edge_is_opposite_the_swipe() {
        assert_eq!(SwipeDirection::Left.revealed_edge(), SwipeEdge::Right);
        assert_eq!(SwipeDirection::Right.revealed_edge(), SwipeEdge::Left);
        assert_eq!(SwipeDirection::Up.revealed_edge(), SwipeEdge::Bottom);
        assert_eq!(SwipeDirection::Down.revealed_edge(), SwipeEdge::Top);
        for edge in SwipeEdge::ALL {
            assert_eq!(edge.revealing_direction().revealed_edge(), edge);
        }
    }

    #[test]
    fn point_in_rect_excludes_boundary() {
        assert!(point_in_rect(0.0, 0.0, 40.0, 60.0, 20.0, 30.0));
        assert!(!point_in_rect(0.0, 0.0, 40.0, 60.0, 0.0, 30.0));
        assert!(!point_in_rect(0.0, 0.0, 40.0, 60.0, 40.0, 30.0));
        assert!(!point_in_rect(0.0, 0.0, 40.0, 60.0, 20.0, 60.0));
    }
}
