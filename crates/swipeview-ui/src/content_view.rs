//! The swipeable surface hosted by a swipe view.

use swipeview_foundation::SwipeDirection;
use swipeview_ui_graphics::{Point, Rect, Size};
use swipeview_ui_layout::Axis;

/// Layout-side state of the main content.
///
/// Bounds come from the host's layout pass; the translation is owned by the
/// swipe view and moves the content aside to uncover swipe items. Requests
/// of zero or less mean "unset".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentView {
    pub bounds: Rect,
    pub width_request: f32,
    pub height_request: f32,
    translation: Point,
    input_transparent: bool,
}

impl ContentView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content laid out at the origin with matching size requests.
    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            bounds: Rect::from_size(Size::new(width, height)),
            width_request: width,
            height_request: height,
            ..Self::default()
        }
    }

    pub fn translation(&self) -> Point {
        self.translation
    }

    pub fn translation_x(&self) -> f32 {
        self.translation.x
    }

    pub fn translation_y(&self) -> f32 {
        self.translation.y
    }

    /// Bounds shifted by the current translation.
    pub fn translated_bounds(&self) -> Rect {
        self.bounds.translate(self.translation.x, self.translation.y)
    }

    /// When true the host should route touches past the content to the
    /// items behind it.
    pub fn is_input_transparent(&self) -> bool {
        self.input_transparent
    }

    pub(crate) fn set_input_transparent(&mut self, transparent: bool) {
        self.input_transparent = transparent;
    }

    pub(crate) fn set_translation_along(&mut self, direction: SwipeDirection, value: f32) {
        match direction.axis() {
            Axis::Horizontal => self.translation.x = value,
            Axis::Vertical => self.translation.y = value,
        }
    }

    pub(crate) fn has_size_request(&self) -> bool {
        self.width_request > 0.0 && self.height_request > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_moves_only_the_locked_axis() {
        let mut content = ContentView::with_size(300.0, 60.0);
        content.set_translation_along(SwipeDirection::Left, -80.0);
        content.set_translation_along(SwipeDirection::Down, 20.0);
        assert_eq!(content.translation(), Point::new(-80.0, 20.0));
        assert_eq!(
            content.translated_bounds(),
            Rect::new(-80.0, 20.0, 300.0, 60.0)
        );
    }

    #[test]
    fn size_request_needs_both_dimensions() {
        let mut content = ContentView::new();
        assert!(!content.has_size_request());
        content.width_request = 100.0;
        assert!(!content.has_size_request());
        content.height_request = 40.0;
        assert!(content.has_size_request());
    }
}
