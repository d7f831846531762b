//! Horizontal stack placement.
//!
//! A stack lays its children out left to right with no gaps and positions
//! the resulting block inside the available width using a horizontal
//! alignment. Child positions are reported relative to the stack's own
//! origin, not the parent's.

use crate::HorizontalAlignment;
use swipeview_ui_graphics::{Point, Rect, Size};

/// Specification for a row of children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackLayout {
    pub horizontal_alignment: HorizontalAlignment,
}

impl StackLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Places `children` inside `available`.
    pub fn place(&self, available: Size, children: &[Size]) -> StackPlacement {
        let mut cursor = 0.0_f32;
        let mut height = 0.0_f32;
        let child_positions = children
            .iter()
            .map(|child| {
                let position = Point::new(cursor, 0.0);
                cursor += child.width;
                height = height.max(child.height);
                position
            })
            .collect();

        let size = Size::new(cursor, height);
        let origin = Point::new(self.horizontal_alignment.align(available.width, size.width), 0.0);

        StackPlacement {
            frame: Rect::from_origin_size(origin, size),
            child_positions,
        }
    }
}

impl Default for StackLayout {
    fn default() -> Self {
        Self {
            horizontal_alignment: HorizontalAlignment::Start,
        }
    }
}

/// Result of [`StackLayout::place`].
#[derive(Clone, Debug, PartialEq)]
pub struct StackPlacement {
    /// Frame of the whole stack in the parent's coordinates.
    pub frame: Rect,
    /// Position of each child relative to `frame`'s origin.
    pub child_positions: Vec<Point>,
}
