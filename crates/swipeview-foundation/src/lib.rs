//! Input types, swipe gesture math, commands, and swipe items for SwipeView.

pub mod command;
pub mod gesture_constants;
pub mod nodes;
pub mod swipe_geometry;
pub mod swipe_items;

pub use command::{Command, CommandParameter, RelayCommand};
pub use nodes::input::gestures::swipe::{
    angle_from_points, point_in_rect, SwipeDirection, SwipeEdge,
};
pub use nodes::input::{GestureStatus, PointerDispatcher, PointerEvent, PointerEventKind};
pub use swipe_geometry::SwipeGeometry;
pub use swipe_items::{SwipeBehaviorOnInvoked, SwipeItem, SwipeItems, SwipeMode};
pub use swipeview_ui_graphics::{Point, Rect, Size};

pub mod prelude {
    pub use crate::command::{Command, RelayCommand};
    pub use crate::nodes::input::prelude::*;
    pub use crate::swipe_items::{SwipeBehaviorOnInvoked, SwipeItem, SwipeItems, SwipeMode};
    pub use crate::{SwipeDirection, SwipeEdge};
}
