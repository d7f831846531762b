//! Swipe container for SwipeView
//!
//! [`SwipeView`] owns a content view and up to four swipe item collections,
//! one per edge. Dragging the content uncovers the collection on the
//! opposite edge; releasing past the commit threshold either leaves the
//! items revealed or executes them, depending on the collection's mode.

mod content_view;
mod error;
mod events;
mod item_layout;
mod layout_surface;
mod swipe_view;

pub use content_view::ContentView;
pub use error::SwipeViewError;
pub use events::{EventHandlers, HandlerId, SwipeEndedEvent, SwipeStartedEvent};
pub use item_layout::{build_item_row, hit_test_items, row_alignment};
pub use layout_surface::{ItemRow, LayoutSurface, SurfaceChild};
pub use swipe_view::{SwipeState, SwipeView, SwipeViewSpec};

pub use swipeview_foundation::{
    Command, CommandParameter, GestureStatus, Point, PointerDispatcher, PointerEvent,
    PointerEventKind, Rect, RelayCommand, Size, SwipeBehaviorOnInvoked, SwipeDirection,
    SwipeEdge, SwipeItem, SwipeItems, SwipeMode,
};

pub mod prelude {
    pub use crate::{
        ContentView, SwipeEndedEvent, SwipeStartedEvent, SwipeState, SwipeView, SwipeViewSpec,
    };
    pub use swipeview_foundation::prelude::*;
}

#[cfg(test)]
#[path = "tests/swipe_view_tests.rs"]
mod swipe_view_tests;
