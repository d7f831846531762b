//! Robot-style gesture driver for swipe views
//!
//! The robot feeds pointer events through a [`PointerDispatcher`] the same
//! way a platform integration would, so tests exercise event consumption
//! as well as the gesture state machine.
//!
//! # Example
//!
//! ```
//! use swipeview_testing::{SwipeRobot, SwipeTestRule};
//! use swipeview_ui::{SwipeEdge, SwipeItem, SwipeItems};
//!
//! let rule = SwipeTestRule::new(300.0, 60.0)
//!     .with_items(SwipeEdge::Right, SwipeItems::new().with_item(SwipeItem::new("Delete")));
//! let mut robot = SwipeRobot::new(rule);
//!
//! robot.drag(250.0, 30.0, 100.0, 30.0);
//! assert!(robot.view().is_open());
//! ```

use crate::testing::SwipeTestRule;
use swipeview_foundation::{PointerDispatcher, PointerEvent};
use swipeview_ui::SwipeView;
use swipeview_ui_graphics::Point;

/// Number of intermediate moves a drag is split into.
pub const DEFAULT_DRAG_STEPS: usize = 10;

pub struct SwipeRobot {
    rule: SwipeTestRule,
    dispatcher: PointerDispatcher,
    cursor: Point,
    drag_steps: usize,
}

impl SwipeRobot {
    pub fn new(rule: SwipeTestRule) -> Self {
        Self {
            rule,
            dispatcher: PointerDispatcher::new(),
            cursor: Point::ZERO,
            drag_steps: DEFAULT_DRAG_STEPS,
        }
    }

    /// Split subsequent drags into `steps` moves (at least one).
    pub fn with_drag_steps(mut self, steps: usize) -> Self {
        self.drag_steps = steps.max(1);
        self
    }

    pub fn rule(&self) -> &SwipeTestRule {
        &self.rule
    }

    pub fn rule_mut(&mut self) -> &mut SwipeTestRule {
        &mut self.rule
    }

    pub fn view(&self) -> &SwipeView {
        self.rule.view()
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Dispatch one event and report whether the swipe view consumed it.
    fn dispatch(&mut self, event: PointerEvent) -> bool {
        self.dispatcher.push(event);
        let view = self.rule.view_mut();
        let owned = self
            .dispatcher
            .drain(|event| !view.handle_pointer_event(event));
        owned > 0
    }

    /// Put a finger down at the given coordinates.
    ///
    /// Returns true if the swipe view took ownership of the touch.
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        self.cursor = Point::new(x, y);
        self.dispatch(PointerEvent::down(x, y))
    }

    /// Move the pressed finger to the given coordinates.
    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.cursor = Point::new(x, y);
        self.dispatch(PointerEvent::moved(x, y))
    }

    /// Lift the finger at the current cursor position.
    pub fn release(&mut self) -> bool {
        let Point { x, y } = self.cursor;
        self.dispatch(PointerEvent::up(x, y))
    }

    /// Abort the current gesture, as a platform does when a parent steals it.
    pub fn cancel(&mut self) -> bool {
        self.dispatch(PointerEvent::cancel())
    }

    /// Press and release without moving.
    pub fn tap(&mut self, x: f32, y: f32) -> bool {
        let owned = self.press(x, y);
        self.release();
        owned
    }

    /// Perform a drag from one point to another.
    ///
    /// This simulates a pointer down, a sequence of moves, and an up.
    pub fn drag(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) {
        self.press(from_x, from_y);
        self.drag_to(from_x, from_y, to_x, to_y);
        self.release();
    }

    /// Like [`drag`](Self::drag) but leaves the finger down at the end.
    pub fn drag_and_hold(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) {
        self.press(from_x, from_y);
        self.drag_to(from_x, from_y, to_x, to_y);
    }

    fn drag_to(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) {
        let steps = self.drag_steps;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from_x + (to_x - from_x) * t;
            let y = from_y + (to_y - from_y) * t;
            self.move_to(x, y);
        }
    }
}
