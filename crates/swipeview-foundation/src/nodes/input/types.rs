use swipeview_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

/// Gesture status as reported by a platform pan/touch recogniser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureStatus {
    Started,
    Running,
    Completed,
    Canceled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl From<PointerEventKind> for GestureStatus {
    fn from(kind: PointerEventKind) -> Self {
        match kind {
            PointerEventKind::Down => GestureStatus::Started,
            PointerEventKind::Move => GestureStatus::Running,
            PointerEventKind::Up => GestureStatus::Completed,
            PointerEventKind::Cancel => GestureStatus::Canceled,
        }
    }
}

/// Pointer event with consumption tracking.
///
/// A swipe view consumes the events of a gesture it owns so that handlers
/// further down the chain (e.g. a tap on the content) do not also react.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub status: GestureStatus,
    pub position: Point,
    /// Shared via Rc<Cell> so consumption can be tracked across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            status: kind.into(),
            position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    pub fn cancel() -> Self {
        Self::new(PointerEventKind::Cancel, Point::ZERO)
    }

    /// Mark this event as consumed, preventing other handlers from processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    /// Check if this event has been consumed by another handler.
    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
