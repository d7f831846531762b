//! Swipe container and its gesture state machine.
//!
//! A gesture runs from a touch-down to a touch-up:
//!
//! 1. **Down** records the initial point. A touch on the content closes any
//!    open row; a touch elsewhere is hit-tested against the uncovered items.
//! 2. The **first move** locks the direction and fires
//!    [`SwipeStartedEvent`]. Every move translates the content by the clamped
//!    offset along the locked axis, building the item row on demand. A move
//!    back to the starting point closes the row and ends the swipe; the next
//!    move locks a direction afresh.
//! 3. **Up** fires [`SwipeEndedEvent`] and settles: past the commit fraction
//!    the row opens (Reveal) or its items run (Execute); short of it the
//!    content snaps back.
//!
//! Invalid input never fails; it just leaves the gesture unhandled.

use crate::content_view::ContentView;
use crate::error::SwipeViewError;
use crate::events::{EventHandlers, HandlerId, SwipeEndedEvent, SwipeStartedEvent};
use crate::item_layout::{build_item_row, hit_test_items};
use crate::layout_surface::{ItemRow, LayoutSurface, SurfaceChild};
use swipeview_foundation::gesture_constants::{
    DEFAULT_SWIPE_THRESHOLD, SWIPE_COMMIT_FRACTION, SWIPE_ITEM_WIDTH, SWIPE_REST_EPSILON,
};
use swipeview_foundation::{
    GestureStatus, PointerEvent, SwipeBehaviorOnInvoked, SwipeDirection, SwipeEdge,
    SwipeGeometry, SwipeItems, SwipeMode,
};
use swipeview_ui_graphics::{Point, Rect, Size};

/// Configuration for a [`SwipeView`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeViewSpec {
    pub swipe_threshold: f32,
    pub swipe_item_width: f32,
    pub commit_fraction: f64,
}

impl SwipeViewSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn swipe_item_width(mut self, width: f32) -> Self {
        self.swipe_item_width = width;
        self
    }

    pub fn commit_fraction(mut self, fraction: f64) -> Self {
        self.commit_fraction = fraction;
        self
    }
}

impl Default for SwipeViewSpec {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            swipe_item_width: SWIPE_ITEM_WIDTH,
            commit_fraction: SWIPE_COMMIT_FRACTION,
        }
    }
}

/// Observable phase of a swipe view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeState {
    Idle,
    /// A finger is down but has not moved yet.
    TouchDown,
    Swiping(SwipeDirection),
    /// Items are revealed and the content is input-transparent.
    Open(SwipeDirection),
}

#[derive(Default)]
struct EdgeItems {
    left: Option<SwipeItems>,
    right: Option<SwipeItems>,
    top: Option<SwipeItems>,
    bottom: Option<SwipeItems>,
}

impl EdgeItems {
    fn slot(&self, edge: SwipeEdge) -> &Option<SwipeItems> {
        match edge {
            SwipeEdge::Left => &self.left,
            SwipeEdge::Right => &self.right,
            SwipeEdge::Top => &self.top,
            SwipeEdge::Bottom => &self.bottom,
        }
    }

    fn slot_mut(&mut self, edge: SwipeEdge) -> &mut Option<SwipeItems> {
        match edge {
            SwipeEdge::Left => &mut self.left,
            SwipeEdge::Right => &mut self.right,
            SwipeEdge::Top => &mut self.top,
            SwipeEdge::Bottom => &mut self.bottom,
        }
    }

    fn get(&self, edge: SwipeEdge) -> Option<&SwipeItems> {
        self.slot(edge).as_ref()
    }

    fn get_mut(&mut self, edge: SwipeEdge) -> Option<&mut SwipeItems> {
        self.slot_mut(edge).as_mut()
    }
}

/// Per-gesture tracking. The direction survives the gesture so that a tap
/// on an open row can be hit-tested against it.
#[derive(Clone, Copy, Debug, Default)]
struct GestureSession {
    is_touch_down: bool,
    is_swiping: bool,
    initial_point: Point,
    direction: Option<SwipeDirection>,
    offset: f32,
}

pub struct SwipeView {
    spec: SwipeViewSpec,
    content: Option<ContentView>,
    items: EdgeItems,
    surface: LayoutSurface,
    size_request: Size,
    session: GestureSession,
    swipe_started: EventHandlers<SwipeStartedEvent>,
    swipe_ended: EventHandlers<SwipeEndedEvent>,
}

impl Default for SwipeView {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeView {
    pub fn new() -> Self {
        Self::with_spec(SwipeViewSpec::default())
    }

    pub fn with_spec(spec: SwipeViewSpec) -> Self {
        Self {
            spec,
            content: None,
            items: EdgeItems::default(),
            surface: LayoutSurface::new(),
            size_request: Size::ZERO,
            session: GestureSession::default(),
            swipe_started: EventHandlers::new(),
            swipe_ended: EventHandlers::new(),
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    pub fn spec(&self) -> &SwipeViewSpec {
        &self.spec
    }

    pub fn swipe_threshold(&self) -> f32 {
        self.spec.swipe_threshold
    }

    pub fn set_swipe_threshold(&mut self, threshold: f32) -> Result<(), SwipeViewError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(SwipeViewError::InvalidThreshold { value: threshold });
        }
        self.spec.swipe_threshold = threshold;
        Ok(())
    }

    pub fn content(&self) -> Option<&ContentView> {
        self.content.as_ref()
    }

    /// Replaces the content.
    ///
    /// Clearing existing content is ignored and the current content stays.
    /// New content starts closed, without an item row.
    pub fn set_content(&mut self, content: Option<ContentView>) -> Result<(), SwipeViewError> {
        self.ensure_idle()?;
        let Some(content) = content else {
            if self.content.is_some() {
                log::debug!("ignoring request to clear swipe view content");
            }
            return Ok(());
        };

        self.reset_swipe();
        self.content = Some(content);
        self.surface.ensure_content();
        Ok(())
    }

    pub fn items(&self, edge: SwipeEdge) -> Option<&SwipeItems> {
        self.items.get(edge)
    }

    /// Replaces the collection on `edge`. Passing `None` removes it, which
    /// makes swipes towards that edge's revealing direction invalid.
    pub fn set_items(
        &mut self,
        edge: SwipeEdge,
        items: Option<SwipeItems>,
    ) -> Result<(), SwipeViewError> {
        self.ensure_idle()?;
        if self.surface.item_row().is_some_and(|row| row.edge == edge) {
            self.reset_swipe();
        }
        *self.items.slot_mut(edge) = items;
        Ok(())
    }

    pub fn left_items(&self) -> Option<&SwipeItems> {
        self.items(SwipeEdge::Left)
    }

    pub fn set_left_items(&mut self, items: Option<SwipeItems>) -> Result<(), SwipeViewError> {
        self.set_items(SwipeEdge::Left, items)
    }

    pub fn right_items(&self) -> Option<&SwipeItems> {
        self.items(SwipeEdge::Right)
    }

    pub fn set_right_items(&mut self, items: Option<SwipeItems>) -> Result<(), SwipeViewError> {
        self.set_items(SwipeEdge::Right, items)
    }

    pub fn top_items(&self) -> Option<&SwipeItems> {
        self.items(SwipeEdge::Top)
    }

    pub fn set_top_items(&mut self, items: Option<SwipeItems>) -> Result<(), SwipeViewError> {
        self.set_items(SwipeEdge::Top, items)
    }

    pub fn bottom_items(&self) -> Option<&SwipeItems> {
        self.items(SwipeEdge::Bottom)
    }

    pub fn set_bottom_items(&mut self, items: Option<SwipeItems>) -> Result<(), SwipeViewError> {
        self.set_items(SwipeEdge::Bottom, items)
    }

    fn ensure_idle(&self) -> Result<(), SwipeViewError> {
        if self.session.is_touch_down || self.session.is_swiping {
            Err(SwipeViewError::GestureInProgress)
        } else {
            Ok(())
        }
    }

    /// Called by the host's layout pass with the size given to the view.
    ///
    /// Content that requests both a width and a height dictates the view's
    /// own size request; otherwise the content adopts the allocated size as
    /// its request.
    pub fn on_size_allocated(&mut self, width: f32, height: f32) {
        if let Some(content) = self.content.as_mut() {
            if content.has_size_request() {
                self.size_request = Size::new(content.width_request, content.height_request);
            } else {
                content.width_request = width;
                content.height_request = height;
            }
            content.bounds = Rect::from_size(Size::new(width, height));
        }
    }

    /// Size the view asks its parent for, or zero when it has no opinion.
    pub fn size_request(&self) -> Size {
        self.size_request
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    pub fn on_swipe_started<F>(&mut self, handler: F) -> HandlerId
    where
        F: FnMut(&SwipeStartedEvent) + 'static,
    {
        self.swipe_started.add(handler)
    }

    pub fn on_swipe_ended<F>(&mut self, handler: F) -> HandlerId
    where
        F: FnMut(&SwipeEndedEvent) + 'static,
    {
        self.swipe_ended.add(handler)
    }

    pub fn remove_swipe_started_handler(&mut self, id: HandlerId) -> bool {
        self.swipe_started.remove(id)
    }

    pub fn remove_swipe_ended_handler(&mut self, id: HandlerId) -> bool {
        self.swipe_ended.remove(id)
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    pub fn layout_surface(&self) -> &LayoutSurface {
        &self.surface
    }

    pub fn item_row(&self) -> Option<&ItemRow> {
        self.surface.item_row()
    }

    pub fn is_swiping(&self) -> bool {
        self.session.is_swiping
    }

    pub fn is_touch_down(&self) -> bool {
        self.session.is_touch_down
    }

    /// Direction of the current or most recent gesture.
    pub fn swipe_direction(&self) -> Option<SwipeDirection> {
        self.session.direction
    }

    /// Raw offset of the current or most recent move, before clamping.
    pub fn swipe_offset(&self) -> f32 {
        self.session.offset
    }

    pub fn is_open(&self) -> bool {
        !self.session.is_swiping
            && self
                .content
                .as_ref()
                .is_some_and(ContentView::is_input_transparent)
    }

    pub fn state(&self) -> SwipeState {
        match self.session.direction {
            Some(direction) if self.session.is_swiping => SwipeState::Swiping(direction),
            Some(direction) if self.is_open() => SwipeState::Open(direction),
            _ if self.session.is_touch_down => SwipeState::TouchDown,
            _ => SwipeState::Idle,
        }
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    fn geometry(&self) -> SwipeGeometry {
        SwipeGeometry::new(
            self.spec.swipe_threshold,
            self.content
                .as_ref()
                .map_or(0.0, |content| content.height_request),
        )
    }

    /// Maximum travel for `direction`; zero when the uncovered edge has no
    /// items.
    pub fn threshold(&self, direction: SwipeDirection) -> f32 {
        let items = self.items.get(direction.revealed_edge());
        self.geometry().threshold(direction, items)
    }

    fn warn_if_zero_threshold(&self, direction: SwipeDirection) {
        if self.threshold(direction) <= 0.0 {
            log::warn!(
                "swipe items on {:?} edge resolve to a zero threshold",
                direction.revealed_edge()
            );
        }
    }

    /// `offset` restricted to what `direction` allows.
    pub fn clamp_offset(&self, direction: SwipeDirection, offset: f32) -> f32 {
        SwipeGeometry::clamp_offset(direction, offset, self.threshold(direction))
    }

    fn is_direction_valid(&self, direction: SwipeDirection) -> bool {
        self.items.get(direction.revealed_edge()).is_some()
    }

    // ------------------------------------------------------------------
    // Touch handling
    // ------------------------------------------------------------------

    /// Feeds one gesture sample to the view.
    ///
    /// Returns `false` while the view wants to keep receiving the gesture
    /// and `true` when the host may route it elsewhere. A cancelled gesture
    /// forgets the touch and always returns `true`.
    pub fn handle_touch(&mut self, status: GestureStatus, point: Point) -> bool {
        match status {
            GestureStatus::Started => !self.process_touch_down(point),
            GestureStatus::Running => !self.process_touch_move(point),
            GestureStatus::Completed => !self.process_touch_up(),
            GestureStatus::Canceled => {
                self.session.is_touch_down = false;
                true
            }
        }
    }

    /// Pointer-event flavour of [`handle_touch`](Self::handle_touch).
    ///
    /// Events already consumed elsewhere are ignored; events the view owns
    /// are consumed.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if event.is_consumed() {
            return true;
        }
        let result = self.handle_touch(event.status, event.position);
        if !result && event.status != GestureStatus::Canceled {
            event.consume();
        }
        result
    }

    fn process_touch_down(&mut self, point: Point) -> bool {
        if self.session.is_swiping || self.session.is_touch_down {
            return false;
        }
        let Some(content) = self.content.as_ref() else {
            return false;
        };

        if content.translated_bounds().contains_strict(point.x, point.y) {
            self.reset_swipe();
        } else {
            self.process_touch_swipe_items(point);
        }

        self.session.initial_point = point;
        self.session.is_touch_down = true;
        true
    }

    fn process_touch_swipe_items(&mut self, point: Point) {
        let Some(direction) = self.session.direction else {
            return;
        };
        let Some(items) = self.items.get(direction.revealed_edge()) else {
            return;
        };
        let Some(index) = hit_test_items(direction, items, point) else {
            return;
        };

        if let Some(item) = items.get(index) {
            log::debug!("swipe item '{}' tapped", item.text());
            item.invoke();
        }
        if items.behavior_on_invoked() != SwipeBehaviorOnInvoked::RemainOpen {
            self.reset_swipe();
        }
    }

    fn process_touch_move(&mut self, point: Point) -> bool {
        if !self.session.is_touch_down && !self.session.is_swiping {
            return false;
        }

        let (direction, newly_locked) = match self.session.direction {
            Some(direction) if self.session.is_swiping => (direction, false),
            _ => (self.begin_swipe(point), true),
        };

        if !self.is_direction_valid(direction) {
            log::trace!("swipe {direction:?} has no items to uncover");
            return false;
        }

        let offset = SwipeGeometry::raw_offset(self.session.initial_point, point, direction);
        self.session.offset = offset;
        self.ensure_item_row(direction);
        if newly_locked {
            self.warn_if_zero_threshold(direction);
        }

        if offset.abs() > SWIPE_REST_EPSILON {
            self.swipe(direction, offset);
        } else {
            log::debug!("swipe {direction:?} returned to rest, closing");
            self.reset_swipe();
        }
        true
    }

    fn begin_swipe(&mut self, point: Point) -> SwipeDirection {
        let direction = SwipeDirection::between(self.session.initial_point, point);
        log::debug!("swipe started {direction:?}");
        self.session.direction = Some(direction);
        self.session.offset = 0.0;
        self.session.is_swiping = true;
        self.swipe_started.emit(&SwipeStartedEvent {
            direction,
            offset: 0.0,
        });
        direction
    }

    fn process_touch_up(&mut self) -> bool {
        self.session.is_touch_down = false;

        if !self.session.is_swiping {
            return false;
        }
        self.session.is_swiping = false;

        let Some(direction) = self.session.direction else {
            return false;
        };
        log::debug!("swipe ended {direction:?} at {}", self.session.offset);
        self.swipe_ended.emit(&SwipeEndedEvent { direction });

        if !self.is_direction_valid(direction) {
            return false;
        }

        self.settle(direction);
        false
    }

    // ------------------------------------------------------------------
    // Offset and settle
    // ------------------------------------------------------------------

    fn swipe(&mut self, direction: SwipeDirection, offset: f32) {
        let clamped = self.clamp_offset(direction, offset);
        log::trace!("swipe {direction:?} raw {offset} clamped {clamped}");
        if let Some(content) = self.content.as_mut() {
            content.set_translation_along(direction, clamped);
        }
    }

    fn settle(&mut self, direction: SwipeDirection) {
        let threshold = self.threshold(direction);
        if SwipeGeometry::reaches_commit_fraction(
            self.session.offset,
            threshold,
            self.spec.commit_fraction,
        ) {
            self.commit(direction, threshold);
        } else {
            log::debug!("swipe {direction:?} fell short of commit, closing");
            self.reset_swipe();
        }
    }

    fn commit(&mut self, direction: SwipeDirection, threshold: f32) {
        let Some(items) = self.items.get(direction.revealed_edge()) else {
            return;
        };

        match items.mode() {
            SwipeMode::Execute => {
                log::debug!("swipe {direction:?} executing {} items", items.len());
                for item in items.iter() {
                    item.invoke();
                }
                if items.behavior_on_invoked() != SwipeBehaviorOnInvoked::RemainOpen {
                    self.reset_swipe();
                }
            }
            SwipeMode::Reveal => self.complete_swipe(direction, threshold),
        }
    }

    fn complete_swipe(&mut self, direction: SwipeDirection, threshold: f32) {
        log::debug!("swipe {direction:?} opened to {threshold}");
        if let Some(content) = self.content.as_mut() {
            content.set_translation_along(direction, SwipeGeometry::open_offset(direction, threshold));
            content.set_input_transparent(true);
        }
        self.session.is_swiping = false;
    }

    /// Closes the view: content back at rest, row disposed, swiping cleared.
    pub fn reset_swipe(&mut self) {
        if let (Some(direction), Some(content)) = (self.session.direction, self.content.as_mut()) {
            content.set_translation_along(direction, 0.0);
        }
        self.dispose_item_row();
        if let Some(content) = self.content.as_mut() {
            content.set_input_transparent(false);
        }
        self.session.is_swiping = false;
    }

    // ------------------------------------------------------------------
    // Item row
    // ------------------------------------------------------------------

    fn ensure_item_row(&mut self, direction: SwipeDirection) {
        if self.surface.has_item_row() {
            return;
        }
        let Some(content) = self.content.as_ref() else {
            return;
        };
        let Some(items) = self.items.get_mut(direction.revealed_edge()) else {
            return;
        };

        let row = build_item_row(direction, items, content, &self.spec);
        log::debug!(
            "built {:?} item row with {} items at {:?}",
            row.edge,
            row.item_count,
            row.frame
        );
        self.surface.add(SurfaceChild::ItemRow(row));
        self.surface.raise_content();
    }

    fn dispose_item_row(&mut self) {
        let Some(edge) = self.surface.item_row().map(|row| row.edge) else {
            return;
        };
        self.surface.remove_all_except_content();
        if let Some(items) = self.items.get_mut(edge) {
            for item in items.iter_mut() {
                item.clear_bounds();
            }
        }
        log::debug!("disposed {edge:?} item row");
    }
}
