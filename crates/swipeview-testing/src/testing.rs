use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swipeview_foundation::Command;
use swipeview_ui::{
    ContentView, SwipeEdge, SwipeEndedEvent, SwipeItems, SwipeStartedEvent, SwipeView,
    SwipeViewError, SwipeViewSpec,
};

/// Headless harness around a single [`SwipeView`].
///
/// `SwipeTestRule` installs content of a fixed size and records every
/// started/ended event so tests can assert on the event stream without
/// wiring their own observers.
pub struct SwipeTestRule {
    view: SwipeView,
    started: Rc<RefCell<Vec<SwipeStartedEvent>>>,
    ended: Rc<RefCell<Vec<SwipeEndedEvent>>>,
}

impl SwipeTestRule {
    /// Create a rule whose content is `width` × `height` at the origin.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_spec(width, height, SwipeViewSpec::default())
    }

    pub fn with_spec(width: f32, height: f32, spec: SwipeViewSpec) -> Self {
        let mut view = SwipeView::with_spec(spec);
        // A fresh view has no gesture in flight, so installing content
        // cannot fail.
        let _ = view.set_content(Some(ContentView::with_size(width, height)));

        let started = Rc::new(RefCell::new(Vec::new()));
        let ended = Rc::new(RefCell::new(Vec::new()));
        {
            let started = Rc::clone(&started);
            view.on_swipe_started(move |event| started.borrow_mut().push(*event));
        }
        {
            let ended = Rc::clone(&ended);
            view.on_swipe_ended(move |event| ended.borrow_mut().push(*event));
        }

        Self {
            view,
            started,
            ended,
        }
    }

    /// Attach `items` to `edge`, builder style.
    pub fn with_items(mut self, edge: SwipeEdge, items: SwipeItems) -> Self {
        let _ = self.view.set_items(edge, Some(items));
        self
    }

    pub fn set_items(
        &mut self,
        edge: SwipeEdge,
        items: Option<SwipeItems>,
    ) -> Result<(), SwipeViewError> {
        self.view.set_items(edge, items)
    }

    pub fn view(&self) -> &SwipeView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut SwipeView {
        &mut self.view
    }

    /// Events fired on the first move of each gesture, oldest first.
    pub fn started_events(&self) -> Vec<SwipeStartedEvent> {
        self.started.borrow().clone()
    }

    /// Events fired on each touch-up after swiping, oldest first.
    pub fn ended_events(&self) -> Vec<SwipeEndedEvent> {
        self.ended.borrow().clone()
    }

    pub fn clear_events(&mut self) {
        self.started.borrow_mut().clear();
        self.ended.borrow_mut().clear();
    }
}

/// Command that counts its executions.
///
/// Clones share the same counters, so a test can hand one clone to a swipe
/// item and keep another to assert on.
#[derive(Clone, Debug)]
pub struct RecordingCommand {
    executions: Rc<Cell<u32>>,
    enabled: Rc<Cell<bool>>,
}

impl Default for RecordingCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingCommand {
    pub fn new() -> Self {
        Self {
            executions: Rc::new(Cell::new(0)),
            enabled: Rc::new(Cell::new(true)),
        }
    }

    /// A command whose `can_execute` reports false until enabled.
    pub fn disabled() -> Self {
        let command = Self::new();
        command.set_enabled(false);
        command
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub fn executions(&self) -> u32 {
        self.executions.get()
    }

    /// Shared handle suitable for [`SwipeItem::with_command`](swipeview_ui::SwipeItem::with_command).
    pub fn as_command(&self) -> Rc<dyn Command> {
        Rc::new(self.clone())
    }
}

impl Command for RecordingCommand {
    fn can_execute(&self, _parameter: Option<&dyn Any>) -> bool {
        self.enabled.get()
    }

    fn execute(&self, _parameter: Option<&dyn Any>) {
        self.executions.set(self.executions.get() + 1);
    }
}
