//! Swipe items and the per-edge collections that hold them.

use crate::command::{Command, CommandParameter};
use smallvec::SmallVec;
use std::fmt;
use std::rc::Rc;
use swipeview_ui_graphics::{Point, Rect, Size};

/// How a collection reacts once the swipe crosses its commit threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipeMode {
    /// Items are uncovered; the content stays translated aside until closed.
    #[default]
    Reveal,
    /// Items fire their commands immediately on commit.
    Execute,
}

/// What happens to an open swipe after one of its items is invoked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipeBehaviorOnInvoked {
    #[default]
    Close,
    RemainOpen,
}

type InvokedHandler = Box<dyn Fn(&SwipeItem)>;

/// A single action shown behind the content.
///
/// The width and height requests are what the item asks for; the bounds are
/// assigned by the item row when it is laid out and are relative to the
/// row's origin.
pub struct SwipeItem {
    text: String,
    icon: Option<String>,
    command: Option<Rc<dyn Command>>,
    command_parameter: Option<CommandParameter>,
    pub width_request: f32,
    pub height_request: f32,
    bounds: Rect,
    invoked_handlers: Vec<InvokedHandler>,
}

impl SwipeItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: None,
            command: None,
            command_parameter: None,
            width_request: 0.0,
            height_request: 0.0,
            bounds: Rect::default(),
            invoked_handlers: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_command(mut self, command: Rc<dyn Command>) -> Self {
        self.command = Some(command);
        self
    }

    pub fn with_command_parameter(mut self, parameter: CommandParameter) -> Self {
        self.command_parameter = Some(parameter);
        self
    }

    pub fn with_width_request(mut self, width: f32) -> Self {
        self.width_request = width;
        self
    }

    pub fn with_height_request(mut self, height: f32) -> Self {
        self.height_request = height;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn command(&self) -> Option<&Rc<dyn Command>> {
        self.command.as_ref()
    }

    pub fn command_parameter(&self) -> Option<&CommandParameter> {
        self.command_parameter.as_ref()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn x(&self) -> f32 {
        self.bounds.x
    }

    pub fn y(&self) -> f32 {
        self.bounds.y
    }

    pub fn width(&self) -> f32 {
        self.bounds.width
    }

    pub fn height(&self) -> f32 {
        self.bounds.height
    }

    /// Size the item will be laid out with.
    pub fn requested_size(&self) -> Size {
        Size::new(self.width_request, self.height_request)
    }

    pub fn place(&mut self, position: Point) {
        self.bounds = Rect::from_origin_size(position, self.requested_size());
    }

    pub fn clear_bounds(&mut self) {
        self.bounds = Rect::default();
    }

    /// Registers a callback fired every time this item is invoked.
    pub fn on_invoked<F>(&mut self, handler: F)
    where
        F: Fn(&SwipeItem) + 'static,
    {
        self.invoked_handlers.push(Box::new(handler));
    }

    /// Runs the bound command when it can execute, then notifies observers.
    ///
    /// Observers are notified even when there is no command or it refused
    /// to run.
    pub fn invoke(&self) {
        if let Some(command) = &self.command {
            let parameter = self.command_parameter.as_deref();
            if command.can_execute(parameter) {
                command.execute(parameter);
            } else {
                log::debug!("swipe item '{}' command cannot execute", self.text);
            }
        }
        for handler in &self.invoked_handlers {
            handler(self);
        }
    }
}

impl fmt::Debug for SwipeItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeItem")
            .field("text", &self.text)
            .field("icon", &self.icon)
            .field("has_command", &self.command.is_some())
            .field("width_request", &self.width_request)
            .field("height_request", &self.height_request)
            .field("bounds", &self.bounds)
            .field("invoked_handlers", &self.invoked_handlers.len())
            .finish()
    }
}

/// Ordered collection of swipe items attached to one edge.
#[derive(Debug, Default)]
pub struct SwipeItems {
    items: SmallVec<[SwipeItem; 4]>,
    mode: SwipeMode,
    behavior_on_invoked: SwipeBehaviorOnInvoked,
}

impl SwipeItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: SwipeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_behavior_on_invoked(mut self, behavior: SwipeBehaviorOnInvoked) -> Self {
        self.behavior_on_invoked = behavior;
        self
    }

    pub fn with_item(mut self, item: SwipeItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn push(&mut self, item: SwipeItem) {
        self.items.push(item);
    }

    pub fn mode(&self) -> SwipeMode {
        self.mode
    }

    pub fn behavior_on_invoked(&self) -> SwipeBehaviorOnInvoked {
        self.behavior_on_invoked
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SwipeItem> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut SwipeItem> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SwipeItem> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, SwipeItem> {
        self.items.iter_mut()
    }

    /// Sum of the items' width requests.
    pub fn total_width_request(&self) -> f32 {
        self.items.iter().map(|item| item.width_request).sum()
    }

    /// Sum of the items' laid-out widths.
    pub fn total_width(&self) -> f32 {
        self.items.iter().map(SwipeItem::width).sum()
    }
}

impl FromIterator<SwipeItem> for SwipeItems {
    fn from_iter<I: IntoIterator<Item = SwipeItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl<'a> IntoIterator for &'a SwipeItems {
    type Item = &'a SwipeItem;
    type IntoIter = std::slice::Iter<'a, SwipeItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::RelayCommand;
    use std::cell::Cell;

    fn counting_command(counter: Rc<Cell<u32>>) -> Rc<dyn Command> {
        Rc::new(RelayCommand::new(move |_| counter.set(counter.get() + 1)))
    }

    #[test]
    fn defaults_are_reveal_and_close() {
        let items = SwipeItems::new();
        assert_eq!(items.mode(), SwipeMode::Reveal);
        assert_eq!(items.behavior_on_invoked(), SwipeBehaviorOnInvoked::Close);
        assert!(items.is_empty());
    }

    #[test]
    fn invoke_runs_command_then_notifies() {
        let runs = Rc::new(Cell::new(0));
        let notified = Rc::new(Cell::new(0));
        let mut item = SwipeItem::new("Delete").with_command(counting_command(runs.clone()));
        let seen = notified.clone();
        item.on_invoked(move |invoked| {
            assert_eq!(invoked.text(), "Delete");
            seen.set(seen.get() + 1);
        });

        item.invoke();

        assert_eq!(runs.get(), 1);
        assert_eq!(notified.get(), 1);
    }

    #[test]
    fn refused_command_still_notifies() {
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let command = RelayCommand::new(move |_| counter.set(counter.get() + 1))
            .with_can_execute(|_| false);
        let notified = Rc::new(Cell::new(false));
        let mut item = SwipeItem::new("Archive").with_command(Rc::new(command));
        let seen = notified.clone();
        item.on_invoked(move |_| seen.set(true));

        item.invoke();

        assert_eq!(runs.get(), 0);
        assert!(notified.get());
    }

    #[test]
    fn command_receives_bound_parameter() {
        let received = Rc::new(Cell::new(0_i32));
        let sink = received.clone();
        let command = RelayCommand::new(move |parameter| {
            if let Some(value) = parameter.and_then(|p| p.downcast_ref::<i32>()) {
                sink.set(*value);
            }
        });
        let item = SwipeItem::new("Flag")
            .with_command(Rc::new(command))
            .with_command_parameter(Rc::new(42_i32));

        item.invoke();

        assert_eq!(received.get(), 42);
    }

    #[test]
    fn place_uses_requested_size() {
        let mut item = SwipeItem::new("Pin")
            .with_width_request(40.0)
            .with_height_request(60.0);
        item.place(Point::new(40.0, 0.0));
        assert_eq!(item.bounds(), Rect::new(40.0, 0.0, 40.0, 60.0));

        item.clear_bounds();
        assert_eq!(item.width(), 0.0);
    }

    #[test]
    fn widths_are_summed_in_order() {
        let mut items: SwipeItems = [
            SwipeItem::new("a").with_width_request(40.0),
            SwipeItem::new("b").with_width_request(30.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(items.total_width_request(), 70.0);
        assert_eq!(items.total_width(), 0.0);

        let mut x = 0.0;
        for item in items.iter_mut() {
            item.place(Point::new(x, 0.0));
            x += item.width_request;
        }
        assert_eq!(items.total_width(), 70.0);
        let texts: Vec<&str> = items.iter().map(SwipeItem::text).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
