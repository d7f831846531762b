//! Swipe lifecycle events and their observer lists.

use swipeview_foundation::SwipeDirection;

/// Fired whenever a move locks a direction: the first move of a gesture, or
/// the first move after the content returned to rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeStartedEvent {
    pub direction: SwipeDirection,
    pub offset: f32,
}

/// Fired when the finger lifts while a swipe is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwipeEndedEvent {
    pub direction: SwipeDirection,
}

/// Identifies a registered handler so it can be removed later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// Observer list invoked synchronously in registration order.
pub struct EventHandlers<E> {
    next_id: u64,
    handlers: Vec<(HandlerId, Box<dyn FnMut(&E)>)>,
}

impl<E> EventHandlers<E> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            handlers: Vec::new(),
        }
    }

    pub fn add<F>(&mut self, handler: F) -> HandlerId
    where
        F: FnMut(&E) + 'static,
    {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns false when `id` was not registered.
    pub fn remove(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    pub fn emit(&mut self, event: &E) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<E> Default for EventHandlers<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn handlers_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut handlers = EventHandlers::<SwipeEndedEvent>::new();
        for tag in ["first", "second", "third"] {
            let log = log.clone();
            handlers.add(move |_| log.borrow_mut().push(tag));
        }

        handlers.emit(&SwipeEndedEvent {
            direction: SwipeDirection::Left,
        });

        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn removed_handler_is_not_called() {
        let calls = Rc::new(RefCell::new(0));
        let mut handlers = EventHandlers::<SwipeStartedEvent>::new();
        let counter = calls.clone();
        let id = handlers.add(move |_| *counter.borrow_mut() += 1);

        assert!(handlers.remove(id));
        assert!(!handlers.remove(id));
        handlers.emit(&SwipeStartedEvent {
            direction: SwipeDirection::Up,
            offset: 0.0,
        });

        assert_eq!(*calls.borrow(), 0);
        assert!(handlers.is_empty());
    }
}
