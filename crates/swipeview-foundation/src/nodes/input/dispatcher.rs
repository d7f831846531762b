//! Pointer input dispatcher plumbing.
//!
//! Platform integrations enqueue pointer events as they arrive and drain
//! them into a handler (typically a swipe view) in arrival order. Draining
//! is synchronous; a handler never observes two events at once.

use super::types::PointerEvent;
use std::collections::VecDeque;

#[derive(Default)]
pub struct PointerDispatcher {
    queue: VecDeque<PointerEvent>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drains every queued event into `handler`, returning how many events
    /// the handler reported as handled.
    pub fn drain<F>(&mut self, mut handler: F) -> usize
    where
        F: FnMut(&PointerEvent) -> bool,
    {
        let mut handled = 0;
        while let Some(event) = self.queue.pop_front() {
            if handler(&event) {
                handled += 1;
            }
        }
        handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::input::types::PointerEventKind;

    #[test]
    fn drain_preserves_arrival_order() {
        let mut dispatcher = PointerDispatcher::new();
        dispatcher.push(PointerEvent::down(0.0, 0.0));
        dispatcher.push(PointerEvent::moved(5.0, 0.0));
        dispatcher.push(PointerEvent::up(5.0, 0.0));

        let mut kinds = Vec::new();
        let handled = dispatcher.drain(|event| {
            kinds.push(event.kind);
            event.kind != PointerEventKind::Up
        });

        assert_eq!(
            kinds,
            vec![PointerEventKind::Down, PointerEventKind::Move, PointerEventKind::Up]
        );
        assert_eq!(handled, 2);
        assert!(dispatcher.is_empty());
    }
}
