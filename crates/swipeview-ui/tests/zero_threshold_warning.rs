//! A zero threshold is reported once per swipe, not once per move.
//!
//! Installs a process-wide logger, so this file holds a single test.

use std::sync::atomic::{AtomicUsize, Ordering};
use swipeview_ui::{
    ContentView, GestureStatus, Point, SwipeEdge, SwipeItem, SwipeItems, SwipeMode, SwipeView,
};

struct WarningCounter {
    zero_threshold: AtomicUsize,
}

impl log::Log for WarningCounter {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record) {
        if record.level() == log::Level::Warn
            && record.args().to_string().contains("zero threshold")
        {
            self.zero_threshold.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

static WARNINGS: WarningCounter = WarningCounter {
    zero_threshold: AtomicUsize::new(0),
};

fn swipe_left(view: &mut SwipeView, steps: usize) {
    view.handle_touch(GestureStatus::Started, Point::new(200.0, 30.0));
    for step in 1..=steps {
        let x = 200.0 - 10.0 * step as f32;
        view.handle_touch(GestureStatus::Running, Point::new(x, 30.0));
    }
    view.handle_touch(GestureStatus::Completed, Point::new(150.0, 30.0));
}

#[test]
fn zero_threshold_warns_once_per_swipe() {
    log::set_logger(&WARNINGS).expect("logger installed once");
    log::set_max_level(log::LevelFilter::Warn);

    let mut view = SwipeView::new();
    view.set_content(Some(ContentView::with_size(300.0, 60.0))).unwrap();
    view.set_swipe_threshold(0.0).unwrap();
    view.set_items(
        SwipeEdge::Right,
        Some(
            SwipeItems::new()
                .with_mode(SwipeMode::Execute)
                .with_item(SwipeItem::new("Archive")),
        ),
    )
    .unwrap();

    swipe_left(&mut view, 5);
    assert_eq!(WARNINGS.zero_threshold.load(Ordering::SeqCst), 1);

    swipe_left(&mut view, 5);
    assert_eq!(WARNINGS.zero_threshold.load(Ordering::SeqCst), 2);
}
