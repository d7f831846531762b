use std::cell::RefCell;
use std::rc::Rc;
use swipeview_foundation::{PointerDispatcher, PointerEvent};
use swipeview_ui::{
    ContentView, RelayCommand, SwipeBehaviorOnInvoked, SwipeItem, SwipeItems, SwipeMode,
    SwipeView,
};

type Log = Rc<RefCell<Vec<String>>>;

fn action(label: &str, invoked: &Log) -> SwipeItem {
    let invoked = Rc::clone(invoked);
    let name = label.to_string();
    SwipeItem::new(label).with_command(Rc::new(RelayCommand::new(move |_| {
        invoked.borrow_mut().push(name.clone());
    })))
}

fn build_row(invoked: &Log) -> anyhow::Result<SwipeView> {
    let mut view = SwipeView::new();
    view.set_content(Some(ContentView::with_size(360.0, 72.0)))?;

    view.set_left_items(Some(
        SwipeItems::new()
            .with_item(action("Pin", invoked))
            .with_item(action("Unread", invoked))
            .with_behavior_on_invoked(SwipeBehaviorOnInvoked::RemainOpen),
    ))?;
    view.set_right_items(Some(
        SwipeItems::new()
            .with_mode(SwipeMode::Execute)
            .with_item(action("Archive", invoked)),
    ))?;

    view.on_swipe_started(|event| log::info!("swipe started: {:?}", event.direction));
    view.on_swipe_ended(|event| log::info!("swipe ended: {:?}", event.direction));
    Ok(view)
}

fn drag(dispatcher: &mut PointerDispatcher, from: (f32, f32), to: (f32, f32), steps: usize) {
    dispatcher.push(PointerEvent::down(from.0, from.1));
    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        dispatcher.push(PointerEvent::moved(
            from.0 + (to.0 - from.0) * t,
            from.1 + (to.1 - from.1) * t,
        ));
    }
    dispatcher.push(PointerEvent::up(to.0, to.1));
}

fn tap(dispatcher: &mut PointerDispatcher, x: f32, y: f32) {
    dispatcher.push(PointerEvent::down(x, y));
    dispatcher.push(PointerEvent::up(x, y));
}

fn run(view: &mut SwipeView, dispatcher: &mut PointerDispatcher, label: &str) {
    let owned = dispatcher.drain(|event| !view.handle_pointer_event(event));
    let translation = view
        .content()
        .map(ContentView::translation)
        .unwrap_or_default();
    println!(
        "{label:<28} owned {owned:>2} events, state {:?}, translation ({}, {})",
        view.state(),
        translation.x,
        translation.y
    );
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== SwipeView Demo ===");
    println!("Replays scripted gestures against a single list row:");
    println!("  - swipe right to reveal Pin / Unread (stays open on tap)");
    println!("  - swipe left past the threshold to Archive");
    println!("  - tap the content to close an open row");
    println!();

    let invoked: Log = Rc::new(RefCell::new(Vec::new()));
    let mut view = build_row(&invoked)?;
    let mut dispatcher = PointerDispatcher::new();

    drag(&mut dispatcher, (20.0, 36.0), (200.0, 36.0), 12);
    run(&mut view, &mut dispatcher, "reveal left items");

    tap(&mut dispatcher, 40.0, 36.0);
    run(&mut view, &mut dispatcher, "tap Pin");

    tap(&mut dispatcher, 250.0, 36.0);
    run(&mut view, &mut dispatcher, "tap content to close");

    drag(&mut dispatcher, (340.0, 36.0), (240.0, 36.0), 8);
    run(&mut view, &mut dispatcher, "short swipe left");

    drag(&mut dispatcher, (340.0, 36.0), (20.0, 36.0), 16);
    run(&mut view, &mut dispatcher, "long swipe left");

    println!();
    println!("Invoked commands: {:?}", invoked.borrow());
    Ok(())
}
