pub mod swipe;

pub use swipe::{SwipeDirection, SwipeEdge};
