pub mod dispatcher;
pub mod gestures;
pub mod types;

pub use dispatcher::PointerDispatcher;
pub use types::{GestureStatus, PointerEvent, PointerEventKind};

pub mod prelude {
    pub use super::dispatcher::PointerDispatcher;
    pub use super::types::{GestureStatus, PointerEvent, PointerEventKind};
}
