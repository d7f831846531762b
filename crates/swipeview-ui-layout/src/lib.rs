//! Layout contracts & policies for SwipeView

mod alignment;
mod axis;
mod stack;

pub use alignment::*;
pub use axis::*;
pub use stack::*;

pub mod prelude {
    pub use crate::alignment::HorizontalAlignment;
    pub use crate::axis::Axis;
    pub use crate::stack::{StackLayout, StackPlacement};
}
