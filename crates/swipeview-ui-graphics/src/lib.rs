//! Pure geometry for SwipeView
//!
//! This crate contains the point, size, and rectangle primitives shared by
//! the layout, foundation, and container crates.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
