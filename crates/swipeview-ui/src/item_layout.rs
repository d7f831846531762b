//! Item row construction and touch hit-testing.
//!
//! The row is a horizontal stack with no spacing. Items that do not request
//! a size get one derived from the container:
//!
//! - height: the content's height request;
//! - width, Left/Right swipes: the configured item width in Reveal mode, or
//!   the swipe threshold split evenly between items in Execute mode;
//! - width, Up/Down swipes: the content's width request split evenly,
//!   whatever the mode.

use crate::content_view::ContentView;
use crate::layout_surface::ItemRow;
use crate::swipe_view::SwipeViewSpec;
use smallvec::SmallVec;
use swipeview_foundation::{point_in_rect, SwipeDirection, SwipeItem, SwipeItems, SwipeMode};
use swipeview_ui_graphics::{Point, Size};
use swipeview_ui_layout::{HorizontalAlignment, StackLayout};

/// Where the row sits for a swipe in `direction`.
///
/// The row stays next to the edge the content is pulled away from.
pub fn row_alignment(direction: SwipeDirection) -> HorizontalAlignment {
    match direction {
        SwipeDirection::Left | SwipeDirection::Up => HorizontalAlignment::End,
        SwipeDirection::Right | SwipeDirection::Down => HorizontalAlignment::Start,
    }
}

fn default_item_width(
    direction: SwipeDirection,
    items: &SwipeItems,
    content: &ContentView,
    spec: &SwipeViewSpec,
) -> f32 {
    let count = items.len();
    if count == 0 {
        return 0.0;
    }

    if !direction.is_horizontal() {
        return content.width_request / count as f32;
    }

    match items.mode() {
        SwipeMode::Reveal => spec.swipe_item_width,
        SwipeMode::Execute => spec.swipe_threshold / count as f32,
    }
}

/// Sizes and positions `items` for a swipe in `direction` and describes the
/// resulting row.
pub fn build_item_row(
    direction: SwipeDirection,
    items: &mut SwipeItems,
    content: &ContentView,
    spec: &SwipeViewSpec,
) -> ItemRow {
    let default_width = default_item_width(direction, items, content, spec);
    for item in items.iter_mut() {
        if item.height_request <= 0.0 {
            item.height_request = content.height_request;
        }
        if item.width_request <= 0.0 {
            item.width_request = default_width;
        }
    }

    let sizes: SmallVec<[Size; 4]> = items.iter().map(SwipeItem::requested_size).collect();
    let alignment = row_alignment(direction);
    let placement = StackLayout::new()
        .horizontal_alignment(alignment)
        .place(content.bounds.size(), &sizes);

    for (item, position) in items.iter_mut().zip(placement.child_positions) {
        item.place(position);
    }

    ItemRow {
        edge: direction.revealed_edge(),
        alignment,
        frame: placement.frame,
        item_count: items.len(),
    }
}

/// Index of the first item, in collection order, whose bounds strictly
/// contain `point`.
///
/// Item positions are relative to the row. A row uncovered by a Left swipe
/// grows leftward from the trailing edge, so its items are tested shifted
/// right by the total width of the collection.
pub fn hit_test_items(direction: SwipeDirection, items: &SwipeItems, point: Point) -> Option<usize> {
    let shift = if direction == SwipeDirection::Left {
        items.total_width()
    } else {
        0.0
    };

    items.iter().position(|item| {
        point_in_rect(
            item.x() + shift,
            item.y(),
            item.width(),
            item.height(),
            point.x,
            point.y,
        )
    })
}
