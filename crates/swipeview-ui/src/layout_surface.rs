//! Ordered child list of a swipe view.
//!
//! Children are kept in paint order: the first child is drawn first (at the
//! bottom) and the last child is on top and hit-tested first. The surface
//! holds the content plus at most one item row, which sits behind the
//! content while the content is raised.

use swipeview_foundation::SwipeEdge;
use swipeview_ui_graphics::Rect;
use swipeview_ui_layout::HorizontalAlignment;

/// The strip of swipe items for the edge currently being uncovered.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemRow {
    pub edge: SwipeEdge,
    pub alignment: HorizontalAlignment,
    /// Frame of the row in the swipe view's coordinates.
    pub frame: Rect,
    pub item_count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceChild {
    Content,
    ItemRow(ItemRow),
}

impl SurfaceChild {
    pub fn is_content(&self) -> bool {
        matches!(self, SurfaceChild::Content)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutSurface {
    children: Vec<SurfaceChild>,
}

impl LayoutSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self) -> &[SurfaceChild] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn add(&mut self, child: SurfaceChild) {
        self.children.push(child);
    }

    /// Inserts `child` at `index`, clamped to the end of the list.
    pub fn insert(&mut self, index: usize, child: SurfaceChild) {
        let index = index.min(self.children.len());
        self.children.insert(index, child);
    }

    pub fn remove(&mut self, index: usize) -> Option<SurfaceChild> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    pub fn has_content(&self) -> bool {
        self.children.iter().any(SurfaceChild::is_content)
    }

    /// Adds the content entry if it is not already present.
    pub fn ensure_content(&mut self) {
        if !self.has_content() {
            self.add(SurfaceChild::Content);
        }
    }

    /// Moves the content to the top of the paint order.
    pub fn raise_content(&mut self) {
        if let Some(index) = self.children.iter().position(SurfaceChild::is_content) {
            let content = self.children.remove(index);
            self.children.push(content);
        }
    }

    pub fn item_row(&self) -> Option<&ItemRow> {
        self.children.iter().find_map(|child| match child {
            SurfaceChild::ItemRow(row) => Some(row),
            SurfaceChild::Content => None,
        })
    }

    pub fn has_item_row(&self) -> bool {
        self.item_row().is_some()
    }

    /// Removes every child except the content and returns how many were
    /// removed.
    pub fn remove_all_except_content(&mut self) -> usize {
        let before = self.children.len();
        self.children.retain(SurfaceChild::is_content);
        before - self.children.len()
    }
}
