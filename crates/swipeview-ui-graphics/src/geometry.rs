//! Geometric primitives: Point, Size, Rect

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Exclusive containment: points on the edges are outside.
    ///
    /// Touch hit-testing uses this form so that two adjacent rectangles never
    /// both claim a point on their shared edge.
    pub fn contains_strict(&self, x: f32, y: f32) -> bool {
        x > self.x && x < self.x + self.width && y > self.y && y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_containment_excludes_edges() {
        let rect = Rect::new(10.0, 20.0, 40.0, 30.0);
        assert!(rect.contains_strict(11.0, 21.0));
        assert!(!rect.contains_strict(10.0, 25.0));
        assert!(!rect.contains_strict(50.0, 25.0));
        assert!(!rect.contains_strict(30.0, 20.0));
        assert!(!rect.contains_strict(30.0, 50.0));
    }

    #[test]
    fn translate_keeps_size() {
        let rect = Rect::from_size(Size::new(100.0, 60.0)).translate(-80.0, 0.0);
        assert_eq!(rect.origin(), Point::new(-80.0, 0.0));
        assert_eq!(rect.size(), Size::new(100.0, 60.0));
    }

    #[test]
    fn empty_rect_contains_nothing_strictly() {
        let rect = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(!rect.contains_strict(5.0, 5.0));
    }
}
