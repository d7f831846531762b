/// Axis a swipe moves the content along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left to right; translation along X.
    Horizontal,

    /// Top to bottom; translation along Y.
    Vertical,
}

impl Axis {
    /// Returns true if this is the horizontal axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }
}
