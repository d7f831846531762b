//! Alignment utilities for positioning content

/// Alignment along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Align children to the leading edge.
    Start,
    /// Align children to the trailing edge.
    End,
}

impl HorizontalAlignment {
    /// Computes the horizontal offset for alignment.
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            HorizontalAlignment::Start => 0.0,
            HorizontalAlignment::End => (available - child).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_alignment_hugs_trailing_edge() {
        assert_eq!(HorizontalAlignment::End.align(300.0, 80.0), 220.0);
        assert_eq!(HorizontalAlignment::Start.align(300.0, 80.0), 0.0);
    }

    #[test]
    fn oversized_child_is_pinned_to_origin() {
        assert_eq!(HorizontalAlignment::End.align(50.0, 80.0), 0.0);
    }
}
