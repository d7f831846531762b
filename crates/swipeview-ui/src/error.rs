use std::fmt;

/// Configuration errors reported by [`SwipeView`](crate::SwipeView) setters.
///
/// Touch handling never produces these; an unusable configuration simply
/// leaves gestures unhandled.
#[derive(Debug, Clone, PartialEq)]
pub enum SwipeViewError {
    InvalidThreshold { value: f32 },
    GestureInProgress,
}

impl fmt::Display for SwipeViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeViewError::InvalidThreshold { value } => {
                write!(f, "swipe threshold {value} must be finite and non-negative")
            }
            SwipeViewError::GestureInProgress => {
                write!(f, "cannot reconfigure a swipe view while a gesture is in progress")
            }
        }
    }
}

impl std::error::Error for SwipeViewError {}
