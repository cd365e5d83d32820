use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    /// Depth must be in 1..=8; the morton lookup table is 8 bits per axis.
    DepthOutOfRange { max_depth: usize },
    InvalidBoundsExtents { x: f32, y: f32 },
    NonSquareBounds { x: f32, y: f32 },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::DepthOutOfRange { max_depth } => {
                write!(
                    f,
                    "max depth must be between 1 and 8 (requested: {})",
                    max_depth
                )
            }
            QuadtreeError::InvalidBoundsExtents { x, y } => {
                write!(
                    f,
                    "bounds extents must be finite and greater than zero on both axes (x: {}, y: {})",
                    x, y
                )
            }
            QuadtreeError::NonSquareBounds { x, y } => {
                write!(
                    f,
                    "tree bounds must be square; query shapes may be non-square (x: {}, y: {})",
                    x, y
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
