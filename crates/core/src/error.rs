//! Errors surfaced to callers of the generation core.

use std::error::Error;
use std::fmt;

use crate::config::MIN_DIMENSION;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Height or width is below the minimum maze dimension. Raised before any
    /// grid is allocated.
    InvalidDimensions { height: usize, width: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { height, width } => write!(
                f,
                "maze size must be at least {min}x{min}, got {height}x{width}",
                min = MIN_DIMENSION
            ),
        }
    }
}

impl Error for MazeError {}
