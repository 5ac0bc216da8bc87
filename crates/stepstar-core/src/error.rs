//! Errors raised while building a [`Maze`](crate::Maze) from text.

use std::fmt;

/// Errors that can occur when decoding maze text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A row decoded to a different number of cells than the first row.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The glyph set cannot encode a maze unambiguously.
    InvalidGlyphs(String),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidGlyphs(why) => write!(f, "maze: invalid glyph set: {why}"),
        }
    }
}

impl std::error::Error for MazeError {}
