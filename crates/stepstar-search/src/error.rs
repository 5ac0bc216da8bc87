//! Errors raised when a [`SearchEngine`](crate::SearchEngine) cannot start.

use std::fmt;

/// Why a search could not be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The maze has no start cell.
    MissingStart,
    /// The maze has no goal cell.
    MissingGoal,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("search: maze has no start cell"),
            Self::MissingGoal => f.write_str("search: maze has no goal cell"),
        }
    }
}

impl std::error::Error for SearchError {}
