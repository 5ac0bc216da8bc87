//! **stepstar-core**: maze and cost model for step-through A* search.
//!
//! This crate provides the data side of the *stepstar* workspace: grid
//! coordinates, typed cells carrying per-search state, the [`Maze`] grid
//! with its text encoding, and the pure cost functions the search engine
//! applies while expanding nodes.
//!
//! | Item | Role |
//! |---|---|
//! | [`Maze`] | Owns the cells; lookup, neighbors, reset, text codec |
//! | [`Cell`] | Terrain plus search state, parent link and costs |
//! | [`Heuristic`], [`step_cost`], [`recompute_costs`] | Cost model |
//! | [`MazeGen`] | Random wall placement |

pub mod cell;
pub mod cost;
pub mod error;
pub mod geom;
pub mod glyphs;
pub mod mapgen;
pub mod maze;
pub mod neighbors;

pub use cell::{Cell, CellType, NodeState};
pub use cost::{
    DIAGONAL_COST, Heuristic, STRAIGHT_COST, chebyshev, euclidean, heuristic, manhattan,
    recompute_costs, step_cost,
};
pub use error::MazeError;
pub use geom::Point;
pub use glyphs::Glyphs;
pub use mapgen::MazeGen;
pub use maze::Maze;
pub use neighbors::Movement;
