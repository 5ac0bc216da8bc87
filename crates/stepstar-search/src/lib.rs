//! Step-through A* search for *stepstar* mazes.
//!
//! This crate drives an A* search over a [`stepstar_core::Maze`] one
//! expansion at a time so the open set, closed set and per-cell costs can
//! be observed between steps:
//!
//! - [`Heap`]: binary min-heap over a caller-supplied ordering predicate,
//!   used for both the open and the closed set
//! - [`SearchEngine`]: the A* state machine (`Ready → Running → Finished`)
//!   with single-step, caller-ticked continuous, and abort controls
//!
//! ```
//! use stepstar_core::{Glyphs, Maze};
//! use stepstar_search::{EngineState, SearchConfig, SearchEngine};
//!
//! let mut maze = Maze::parse("SOO\nO#O\nOOG", Glyphs::default()).unwrap();
//! let mut engine = SearchEngine::new(&mut maze, SearchConfig::default()).unwrap();
//! while engine.step() != EngineState::Finished {}
//! assert!(engine.found_path());
//! assert_eq!(engine.path().len(), 4);
//! ```

mod engine;
mod error;
mod heap;

pub use engine::{CellChange, EngineState, SearchConfig, SearchEngine};
pub use error::SearchError;
pub use heap::Heap;
