//! Random obstacle placement for quickly building test mazes.

use rand::Rng;

use crate::cell::CellType;
use crate::maze::Maze;

/// Random maze editor.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Turn each `Free` cell into a `Wall` with probability `wall_pct`.
    ///
    /// Start, goal, wall and unknown cells are left as they are. Returns
    /// the number of walls placed.
    pub fn scatter_walls(&mut self, maze: &mut Maze, wall_pct: f64) -> usize {
        let free: Vec<_> = maze
            .iter()
            .filter(|c| c.kind() == CellType::Free)
            .map(|c| c.pos())
            .collect();

        let mut placed = 0;
        for p in free {
            let r: f64 = self.rng.random();
            if r < wall_pct {
                maze.set_type(p.x, p.y, CellType::Wall);
                placed += 1;
            }
        }
        log::debug!("scattered {placed} walls at {wall_pct}");
        placed
    }
}
