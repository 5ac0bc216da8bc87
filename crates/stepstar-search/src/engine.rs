//! Step-wise A* over a [`Maze`].
//!
//! A [`SearchEngine`] borrows its maze exclusively for the whole search and
//! advances exactly one expansion per [`step`](SearchEngine::step). Between
//! steps every touched cell's state, parent and costs are consistent, so a
//! presentation layer can poll the maze (or read
//! [`changes`](SearchEngine::changes)) after each call.
//!
//! The engine is single use: once [`EngineState::Finished`] it stays there.
//! To search again, drop it, call [`Maze::reset_node_states`] and build a
//! new one.

use stepstar_core::{Cell, Heuristic, Maze, Movement, NodeState, Point, recompute_costs};

use crate::error::SearchError;
use crate::heap::Heap;

/// Lifecycle of a [`SearchEngine`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineState {
    /// Constructed, no step taken yet.
    #[default]
    Ready,
    /// At least one step taken, not finished.
    Running,
    /// Goal reached, open set exhausted, or stopped. Terminal.
    Finished,
}

/// Search parameters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    pub movement: Movement,
}

impl SearchConfig {
    /// Set the heuristic (builder).
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Set the movement policy (builder).
    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }
}

/// A cell whose search state was written during the last step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellChange {
    pub pos: Point,
    pub state: NodeState,
}

/// Heap entry: a cell handle with the total cost it was queued at.
///
/// Entries compare equal by position; the maze's terrain is fixed for the
/// duration of a search so position identifies the cell.
#[derive(Copy, Clone, Debug)]
struct Queued {
    pos: Point,
    total_cost: f64,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Queued {
    fn probe(pos: Point) -> Self {
        Self {
            pos,
            total_cost: 0.0,
        }
    }
}

fn by_total_cost(a: &Queued, b: &Queued) -> bool {
    a.total_cost < b.total_cost
}

type CostHeap = Heap<Queued, fn(&Queued, &Queued) -> bool>;

/// Interactive A* search over a borrowed maze.
pub struct SearchEngine<'m> {
    maze: &'m mut Maze,
    config: SearchConfig,
    start: Point,
    goal: Point,
    state: EngineState,
    continuous: bool,
    steps: usize,
    open: CostHeap,
    closed: CostHeap,
    path: Vec<Point>,
    changes: Vec<CellChange>,
    // scratch buffer for neighbor queries
    nbuf: Vec<Point>,
}

impl<'m> SearchEngine<'m> {
    /// Prepare a search from the maze's start cell to its goal cell.
    ///
    /// Both are located by a row-major scan and captured here; later
    /// terrain edits do not move them. The start cell is marked
    /// [`NodeState::Open`] and queued with no parent.
    pub fn new(maze: &'m mut Maze, config: SearchConfig) -> Result<Self, SearchError> {
        let start = maze.start().map(Cell::pos).ok_or(SearchError::MissingStart)?;
        let goal = maze.goal().map(Cell::pos).ok_or(SearchError::MissingGoal)?;

        let mut engine = Self {
            maze,
            config,
            start,
            goal,
            state: EngineState::Ready,
            continuous: false,
            steps: 0,
            open: Heap::new(by_total_cost as fn(&Queued, &Queued) -> bool),
            closed: Heap::new(by_total_cost as fn(&Queued, &Queued) -> bool),
            path: Vec::new(),
            changes: Vec::new(),
            nbuf: Vec::with_capacity(8),
        };

        if let Some(entry) = engine.bind(start, None) {
            engine.mark(start, NodeState::Open);
            engine.open.insert(entry);
        }
        log::debug!(
            "A* ready: {} -> {} ({:?}, {:?})",
            start,
            goal,
            config.heuristic,
            config.movement
        );
        Ok(engine)
    }

    /// Perform one expansion and return the resulting state.
    ///
    /// Pops the cheapest open cell. If it is the goal, the parent chain is
    /// marked [`NodeState::Path`] and the search finishes. Otherwise the
    /// cell is closed and each passable neighbor not yet closed is either
    /// queued (first discovery) or re-parented when the popped cell's
    /// g-cost is strictly below that of the neighbor's current parent.
    /// An empty open set finishes the search without a path. Calling
    /// this on a finished engine does nothing.
    pub fn step(&mut self) -> EngineState {
        if self.state == EngineState::Finished {
            return self.state;
        }
        self.changes.clear();

        let Some(current) = self.open.extract_min() else {
            self.finish();
            return self.state;
        };

        if self.state == EngineState::Ready {
            self.state = EngineState::Running;
        }
        self.steps += 1;

        if current.pos == self.goal {
            self.mark_path(current.pos);
            self.finish();
            return self.state;
        }

        self.mark(current.pos, NodeState::Closed);
        self.closed.insert(current);
        let current_g = self.g_cost(current.pos);
        log::trace!(
            "step {}: expand {} (g {}, f {})",
            self.steps,
            current.pos,
            current_g,
            current.total_cost
        );

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.maze
            .free_neighbors_into(current.pos, self.config.movement, &mut nbuf);

        for &np in nbuf.iter() {
            let probe = Queued::probe(np);
            if self.closed.contains(&probe) {
                continue;
            }

            match self.open.index_of(&probe) {
                Some(i) => {
                    // Compared against the neighbor's current parent, not
                    // the neighbor's own g-cost.
                    let parent_g = self
                        .maze
                        .cell(np)
                        .and_then(Cell::parent)
                        .map(|pp| self.g_cost(pp));
                    if parent_g.is_some_and(|g| g > current_g) {
                        if let Some(entry) = self.bind(np, Some(current.pos)) {
                            log::trace!("re-parent {} via {}", np, current.pos);
                            self.open.replace(i, entry);
                        }
                    }
                }
                None => {
                    if let Some(entry) = self.bind(np, Some(current.pos)) {
                        self.mark(np, NodeState::Open);
                        self.open.insert(entry);
                    }
                }
            }
        }

        self.nbuf = nbuf;
        self.state
    }

    /// Enter continuous mode: each [`tick`](Self::tick) from the caller's
    /// recurring trigger then performs one step until the search finishes.
    pub fn run(&mut self) {
        if self.state != EngineState::Finished {
            self.continuous = true;
        }
    }

    /// Advance continuous mode by one step.
    ///
    /// Returns `true` if a step was taken. Continuous mode switches itself
    /// off once the search is finished, so the caller can stop its trigger
    /// as soon as this returns `false`.
    pub fn tick(&mut self) -> bool {
        if !self.continuous || self.state == EngineState::Finished {
            self.continuous = false;
            return false;
        }
        self.step();
        if self.state == EngineState::Finished {
            self.continuous = false;
        }
        true
    }

    /// Abort: leave continuous mode and force [`EngineState::Finished`],
    /// whether or not a path was found.
    ///
    /// Aborting writes no cell, so [`changes`](Self::changes) is emptied.
    /// Stopping an already finished engine keeps its last changes.
    pub fn stop(&mut self) {
        self.continuous = false;
        if self.state != EngineState::Finished {
            log::debug!("A* stopped after {} steps", self.steps);
            self.changes.clear();
            self.state = EngineState::Finished;
        }
    }

    /// Step until finished. Returns whether a path was found.
    pub fn run_to_completion(&mut self) -> bool {
        while self.state != EngineState::Finished {
            self.step();
        }
        self.found_path()
    }

    #[inline]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Whether continuous mode is on.
    #[inline]
    pub fn is_continuous(&self) -> bool {
        self.continuous
    }

    /// Number of steps that popped a cell from the open set.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Start position captured at construction.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Goal position captured at construction.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Read-only view of the maze being searched.
    pub fn maze(&self) -> &Maze {
        &*self.maze
    }

    /// Cells whose state was written by the last step, in write order.
    ///
    /// Before the first step this holds the start cell being opened.
    pub fn changes(&self) -> &[CellChange] {
        &self.changes
    }

    /// The path from start to goal once found, empty otherwise.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Whether the goal was reached.
    pub fn found_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// The goal's g-cost if a path was found.
    pub fn path_cost(&self) -> Option<f64> {
        self.path.last().map(|&p| self.g_cost(p))
    }

    /// Number of cells in the open set.
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Number of cells in the closed set.
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// Positions in the open set, in heap storage order.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.open.iter().map(|q| q.pos)
    }

    /// Positions in the closed set, in heap storage order.
    pub fn closed_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.closed.iter().map(|q| q.pos)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn g_cost(&self, p: Point) -> f64 {
        self.maze.cell(p).map_or(f64::INFINITY, Cell::g_cost)
    }

    /// Set `p`'s parent, recompute its costs and return its heap entry.
    fn bind(&mut self, p: Point, parent: Option<Point>) -> Option<Queued> {
        let parent_cell = parent.and_then(|pp| self.maze.cell(pp).copied());
        let goal = self.goal;
        let heuristic = self.config.heuristic;
        let cell = self.maze.cell_mut(p)?;
        cell.set_parent(parent);
        recompute_costs(cell, parent_cell.as_ref(), goal, heuristic);
        Some(Queued {
            pos: p,
            total_cost: cell.total_cost(),
        })
    }

    fn mark(&mut self, p: Point, state: NodeState) {
        if let Some(cell) = self.maze.cell_mut(p) {
            cell.set_state(state);
            self.changes.push(CellChange { pos: p, state });
        }
    }

    /// Walk parent links from `goal` to the root, marking each cell.
    fn mark_path(&mut self, goal: Point) {
        let mut cur = Some(goal);
        while let Some(p) = cur {
            self.mark(p, NodeState::Path);
            self.path.push(p);
            cur = self.maze.cell(p).and_then(Cell::parent);
        }
        self.path.reverse();
    }

    fn finish(&mut self) {
        self.state = EngineState::Finished;
        self.continuous = false;
        match self.path_cost() {
            Some(cost) => log::info!(
                "A* found a path of {} cells (cost {}) in {} steps",
                self.path.len(),
                cost,
                self.steps
            ),
            None => log::info!("A* found no path after {} steps", self.steps),
        }
    }
}
