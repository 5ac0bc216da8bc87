//! Cost model: step costs between adjacent cells and goal heuristics.
//!
//! Costs use an integer-like unit scale stored as `f64`: a straight move
//! costs [`STRAIGHT_COST`], a diagonal move [`DIAGONAL_COST`], and every
//! heuristic is scaled by the straight cost so both live on the same scale.

use crate::cell::Cell;
use crate::geom::Point;

/// Cost of a horizontal or vertical move.
pub const STRAIGHT_COST: f64 = 10.0;

/// Cost of a diagonal move.
pub const DIAGONAL_COST: f64 = 14.0;

/// Heuristic used to estimate the remaining cost to the goal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// L1 distance.
    #[default]
    Manhattan,
    /// L∞ distance.
    Chebyshev,
    /// L2 distance.
    Euclidean,
}

impl Heuristic {
    /// Estimate the cost from `from` to `goal`.
    #[inline]
    pub fn estimate(self, from: Point, goal: Point) -> f64 {
        heuristic(from, goal, self)
    }
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy)
}

/// Cost of moving between two adjacent cells.
///
/// Returns `f64::INFINITY` when `a` and `b` are not neighbors (including
/// `a == b`).
pub fn step_cost(a: Point, b: Point) -> f64 {
    match a.abs_delta(b) {
        (1, 0) | (0, 1) => STRAIGHT_COST,
        (1, 1) => DIAGONAL_COST,
        _ => f64::INFINITY,
    }
}

/// Heuristic estimate from `from` to `goal`, scaled by [`STRAIGHT_COST`].
pub fn heuristic(from: Point, goal: Point, kind: Heuristic) -> f64 {
    match kind {
        Heuristic::Manhattan => f64::from(manhattan(from, goal)) * STRAIGHT_COST,
        Heuristic::Chebyshev => f64::from(chebyshev(from, goal)) * STRAIGHT_COST,
        Heuristic::Euclidean => euclidean(from, goal) * STRAIGHT_COST,
    }
}

/// Recompute `cell`'s g, h and total costs.
///
/// `g` is `parent.g + step_cost(parent, cell)` when a parent is given and
/// `0` otherwise. Must be called whenever the cell's parent changes.
pub fn recompute_costs(cell: &mut Cell, parent: Option<&Cell>, goal: Point, kind: Heuristic) {
    let g = match parent {
        Some(p) => p.g_cost() + step_cost(p.pos(), cell.pos()),
        None => 0.0,
    };
    let h = heuristic(cell.pos(), goal, kind);
    cell.set_costs(g, h);
}
