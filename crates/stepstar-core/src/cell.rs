//! The [`Cell`] type: one maze square with its terrain and search state.

use crate::geom::Point;

/// Terrain classification of a cell.
///
/// The declaration order is the cycling order used by
/// [`next`](CellType::next) and [`previous`](CellType::previous).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    Start,
    #[default]
    Free,
    Wall,
    Goal,
    Unknown,
}

impl CellType {
    /// All types in cycling order.
    pub const ALL: [CellType; 5] = [
        CellType::Start,
        CellType::Free,
        CellType::Wall,
        CellType::Goal,
        CellType::Unknown,
    ];

    fn ordinal(self) -> usize {
        match self {
            CellType::Start => 0,
            CellType::Free => 1,
            CellType::Wall => 2,
            CellType::Goal => 3,
            CellType::Unknown => 4,
        }
    }

    /// The following type in cycling order, wrapping from `Unknown` to
    /// `Start`.
    pub fn next(self) -> Self {
        Self::ALL[(self.ordinal() + 1) % Self::ALL.len()]
    }

    /// The preceding type in cycling order, wrapping from `Start` to
    /// `Unknown`.
    pub fn previous(self) -> Self {
        Self::ALL[(self.ordinal() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether a search may step onto a cell of this type.
    ///
    /// Only `Free` and `Goal` qualify; the start cell is never re-entered.
    #[inline]
    pub fn is_passable(self) -> bool {
        matches!(self, CellType::Free | CellType::Goal)
    }
}

/// Visitation tag written by the search engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    #[default]
    Unvisited,
    Open,
    Closed,
    Path,
}

/// A single maze cell.
///
/// Terrain is changed through [`Maze::set_type`](crate::Maze::set_type).
/// The search fields (state, parent, costs) are written only by the search
/// engine and [`Maze::reset_node_states`](crate::Maze::reset_node_states);
/// everything else should treat them as read-only.
/// Equality compares position and terrain only.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    kind: CellType,
    state: NodeState,
    parent: Option<Point>,
    g_cost: f64,
    h_cost: f64,
    total_cost: f64,
}

impl Cell {
    /// Create an unvisited cell with zeroed costs and no parent.
    pub const fn new(pos: Point, kind: CellType) -> Self {
        Self {
            pos,
            kind,
            state: NodeState::Unvisited,
            parent: None,
            g_cost: 0.0,
            h_cost: 0.0,
            total_cost: 0.0,
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn kind(&self) -> CellType {
        self.kind
    }

    #[inline]
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Position of the cell this one was reached from in the current
    /// search. `None` for the search root or an unreached cell.
    #[inline]
    pub fn parent(&self) -> Option<Point> {
        self.parent
    }

    /// Accumulated cost from the start along the best known path.
    #[inline]
    pub fn g_cost(&self) -> f64 {
        self.g_cost
    }

    /// Heuristic estimate of the remaining cost to the goal.
    #[inline]
    pub fn h_cost(&self) -> f64 {
        self.h_cost
    }

    /// `g_cost + h_cost`; the open set is ordered by this value.
    #[inline]
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Set the visitation tag. Search engine only.
    #[doc(hidden)]
    #[inline]
    pub fn set_state(&mut self, state: NodeState) {
        self.state = state;
    }

    /// Rebind the parent link. Costs must be recomputed afterwards with
    /// [`recompute_costs`](crate::recompute_costs). Search engine only.
    #[doc(hidden)]
    #[inline]
    pub fn set_parent(&mut self, parent: Option<Point>) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) fn set_kind(&mut self, kind: CellType) {
        self.kind = kind;
    }

    #[inline]
    pub(crate) fn set_costs(&mut self, g_cost: f64, h_cost: f64) {
        self.g_cost = g_cost;
        self.h_cost = h_cost;
        self.total_cost = g_cost + h_cost;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.kind == other.kind
    }
}

impl Eq for Cell {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_both_ways() {
        assert_eq!(CellType::Start.next(), CellType::Free);
        assert_eq!(CellType::Unknown.next(), CellType::Start);
        assert_eq!(CellType::Start.previous(), CellType::Unknown);
        assert_eq!(CellType::Goal.previous(), CellType::Wall);
        for t in CellType::ALL {
            assert_eq!(t.next().previous(), t);
        }
    }

    #[test]
    fn passable_types() {
        let passable: Vec<_> = CellType::ALL
            .into_iter()
            .filter(|t| t.is_passable())
            .collect();
        assert_eq!(passable, vec![CellType::Free, CellType::Goal]);
    }

    #[test]
    fn equality_ignores_search_fields() {
        let a = Cell::new(Point::new(1, 1), CellType::Free);
        let mut b = a;
        b.set_state(NodeState::Closed);
        b.set_parent(Some(Point::new(0, 0)));
        b.set_costs(10.0, 20.0);
        assert_eq!(a, b);
        assert_eq!(b.total_cost(), 30.0);

        let c = Cell::new(Point::new(1, 1), CellType::Wall);
        assert_ne!(a, c);
    }

    #[test]
    fn fresh_cell_is_unvisited_root() {
        let c = Cell::new(Point::new(3, 2), CellType::Goal);
        assert_eq!(c.state(), NodeState::Unvisited);
        assert_eq!(c.parent(), None);
        assert_eq!((c.x(), c.y()), (3, 2));
        assert_eq!(c.total_cost(), 0.0);
    }
}
