use crate::geom::Point;

/// Which moves a search may take between cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// 4-directional (cardinal) moves only.
    Straight,
    /// 8-directional moves.
    #[default]
    StraightAndDiagonal,
}

const STRAIGHT: [Point; 4] = [
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, 1),
];

const STRAIGHT_AND_DIAGONAL: [Point; 8] = [
    Point::new(0, -1),
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 1),
    Point::new(1, 1),
];

impl Movement {
    /// Neighbor offsets in enumeration order: north, (north-west,
    /// north-east), west, east, south, (south-west, south-east).
    ///
    /// The order decides heap insertion order and therefore how ties
    /// between equal total costs resolve.
    pub fn offsets(self) -> &'static [Point] {
        match self {
            Movement::Straight => &STRAIGHT,
            Movement::StraightAndDiagonal => &STRAIGHT_AND_DIAGONAL,
        }
    }

    /// Whether diagonal moves are allowed.
    #[inline]
    pub fn allows_diagonal(self) -> bool {
        self == Movement::StraightAndDiagonal
    }
}
