//! The [`Maze`] type is a fixed-size 2D grid of [`Cell`]s.
//!
//! Cells are stored row-major in a single arena. Search code refers to
//! cells by their [`Point`] (a handle into the arena), so parent links
//! never own the cell they point at.

use std::fmt;

use crate::cell::{Cell, CellType, NodeState};
use crate::error::MazeError;
use crate::geom::Point;
use crate::glyphs::Glyphs;
use crate::neighbors::Movement;

/// A rectangular maze of typed cells.
///
/// The size is fixed for the maze's lifetime. Out-of-range reads return
/// `None` and out-of-range writes are ignored.
#[derive(Debug, Clone)]
pub struct Maze {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
    glyphs: Glyphs,
}

impl Maze {
    /// Create an all-`Free` maze using the default glyphs.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_glyphs(width, height, Glyphs::default())
    }

    /// Create an all-`Free` maze that encodes itself with `glyphs`.
    ///
    /// `glyphs` is not checked here; encoded text decodes back to the same
    /// cells only if [`Glyphs::validate`] accepts it.
    pub fn with_glyphs(width: i32, height: i32, glyphs: Glyphs) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        let cells = (0..h)
            .flat_map(|y| (0..w).map(move |x| Cell::new(Point::new(x, y), CellType::Free)))
            .collect();
        Self {
            cells,
            width: w,
            height: h,
            glyphs,
        }
    }

    /// Decode a maze from rows of glyph text.
    ///
    /// Unrecognized glyphs become [`CellType::Unknown`]. Every row must
    /// decode to the same number of cells as the first one, otherwise
    /// [`MazeError::InconsistentWidth`] is returned. No rows yields an
    /// empty 0×0 maze.
    pub fn from_lines<I, S>(lines: I, glyphs: Glyphs) -> Result<Self, MazeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        glyphs.validate()?;

        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        for (row, line) in lines.into_iter().enumerate() {
            let kinds = glyphs.decode_line(line.as_ref());
            match width {
                None => width = Some(kinds.len()),
                Some(expected) if expected != kinds.len() => {
                    return Err(MazeError::InconsistentWidth {
                        row,
                        expected,
                        found: kinds.len(),
                    });
                }
                Some(_) => {}
            }
            for (x, kind) in kinds.into_iter().enumerate() {
                cells.push(Cell::new(Point::new(x as i32, row as i32), kind));
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        log::debug!("decoded {width}x{height} maze");
        Ok(Self {
            cells,
            width: width as i32,
            height: height as i32,
            glyphs,
        })
    }

    /// Decode a newline-separated block of maze text.
    ///
    /// Leading and trailing whitespace of the whole block is trimmed, not
    /// of individual lines.
    pub fn parse(text: &str, glyphs: Glyphs) -> Result<Self, MazeError> {
        Self::from_lines(text.trim().lines(), glyphs)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The glyphs used by [`generate_string_representation`](Self::generate_string_representation).
    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// Whether `p` lies inside the maze.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y * self.width + p.x) as usize)
        } else {
            None
        }
    }

    /// The cell at (`x`, `y`), or `None` out of range.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<&Cell> {
        self.cell(Point::new(x, y))
    }

    /// The cell at `p`, or `None` out of range.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`. Search engine only.
    ///
    /// Only the search fields of a [`Cell`] are writable through this;
    /// terrain changes go through [`set_type`](Self::set_type).
    #[doc(hidden)]
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index(p).map(move |i| &mut self.cells[i])
    }

    /// Set the terrain of the cell at (`x`, `y`). No-op out of range.
    pub fn set_type(&mut self, x: i32, y: i32, kind: CellType) {
        if let Some(i) = self.index(Point::new(x, y)) {
            self.cells[i].set_kind(kind);
        }
    }

    /// Advance the cell at (`x`, `y`) to the next [`CellType`] in cycling
    /// order and return the new type. `None` out of range.
    pub fn cycle_type(&mut self, x: i32, y: i32) -> Option<CellType> {
        let i = self.index(Point::new(x, y))?;
        let next = self.cells[i].kind().next();
        self.cells[i].set_kind(next);
        Some(next)
    }

    /// First start cell in row-major order.
    pub fn start(&self) -> Option<&Cell> {
        self.first_of(CellType::Start)
    }

    /// First goal cell in row-major order.
    pub fn goal(&self) -> Option<&Cell> {
        self.first_of(CellType::Goal)
    }

    fn first_of(&self, kind: CellType) -> Option<&Cell> {
        self.cells.iter().find(|c| c.kind() == kind)
    }

    /// Number of cells of the given type.
    pub fn count(&self, kind: CellType) -> usize {
        self.cells.iter().filter(|c| c.kind() == kind).count()
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Positions of the passable neighbors of `p` under `movement`.
    ///
    /// See [`free_neighbors_into`](Self::free_neighbors_into).
    pub fn free_neighbors(&self, p: Point, movement: Movement) -> Vec<Point> {
        let mut buf = Vec::with_capacity(8);
        self.free_neighbors_into(p, movement, &mut buf);
        buf
    }

    /// Append the passable neighbors of `p` into `buf`, in
    /// [`Movement::offsets`] order. Only in-range `Free` and `Goal` cells
    /// are kept. The caller clears `buf` before calling.
    pub fn free_neighbors_into(&self, p: Point, movement: Movement, buf: &mut Vec<Point>) {
        for &d in movement.offsets() {
            let n = p + d;
            if let Some(cell) = self.cell(n) {
                if cell.kind().is_passable() {
                    buf.push(n);
                }
            }
        }
    }

    /// Put every cell back to [`NodeState::Unvisited`].
    ///
    /// Terrain, costs and parent links are left alone; a new search
    /// overwrites them before reading.
    pub fn reset_node_states(&mut self) {
        for c in self.cells.iter_mut() {
            c.set_state(NodeState::Unvisited);
        }
    }

    /// Encode the maze as one string per row using its glyphs.
    pub fn generate_string_representation(&self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); self.height as usize];
        }
        self.cells
            .chunks(self.width as usize)
            .map(|row| {
                row.iter()
                    .map(|c| self.glyphs.glyph(c.kind()))
                    .collect::<String>()
            })
            .collect()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.generate_string_representation().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
S#OO
O#O?
OOOG";

    #[test]
    fn empty_maze_representation() {
        let maze = Maze::new(5, 5);
        assert_eq!(maze.generate_string_representation(), vec!["OOOOO"; 5]);
    }

    #[test]
    fn empty_maze_with_different_glyph() {
        let maze = Maze::with_glyphs(5, 5, Glyphs::default().with_free("\u{2b1c}\u{fe0f}"));
        let row = "\u{2b1c}\u{fe0f}".repeat(5);
        assert_eq!(maze.generate_string_representation(), vec![row; 5]);
    }

    #[test]
    fn setting_start_and_goal() {
        let free = "\u{2b1c}\u{fe0f}";
        let glyphs = Glyphs::default()
            .with_start("\u{1f6a9}")
            .with_goal("\u{1f3c1}")
            .with_free(free);
        let mut maze = Maze::with_glyphs(5, 5, glyphs);
        maze.set_type(2, 1, CellType::Start);
        maze.set_type(4, 4, CellType::Goal);

        let expected = vec![
            free.repeat(5),
            format!("{f}{f}\u{1f6a9}{f}{f}", f = free),
            free.repeat(5),
            free.repeat(5),
            format!("{}\u{1f3c1}", free.repeat(4)),
        ];
        assert_eq!(maze.generate_string_representation(), expected);
    }

    #[test]
    fn parse_round_trip() {
        let maze = Maze::parse(ROOM, Glyphs::default()).unwrap();
        assert_eq!((maze.width(), maze.height()), (4, 3));
        assert_eq!(maze.to_string(), ROOM);
        assert_eq!(maze.cell_at(1, 0).unwrap().kind(), CellType::Wall);
        assert_eq!(maze.cell_at(3, 1).unwrap().kind(), CellType::Unknown);
    }

    #[test]
    fn custom_glyph_round_trip() {
        let glyphs = Glyphs::default()
            .with_start("A")
            .with_goal("Z")
            .with_wall("X")
            .with_free(".");
        let lines = ["A..X", "XX.X", "...Z"];
        let maze = Maze::from_lines(lines, glyphs).unwrap();
        assert_eq!(maze.generate_string_representation(), lines);
    }

    #[test]
    fn unrecognized_glyph_is_unknown() {
        let maze = Maze::from_lines(["S!G"], Glyphs::default()).unwrap();
        assert_eq!(maze.cell_at(1, 0).unwrap().kind(), CellType::Unknown);
        assert_eq!(maze.generate_string_representation(), vec!["S?G"]);
    }

    #[test]
    fn inconsistent_width_rejected() {
        let err = Maze::from_lines(["OOO", "OO", "OOO"], Glyphs::default()).unwrap_err();
        assert_eq!(
            err,
            MazeError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn invalid_glyphs_rejected() {
        let glyphs = Glyphs::default().with_goal("S");
        assert!(Maze::from_lines(["SO"], glyphs).is_err());
        let glyphs = Glyphs::default().with_wall("##").with_unknown("#");
        assert!(matches!(
            Maze::from_lines(["##"], glyphs),
            Err(MazeError::InvalidGlyphs(_))
        ));
    }

    #[test]
    fn adjacent_multi_char_glyphs_round_trip() {
        let glyphs = Glyphs::default().with_wall("#a").with_unknown("#b");
        let mut maze = Maze::with_glyphs(4, 1, glyphs.clone());
        maze.set_type(1, 0, CellType::Unknown);
        maze.set_type(2, 0, CellType::Unknown);
        maze.set_type(3, 0, CellType::Wall);
        let lines = maze.generate_string_representation();
        assert_eq!(lines, vec!["O#b#b#a"]);

        let back = Maze::from_lines(&lines, glyphs).unwrap();
        assert_eq!(back.width(), 4);
        assert_eq!(back.generate_string_representation(), lines);
    }

    #[test]
    fn no_lines_is_empty_maze() {
        let maze = Maze::from_lines(Vec::<String>::new(), Glyphs::default()).unwrap();
        assert_eq!((maze.width(), maze.height()), (0, 0));
        assert!(maze.start().is_none());
        assert!(maze.generate_string_representation().is_empty());
    }

    #[test]
    fn bounds_checked_access() {
        let mut maze = Maze::new(3, 2);
        assert!(maze.cell_at(-1, 0).is_none());
        assert!(maze.cell_at(3, 0).is_none());
        assert!(maze.cell_at(0, 2).is_none());
        maze.set_type(5, 5, CellType::Wall);
        maze.set_type(-1, 0, CellType::Wall);
        assert_eq!(maze.count(CellType::Free), 6);
        assert_eq!(maze.cycle_type(9, 9), None);
    }

    #[test]
    fn cycle_type_advances() {
        let mut maze = Maze::new(2, 2);
        assert_eq!(maze.cycle_type(1, 1), Some(CellType::Wall));
        assert_eq!(maze.cycle_type(1, 1), Some(CellType::Goal));
        assert_eq!(maze.goal().unwrap().pos(), Point::new(1, 1));
    }

    #[test]
    fn start_and_goal_lookup() {
        let maze = Maze::parse(ROOM, Glyphs::default()).unwrap();
        assert_eq!(maze.start().unwrap().pos(), Point::new(0, 0));
        assert_eq!(maze.goal().unwrap().pos(), Point::new(3, 2));
        assert!(Maze::new(2, 2).start().is_none());
    }

    #[test]
    fn interior_neighbors() {
        let maze = Maze::new(3, 3);
        let c = Point::new(1, 1);
        assert_eq!(
            maze.free_neighbors(c, Movement::Straight),
            vec![
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 2),
            ]
        );
        assert_eq!(
            maze.free_neighbors(c, Movement::StraightAndDiagonal),
            vec![
                Point::new(1, 0),
                Point::new(0, 0),
                Point::new(2, 0),
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 2),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn corner_neighbors_stay_in_bounds() {
        let maze = Maze::new(3, 3);
        let n = maze.free_neighbors(Point::new(0, 0), Movement::StraightAndDiagonal);
        assert_eq!(n, vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]);
        let n = maze.free_neighbors(Point::new(2, 2), Movement::Straight);
        assert_eq!(n, vec![Point::new(2, 1), Point::new(1, 2)]);
    }

    #[test]
    fn neighbors_filter_by_type() {
        let maze = Maze::parse("S#?\nOGO\nOOO", Glyphs::default()).unwrap();
        let n = maze.free_neighbors(Point::new(1, 1), Movement::StraightAndDiagonal);
        // Start, wall and unknown above are dropped; goal itself is the centre.
        assert_eq!(
            n,
            vec![
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 2),
                Point::new(2, 2),
            ]
        );
        let n = maze.free_neighbors(Point::new(0, 1), Movement::Straight);
        assert_eq!(n, vec![Point::new(1, 1), Point::new(0, 2)]);
    }

    #[test]
    fn reset_clears_states_only() {
        let mut maze = Maze::new(2, 1);
        let p = Point::new(1, 0);
        {
            let c = maze.cell_mut(p).unwrap();
            c.set_state(NodeState::Path);
            c.set_parent(Some(Point::ZERO));
        }
        maze.set_type(1, 0, CellType::Goal);
        maze.reset_node_states();
        let c = maze.cell(p).unwrap();
        assert_eq!(c.state(), NodeState::Unvisited);
        assert_eq!(c.kind(), CellType::Goal);
        assert_eq!(c.parent(), Some(Point::ZERO));
    }
}
