//! Grid coordinates: [`Point`].

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D integer grid coordinate. X grows right, Y grows down, so row `y`
/// of a maze's text representation holds the cells with that `y`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Absolute per-axis distance to `other` as `(|dx|, |dy|)`.
    #[inline]
    pub fn abs_delta(self, other: Point) -> (i32, i32) {
        ((other.x - self.x).abs(), (other.y - self.y).abs())
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Row-major, matching the maze's storage order.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_ordering() {
        let mut pts = vec![Point::new(2, 1), Point::new(0, 2), Point::new(3, 0)];
        pts.sort();
        assert_eq!(
            pts,
            vec![Point::new(3, 0), Point::new(2, 1), Point::new(0, 2)]
        );
    }

    #[test]
    fn abs_delta_is_symmetric() {
        let a = Point::new(1, 4);
        let b = Point::new(4, 0);
        assert_eq!(a.abs_delta(b), (3, 4));
        assert_eq!(b.abs_delta(a), (3, 4));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Point::new(1, 2) + Point::new(3, -1), Point::new(4, 1));
        assert_eq!(Point::new(1, 2) - Point::new(1, 2), Point::ZERO);
        assert_eq!(Point::new(1, 2).shift(-1, 1), Point::new(0, 3));
        assert_eq!(Point::new(-1, 7).to_string(), "(-1, 7)");
    }
}
