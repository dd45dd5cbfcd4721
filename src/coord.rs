//! Board positions.

use core::fmt;

/// Offsets of the eight cells surrounding a position.
static NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell position. `x` is the row and `y` the column, both zero-based.
///
/// Values are signed so that out-of-range input (such as a human typing `0`)
/// can still be represented and rejected by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The 8-neighbourhood of this coordinate. Neighbours may lie off the board.
    pub fn neighbours(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOURS.iter().map(move |&(dx, dy)| self.offset(dx, dy))
    }

    /// True when both coordinates differ by at most one on each axis.
    pub fn touches(&self, other: &Coordinate) -> bool {
        (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    /// One-based, as the player types it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x + 1, self.y + 1)
    }
}
