//! Ship definitions.

use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along a row, towards higher columns.
    Horizontal,
    /// Extends down a column, towards higher rows.
    Vertical,
}

/// A straight run of cells with a health counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    health: usize,
}

impl Ship {
    /// Create an undamaged ship starting at `origin`.
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        Ship {
            origin,
            length,
            orientation,
            health: length,
        }
    }

    /// Cells covered by the ship, starting at its origin.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.length as i32).map(move |i| match self.orientation {
            Orientation::Horizontal => self.origin.offset(0, i),
            Orientation::Vertical => self.origin.offset(i, 0),
        })
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Take one point of damage. Returns `true` if that sank the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.is_sunk()
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Undamaged segments left.
    pub fn health(&self) -> usize {
        self.health
    }
}
