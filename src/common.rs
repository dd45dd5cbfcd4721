//! Common types for the game: shot results and board errors.

use thiserror::Error;

use crate::coord::Coordinate;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot landed in open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck the last intact segment of a ship.
    Sunk,
}

impl ShotResult {
    /// Whether the shooter fires again.
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Why a ship could not be put down on a given cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementConflict {
    /// The cell is outside the board.
    OffBoard,
    /// The cell belongs to another ship, to the buffer around one, or was shot at.
    Occupied,
    /// The ship has length zero.
    Empty,
}

/// Errors returned by [`Board`](crate::Board) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Target lies outside the board.
    #[error("shot at {0} is off the board")]
    OutOfBounds(Coordinate),
    /// Target was already shot at, or is known empty around a sunk ship.
    #[error("cell {0} has already been targeted")]
    AlreadyTargeted(Coordinate),
    /// Ship runs off the board, overlaps or touches another ship.
    #[error("cannot place ship: cell {cell} is {reason:?}")]
    ShipPlacement {
        cell: Coordinate,
        reason: PlacementConflict,
    },
    /// Ships can no longer be added once play has begun.
    #[error("board setup is already finished")]
    SetupFinished,
}

/// Errors returned while generating a random fleet layout.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    /// A single board ran out of placement attempts.
    #[error("no legal layout found within {attempts} placement attempts")]
    AttemptsExhausted { attempts: usize },
    /// Every fresh board ran out of attempts.
    #[error("gave up after {retries} board generation retries")]
    GenerationExhausted { retries: usize },
}
