//! Random fleet layout.

use log::{debug, trace, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::GenerationError;
use crate::config::{BOARD_SIZE, FLEET, MAX_GENERATION_RETRIES, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship};

/// Builds boards holding a complete, randomly placed fleet.
///
/// Ships are placed in the order given, at random positions. A board that runs out
/// of attempts is thrown away and generation starts over on an empty one.
#[derive(Debug, Clone)]
pub struct FleetGenerator {
    lengths: Vec<usize>,
    max_attempts: usize,
    max_retries: usize,
}

impl Default for FleetGenerator {
    fn default() -> Self {
        Self::new(&FLEET)
    }
}

impl FleetGenerator {
    /// Generator for the given ship lengths with the standard limits.
    pub fn new(lengths: &[usize]) -> Self {
        Self {
            lengths: lengths.to_vec(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_retries: MAX_GENERATION_RETRIES,
        }
    }

    /// Override the number of placement attempts allowed per board.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Override the number of boards tried by [`FleetGenerator::generate`].
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Try to lay out the fleet on a single fresh board.
    ///
    /// The attempt budget is shared by the whole fleet and counts every
    /// `add_ship` call made. On success the board has already been frozen
    /// with [`Board::begin`].
    pub fn try_board<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, GenerationError> {
        let mut board = Board::new();
        let mut attempts = 0;
        for &length in &self.lengths {
            loop {
                if attempts >= self.max_attempts {
                    return Err(GenerationError::AttemptsExhausted { attempts });
                }
                attempts += 1;
                let ship = random_ship(rng, length);
                match board.add_ship(ship) {
                    Ok(()) => break,
                    Err(e) => trace!("attempt {}: {}", attempts, e),
                }
            }
        }
        board.begin();
        Ok(board)
    }

    /// Produce a board, starting over from scratch whenever a try runs dry.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, GenerationError> {
        for retry in 0..self.max_retries {
            match self.try_board(rng) {
                Ok(board) => {
                    debug!("fleet placed after {} discarded boards", retry);
                    return Ok(board);
                }
                Err(e) => debug!("discarding board: {}", e),
            }
        }
        warn!("fleet generation failed {} times in a row", self.max_retries);
        Err(GenerationError::GenerationExhausted {
            retries: self.max_retries,
        })
    }
}

fn random_ship<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Ship {
    let origin = Coordinate::new(
        rng.random_range(0..BOARD_SIZE),
        rng.random_range(0..BOARD_SIZE),
    );
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(origin, length, orientation)
}
