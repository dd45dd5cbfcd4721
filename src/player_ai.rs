use rand::Rng;

use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;
use crate::game::Side;
use crate::player::Player;
use crate::terminal::Terminal;

/// Computer player that fires at uniformly random cells.
///
/// It keeps no memory of earlier shots; repeats are refused by the board and
/// simply drawn again.
pub struct AiPlayer<R> {
    rng: R,
}

impl<R: Rng> AiPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a target anywhere on the board.
    pub fn random_target(&mut self) -> Coordinate {
        Coordinate::new(
            self.rng.random_range(0..BOARD_SIZE),
            self.rng.random_range(0..BOARD_SIZE),
        )
    }
}

impl<R: Rng> Player for AiPlayer<R> {
    fn side(&self) -> Side {
        Side::Computer
    }

    fn choose_target(&mut self, _terminal: &mut dyn Terminal) -> anyhow::Result<Coordinate> {
        Ok(self.random_target())
    }
}
