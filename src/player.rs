use log::debug;

use crate::board::Board;
use crate::common::ShotResult;
use crate::coord::Coordinate;
use crate::game::Side;
use crate::terminal::{GameEvent, Terminal};

/// Interface implemented by the human and the computer player.
pub trait Player {
    /// Which side of the table this player sits on.
    fn side(&self) -> Side;

    /// Choose the next coordinate to fire at.
    fn choose_target(&mut self, terminal: &mut dyn Terminal) -> anyhow::Result<Coordinate>;

    /// Fire at `enemy` until the board accepts a target.
    ///
    /// Off-board and repeated targets are announced and a new target is
    /// chosen. The returned result tells the caller whether this player
    /// moves again.
    fn make_move(
        &mut self,
        enemy: &mut Board,
        terminal: &mut dyn Terminal,
    ) -> anyhow::Result<ShotResult> {
        let by = self.side();
        loop {
            let at = self.choose_target(terminal)?;
            terminal.announce(&GameEvent::Fired { by, at })?;
            match enemy.shot(at) {
                Ok(result) => {
                    terminal.announce(&GameEvent::Shot { by, at, result })?;
                    return Ok(result);
                }
                Err(error) => {
                    debug!("{:?} target rejected: {}", by, error);
                    terminal.announce(&GameEvent::Rejected { by, error })?;
                }
            }
        }
    }
}
