//! Turn-based game session between the human and the computer.

use log::{debug, info};
use rand::Rng;

use crate::board::Board;
use crate::common::GenerationError;
use crate::fleet::FleetGenerator;
use crate::player::Player;
use crate::terminal::{GameEvent, Terminal};

/// The two sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the given side to move.
    Playing(Side),
    /// One fleet has been destroyed.
    Finished { winner: Side },
}

/// A board together with the player who owns it.
struct Seat {
    board: Board,
    player: Box<dyn Player>,
}

/// Game session holding both boards and players.
pub struct Game {
    human: Seat,
    computer: Seat,
    state: GameState,
}

impl Game {
    /// Start a game on prepared boards. The human moves first.
    ///
    /// The human's own board is revealed, the computer's stays hidden.
    pub fn new(
        mut human_board: Board,
        human: Box<dyn Player>,
        mut computer_board: Board,
        computer: Box<dyn Player>,
    ) -> Self {
        human_board.set_revealed(true);
        computer_board.set_revealed(false);
        Self {
            human: Seat {
                board: human_board,
                player: human,
            },
            computer: Seat {
                board: computer_board,
                player: computer,
            },
            state: GameState::Playing(Side::Human),
        }
    }

    /// Generate a random fleet for each side and start the game.
    pub fn setup<R: Rng + ?Sized>(
        generator: &FleetGenerator,
        rng: &mut R,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
    ) -> Result<Self, GenerationError> {
        let human_board = generator.generate(rng)?;
        let computer_board = generator.generate(rng)?;
        info!("both fleets placed");
        Ok(Self::new(human_board, human, computer_board, computer))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Board belonging to `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human.board,
            Side::Computer => &self.computer.board,
        }
    }

    fn seats_mut(&mut self, side: Side) -> (&mut Seat, &mut Seat) {
        match side {
            Side::Human => (&mut self.human, &mut self.computer),
            Side::Computer => (&mut self.computer, &mut self.human),
        }
    }

    /// Play a single move and return the resulting state.
    ///
    /// A hit keeps the turn with the same side; a miss passes it on. Once the
    /// game is finished this does nothing.
    pub fn step(&mut self, terminal: &mut dyn Terminal) -> anyhow::Result<GameState> {
        let GameState::Playing(side) = self.state else {
            return Ok(self.state);
        };
        let (attacker, defender) = self.seats_mut(side);
        let result = attacker.player.make_move(&mut defender.board, terminal)?;

        self.state = if self.computer.board.all_sunk() {
            GameState::Finished { winner: Side::Human }
        } else if self.human.board.all_sunk() {
            GameState::Finished {
                winner: Side::Computer,
            }
        } else if result.is_hit() {
            GameState::Playing(side)
        } else {
            debug!("turn passes to {:?}", side.opponent());
            GameState::Playing(side.opponent())
        };
        Ok(self.state)
    }

    /// Play until one fleet is destroyed and return the winner.
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> anyhow::Result<Side> {
        terminal.announce(&GameEvent::Welcome)?;
        loop {
            self.show_boards(terminal)?;
            match self.state {
                GameState::Playing(side) => {
                    terminal.announce(&GameEvent::Turn(side))?;
                    self.step(terminal)?;
                }
                GameState::Finished { winner } => {
                    info!("game over, {:?} wins", winner);
                    terminal.announce(&GameEvent::Finished { winner })?;
                    return Ok(winner);
                }
            }
        }
    }

    fn show_boards(&self, terminal: &mut dyn Terminal) -> anyhow::Result<()> {
        terminal.render("Your board:", &self.human.board)?;
        terminal.render("Computer's board:", &self.computer.board)?;
        Ok(())
    }
}
