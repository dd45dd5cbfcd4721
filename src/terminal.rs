//! Console input and output.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{Board, CellState};
use crate::common::{BoardError, ShotResult};
use crate::coord::Coordinate;
use crate::game::Side;
use crate::player_cli::InputError;

/// Something the players should be told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Welcome,
    /// `Side` is about to move.
    Turn(Side),
    /// `by` picked a target, before the board has answered.
    Fired { by: Side, at: Coordinate },
    Shot {
        by: Side,
        at: Coordinate,
        result: ShotResult,
    },
    /// The board refused a target; the same side picks again.
    Rejected { by: Side, error: BoardError },
    /// The human typed something that is not a coordinate pair.
    InvalidInput(InputError),
    Finished { winner: Side },
}

/// Where the game reads coordinates from and shows boards and messages.
pub trait Terminal {
    /// Read one raw line of coordinates. Returns `None` at end of input.
    fn read_coordinates(&mut self) -> io::Result<Option<String>>;

    /// Show `board` under the given heading.
    fn render(&mut self, title: &str, board: &Board) -> io::Result<()>;

    /// Tell the players about `event`.
    fn announce(&mut self, event: &GameEvent) -> io::Result<()>;
}

/// Text grid for a board, honouring its reveal flag.
pub struct BoardView<'a>(pub &'a Board);

impl BoardView<'_> {
    fn glyph(&self, cell: CellState) -> char {
        match cell {
            CellState::Ship if self.0.is_revealed() => '■',
            CellState::Hit => 'X',
            CellState::Miss => 'T',
            CellState::Empty | CellState::Blocked | CellState::Ship => 'O',
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for c in 1..=self.0.size() {
            write!(f, " {} |", c)?;
        }
        for (r, row) in self.0.rows().enumerate() {
            write!(f, "\n{} |", r + 1)?;
            for &cell in row {
                write!(f, " {} |", self.glyph(cell))?;
            }
        }
        Ok(())
    }
}

/// [`Terminal`] over any line reader and writer, normally stdin and stdout.
pub struct ConsoleTerminal<R, W> {
    input: R,
    output: W,
    buf: String,
}

impl ConsoleTerminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for ConsoleTerminal<R, W> {
    fn read_coordinates(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "Enter row and column: ")?;
        self.output.flush()?;
        self.buf.clear();
        if self.input.read_line(&mut self.buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(self.buf.trim().to_string()))
    }

    fn render(&mut self, title: &str, board: &Board) -> io::Result<()> {
        writeln!(self.output, "{}", title)?;
        writeln!(self.output, "{}", BoardView(board))
    }

    fn announce(&mut self, event: &GameEvent) -> io::Result<()> {
        let out = &mut self.output;
        match event {
            GameEvent::Welcome => {
                writeln!(out, "Welcome to Sea Battle!")?;
                writeln!(out, "Each turn, enter two numbers: the row, then the column.")?;
                writeln!(out, "A hit earns another shot.")
            }
            GameEvent::Turn(Side::Human) => writeln!(out, "Your move!"),
            GameEvent::Turn(Side::Computer) => writeln!(out, "Computer's move!"),
            GameEvent::Fired {
                by: Side::Computer,
                at,
            } => writeln!(out, "Computer fires at {}", at),
            GameEvent::Fired { .. } => Ok(()),
            GameEvent::Shot { result, .. } => match result {
                ShotResult::Miss => writeln!(out, "Miss!"),
                ShotResult::Hit => writeln!(out, "Hit!"),
                ShotResult::Sunk => writeln!(out, "Sunk!"),
            },
            GameEvent::Rejected {
                by: Side::Human,
                error,
            } => match error {
                BoardError::OutOfBounds(_) => writeln!(out, "That shot is off the board!"),
                BoardError::AlreadyTargeted(_) => {
                    writeln!(out, "You have already fired at that cell!")
                }
                other => writeln!(out, "{}", other),
            },
            GameEvent::Rejected {
                by: Side::Computer,
                error,
            } => writeln!(out, "Computer's shot refused: {}", error),
            GameEvent::InvalidInput(InputError::WrongTokenCount(_)) => {
                writeln!(out, "Please enter exactly 2 coordinates.")
            }
            GameEvent::InvalidInput(InputError::NotANumber(_)) => {
                writeln!(out, "Please enter 2 numbers.")
            }
            GameEvent::Finished { winner: Side::Human } => writeln!(out, "You won!"),
            GameEvent::Finished {
                winner: Side::Computer,
            } => writeln!(out, "You lost!"),
        }
    }
}
