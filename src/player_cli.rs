use anyhow::anyhow;
use thiserror::Error;

use crate::coord::Coordinate;
use crate::game::Side;
use crate::player::Player;
use crate::terminal::{GameEvent, Terminal};

/// Why a line typed by the human is not a coordinate pair.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("expected 2 coordinates, got {0}")]
    WrongTokenCount(usize),
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Parse a line of the form `"<row> <column>"` with one-based numbers.
///
/// The numbers are not range checked; the board rejects off-board targets.
pub fn parse_coordinates(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens[..] else {
        return Err(InputError::WrongTokenCount(tokens.len()));
    };
    let parse = |token: &str| {
        token
            .parse::<i32>()
            .map_err(|_| InputError::NotANumber(token.to_string()))
    };
    Ok(Coordinate::new(
        parse(row)?.saturating_sub(1),
        parse(col)?.saturating_sub(1),
    ))
}

/// Player driven by a person at the terminal.
#[derive(Debug, Default)]
pub struct HumanPlayer;

impl HumanPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for HumanPlayer {
    fn side(&self) -> Side {
        Side::Human
    }

    fn choose_target(&mut self, terminal: &mut dyn Terminal) -> anyhow::Result<Coordinate> {
        loop {
            let Some(line) = terminal.read_coordinates()? else {
                return Err(anyhow!("input closed before the game finished"));
            };
            match parse_coordinates(&line) {
                Ok(coord) => return Ok(coord),
                Err(e) => terminal.announce(&GameEvent::InvalidInput(e))?,
            }
        }
    }
}
