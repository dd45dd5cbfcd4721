#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use seabattle::{Board, Coordinate, GameEvent, Orientation, Player, Ship, Side, Terminal};

/// Terminal fed from a fixed list of lines that records everything announced.
#[derive(Default)]
pub struct ScriptedTerminal {
    pub lines: VecDeque<String>,
    pub events: Vec<GameEvent>,
    pub renders: usize,
}

impl ScriptedTerminal {
    pub fn with_lines(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl Terminal for ScriptedTerminal {
    fn read_coordinates(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn render(&mut self, _title: &str, _board: &Board) -> io::Result<()> {
        self.renders += 1;
        Ok(())
    }

    fn announce(&mut self, event: &GameEvent) -> io::Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}

/// Player that fires at a fixed list of targets.
pub struct ScriptedPlayer {
    pub side: Side,
    pub targets: VecDeque<Coordinate>,
}

impl ScriptedPlayer {
    pub fn new(side: Side, targets: &[(i32, i32)]) -> Self {
        Self {
            side,
            targets: targets.iter().map(|&t| t.into()).collect(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn choose_target(&mut self, _terminal: &mut dyn Terminal) -> anyhow::Result<Coordinate> {
        self.targets
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script ran out of targets"))
    }
}

/// Board holding the given ships, already frozen for play.
pub fn board_with(ships: &[((i32, i32), usize, Orientation)]) -> Board {
    let mut board = Board::new();
    for &(origin, length, orientation) in ships {
        board
            .add_ship(Ship::new(origin.into(), length, orientation))
            .unwrap();
    }
    board.begin();
    board
}

/// Every cell of the board in row-major order, as one-based input lines.
pub fn all_cells_as_input() -> Vec<String> {
    let mut lines = Vec::new();
    for x in 1..=seabattle::BOARD_SIZE {
        for y in 1..=seabattle::BOARD_SIZE {
            lines.push(format!("{} {}", x, y));
        }
    }
    lines
}
