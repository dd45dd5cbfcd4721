//! Game board state: ship placement, shot resolution and cell tracking.

use std::collections::HashSet;

use log::{debug, trace};

use crate::common::{BoardError, PlacementConflict, ShotResult};
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;
use crate::ship::Ship;

const GRID: usize = BOARD_SIZE as usize;

/// What a single cell currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    /// Intact ship segment.
    Ship,
    /// Ship segment that has been shot.
    Hit,
    /// Shot into open water, or a cell known empty around a sunk ship.
    Miss,
    /// Buffer around a placed ship. Plays like `Empty`.
    Blocked,
}

/// One player's board.
///
/// A board is filled with [`Board::add_ship`] during setup, frozen with
/// [`Board::begin`] and afterwards only changes through [`Board::shot`].
#[derive(Debug, Clone)]
pub struct Board {
    cells: [[CellState; GRID]; GRID],
    ships: Vec<Ship>,
    // cells closed to new ships: ship cells plus their buffer; dropped by `begin`
    placement_blocked: HashSet<Coordinate>,
    // cells closed to shots for the rest of the game
    targeted: HashSet<Coordinate>,
    sunk_count: usize,
    revealed: bool,
    frozen: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty, hidden board.
    pub fn new() -> Self {
        Board {
            cells: [[CellState::Empty; GRID]; GRID],
            ships: Vec::new(),
            placement_blocked: HashSet::new(),
            targeted: HashSet::new(),
            sunk_count: 0,
            revealed: false,
            frozen: false,
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> i32 {
        BOARD_SIZE
    }

    /// Returns `true` if `coord` lies outside the board.
    pub fn out(&self, coord: Coordinate) -> bool {
        !((0..BOARD_SIZE).contains(&coord.x) && (0..BOARD_SIZE).contains(&coord.y))
    }

    /// State of the cell at `coord`, or `None` when off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        if self.out(coord) {
            None
        } else {
            Some(self.cells[coord.x as usize][coord.y as usize])
        }
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState; GRID]> {
        self.cells.iter()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Returns `true` when the board holds ships and all of them are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.sunk_count == self.ships.len()
    }

    /// Whether intact ship cells are shown when the board is rendered.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn set_revealed(&mut self, revealed: bool) {
        self.revealed = revealed;
    }

    /// Returns `true` if a shot at `coord` would be refused as a repeat.
    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.targeted.contains(&coord)
    }

    /// Place `ship`, keeping a one-cell buffer free around it.
    ///
    /// Fails without touching the board if the ship has no cells, or if any
    /// ship cell is off the board, already shot at, or inside another ship or
    /// its buffer.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if self.frozen {
            return Err(BoardError::SetupFinished);
        }
        if ship.length() == 0 {
            return Err(BoardError::ShipPlacement {
                cell: ship.origin(),
                reason: PlacementConflict::Empty,
            });
        }
        for cell in ship.cells() {
            let reason = if self.out(cell) {
                PlacementConflict::OffBoard
            } else if self.placement_blocked.contains(&cell) || self.targeted.contains(&cell) {
                PlacementConflict::Occupied
            } else {
                continue;
            };
            return Err(BoardError::ShipPlacement { cell, reason });
        }

        for cell in ship.cells() {
            self.set_cell(cell, CellState::Ship);
            self.placement_blocked.insert(cell);
        }
        self.ships.push(ship);
        self.block_surroundings(self.ships.len() - 1);
        Ok(())
    }

    /// Finish setup. Placement buffers are discarded and no more ships may be added.
    pub fn begin(&mut self) {
        self.frozen = true;
        self.placement_blocked.clear();
        debug!("board frozen with {} ships", self.ships.len());
    }

    /// Fire at `coord`.
    ///
    /// Sinking a ship also closes the cells around it, which are marked as
    /// misses so they show up as a ring of open water.
    pub fn shot(&mut self, coord: Coordinate) -> Result<ShotResult, BoardError> {
        if self.out(coord) {
            return Err(BoardError::OutOfBounds(coord));
        }
        if !self.targeted.insert(coord) {
            return Err(BoardError::AlreadyTargeted(coord));
        }

        let Some(index) = self.ships.iter().position(|s| s.contains(coord)) else {
            self.set_cell(coord, CellState::Miss);
            return Ok(ShotResult::Miss);
        };

        self.set_cell(coord, CellState::Hit);
        if !self.ships[index].register_hit() {
            return Ok(ShotResult::Hit);
        }
        self.sunk_count += 1;
        self.reveal_surroundings(index);
        debug!(
            "ship of length {} sunk, {} of {} down",
            self.ships[index].length(),
            self.sunk_count,
            self.ships.len()
        );
        Ok(ShotResult::Sunk)
    }

    fn set_cell(&mut self, coord: Coordinate, state: CellState) {
        self.cells[coord.x as usize][coord.y as usize] = state;
    }

    fn surroundings(&self, index: usize) -> Vec<Coordinate> {
        self.ships[index]
            .cells()
            .flat_map(Coordinate::neighbours)
            .filter(|c| !self.out(*c))
            .collect()
    }

    fn block_surroundings(&mut self, index: usize) {
        for cell in self.surroundings(index) {
            if self.placement_blocked.insert(cell) && self.cell(cell) == Some(CellState::Empty) {
                self.set_cell(cell, CellState::Blocked);
            }
        }
    }

    fn reveal_surroundings(&mut self, index: usize) {
        for cell in self.surroundings(index) {
            if self.targeted.insert(cell) {
                trace!("closing {:?} next to sunk ship", cell);
                self.set_cell(cell, CellState::Miss);
            }
        }
    }
}
