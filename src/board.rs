//! One player's board: cell grid, fleet, and the rules that mutate them.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::common::{BoardError, CellState, Point};
use crate::config::{FLEET_SIZE, GRID_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Footprint, Orientation, Ship};

/// Raw cell grid, indexed `[row][col]`.
pub type Grid = [[CellState; GRID_SIZE]; GRID_SIZE];

/// Ground truth for one player's fleet.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    ships: Vec<Ship>,
    /// Index into `ships` of the ship covering each cell.
    owners: [[Option<u8>; GRID_SIZE]; GRID_SIZE],
    sunk_count: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board: all cells empty, no ships.
    pub fn new() -> Self {
        Board {
            grid: [[CellState::Empty; GRID_SIZE]; GRID_SIZE],
            ships: Vec::with_capacity(FLEET_SIZE),
            owners: [[None; GRID_SIZE]; GRID_SIZE],
            sunk_count: 0,
        }
    }

    /// Back to the freshly created state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn cell(&self, p: Point) -> CellState {
        self.grid[p.row][p.col]
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Index of the ship covering `p`, if any.
    pub fn ship_index_at(&self, p: Point) -> Option<usize> {
        self.owners[p.row][p.col].map(usize::from)
    }

    /// Union of all ship footprints.
    pub fn occupancy(&self) -> Footprint {
        self.ships
            .iter()
            .filter_map(Ship::footprint)
            .fold(Footprint::new(), |acc, f| acc | f)
    }

    /// Read-only view that hides where untouched ships are.
    pub fn opponent_view(&self) -> OpponentView<'_> {
        OpponentView { board: self }
    }

    /// Whether `ship` may be added: it must fit on the grid and neither it
    /// nor any of its eight-way neighbours may be anything but empty.
    pub fn can_place(&self, ship: &Ship) -> bool {
        match ship.footprint() {
            Some(footprint) => footprint
                .dilate()
                .iter_set_bits()
                .all(|(r, c)| self.grid[r][c] == CellState::Empty),
            None => false,
        }
    }

    /// Adds `ship` without checking it. Callers must have seen
    /// `can_place(&ship)` return `true`.
    ///
    /// # Panics
    ///
    /// In debug builds, if `can_place(&ship)` is `false`. Release builds
    /// trust the caller.
    pub fn place(&mut self, ship: Ship) {
        debug_assert!(self.can_place(&ship), "illegal placement {:?}", ship);
        let index = self.ships.len() as u8;
        if let Some(cells) = ship.cells() {
            for p in cells {
                self.grid[p.row][p.col] = CellState::Ship;
                self.owners[p.row][p.col] = Some(index);
            }
        }
        debug!("placed {:?}", ship);
        self.ships.push(ship);
    }

    /// Checked placement.
    pub fn try_place(&mut self, ship: Ship) -> Result<(), BoardError> {
        if !ship.fits() {
            return Err(BoardError::ShipOutOfBounds);
        }
        if !self.can_place(&ship) {
            return Err(BoardError::ShipTouches);
        }
        self.place(ship);
        Ok(())
    }

    /// Draws uniformly random starts and orientations until one is legal for
    /// a ship of `length`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Ship, BoardError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let start = Point {
                row: rng.random_range(0..GRID_SIZE),
                col: rng.random_range(0..GRID_SIZE),
            };
            let orientation = if rng.random() {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            let ship = Ship::new(start, length, orientation);
            if self.can_place(&ship) {
                return Ok(ship);
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Fires at `p`.
    ///
    /// Returns `Hit` or `Miss` for a fresh cell. A hit that completes a ship
    /// still returns `Hit`; the ship's cells then read `Sunk`, see
    /// [`Board::shot_feedback`]. A cell that was already shot is left alone
    /// and its state is returned.
    pub fn resolve_shot(&mut self, p: Point) -> CellState {
        match self.grid[p.row][p.col] {
            CellState::Ship => {
                self.grid[p.row][p.col] = CellState::Hit;
                if let Some(index) = self.ship_index_at(p) {
                    self.ships[index].register_hit();
                }
                self.settle_ships();
                trace!("shot at {} hit", p);
                CellState::Hit
            }
            CellState::Empty => {
                self.grid[p.row][p.col] = CellState::Miss;
                trace!("shot at {} missed", p);
                CellState::Miss
            }
            state => state,
        }
    }

    /// State of `p` after a shot: `Hit`, `Miss` or `Sunk`.
    pub fn shot_feedback(&self, p: Point) -> CellState {
        self.cell(p)
    }

    fn settle_ships(&mut self) {
        for ship in self.ships.iter_mut() {
            if ship.settle() {
                self.sunk_count += 1;
                if let Some(cells) = ship.cells() {
                    for p in cells {
                        self.grid[p.row][p.col] = CellState::Sunk;
                    }
                }
                debug!("sunk {:?}", ship);
            }
        }
    }

    /// `true` once a complete fleet is on the board and all of it is sunk.
    pub fn is_defeated(&self) -> bool {
        !self.ships.is_empty()
            && self.ships.len() == FLEET_SIZE
            && self.sunk_count == self.ships.len()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ sunk: {}, ships: {:?} }}", self.sunk_count, self.ships)?;
        for row in self.grid.iter() {
            for cell in row.iter() {
                let ch = match cell {
                    CellState::Empty => '.',
                    CellState::Ship => 'S',
                    CellState::Hit => 'X',
                    CellState::Miss => 'o',
                    CellState::Sunk => '#',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// What a shooter may know about a board: which cells were shot, and what
/// those shots revealed. Untouched ship cells look like empty water.
#[derive(Clone, Copy)]
pub struct OpponentView<'a> {
    board: &'a Board,
}

impl<'a> OpponentView<'a> {
    pub fn is_targeted(&self, p: Point) -> bool {
        self.board.cell(p).is_targeted()
    }

    /// The revealed state of `p`, or `None` if it was never shot.
    pub fn revealed(&self, p: Point) -> Option<CellState> {
        let state = self.board.cell(p);
        state.is_targeted().then_some(state)
    }

    /// Cells that have not been shot yet, row-major.
    pub fn untargeted(&self) -> impl Iterator<Item = Point> + 'a {
        let board = self.board;
        Point::all().filter(move |&p| !board.cell(p).is_targeted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GRID_CELLS;

    fn pt(row: usize, col: usize) -> Point {
        Point { row, col }
    }

    #[test]
    fn owners_follow_placement_order() {
        let mut board = Board::new();
        board.place(Ship::new(pt(0, 0), 2, Orientation::Horizontal));
        board.place(Ship::new(pt(5, 5), 3, Orientation::Vertical));
        assert_eq!(board.ship_index_at(pt(0, 1)), Some(0));
        assert_eq!(board.ship_index_at(pt(7, 5)), Some(1));
        assert_eq!(board.ship_index_at(pt(4, 5)), None);
        assert_eq!(board.occupancy().count_ones(), 5);
    }

    #[test]
    fn view_hides_ships() {
        let mut board = Board::new();
        board.place(Ship::new(pt(2, 2), 2, Orientation::Horizontal));
        let view = board.opponent_view();
        assert_eq!(view.revealed(pt(2, 2)), None);
        assert_eq!(view.untargeted().count(), GRID_CELLS);
    }
}
