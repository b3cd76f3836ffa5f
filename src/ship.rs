//! Ship definitions: position, orientation, damage.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::Point;
use crate::config::GRID_SIZE;

/// Occupancy mask on the configured grid.
pub type Footprint = BitBoard<u128, GRID_SIZE>;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A ship: `length` contiguous cells from `start` along `orientation`.
///
/// A freshly built ship may not fit on the grid; `footprint` tells.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    start: Point,
    length: usize,
    orientation: Orientation,
    hits: usize,
    sunk: bool,
}

impl Ship {
    /// New undamaged ship. `length` must be at least 1.
    pub fn new(start: Point, length: usize, orientation: Orientation) -> Self {
        debug_assert!(length >= 1, "ship length must be positive");
        Ship {
            start,
            length,
            orientation,
            hits: 0,
            sunk: false,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Whether the whole ship lies inside the grid.
    pub fn fits(&self) -> bool {
        if self.length == 0 {
            return false;
        }
        let (dr, dc) = self.orientation.step();
        let end = |start: usize, step: usize| {
            step.checked_mul(self.length - 1)
                .and_then(|span| start.checked_add(span))
        };
        matches!(end(self.start.row, dr), Some(r) if r < GRID_SIZE)
            && matches!(end(self.start.col, dc), Some(c) if c < GRID_SIZE)
    }

    /// Cells covered by the ship, or `None` if it sticks out of the grid.
    pub fn cells(&self) -> Option<impl Iterator<Item = Point>> {
        if !self.fits() {
            return None;
        }
        let (dr, dc) = self.orientation.step();
        let start = self.start;
        Some((0..self.length).map(move |i| Point {
            row: start.row + dr * i,
            col: start.col + dc * i,
        }))
    }

    /// Occupancy mask of the ship, or `None` if it sticks out of the grid.
    pub fn footprint(&self) -> Option<Footprint> {
        Footprint::from_cells(self.cells()?.map(|p| (p.row, p.col))).ok()
    }

    /// Whether `p` is one of the ship's cells.
    pub fn contains(&self, p: Point) -> bool {
        let (s, len) = (self.start, self.length);
        match self.orientation {
            Orientation::Horizontal => p.row == s.row && p.col >= s.col && p.col - s.col < len,
            Orientation::Vertical => p.col == s.col && p.row >= s.row && p.row - s.row < len,
        }
    }

    pub(crate) fn register_hit(&mut self) {
        self.hits = (self.hits + 1).min(self.length);
    }

    /// Marks the ship sunk if every segment is hit. Returns `true` only on
    /// the transition.
    pub(crate) fn settle(&mut self) -> bool {
        if !self.sunk && self.hits >= self.length {
            self.sunk = true;
            true
        } else {
            false
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ start: {}, length: {}, orientation: {:?}, hits: {}, sunk: {} }}",
            self.start, self.length, self.orientation, self.hits, self.sunk,
        )
    }
}
