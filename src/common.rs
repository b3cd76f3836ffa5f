//! Common types: grid coordinates, cell states and board errors.

use crate::config::GRID_SIZE;

/// A cell coordinate on the grid. Always in bounds.
///
/// Ordering is by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Point {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

impl Point {
    /// Returns `None` when (`row`, `col`) lies outside the grid.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Point { row, col })
        } else {
            None
        }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// The point `dr` rows and `dc` columns away, if it is still on the grid.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Point::new(row, col)
    }

    /// Every point of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Point> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Point { row, col }))
    }
}

impl core::fmt::Display for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a single grid cell.
///
/// The variant order matters: every state at or above `Hit` has already
/// been shot at, while `Empty` and `Ship` both read as untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
    Sunk,
}

impl CellState {
    /// Whether a shot has already landed on this cell.
    pub fn is_targeted(self) -> bool {
        self >= CellState::Hit
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship footprint leaves the grid.
    ShipOutOfBounds,
    /// Ship footprint overlaps or touches (diagonals included) another ship.
    ShipTouches,
    /// Random placement found no legal spot.
    UnableToPlaceShip,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipTouches => write!(f, "Ship placement touches another ship"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by Game session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Operation does not apply to the current phase.
    WrongPhase,
    /// The side to move is controlled by the computer.
    NotHumanTurn,
    /// The side to move is controlled by a human.
    NotComputerTurn,
    /// Every cell of the opponent's board has already been shot.
    NoTargetsLeft,
    /// Placement rejected by the board.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::WrongPhase => write!(f, "Not allowed in the current game phase"),
            GameError::NotHumanTurn => write!(f, "It is the computer's turn"),
            GameError::NotComputerTurn => write!(f, "It is a human player's turn"),
            GameError::NoTargetsLeft => write!(f, "No untargeted cells left"),
            GameError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
