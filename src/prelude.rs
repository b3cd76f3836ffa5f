//! Commonly used types for ease of import.

pub use crate::{
    take_shot, AiPlayer, Board, CellState, Game, GameError, GameMode, Orientation, Phase, Player,
    Point, Ship, Side, FLEET, GRID_CELLS, GRID_SIZE,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
