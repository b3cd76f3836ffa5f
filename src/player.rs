use rand::rngs::SmallRng;

use crate::{
    board::{Board, OpponentView},
    common::{BoardError, CellState, Point},
};

/// Interface implemented by automated players.
pub trait Player {
    /// Clear the board and place a complete fleet on it.
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next cell to shoot on the opponent's board.
    fn select_shot(&mut self, rng: &mut SmallRng, view: OpponentView<'_>) -> Option<Point>;

    /// Inform the player of the state of the cell it just shot.
    fn report_result(&mut self, _shot: Point, _outcome: CellState) {}

    /// Forget everything learned during the previous game.
    fn reset(&mut self) {}
}
