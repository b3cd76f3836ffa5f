use log::debug;
use rand::rngs::SmallRng;

use crate::{
    ai::Mode,
    board::{Board, OpponentView},
    common::{BoardError, CellState, Point},
    config::FLEET,
    player::Player,
};

/// Computer opponent: random legal placement and hunt/target shooting.
#[derive(Debug, Default)]
pub struct AiPlayer {
    mode: Mode,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current hunt/target state.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }
}

impl Player for AiPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        board.reset();
        for &length in FLEET.iter() {
            let ship = board.random_placement(rng, length)?;
            board.place(ship);
        }
        debug!("fleet of {} ships placed", board.ships().len());
        Ok(())
    }

    fn select_shot(&mut self, rng: &mut SmallRng, view: OpponentView<'_>) -> Option<Point> {
        self.mode.select_shot(&view, rng)
    }

    fn report_result(&mut self, shot: Point, outcome: CellState) {
        self.mode.report_result(shot, outcome);
    }

    fn reset(&mut self) {
        self.mode = Mode::Hunting;
    }
}
