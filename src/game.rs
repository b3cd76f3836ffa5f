//! A game session: two boards, who controls each side, and turn order.

use alloc::boxed::Box;

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{CellState, GameError, Point},
    config::{FLEET, FLEET_SIZE},
    player::Player,
    player_ai::AiPlayer,
    ship::{Orientation, Ship},
};

/// Who plays whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameMode {
    /// Human on the first side, computer on the second.
    HumanVsComputer,
    HumanVsHuman,
    ComputerVsComputer,
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Phase {
    /// The given side is placing its fleet by hand.
    Placement(Side),
    /// The given side is to shoot.
    Battle(Side),
    Over { winner: Side },
}

enum Controller {
    Human,
    Computer(Box<dyn Player>),
}

/// Runs one computer turn against `target`: select a shot, resolve it and
/// report the resulting cell state back to `player`.
///
/// Returns the shot and what the cell reads afterwards (`Hit`, `Miss` or
/// `Sunk`), or `None` if nothing is left to shoot at.
pub fn take_shot<P: Player + ?Sized>(
    player: &mut P,
    rng: &mut SmallRng,
    target: &mut Board,
) -> Option<(Point, CellState)> {
    let shot = player.select_shot(rng, target.opponent_view())?;
    target.resolve_shot(shot);
    let feedback = target.shot_feedback(shot);
    player.report_result(shot, feedback);
    Some((shot, feedback))
}

/// Session state for one match and its rematches.
pub struct Game {
    mode: GameMode,
    boards: [Board; 2],
    controllers: [Controller; 2],
    shots: [usize; 2],
    phase: Phase,
    rng: SmallRng,
}

impl Game {
    /// Starts a session. Computer fleets are placed right away; the first
    /// human side then places its fleet.
    pub fn new(mode: GameMode, rng: SmallRng) -> Result<Self, GameError> {
        let computer = || Controller::Computer(Box::new(AiPlayer::new()));
        let controllers = match mode {
            GameMode::HumanVsComputer => [Controller::Human, computer()],
            GameMode::HumanVsHuman => [Controller::Human, Controller::Human],
            GameMode::ComputerVsComputer => [computer(), computer()],
        };
        let mut game = Game {
            mode,
            boards: [Board::new(), Board::new()],
            controllers,
            shots: [0; 2],
            phase: Phase::Placement(Side::First),
            rng,
        };
        game.new_game()?;
        Ok(game)
    }

    /// Clears both boards and player memory and starts over. The random
    /// generator carries on from where it was.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.shots = [0; 2];
        for (board, controller) in self.boards.iter_mut().zip(self.controllers.iter_mut()) {
            board.reset();
            if let Controller::Computer(player) = controller {
                player.reset();
                player.place_fleet(&mut self.rng, board)?;
            }
        }
        self.phase = self.after_placement(None);
        debug!("new {:?} game, phase {:?}", self.mode, self.phase);
        Ok(())
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Number of shots `side` has fired this game.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    pub fn is_human(&self, side: Side) -> bool {
        matches!(self.controllers[side.index()], Controller::Human)
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Over { winner } => Some(winner),
            _ => None,
        }
    }

    /// Length of the next ship to place by hand, during placement.
    pub fn next_ship_length(&self) -> Option<usize> {
        match self.phase {
            Phase::Placement(side) => FLEET.get(self.board(side).ships().len()).copied(),
            _ => None,
        }
    }

    /// Places the next fleet ship of the side in placement. Returns the
    /// phase after the placement.
    pub fn place_ship(&mut self, start: Point, orientation: Orientation) -> Result<Phase, GameError> {
        let Phase::Placement(side) = self.phase else {
            return Err(GameError::WrongPhase);
        };
        let length = self.next_ship_length().ok_or(GameError::WrongPhase)?;
        let board = &mut self.boards[side.index()];
        board.try_place(Ship::new(start, length, orientation))?;
        if board.ships().len() == FLEET_SIZE {
            self.phase = self.after_placement(Some(side));
            debug!("{:?} fleet complete, phase {:?}", side, self.phase);
        }
        Ok(self.phase)
    }

    /// First phase after `done` finished placing: the next human side that
    /// still needs a fleet, or battle with the first side to move.
    fn after_placement(&self, done: Option<Side>) -> Phase {
        let pending: &[Side] = match done {
            None => &[Side::First, Side::Second],
            Some(Side::First) => &[Side::Second],
            Some(Side::Second) => &[],
        };
        pending
            .iter()
            .copied()
            .find(|&side| self.is_human(side) && self.board(side).ships().len() < FLEET_SIZE)
            .map(Phase::Placement)
            .unwrap_or(Phase::Battle(Side::First))
    }

    /// A human shot at the opponent's board.
    ///
    /// Returns the target cell's state afterwards. Shooting an already
    /// shot cell changes nothing and keeps the turn. A hit keeps the turn,
    /// even when it sinks a ship; a miss hands it over.
    pub fn fire(&mut self, target: Point) -> Result<CellState, GameError> {
        let Phase::Battle(side) = self.phase else {
            return Err(GameError::WrongPhase);
        };
        if !self.is_human(side) {
            return Err(GameError::NotHumanTurn);
        }
        let board = &mut self.boards[side.opponent().index()];
        if board.cell(target).is_targeted() {
            return Ok(board.cell(target));
        }
        let outcome = board.resolve_shot(target);
        let feedback = board.shot_feedback(target);
        self.shots[side.index()] += 1;
        self.finish_shot(side, outcome != CellState::Hit);
        Ok(feedback)
    }

    /// Lets the computer side to move take its shot.
    ///
    /// The turn passes after a miss or a sinking hit.
    pub fn play_computer_turn(&mut self) -> Result<(Point, CellState), GameError> {
        let Phase::Battle(side) = self.phase else {
            return Err(GameError::WrongPhase);
        };
        let Controller::Computer(player) = &mut self.controllers[side.index()] else {
            return Err(GameError::NotComputerTurn);
        };
        let target = &mut self.boards[side.opponent().index()];
        let (shot, feedback) =
            take_shot(player.as_mut(), &mut self.rng, target).ok_or(GameError::NoTargetsLeft)?;
        self.shots[side.index()] += 1;
        self.finish_shot(side, matches!(feedback, CellState::Miss | CellState::Sunk));
        Ok((shot, feedback))
    }

    fn finish_shot(&mut self, shooter: Side, pass_turn: bool) {
        if self.board(shooter.opponent()).is_defeated() {
            self.phase = Phase::Over { winner: shooter };
            info!(
                "{:?} wins after {} shots",
                shooter,
                self.shots_fired(shooter)
            );
        } else if pass_turn {
            self.phase = Phase::Battle(shooter.opponent());
            debug!("{:?} to move", shooter.opponent());
        }
    }
}
