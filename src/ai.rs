// Hunt/target shot selection against an opponent board.
// Only the opponent view is consulted, never the ship list.

use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use crate::{
    board::OpponentView,
    common::{CellState, Point},
    config::{GRID_SIZE, HUNT_SAMPLE_LIMIT},
};

/// Hits on a ship that is still afloat. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitTrail {
    first: Point,
    rest: Vec<Point>,
}

impl HitTrail {
    pub fn new(first: Point) -> Self {
        HitTrail {
            first,
            rest: Vec::new(),
        }
    }

    pub fn push(&mut self, hit: Point) {
        self.rest.push(hit);
    }

    pub fn hit_count(&self) -> usize {
        1 + self.rest.len()
    }

    /// Hits sorted by row, then column.
    pub fn sorted(&self) -> Vec<Point> {
        let mut hits = Vec::with_capacity(self.hit_count());
        hits.push(self.first);
        hits.extend_from_slice(&self.rest);
        hits.sort();
        hits
    }

    /// Cells worth shooting next, best first. May be off-grid or already
    /// shot; those come back as `None` or are filtered by the caller.
    pub fn candidates(&self) -> Vec<Option<Point>> {
        if self.rest.is_empty() {
            let h = self.first;
            // down, up, right, left
            return [(1, 0), (-1, 0), (0, 1), (0, -1)]
                .iter()
                .map(|&(dr, dc)| h.offset(dr, dc))
                .collect();
        }
        let hits = self.sorted();
        let (first, last) = (hits[0], hits[hits.len() - 1]);
        if first.row == last.row {
            [first.offset(0, -1), last.offset(0, 1)].into()
        } else if first.col == last.col {
            [first.offset(-1, 0), last.offset(1, 0)].into()
        } else {
            Vec::new()
        }
    }
}

/// Current strategy of the decision engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Random search for any ship.
    #[default]
    Hunting,
    /// Working around hits on one ship.
    Targeting(HitTrail),
}

impl Mode {
    /// Next cell to shoot. Falls back to hunting, for good, when the trail
    /// has no open extension. `None` only if every cell was already shot.
    pub fn select_shot<R: Rng + ?Sized>(
        &mut self,
        view: &OpponentView<'_>,
        rng: &mut R,
    ) -> Option<Point> {
        if let Mode::Targeting(trail) = self {
            let next = trail
                .candidates()
                .into_iter()
                .flatten()
                .find(|&p| !view.is_targeted(p));
            if next.is_some() {
                return next;
            }
            debug!("no open cell around {:?}, back to hunting", trail.sorted());
            *self = Mode::Hunting;
        }
        hunt(view, rng)
    }

    /// Feeds back the state of the cell after the last shot.
    pub fn report_result(&mut self, shot: Point, outcome: CellState) {
        match outcome {
            CellState::Hit => match *self {
                Mode::Hunting => {
                    debug!("hit at {}, targeting", shot);
                    *self = Mode::Targeting(HitTrail::new(shot));
                }
                Mode::Targeting(ref mut trail) => trail.push(shot),
            },
            CellState::Sunk if matches!(self, Mode::Targeting(_)) => {
                debug!("target sunk at {}, hunting", shot);
                *self = Mode::Hunting;
            }
            _ => {}
        }
    }
}

/// Uniform pick among untargeted cells. Rejection-samples first and scans
/// the grid only when sampling keeps landing on shot cells.
pub fn hunt<R: Rng + ?Sized>(view: &OpponentView<'_>, rng: &mut R) -> Option<Point> {
    for _ in 0..HUNT_SAMPLE_LIMIT {
        let p = Point {
            row: rng.random_range(0..GRID_SIZE),
            col: rng.random_range(0..GRID_SIZE),
        };
        if !view.is_targeted(p) {
            return Some(p);
        }
    }
    let open: Vec<Point> = view.untargeted().collect();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}
