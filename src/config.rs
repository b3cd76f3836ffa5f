/// Side length of the square grid.
pub const GRID_SIZE: usize = 10;
/// Number of cells on one board.
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Ship lengths of one fleet, in placement order.
pub const FLEET: [usize; 5] = [5, 4, 3, 3, 2];
pub const FLEET_SIZE: usize = FLEET.len();

/// Total number of ship segments in a fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random placement gives up on a single ship after this many rejected draws.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Rejection samples drawn while hunting before falling back to a scan of
/// the untargeted cells.
pub const HUNT_SAMPLE_LIMIT: usize = 64;
