pub const BOARD_SIZE: i32 = 6;
pub const NUM_SHIPS: usize = 7;
/// Ship lengths placed on every board, largest first.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments used in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed for a single board before it is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Number of fresh boards tried before generation gives up for good.
pub const MAX_GENERATION_RETRIES: usize = 1000;

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV_VAR: &str = "SEABATTLE_LOG";
