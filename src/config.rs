/// Side length of the square playing field.
pub const BOARD_SIZE: i32 = 6;

/// Ship lengths of the standard fleet, placed in this order.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Placement attempts allowed for one board before it is thrown away.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Whole-board attempts made by [`crate::BoardGenerator::generate`].
pub const MAX_BOARD_ATTEMPTS: usize = 1000;

/// Rejected shots tolerated within a single turn before the engine gives up.
pub const MAX_REJECTED_SHOTS: usize = 10_000;

/// Default pause before the computer announces its move.
pub const AI_THINK_DELAY_MS: u64 = 3000;

/// Total number of hull cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < FLEET.len() {
        total += FLEET[i];
        i += 1;
    }
    total
};
