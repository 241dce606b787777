//! Random fleet placement with bounded retries.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coordinate};
use crate::config::{BOARD_SIZE, FLEET, MAX_BOARD_ATTEMPTS, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

/// Returned when no board could be built within the attempt budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// Every whole-board attempt ran out of placement attempts.
    Exhausted { board_attempts: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Exhausted { board_attempts } => write!(
                f,
                "Unable to place the fleet after {} board attempts",
                board_attempts
            ),
        }
    }
}

impl core::error::Error for GenerateError {}

/// Builds boards with a randomly placed fleet.
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    size: i32,
    fleet: Vec<usize>,
    max_placement_attempts: usize,
    max_board_attempts: usize,
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::new(BOARD_SIZE, &FLEET)
    }
}

impl BoardGenerator {
    /// Generator for a `size`×`size` board holding ships of the given lengths.
    pub fn new(size: i32, fleet: &[usize]) -> Self {
        Self {
            size,
            fleet: fleet.to_vec(),
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_board_attempts: MAX_BOARD_ATTEMPTS,
        }
    }

    /// Override the per-board placement budget.
    pub fn with_placement_attempts(mut self, attempts: usize) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    /// Override the number of whole-board attempts made by [`Self::generate`].
    pub fn with_board_attempts(mut self, attempts: usize) -> Self {
        self.max_board_attempts = attempts;
        self
    }

    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// One board attempt. Returns `None` once the placement budget is spent.
    ///
    /// A successful board has already left setup and is ready for shots.
    pub fn try_generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Board> {
        let mut board = Board::new(self.size);
        let mut attempts = 0;
        for &length in &self.fleet {
            loop {
                attempts += 1;
                if attempts > self.max_placement_attempts {
                    debug!("placement budget of {} spent", self.max_placement_attempts);
                    return None;
                }
                let ship = self.random_ship(rng, length);
                match board.place_ship(ship) {
                    Ok(()) => break,
                    Err(BoardError::OutOfBounds | BoardError::Overlap) => continue,
                    Err(err @ (BoardError::EmptyShip
                    | BoardError::AlreadyTargeted
                    | BoardError::SetupClosed)) => {
                        debug!("fleet cannot be placed: {}", err);
                        return None;
                    }
                }
            }
        }
        board.begin();
        Some(board)
    }

    /// Retry [`Self::try_generate`] with fresh boards until one succeeds.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, GenerateError> {
        for attempt in 1..=self.max_board_attempts {
            if let Some(board) = self.try_generate(rng) {
                debug!("board generated on attempt {}", attempt);
                return Ok(board);
            }
        }
        warn!(
            "gave up generating a {}x{} board for fleet {:?}",
            self.size, self.size, self.fleet
        );
        Err(GenerateError::Exhausted {
            board_attempts: self.max_board_attempts,
        })
    }

    fn random_ship<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> Ship {
        let span = self.size.max(1);
        let origin = Coordinate::new(rng.random_range(0..span), rng.random_range(0..span));
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Ship::new(origin, length, orientation)
    }
}
