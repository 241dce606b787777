use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::common::{BoardError, Coordinate, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::player::MoveSource;

/// Computer opponent firing at random cells it has not tried yet.
pub struct RandomMoveSource {
    rng: SmallRng,
    size: i32,
    tried: BTreeSet<Coordinate>,
    #[cfg(feature = "std")]
    delay: std::time::Duration,
}

impl RandomMoveSource {
    /// Source for the standard board, seeded for reproducible games.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed), BOARD_SIZE)
    }

    pub fn with_rng(rng: SmallRng, size: i32) -> Self {
        Self {
            rng,
            size: size.max(1),
            tried: BTreeSet::new(),
            #[cfg(feature = "std")]
            delay: std::time::Duration::ZERO,
        }
    }

    /// Pause this long before every move, purely for pacing.
    #[cfg(feature = "std")]
    pub fn with_delay(mut self, delay: std::time::Duration) -> Self {
        self.delay = delay;
        self
    }

    fn pick(&mut self) -> Coordinate {
        let open: Vec<Coordinate> = (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| Coordinate::new(row, col)))
            .filter(|c| !self.tried.contains(c))
            .collect();
        match open.choose(&mut self.rng) {
            Some(&c) => c,
            // everything tried; let the board sort it out
            None => Coordinate::new(
                self.rng.random_range(0..self.size),
                self.rng.random_range(0..self.size),
            ),
        }
    }
}

impl MoveSource for RandomMoveSource {
    fn request_coordinate(&mut self) -> anyhow::Result<Coordinate> {
        #[cfg(feature = "std")]
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let target = self.pick();
        debug!("computer picks {}", target);
        Ok(target)
    }

    fn shot_rejected(&mut self, target: Coordinate, _error: &BoardError) {
        self.tried.insert(target);
    }

    fn shot_resolved(&mut self, target: Coordinate, _outcome: ShotOutcome) {
        self.tried.insert(target);
    }
}
