//! Turn engine: alternates shots between two sides until one fleet is gone.

use alloc::boxed::Box;
use core::fmt;
use log::{debug, info};

use crate::board::Board;
use crate::common::{Coordinate, ShotOutcome};
use crate::config::MAX_REJECTED_SHOTS;
use crate::player::MoveSource;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
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

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "first side"),
            Side::Second => write!(f, "second side"),
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// What happened during one call to [`TurnEngine::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Coordinates refused before `target` was accepted.
    pub rejected: usize,
}

struct Seat {
    board: Board,
    source: Box<dyn MoveSource>,
    shots: usize,
}

/// Core game loop holding both boards and both move sources.
///
/// Each side owns one board and fires at the other. A hit or a sink keeps the
/// turn with the shooter; a miss passes it on.
pub struct TurnEngine {
    seats: [Seat; 2],
    active: Side,
    pending_repeat: bool,
    status: GameStatus,
}

impl TurnEngine {
    /// Create an engine where `First` moves first.
    pub fn new(
        first_board: Board,
        first_source: Box<dyn MoveSource>,
        second_board: Board,
        second_source: Box<dyn MoveSource>,
    ) -> Self {
        let seat = |board: Board, source: Box<dyn MoveSource>| Seat {
            board,
            source,
            shots: 0,
        };
        Self {
            seats: [
                seat(first_board, first_source),
                seat(second_board, second_source),
            ],
            active: Side::First,
            pending_repeat: false,
            status: GameStatus::InProgress,
        }
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.seats[side.index()].board
    }

    /// Mutable board access, e.g. to toggle concealment.
    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        &mut self.seats[side.index()].board
    }

    /// Side whose move comes next.
    pub fn active_side(&self) -> Side {
        self.active
    }

    /// `true` if the active side earned its move with a hit.
    pub fn pending_repeat(&self) -> bool {
        self.pending_repeat
    }

    /// Legal shots fired by `side` so far.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.seats[side.index()].shots
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Won(side) => Some(side),
            GameStatus::InProgress => None,
        }
    }

    /// Let the active side make one legal shot and advance the turn.
    pub fn play_turn(&mut self) -> anyhow::Result<TurnReport> {
        if let GameStatus::Won(side) = self.status {
            return Err(anyhow::anyhow!("game already won by the {}", side));
        }
        let side = self.active;
        let [first, second] = &mut self.seats;
        let (shooter, target_seat) = match side {
            Side::First => (first, second),
            Side::Second => (second, first),
        };

        let mut rejected = 0;
        let (target, outcome) = loop {
            let target = shooter.source.request_coordinate()?;
            match target_seat.board.fire_at(target) {
                Ok(outcome) => break (target, outcome),
                Err(err) => {
                    debug!("{} rejected at {}: {}", side, target, err);
                    shooter.source.shot_rejected(target, &err);
                    rejected += 1;
                    if rejected >= MAX_REJECTED_SHOTS {
                        return Err(anyhow::anyhow!(
                            "{} made {} illegal shots in a row",
                            side,
                            rejected
                        ));
                    }
                }
            }
        };
        shooter.shots += 1;
        shooter.source.shot_resolved(target, outcome);
        debug!("{} fired at {}: {:?}", side, target, outcome);

        self.advance(side, outcome);
        Ok(TurnReport {
            side,
            target,
            outcome,
            rejected,
        })
    }

    /// Play turns until a side wins and return it.
    pub fn run(&mut self) -> anyhow::Result<Side> {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            self.play_turn()?;
        }
    }

    fn advance(&mut self, shooter: Side, outcome: ShotOutcome) {
        // the shooter's win is checked before anything else
        if self.board(shooter.opponent()).is_defeated() {
            self.finish(shooter);
            return;
        }
        if self.board(shooter).is_defeated() {
            self.finish(shooter.opponent());
            return;
        }
        if outcome.grants_extra_shot() {
            self.pending_repeat = true;
        } else {
            self.pending_repeat = false;
            self.active = shooter.opponent();
        }
    }

    fn finish(&mut self, winner: Side) {
        info!(
            "{} wins after {} shots",
            winner,
            self.shots_fired(winner)
        );
        self.status = GameStatus::Won(winner);
        self.pending_repeat = false;
    }
}
