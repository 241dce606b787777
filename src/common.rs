//! Common types for Sea Battle: coordinates, shot outcomes and board errors.

use core::fmt;

/// A cell position on the board, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by (`d_row`, `d_col`).
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// The 3x3 block centered on this coordinate, itself included.
    pub fn neighborhood(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| self.offset(dr, dc)))
    }
}

/// Shown the way players type it: one-based "row col".
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Result of a legal shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot damaged a ship that is still afloat.
    Hit,
    /// Shot destroyed the last intact cell of a ship.
    Sunk,
    /// Shot landed in open water.
    Miss,
}

impl ShotOutcome {
    /// Hits and sinks earn the shooter another move.
    pub fn grants_extra_shot(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by Board operations. None of them are fatal to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the playing field.
    OutOfBounds,
    /// Ship would overlap or touch a ship already on the board.
    Overlap,
    /// Cell was already shot at, or sits in the ring of a sunk ship.
    AlreadyTargeted,
    /// Ship has no cells and could never be sunk.
    EmptyShip,
    /// Ships can no longer be added once shooting has started.
    SetupClosed,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Out of playing board!"),
            BoardError::Overlap => write!(f, "Ship placement touches or overlaps another ship"),
            BoardError::AlreadyTargeted => write!(f, "Already shot at this position!"),
            BoardError::EmptyShip => write!(f, "Ships need at least one cell"),
            BoardError::SetupClosed => write!(f, "Ships cannot be placed after the first shot"),
        }
    }
}

impl core::error::Error for BoardError {}
