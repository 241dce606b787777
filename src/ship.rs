//! Ship definitions: a straight line of unit cells anchored at an origin.

use core::fmt;

use crate::common::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Hull grows along the row, column by column.
    Horizontal,
    /// Hull grows down the column, row by row.
    Vertical,
}

/// A ship of `length` cells starting at `origin`.
///
/// Damage is applied by the owning [`crate::Board`]; the ship only keeps the
/// count of cells that are still intact.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Ship {
    /// Create an undamaged ship. Bounds and length are checked when it is placed.
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        Ship {
            origin,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    /// Cells occupied by the ship, starting at the origin.
    pub fn hull(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let origin = self.origin;
        let orientation = self.orientation;
        (0..self.length as i32).map(move |i| match orientation {
            Orientation::Horizontal => origin.offset(0, i),
            Orientation::Vertical => origin.offset(i, 0),
        })
    }

    /// `true` if `target` is one of the hull cells.
    pub fn is_hit_by(&self, target: Coordinate) -> bool {
        self.hull().any(|cell| cell == target)
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Hull cells not yet hit.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    /// Record one hit on a fresh hull cell. Returns `true` if that sank the ship.
    pub(crate) fn take_hit(&mut self) -> bool {
        debug_assert!(self.remaining_hits > 0, "hit registered on a sunk ship");
        self.remaining_hits = self.remaining_hits.saturating_sub(1);
        self.is_sunk()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: ({}, {}), length: {}, orientation: {:?}, remaining: {} }}",
            self.origin.row, self.origin.col, self.length, self.orientation, self.remaining_hits,
        )
    }
}
