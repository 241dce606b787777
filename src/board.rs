//! Game board state: ship placement, shot resolution and rendering.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use log::debug;

use crate::common::{BoardError, Coordinate, ShotOutcome};
use crate::ship::Ship;

/// What a single cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    /// Intact hull cell.
    Ship,
    /// Damaged hull cell of a ship still afloat.
    Hit,
    /// Hull cell of a sunk ship.
    Sunk,
    /// Missed shot, or water revealed around a sunk ship.
    Miss,
}

impl CellState {
    /// Single-character symbol; intact hulls read as water when `concealed`.
    pub fn symbol(self, concealed: bool) -> char {
        match self {
            CellState::Empty => 'o',
            CellState::Ship if concealed => 'o',
            CellState::Ship => '■',
            CellState::Hit | CellState::Sunk => 'X',
            CellState::Miss => '·',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Setup,
    Battle,
}

/// Square board owning its ships.
///
/// `occupied` is the single gatekeeper for legality: during setup it holds
/// every hull cell plus its 8-neighborhood, during battle it holds every
/// targeted cell plus the revealed rings around sunk ships.
#[derive(Clone)]
pub struct Board {
    size: i32,
    cells: Vec<CellState>,
    ships: Vec<Ship>,
    occupied: BTreeSet<Coordinate>,
    destroyed: usize,
    concealed: bool,
    phase: Phase,
}

impl Board {
    /// Create an empty `size`×`size` board in setup phase.
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        Board {
            size,
            cells: vec![CellState::Empty; (size * size) as usize],
            ships: Vec::new(),
            occupied: BTreeSet::new(),
            destroyed: 0,
            concealed: false,
            phase: Phase::Setup,
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// `true` if `c` lies on the board.
    pub fn contains(&self, c: Coordinate) -> bool {
        (0..self.size).contains(&c.row) && (0..self.size).contains(&c.col)
    }

    /// State of the cell at `c`, or `None` off the board.
    pub fn cell(&self, c: Coordinate) -> Option<CellState> {
        self.index(c).map(|i| self.cells[i])
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// `true` if `c` may no longer receive a ship (setup) or a shot (battle).
    pub fn is_occupied(&self, c: Coordinate) -> bool {
        self.occupied.contains(&c)
    }

    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    /// Hide intact ship cells when rendering.
    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// `true` while ships may still be placed.
    pub fn in_setup(&self) -> bool {
        self.phase == Phase::Setup
    }

    /// Place `ship`, reserving its hull and the ring around it.
    ///
    /// Validates every hull cell before touching any state, so a failed
    /// placement leaves the board unchanged.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if self.phase != Phase::Setup {
            return Err(BoardError::SetupClosed);
        }
        if ship.length() == 0 {
            return Err(BoardError::EmptyShip);
        }
        for cell in ship.hull() {
            if !self.contains(cell) {
                return Err(BoardError::OutOfBounds);
            }
            if self.occupied.contains(&cell) {
                return Err(BoardError::Overlap);
            }
        }

        for cell in ship.hull() {
            self.set_cell(cell, CellState::Ship);
            self.occupied.insert(cell);
        }
        // buffer pass only after the whole hull is committed
        let buffer: Vec<Coordinate> = ship
            .hull()
            .flat_map(Coordinate::neighborhood)
            .filter(|c| self.contains(*c))
            .collect();
        self.occupied.extend(buffer);
        debug!("placed {:?}", ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Close setup and forget the placement reservations.
    pub fn begin(&mut self) {
        if self.phase == Phase::Setup {
            self.occupied.clear();
            self.phase = Phase::Battle;
        }
    }

    /// Fire at `target` and report what it struck.
    ///
    /// The first shot on a board still in setup closes setup.
    pub fn fire_at(&mut self, target: Coordinate) -> Result<ShotOutcome, BoardError> {
        if !self.contains(target) {
            return Err(BoardError::OutOfBounds);
        }
        self.begin();
        if self.occupied.contains(&target) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.occupied.insert(target);

        let Some(index) = self.ships.iter().position(|s| s.is_hit_by(target)) else {
            self.set_cell(target, CellState::Miss);
            debug!("shot at {} missed", target);
            return Ok(ShotOutcome::Miss);
        };

        if !self.ships[index].take_hit() {
            self.set_cell(target, CellState::Hit);
            debug!("shot at {} hit {:?}", target, self.ships[index]);
            return Ok(ShotOutcome::Hit);
        }

        self.destroyed += 1;
        let ship = self.ships[index];
        for cell in ship.hull() {
            self.set_cell(cell, CellState::Sunk);
        }
        self.reveal_ring(&ship);
        debug!("shot at {} sank {:?}", target, ship);
        Ok(ShotOutcome::Sunk)
    }

    /// Returns `true` when all ships are sunk.
    pub fn is_defeated(&self) -> bool {
        self.destroyed == self.ships.len()
    }

    // Placement keeps ships apart, so the ring never covers another hull.
    fn reveal_ring(&mut self, ship: &Ship) {
        let ring: Vec<Coordinate> = ship
            .hull()
            .flat_map(Coordinate::neighborhood)
            .filter(|c| self.contains(*c) && !ship.is_hit_by(*c))
            .collect();
        for cell in ring {
            debug_assert!(
                matches!(self.cell(cell), Some(CellState::Empty | CellState::Miss)),
                "ring of a sunk ship touches another hull at {:?}",
                cell
            );
            self.set_cell(cell, CellState::Miss);
            self.occupied.insert(cell);
        }
    }

    fn index(&self, c: Coordinate) -> Option<usize> {
        self.contains(c).then(|| (c.row * self.size + c.col) as usize)
    }

    fn set_cell(&mut self, c: Coordinate, state: CellState) {
        if let Some(i) = self.index(c) {
            self.cells[i] = state;
        }
    }
}

/// Renders the grid with one-based row and column labels.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for col in 1..=self.size {
            write!(f, " {} |", col)?;
        }
        for row in 0..self.size {
            write!(f, "\n{} |", row + 1)?;
            for col in 0..self.size {
                let state = self.cells[(row * self.size + col) as usize];
                write!(f, " {} |", state.symbol(self.concealed))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  ships: {:?},\n  destroyed: {},\n  occupied: {},\n  phase: {:?}\n}}",
            self.size,
            self.ships,
            self.destroyed,
            self.occupied.len(),
            self.phase
        )
    }
}
