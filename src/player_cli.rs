#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};

use log::warn;

use crate::common::{BoardError, Coordinate, ShotOutcome};
use crate::player::MoveSource;

/// Why a line typed by the player is not a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    WrongCount,
    NotNumbers,
    Zero,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongCount => write!(f, "Enter 2 coordinates!"),
            InputError::NotNumbers => write!(f, "Enter numbers!"),
            InputError::Zero => write!(f, "Coordinates start at 1!"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse "row col" given as one-based positive integers.
pub fn parse_coordinate(input: &str) -> Result<Coordinate, InputError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(InputError::WrongCount);
    };
    if !row.bytes().all(|b| b.is_ascii_digit()) || !col.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotNumbers);
    }
    // digits only, so a parse failure means the number does not fit
    let row: i32 = row.parse().map_err(|_| InputError::NotNumbers)?;
    let col: i32 = col.parse().map_err(|_| InputError::NotNumbers)?;
    if row == 0 || col == 0 {
        return Err(InputError::Zero);
    }
    Ok(Coordinate::new(row - 1, col - 1))
}

/// Human player typing moves on a console.
pub struct CliMoveSource<R, W> {
    input: R,
    output: W,
}

impl CliMoveSource<io::StdinLock<'static>, io::Stdout> {
    /// Player reading from stdin and writing to stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliMoveSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> MoveSource for CliMoveSource<R, W> {
    fn request_coordinate(&mut self) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow::anyhow!("input closed before a move was entered"));
            }
            match parse_coordinate(&line) {
                Ok(target) => return Ok(target),
                Err(e) => writeln!(self.output, " {} ", e)?,
            }
        }
    }

    fn shot_rejected(&mut self, _target: Coordinate, error: &BoardError) {
        if let Err(e) = writeln!(self.output, "{}", error) {
            warn!("could not report rejected shot: {}", e);
        }
    }

    fn shot_resolved(&mut self, _target: Coordinate, outcome: ShotOutcome) {
        let msg = match outcome {
            ShotOutcome::Sunk => "Ship destroyed!",
            ShotOutcome::Hit => "Ship hit!",
            ShotOutcome::Miss => "Miss!",
        };
        if let Err(e) = writeln!(self.output, "{}", msg) {
            warn!("could not report shot outcome: {}", e);
        }
    }
}
