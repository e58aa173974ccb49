use thiserror::Error;

use crate::{Coord, Square};

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum GameError {
    #[error("Invalid grid size {width}x{height}, width must be 1..=26 and height at least 1")]
    InvalidSize { width: Coord, height: Coord },
    #[error("Invalid mine percentage {0}, must be within 0..=100")]
    InvalidDensity(f64),
    #[error("Invalid mine coordinates {0:?}")]
    InvalidCoords(Square),
}

/// Reasons a textual command is rejected. Every variant leaves the minefield untouched.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Command rejected: empty command")]
    Empty,
    #[error("Command rejected: expected a coordinate or \"flag <coordinate>\"")]
    Malformed,
    #[error("Command rejected: no row number")]
    MissingRow,
    #[error("Command rejected: no column letter")]
    MissingColumn,
    #[error("Command rejected: square is outside the minefield")]
    OutOfBounds,
    #[error("Command rejected: square is flagged")]
    Flagged,
}

pub type Result<T, E = GameError> = core::result::Result<T, E>;
