use serde::{Deserialize, Serialize};

use crate::*;

const FLAG_VERB: &str = "flag";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandMode {
    Click,
    Flag,
}

/// A parsed, bounds-checked player command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub mode: CommandMode,
    pub square: Square,
}

impl Command {
    /// Parses `A1` style clicks and `flag A1` style flag toggles against `grid`.
    ///
    /// Tokens are split on whitespace. A single token is a click; two tokens are accepted only
    /// when the first is `flag` (any case). Every other shape is rejected.
    pub fn parse(text: &str, grid: Grid) -> Result<Self, CommandError> {
        let mut tokens = text.split_whitespace();
        let first = tokens.next().ok_or(CommandError::Empty)?;

        let (mode, coordinate) = match (tokens.next(), tokens.next()) {
            (None, _) => (CommandMode::Click, first),
            (Some(second), None) if first.eq_ignore_ascii_case(FLAG_VERB) => {
                (CommandMode::Flag, second)
            }
            _ => return Err(CommandError::Malformed),
        };

        let square = parse_coordinate(coordinate, grid)?;
        Ok(Self { mode, square })
    }
}

/// Reads a coordinate token such as `c10`.
///
/// The first ASCII letter anywhere in the token picks the column and the first run of digits
/// picks the 1-based row number, so `10c` and `c10` name the same square.
pub fn parse_coordinate(token: &str, grid: Grid) -> Result<Square, CommandError> {
    let row_number = first_number(token).ok_or(CommandError::MissingRow)?;
    let column = token
        .chars()
        .find(char::is_ascii_alphabetic)
        .and_then(column_index)
        .ok_or(CommandError::MissingColumn)?;

    let row = row_number
        .checked_sub(1)
        .and_then(|row| Coord::try_from(row).ok())
        .ok_or(CommandError::OutOfBounds)?;

    let square = Square::new(row, column);
    if grid.contains(square) {
        Ok(square)
    } else {
        Err(CommandError::OutOfBounds)
    }
}

/// 1-based column for a letter, `A` or `a` being 1.
fn column_index(letter: char) -> Option<Coord> {
    let upper = letter.to_ascii_uppercase();
    let position = COLUMN_ALPHABET.iter().position(|&c| c == upper)?;
    Coord::try_from(position + 1).ok()
}

/// Value of the first run of ASCII digits, `None` when there is none. Overflow saturates so an
/// absurd row number is still reported as out of bounds.
fn first_number(token: &str) -> Option<u32> {
    let start = token.find(|c: char| c.is_ascii_digit())?;
    let digits = &token[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    Some(digits[..end].bytes().fold(0u32, |value, digit| {
        value
            .saturating_mul(10)
            .saturating_add(u32::from(digit - b'0'))
    }))
}
