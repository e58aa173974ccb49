use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-square counts.
pub type CellCount = u16;

/// Column letters, `A` addresses column 1.
pub const COLUMN_ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Widest grid whose every column can be addressed by a command.
pub const MAX_WIDTH: Coord = COLUMN_ALPHABET.len() as Coord;

/// A single grid square.
///
/// `row` is 0-based counting from the top, `column` is 1-based counting from the left, so the
/// top-left square is `(0, 1)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: Coord,
    pub column: Coord,
}

impl Square {
    pub const fn new(row: Coord, column: Coord) -> Self {
        Self { row, column }
    }

    /// Letter naming this square's column, `None` for column 0 or anything past `Z`.
    pub fn column_letter(self) -> Option<char> {
        let index = usize::from(self.column).checked_sub(1)?;
        COLUMN_ALPHABET.get(index).copied()
    }
}

/// Formats the square the way a player types it, e.g. `B3` for row 2, column 2.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column_letter() {
            Some(letter) => write!(f, "{}{}", letter, u16::from(self.row) + 1),
            None => write!(f, "?{}", u16::from(self.row) + 1),
        }
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Square {
    type Output = [usize; 2];

    /// Callers must have bounds-checked the square, column 0 has no index.
    fn to_nd_index(self) -> Self::Output {
        [self.row.into(), usize::from(self.column) - 1]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Rows by columns sizing, fixed for the lifetime of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: Coord,
    height: Coord,
}

impl Grid {
    pub fn new(width: Coord, height: Coord) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_WIDTH {
            return Err(GameError::InvalidSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn total_squares(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn dim(&self) -> (usize, usize) {
        (self.height as usize, self.width as usize)
    }

    pub const fn contains(&self, square: Square) -> bool {
        square.row < self.height && square.column >= 1 && square.column <= self.width
    }

    /// Every square in row-major order, top-left first.
    pub fn squares(&self) -> impl Iterator<Item = Square> + use<> {
        let Self { width, height } = *self;
        (0..height).flat_map(move |row| (1..=width).map(move |column| Square::new(row, column)))
    }

    pub fn neighbors(&self, center: Square) -> NeighborIter {
        NeighborIter::new(center, *self)
    }
}

/// Fixed scan order: the row above left to right, then left and right, then the row below.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `square`, returning a value only when it remains inside `grid`.
fn apply_delta(square: Square, delta: (i8, i8), grid: Grid) -> Option<Square> {
    let (d_row, d_column) = delta;
    let row = square.row.checked_add_signed(d_row)?;
    let column = square.column.checked_add_signed(d_column)?;
    let next = Square::new(row, column);
    grid.contains(next).then_some(next)
}

#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Square,
    grid: Grid,
    index: u8,
}

impl NeighborIter {
    fn new(center: Square, grid: Grid) -> Self {
        Self {
            center,
            grid,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.grid) {
                return Some(next_item);
            }
        }
    }
}
