#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use command::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use outcome::*;
pub use types::*;

mod command;
mod engine;
mod error;
mod generator;
mod outcome;
mod types;

/// Board dimensions and mine density chosen by the player.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    /// Share of squares holding a mine, in percent.
    pub percent_mines: f64,
}

impl GameConfig {
    pub const DEFAULT_WIDTH: Coord = 10;
    pub const DEFAULT_HEIGHT: Coord = 10;
    pub const DEFAULT_PERCENT_MINES: f64 = 25.0;

    pub const fn new(width: Coord, height: Coord, percent_mines: f64) -> Self {
        Self {
            width,
            height,
            percent_mines,
        }
    }

    /// Checks the configuration and returns the grid it describes.
    pub fn validate(&self) -> Result<Grid> {
        if !(0.0..=100.0).contains(&self.percent_mines) {
            return Err(GameError::InvalidDensity(self.percent_mines));
        }
        Grid::new(self.width, self.height)
    }

    pub const fn total_squares(&self) -> CellCount {
        mult(self.width, self.height)
    }

    /// Number of mines to place, `width * height * percent / 100` rounded half to even.
    pub fn mine_count(&self) -> CellCount {
        let percent = self.percent_mines.clamp(0.0, 100.0);
        let exact = f64::from(self.total_squares()) * percent / 100.0;
        round_half_even(exact).min(self.total_squares())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
            Self::DEFAULT_PERCENT_MINES,
        )
    }
}

/// `f64::round_ties_even` lives in std, this only needs to handle non-negative counts.
fn round_half_even(value: f64) -> CellCount {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    let floor = value as CellCount;
    let fraction = value - f64::from(floor);
    if fraction > 0.5 || (fraction == 0.5 && floor % 2 == 1) {
        floor.saturating_add(1)
    } else {
        floor
    }
}

/// Where the mines are. Fixed once the game is constructed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    grid: Grid,
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn empty(grid: Grid) -> Self {
        Self {
            grid,
            mine_mask: Array2::default(grid.dim()),
            mine_count: 0,
        }
    }

    /// Builds a layout from explicit mine squares, rejecting squares outside `grid` and repeats.
    pub fn from_mine_coords(grid: Grid, mine_coords: &[Square]) -> Result<Self> {
        let mut layout = Self::empty(grid);

        for &square in mine_coords {
            if !grid.contains(square) || layout[square] {
                return Err(GameError::InvalidCoords(square));
            }
            layout.place_mine(square);
        }

        Ok(layout)
    }

    pub(crate) fn place_mine(&mut self, square: Square) {
        let cell = &mut self.mine_mask[square.to_nd_index()];
        if !*cell {
            *cell = true;
            self.mine_count += 1;
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_squares(&self) -> CellCount {
        self.grid.total_squares()
    }

    /// Number of non-mine squares, revealing all of them wins the game.
    pub fn safe_square_count(&self) -> CellCount {
        self.total_squares() - self.mine_count
    }

    /// `false` for squares outside the grid.
    pub fn contains_mine(&self, square: Square) -> bool {
        self.grid.contains(square) && self[square]
    }

    pub fn adjacent_mine_count(&self, square: Square) -> u8 {
        self.grid
            .neighbors(square)
            .filter(|&pos| self[pos])
            .fold(0, |count, _| count + 1)
    }

    /// Mined squares in row-major order.
    pub fn mine_squares(&self) -> Vec<Square> {
        self.grid.squares().filter(|&square| self[square]).collect()
    }
}

impl Index<Square> for MineLayout {
    type Output = bool;

    fn index(&self, square: Square) -> &Self::Output {
        &self.mine_mask[square.to_nd_index()]
    }
}
