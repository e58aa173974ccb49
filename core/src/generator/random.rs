use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::*;

/// Uniformly random placement: every set of `mines` squares is equally likely.
///
/// Shuffles the first `mines` entries of the full square list instead of drawing squares and
/// rejecting repeats, so dense boards take the same time as sparse ones. The same seed always
/// yields the same layout.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineLayoutGenerator {
    seed: u64,
}

impl RandomMineLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineLayoutGenerator for RandomMineLayoutGenerator {
    fn generate(self, grid: Grid, mines: CellCount) -> MineLayout {
        let total_squares = grid.total_squares();

        let mines = if mines > total_squares {
            log::warn!(
                "Minefield already full, requested {} mines but only {} fit",
                mines,
                total_squares
            );
            total_squares
        } else {
            mines
        };

        let mut squares: Vec<Square> = grid.squares().collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let (chosen, _) = squares.partial_shuffle(&mut rng, mines.into());

        let mut layout = MineLayout::empty(grid);
        for &square in chosen.iter() {
            layout.place_mine(square);
        }

        // double check mine count
        if layout.mine_count() != mines {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                mines
            );
        }
        layout
    }
}
