use crate::*;
pub use random::*;

mod random;

pub trait MineLayoutGenerator {
    fn generate(self, grid: Grid, mines: CellCount) -> MineLayout;
}
