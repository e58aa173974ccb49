use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// A single game: the mine layout plus what the player has flagged and revealed so far.
///
/// Commands are processed one at a time and each returns the outcome of every square it
/// touched. Reaching [`GameState::Won`] or [`GameState::Lost`] does not lock the field, the
/// caller decides when play stops.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineField {
    mine_layout: MineLayout,
    flagged: Array2<bool>,
    revealed: Array2<bool>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: GameState,
}

impl MineField {
    /// Builds a grid from `config` and scatters its mines using `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let grid = config.validate()?;
        let mines = config.mine_count();

        if mines == 0 {
            log::warn!("Mine percentage {} places no mines", config.percent_mines);
        } else if mines == grid.total_squares() {
            log::warn!("Mine percentage {} fills every square", config.percent_mines);
        }

        let mine_layout = RandomMineLayoutGenerator::new(seed).generate(grid, mines);
        log::debug!(
            "New {}x{} minefield with {} mines",
            grid.width(),
            grid.height(),
            mine_layout.mine_count()
        );
        Ok(Self::from_layout(mine_layout))
    }

    pub fn from_layout(mine_layout: MineLayout) -> Self {
        let dim = mine_layout.grid().dim();
        Self {
            mine_layout,
            flagged: Array2::default(dim),
            revealed: Array2::default(dim),
            revealed_count: 0,
            flagged_count: 0,
            state: GameState::default(),
        }
    }

    pub fn grid(&self) -> Grid {
        self.mine_layout.grid()
    }

    pub fn column_count(&self) -> Coord {
        self.grid().width()
    }

    pub fn row_count(&self) -> Coord {
        self.grid().height()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn safe_square_count(&self) -> CellCount {
        self.mine_layout.safe_square_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mined squares in row-major order, meant for showing the whole field once a game ends.
    pub fn mine_coordinates(&self) -> Vec<Square> {
        self.mine_layout.mine_squares()
    }

    pub fn is_flagged(&self, square: Square) -> bool {
        self.grid().contains(square) && self.flagged[square.to_nd_index()]
    }

    pub fn is_revealed(&self, square: Square) -> bool {
        self.grid().contains(square) && self.revealed[square.to_nd_index()]
    }

    /// Parses and applies a textual command such as `B3` or `flag B3`.
    ///
    /// A rejected command leaves the field untouched and produces no outcome.
    pub fn submit_command(&mut self, text: &str) -> Result<Vec<ClickOutcome>, CommandError> {
        let command = Command::parse(text, self.grid()).inspect_err(|err| {
            log::debug!("{:?}: {}", text, err);
        })?;
        self.apply(command)
    }

    pub fn apply(&mut self, command: Command) -> Result<Vec<ClickOutcome>, CommandError> {
        let outcomes = match command.mode {
            CommandMode::Flag => vec![self.toggle_flag(command.square)?],
            CommandMode::Click => self.click(command.square)?,
        };

        log::debug!(
            "{:?} {} touched {} squares",
            command.mode,
            command.square,
            outcomes.len()
        );
        if !self.state.is_finished() {
            self.state = GameState::after(&outcomes);
        }
        Ok(outcomes)
    }

    /// Flags an unflagged square or clears an existing flag. Reveal state is not consulted.
    pub fn toggle_flag(&mut self, square: Square) -> Result<ClickOutcome, CommandError> {
        self.check_bounds(square)?;

        let mut outcome = ClickOutcome::new(square);
        let flag = &mut self.flagged[square.to_nd_index()];
        if *flag {
            *flag = false;
            self.flagged_count -= 1;
            outcome.was_unflag = true;
        } else {
            *flag = true;
            self.flagged_count += 1;
            outcome.was_flag = true;
        }
        Ok(outcome)
    }

    /// Reveals `square`, opening every square reachable through zero-count neighbors.
    ///
    /// Outcomes come back in the order a depth-first walk first reaches each square, walking
    /// neighbors in the fixed scan order. A flagged square rejects a direct click, but a cascade
    /// still reveals it and keeps its flag.
    pub fn click(&mut self, square: Square) -> Result<Vec<ClickOutcome>, CommandError> {
        self.check_bounds(square)?;
        if self.flagged[square.to_nd_index()] {
            return Err(CommandError::Flagged);
        }

        let grid = self.grid();
        let mut outcomes = Vec::new();
        let mut visited: Array2<bool> = Array2::default(grid.dim());

        if !self.visit(square, &mut visited, &mut outcomes) {
            return Ok(outcomes);
        }

        // one neighbor iterator per square still being expanded, innermost last
        let mut to_visit = vec![grid.neighbors(square)];
        while let Some(neighbors) = to_visit.last_mut() {
            let Some(next) = neighbors.next() else {
                to_visit.pop();
                continue;
            };

            if visited[next.to_nd_index()] {
                continue;
            }

            if self.visit(next, &mut visited, &mut outcomes) {
                to_visit.push(grid.neighbors(next));
            }
        }

        Ok(outcomes)
    }

    /// Records the outcome for one square, returning whether the cascade continues from it.
    fn visit(
        &mut self,
        square: Square,
        visited: &mut Array2<bool>,
        outcomes: &mut Vec<ClickOutcome>,
    ) -> bool {
        let index = square.to_nd_index();
        visited[index] = true;

        let mut outcome = ClickOutcome::new(square);
        if self.mine_layout[square] {
            log::trace!("{} is a mine", square);
            outcome.was_mine = true;
            outcomes.push(outcome);
            return false;
        }

        if !self.revealed[index] {
            // compared before this square is counted
            if self.revealed_count + 1 == self.safe_square_count() {
                outcome.was_winning_click = true;
            }
            self.revealed[index] = true;
            self.revealed_count += 1;
        }

        outcome.neighbor_mine_count = self.mine_layout.adjacent_mine_count(square);
        log::trace!(
            "{} revealed, {} neighbor mines",
            square,
            outcome.neighbor_mine_count
        );
        outcomes.push(outcome);

        !outcome.has_neighbor_mines()
    }

    fn check_bounds(&self, square: Square) -> Result<(), CommandError> {
        if self.grid().contains(square) {
            Ok(())
        } else {
            Err(CommandError::OutOfBounds)
        }
    }
}
