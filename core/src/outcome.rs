use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// What happened to one square while processing a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickOutcome {
    pub square: Square,
    pub was_mine: bool,
    pub was_winning_click: bool,
    pub was_flag: bool,
    pub was_unflag: bool,
    pub neighbor_mine_count: u8,
}

impl ClickOutcome {
    pub const fn new(square: Square) -> Self {
        Self {
            square,
            was_mine: false,
            was_winning_click: false,
            was_flag: false,
            was_unflag: false,
            neighbor_mine_count: 0,
        }
    }

    pub const fn has_neighbor_mines(&self) -> bool {
        self.neighbor_mine_count > 0
    }
}

impl fmt::Display for ClickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{}] mine: {} neighbor mines: {}",
            self.square.column, self.square.row, self.was_mine, self.neighbor_mine_count
        )?;
        if self.was_flag {
            f.write_str(" flagged")?;
        }
        if self.was_unflag {
            f.write_str(" unflagged")?;
        }
        if self.was_winning_click {
            f.write_str(" winning")?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// State reached after a command produced `outcomes`. A detonation outranks a win.
    pub fn after(outcomes: &[ClickOutcome]) -> Self {
        if outcomes.iter().any(|outcome| outcome.was_mine) {
            Self::Lost
        } else if outcomes.iter().any(|outcome| outcome.was_winning_click) {
            Self::Won
        } else {
            Self::InProgress
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}
