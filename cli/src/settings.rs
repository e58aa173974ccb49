use clap::Args;
use textsweeper_core::{Coord, GameConfig};

#[derive(Args, Debug, Clone, PartialEq)]
pub(crate) struct Settings {
    /// Number of columns
    #[arg(short = 'w', long = "horizontal", default_value_t = GameConfig::DEFAULT_WIDTH)]
    pub width: Coord,

    /// Number of rows
    #[arg(short = 'v', long = "vertical", default_value_t = GameConfig::DEFAULT_HEIGHT)]
    pub height: Coord,

    /// Share of squares holding a mine, in percent
    #[arg(short, long, default_value_t = GameConfig::DEFAULT_PERCENT_MINES)]
    pub percent_mines: f64,

    /// Show mine positions and every square outcome
    #[arg(short, long, hide = true)]
    pub debug: bool,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Settings {
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.width, self.height, self.percent_mines)
    }

    pub fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "warn" }
    }
}
