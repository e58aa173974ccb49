use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use textsweeper_core::{ClickOutcome, GameState, MineField};

mod settings;

const QUIT_COMMAND: &str = "quit";

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper played by typing coordinates", long_about = None)]
struct Args {
    #[command(flatten)]
    settings: settings::Settings,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = args.settings;

    let env = env_logger::Env::default().default_filter_or(settings.log_filter());
    env_logger::Builder::from_env(env).init();

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut field = MineField::new(settings.game_config(), seed)
        .context("Could not build the minefield")?;

    if settings.debug {
        println!("Mines: {}", mine_list(&field));
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        println!(
            "{}x{} field, {} mines. Type a coordinate (A1) to click a square, \"flag A1\" to \
             flag one, or \"quit\".",
            field.column_count(),
            field.row_count(),
            field.mine_count()
        );
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("Could not read command")?;
        let command = line.trim();

        if command.eq_ignore_ascii_case(QUIT_COMMAND) {
            return Ok(());
        }

        let outcomes = match field.submit_command(command) {
            Ok(outcomes) => outcomes,
            Err(err) => {
                println!("{err}. Try again");
                continue;
            }
        };

        for outcome in &outcomes {
            log::debug!("{}", outcome);
            println!("{}", describe(outcome));
        }

        match field.state() {
            GameState::InProgress => {}
            GameState::Lost => {
                println!("Boom! Mines were at {}", mine_list(&field));
                return Ok(());
            }
            GameState::Won => {
                println!("Cleared! Mines were at {}", mine_list(&field));
                return Ok(());
            }
        }
    }
}

/// Text form of what a square now shows.
fn describe(outcome: &ClickOutcome) -> String {
    let square = outcome.square;
    if outcome.was_mine {
        format!("{square}: mine")
    } else if outcome.was_flag {
        format!("{square}: flagged")
    } else if outcome.was_unflag {
        format!("{square}: unflagged")
    } else if outcome.has_neighbor_mines() {
        format!("{square}: {}", outcome.neighbor_mine_count)
    } else {
        format!("{square}: empty")
    }
}

fn mine_list(field: &MineField) -> String {
    field
        .mine_coordinates()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
