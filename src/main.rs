//! Terminal blackjack against a house-rules dealer.

use std::process::ExitCode;

use anyhow::{Context, Result};
use bjcli::{Game, Session, SystemClock};
use clap::Parser;

mod cli;
mod terminal;

use cli::Cli;

fn run() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        cli::init_logger(path, cli.verbose)?;
    }

    let options = cli.options()?;
    let seed = cli.seed();
    tracing::info!(seed, ?options, "starting game");

    let game = Game::new(options, seed).context("creating the game")?;
    let mut session = Session::new(game, SystemClock);
    terminal::run(&mut session)?;

    for line in session.render() {
        println!("{line}");
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error running program: {err:#}");
            ExitCode::FAILURE
        }
    }
}
