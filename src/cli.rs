use core::time::Duration;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use bjcli::GameOptions;
use bjcli::options::{DEFAULT_DEALER_DELAY, DEFAULT_MESSAGE_CAPACITY};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug, Clone)]
#[command(name = "bjcli", version, about = "Play blackjack against the house in your terminal", long_about = None)]
pub struct Cli {
    /// Seed for the deck shuffler (defaults to the current time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before each dealer action, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DEALER_DELAY.as_millis() as u64)]
    pub dealer_delay_ms: u64,

    /// Number of status lines kept on screen
    #[arg(long, default_value_t = DEFAULT_MESSAGE_CAPACITY)]
    pub message_capacity: usize,

    /// Write logs to this file; nothing is logged without it
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log every transition, not just round summaries
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn options(&self) -> Result<GameOptions> {
        let options = GameOptions::default()
            .with_dealer_delay(Duration::from_millis(self.dealer_delay_ms))
            .with_message_capacity(self.message_capacity);
        options.validate().context("invalid game options")?;
        Ok(options)
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        })
    }
}

/// Sends log output to `path`. The terminal itself belongs to the game screen.
pub fn init_logger(path: &Path, verbose: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file '{}'", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("bjcli=debug")
        } else {
            EnvFilter::new("bjcli=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();

    Ok(())
}
