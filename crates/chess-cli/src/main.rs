//! Two-player chess in the terminal.
//!
//! Both players share one console and type their moves in turn. The game can
//! be saved at any prompt and resumed later with `--load`.

mod config;
mod render;
mod save;
mod session;

use clap::Parser;
use config::CliConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Play chess against a friend on one terminal.
#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Two-player chess in the terminal")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Resume the game stored at the configured save path
    #[arg(long)]
    load: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = CliConfig::load(&args.config)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Config: {:?}", args.config);
    let mut game = if args.load {
        tracing::info!("Loading game from {:?}", config.save_path);
        save::load(&config.save_path)?
    } else {
        chess_engine::Game::new()
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session::run(&mut game, &config, stdin.lock(), &mut stdout)
}
