//! Two-player chess in the terminal.
//!
//! Players type squares as `<file>,<rank>` (for example `e,2`). Moving the
//! king two files along its rank castles.

mod config;
mod render;
mod session;

use anyhow::Context;
use clap::Parser;
use config::{Glyphs, PlayConfig};
use session::{Outcome, Session};
use std::io;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Two-player chess in the terminal")]
struct Args {
    /// Path to a TOML configuration file (defaults to ./chess.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Draw pieces as letters instead of chess symbols
    #[arg(long)]
    ascii: bool,

    /// Label files and ranks around the board
    #[arg(long)]
    coordinates: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => PlayConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PlayConfig::load()?,
    };
    if args.ascii {
        config.glyphs = Glyphs::Ascii;
    }
    if args.coordinates {
        config.coordinates = true;
    }
    tracing::info!(?config, "starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock());
    match session.run()? {
        Outcome::Checkmate { winner } => tracing::info!(%winner, "game over"),
        Outcome::Quit => tracing::info!("session ended"),
    }
    Ok(())
}
