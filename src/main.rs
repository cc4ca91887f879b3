//! Main entry point for the escape-room game.
//!
//! Initializes logging, parses command-line arguments, and runs either the
//! interactive loop or the scripted demo.

use std::error::Error;

use clap::Parser;

use game::game_loop::{run_demo, run_game_loop};

pub mod config;
mod game;

/// Terminal escape-room game: find the hidden exit before your health
/// runs out.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Run a short non-interactive demo instead of the interactive game.
    #[arg(long)]
    auto_test: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    let args = Args::parse();
    if args.auto_test {
        run_demo()
    } else {
        run_game_loop()
    }
}
