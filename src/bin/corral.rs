//! Corral CLI - terminal front end for the push-and-surround board game
//!
//! This binary is a consumer of the core: it subscribes to game events and
//! calls the public operations, with no rules logic of its own.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "corral")]
#[command(version, about = "Push-and-surround board game with adversarial AI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the terminal
    Play(corral::cli::commands::play::PlayArgs),

    /// Run an AI-vs-AI series and summarize the results
    Series(corral::cli::commands::series::SeriesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => corral::cli::commands::play::execute(args),
        Commands::Series(args) => corral::cli::commands::series::execute(args),
    }
}
