//! Series command - AI-vs-AI runs with summary output

use std::{fs::File, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    app::{App, GameConfig},
    events::JsonlEventWriter,
    search,
    types::{Color, PlayerKind},
};

#[derive(Debug, Parser)]
pub struct SeriesArgs {
    /// Number of games to play
    #[arg(long, default_value_t = 50)]
    pub games: usize,

    /// Search level for Black (0-4)
    #[arg(long, default_value_t = 1)]
    pub black_level: u8,

    /// Search level for White (0-4)
    #[arg(long, default_value_t = 0)]
    pub white_level: u8,

    /// Board edge length
    #[arg(long, default_value_t = 5)]
    pub board_size: usize,

    /// Base random seed; each game offsets it by its index
    #[arg(long)]
    pub seed: Option<u64>,

    /// Abort a game after this many moves and count it unfinished
    #[arg(long, default_value_t = 500)]
    pub max_moves: usize,

    /// Write a JSON summary to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Write the last game's real events to this JSONL path
    #[arg(long)]
    pub event_log: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SeriesSummary {
    games: usize,
    black_wins: usize,
    white_wins: usize,
    unfinished: usize,
    black_win_rate: f64,
    white_win_rate: f64,
    black_level: u8,
    white_level: u8,
    board_size: usize,
    seed: u64,
}

pub fn execute(args: SeriesArgs) -> Result<()> {
    let base_seed = args.seed.unwrap_or(search::DEFAULT_SEED);
    let app = App::new();

    let pb = ProgressBar::new(args.games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")?
            .progress_chars("=>-"),
    );

    let mut black_wins = 0;
    let mut white_wins = 0;
    let mut unfinished = 0;

    for game_num in 0..args.games {
        let config = GameConfig::default()
            .with_board_size(args.board_size)
            .with_black_player(PlayerKind::Ai)
            .with_white_player(PlayerKind::Ai)
            .with_black_ai_level(args.black_level)
            .with_white_ai_level(args.white_level)
            .with_seed(base_seed.wrapping_add(game_num as u64));

        let mut session = app.create_session(config)?;
        if game_num + 1 == args.games {
            if let Some(path) = &args.event_log {
                session
                    .game_mut()
                    .subscribe_real(Box::new(JsonlEventWriter::new(path)?));
            }
        }
        session.start()?;

        let mut moves = 0;
        while !session.game().is_over() && moves < args.max_moves {
            if session.advance()?.is_none() {
                break;
            }
            moves += 1;
        }

        match session.game().winner() {
            Some(Color::Black) => black_wins += 1,
            Some(Color::White) => white_wins += 1,
            None => unfinished += 1,
        }
        pb.set_message(format!("B:{black_wins} W:{white_wins}"));
        pb.inc(1);
    }
    pb.finish_with_message(format!("B:{black_wins} W:{white_wins} ?:{unfinished}"));

    let summary = SeriesSummary {
        games: args.games,
        black_wins,
        white_wins,
        unfinished,
        black_win_rate: black_wins as f64 / args.games.max(1) as f64,
        white_win_rate: white_wins as f64 / args.games.max(1) as f64,
        black_level: args.black_level,
        white_level: args.white_level,
        board_size: args.board_size,
        seed: base_seed,
    };

    println!(
        "black (level {}) {} - {} white (level {}), {} unfinished",
        summary.black_level, black_wins, white_wins, summary.white_level, unfinished
    );

    if let Some(path) = &args.summary {
        let file = File::create(path)?;
        to_writer_pretty(file, &summary)?;
        println!("summary written to {}", path.display());
    }

    Ok(())
}
