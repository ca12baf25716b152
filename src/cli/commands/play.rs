//! Play command - Interactive terminal game

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    app::{App, GameConfig, GameSession},
    events::ConsoleHandler,
    rules::Move,
    types::{Direction, Position},
};

use super::parse_player_kind;

#[derive(Debug, Parser)]
pub struct PlayArgs {
    /// Board edge length
    #[arg(long, default_value_t = 5)]
    pub board_size: usize,

    /// Who plays Black: human or ai
    #[arg(long, default_value = "human")]
    pub black: String,

    /// Who plays White: human or ai
    #[arg(long, default_value = "ai")]
    pub white: String,

    /// Search level for Black when AI-controlled (0-4)
    #[arg(long, default_value_t = 2)]
    pub black_level: u8,

    /// Search level for White when AI-controlled (0-4)
    #[arg(long, default_value_t = 2)]
    pub white_level: u8,

    /// Random seed for reproducible AI behavior
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = GameConfig::default()
        .with_board_size(args.board_size)
        .with_black_player(parse_player_kind(&args.black, "--black")?)
        .with_white_player(parse_player_kind(&args.white, "--white")?)
        .with_black_ai_level(args.black_level)
        .with_white_ai_level(args.white_level);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let app = App::new();
    let mut session = app.create_session(config)?;
    session.game_mut().subscribe_real(Box::new(ConsoleHandler));
    session.start()?;

    println!("Enter moves as 'row col direction', or: moves, undo, redo, quit");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        print!("{}", session.game().grid());
        if let Some(winner) = session.game().winner() {
            println!("{winner} wins");
            break;
        }

        if session.is_ai_turn() {
            session.advance()?;
            continue;
        }

        print!("{} > ", session.game().current_player());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match line.trim() {
            "" => continue,
            "quit" | "q" => break,
            "undo" => {
                if !session.undo()? {
                    println!("nothing to undo");
                }
            }
            "redo" => {
                if !session.redo()? {
                    println!("nothing to redo");
                }
            }
            "moves" => {
                for mv in session.game().legal_moves() {
                    println!("  {mv}");
                }
            }
            input => match parse_move_request(input, &session) {
                Some(mv) => {
                    if let Err(e) = session.play_human(&mv) {
                        println!("{e}");
                    }
                }
                None => println!("could not read '{input}' as 'row col direction'"),
            },
        }
    }
    Ok(())
}

/// Match `row col direction` input against the legal moves.
fn parse_move_request(input: &str, session: &GameSession) -> Option<Move> {
    let mut parts = input.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    let direction = Direction::parse(parts.next()?)?;
    let from = Position::new(row, col);
    session
        .game()
        .legal_moves()
        .into_iter()
        .find(|mv| mv.from() == from && mv.direction() == direction)
}
