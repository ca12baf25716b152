//! Common test utilities for the corral test suite.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use corral::{
    Color, Direction, Game, GameConfig, Grid, Move, Position,
    events::{RecordedEvent, RecordingHandler},
};

/// Build a game from an encoded grid with `player` to move.
pub fn game_from(encoded: &str, player: Color) -> Game {
    Game::from_position(GameConfig::default(), Grid::parse(encoded).unwrap(), player)
        .expect("test position must be valid")
}

/// Attach recorders in both subscription modes and return their logs.
pub fn attach_recorders(
    game: &mut Game,
) -> (
    Arc<Mutex<Vec<RecordedEvent>>>,
    Arc<Mutex<Vec<RecordedEvent>>>,
) {
    let all = RecordingHandler::new();
    let all_log = all.log();
    game.subscribe(Box::new(all));

    let real = RecordingHandler::new();
    let real_log = real.log();
    game.subscribe_real(Box::new(real));

    (all_log, real_log)
}

/// Event wire names in emission order.
pub fn event_names(log: &Arc<Mutex<Vec<RecordedEvent>>>) -> Vec<&'static str> {
    log.lock().unwrap().iter().map(|r| r.event.name()).collect()
}

/// The legal move from `from` in `direction`, if generated.
pub fn find_move(game: &Game, from: Position, direction: Direction) -> Option<Move> {
    game.legal_moves()
        .into_iter()
        .find(|mv| mv.from() == from && mv.direction() == direction)
}
