//! Turn-driving session over a game and its AI players

use crate::{
    Result,
    game::Game,
    rules::{Move, MoveOutcome},
    search::{SearchControl, SearchEngine},
    types::{Color, PlayerKind},
};

/// A game paired with the engines playing its AI-controlled sides.
///
/// The session is the turn controller: human moves come in through
/// [`GameSession::play_human`], AI turns run through
/// [`GameSession::advance`], and both funnel into the same commit path on
/// the game.
pub struct GameSession {
    game: Game,
    black: Option<SearchEngine>,
    white: Option<SearchEngine>,
}

impl GameSession {
    pub(crate) fn new(game: Game, black: Option<SearchEngine>, white: Option<SearchEngine>) -> Self {
        GameSession { game, black, white }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Announce the game to subscribers. Call after wiring handlers.
    pub fn start(&mut self) -> Result<()> {
        self.game.start()
    }

    /// Whether the side to move is AI-controlled in a live game.
    pub fn is_ai_turn(&self) -> bool {
        if self.game.is_over() {
            return false;
        }
        self.game.config().player_kind(self.game.current_player()) == PlayerKind::Ai
    }

    /// Commit a human move for the side to move.
    pub fn play_human(&mut self, mv: &Move) -> Result<MoveOutcome> {
        self.game.play(mv)
    }

    /// Run one AI turn if the side to move is AI-controlled.
    ///
    /// Returns the committed move, or `None` when it is not an AI turn,
    /// the game is over, the search was cancelled, or no legal move
    /// exists.
    pub fn advance(&mut self) -> Result<Option<Move>> {
        if !self.is_ai_turn() {
            return Ok(None);
        }
        let engine = match self.game.current_player() {
            Color::Black => self.black.as_mut(),
            Color::White => self.white.as_mut(),
        };
        match engine {
            Some(search) => search.take_turn(&mut self.game),
            None => Ok(None),
        }
    }

    /// Cancellation handle for the engine playing `color`, if any.
    pub fn search_control(&self, color: Color) -> Option<SearchControl> {
        match color {
            Color::Black => self.black.as_ref().map(SearchEngine::control),
            Color::White => self.white.as_ref().map(SearchEngine::control),
        }
    }

    pub fn undo(&mut self) -> Result<bool> {
        self.game.undo()
    }

    pub fn redo(&mut self) -> Result<bool> {
        self.game.redo()
    }
}
