//! Game state and turn control
//!
//! [`Game`] is the single authority over the live board. It validates
//! requested moves against the generator, executes them through the move
//! engine, records committed moves in history, applies the termination
//! rules, and publishes every state change on its event bus. The AI never
//! mutates a `Game` during look-ahead; it works on private grid clones and
//! commits its chosen move back through the same path used for human moves.

use crate::{
    Error, Result,
    app::GameConfig,
    board::{Grid, Token},
    events::{EventBus, EventHandler, ExecutionContext, GameEvent},
    history::{GameSnapshot, HistoryEntry, HistoryManager},
    rules::{Move, MoveEngine, MoveOutcome},
    types::{Color, GameStatus, Position, WinReason},
};

/// Starting layout: Black fills the top row, White fills the bottom row.
fn starting_grid(size: usize) -> Result<Grid> {
    let mut grid = Grid::new(size)?;
    for col in 0..size {
        grid.set_token(Position::new(0, col), Some(Token::new(Color::Black)));
        grid.set_token(Position::new(size - 1, col), Some(Token::new(Color::White)));
    }
    Ok(grid)
}

/// A live game.
pub struct Game {
    engine: MoveEngine,
    grid: Grid,
    current_player: Color,
    status: GameStatus,
    revision: u64,
    history: HistoryManager,
    bus: EventBus,
    config: GameConfig,
}

impl Game {
    /// Create a game with the standard starting layout. Black moves first.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is invalid.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let grid = starting_grid(config.board_size)?;
        Ok(Self::assemble(config, grid, Color::Black))
    }

    /// Create a game from an arbitrary position, mainly for analysis and
    /// tests. The configured board size is overridden by the grid's.
    pub fn from_position(
        mut config: GameConfig,
        grid: Grid,
        current_player: Color,
    ) -> Result<Self> {
        config.board_size = grid.size();
        config.validate()?;
        Ok(Self::assemble(config, grid, current_player))
    }

    fn assemble(config: GameConfig, grid: Grid, current_player: Color) -> Self {
        Game {
            engine: MoveEngine::new(),
            grid,
            current_player,
            status: GameStatus::InProgress,
            revision: 0,
            history: HistoryManager::new(),
            bus: EventBus::new(),
            config,
        }
    }

    /// Announce the game to subscribers. Call after wiring handlers.
    pub fn start(&mut self) -> Result<()> {
        self.bus.emit(
            GameEvent::GameInitialized {
                current_player: self.current_player,
                black_player: self.config.black_player,
                white_player: self.config.white_player,
            },
            &ExecutionContext::real(),
        )
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn winner(&self) -> Option<Color> {
        self.status.winner()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn engine(&self) -> MoveEngine {
        self.engine
    }

    /// Monotonic counter bumped on every committed state change. Search
    /// results computed against an older revision must be discarded.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The bus this game publishes on.
    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Subscribe to every emission, simulated ones included.
    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) {
        self.bus.subscribe(handler);
    }

    /// Subscribe to committed emissions only.
    pub fn subscribe_real(&mut self, handler: Box<dyn EventHandler>) {
        self.bus.subscribe_real(handler);
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.engine.generate_moves(&self.grid, self.current_player)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of committed moves played so far.
    pub fn move_count(&self) -> usize {
        self.history.depth()
    }

    /// Commit a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] when the game has ended and
    /// [`Error::InvalidMove`] when `mv` is not among the generated legal
    /// moves; in both cases nothing is mutated.
    pub fn play(&mut self, mv: &Move) -> Result<MoveOutcome> {
        self.apply(mv, ExecutionContext::real())
    }

    /// Commit the move a search selected, tagged as the actual AI move.
    pub(crate) fn play_committed_ai(&mut self, mv: &Move) -> Result<MoveOutcome> {
        self.apply(mv, ExecutionContext::committed_ai())
    }

    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid.clone(),
            current_player: self.current_player,
            status: self.status,
        }
    }

    fn restore(&mut self, snapshot: GameSnapshot) {
        self.grid = snapshot.grid;
        self.current_player = snapshot.current_player;
        self.status = snapshot.status;
    }

    fn apply(&mut self, mv: &Move, ctx: ExecutionContext) -> Result<MoveOutcome> {
        if self.status.is_over() {
            return Err(Error::GameOver);
        }
        let mover = self.current_player;
        if !self.engine.generate_moves(&self.grid, mover).contains(mv) {
            return Err(Error::InvalidMove {
                player: mover.to_string(),
                description: mv.to_string(),
            });
        }

        let prior = self.snapshot();
        let outcome = self
            .engine
            .execute_move(&mut self.grid, mv, mover, &ctx, &mut self.bus)?;
        self.history.record(
            HistoryEntry {
                mv: mv.clone(),
                captured: outcome.captured.clone(),
                deactivated: outcome.deactivated.clone(),
                prior,
            },
            &ctx,
        )?;

        let opponent = mover.opponent();
        if self.grid.alive_count(opponent) == 0 {
            self.status = GameStatus::Over {
                winner: mover,
                reason: WinReason::AllTokensCaptured,
            };
        } else {
            self.current_player = opponent;
            if self.engine.generate_moves(&self.grid, opponent).is_empty() {
                self.status = GameStatus::Over {
                    winner: mover,
                    reason: WinReason::NoMovesLeft,
                };
            }
        }
        self.revision += 1;

        if let GameStatus::Over { winner, reason } = self.status {
            self.bus.emit(GameEvent::GameOver { winner, reason }, &ctx)?;
        }

        Ok(outcome)
    }

    /// Step back one committed move, restoring the exact prior state.
    ///
    /// Returns `Ok(false)` when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool> {
        let current = self.snapshot();
        match self.history.undo(current) {
            Some(prior) => {
                self.restore(prior);
                self.revision += 1;
                self.bus
                    .emit(GameEvent::UndoCompleted, &ExecutionContext::real())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Step forward one undone move.
    ///
    /// Returns `Ok(false)` when there is nothing to redo.
    pub fn redo(&mut self) -> Result<bool> {
        let current = self.snapshot();
        match self.history.redo(current) {
            Some(next) => {
                self.restore(next);
                self.revision += 1;
                self.bus
                    .emit(GameEvent::RedoCompleted, &ExecutionContext::real())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn game_from(encoded: &str, player: Color) -> Game {
        Game::from_position(GameConfig::default(), Grid::parse(encoded).unwrap(), player).unwrap()
    }

    #[test]
    fn test_new_game_layout() {
        let game = Game::new(GameConfig::default()).unwrap();
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.grid().alive_count(Color::Black), 5);
        assert_eq!(game.grid().alive_count(Color::White), 5);
        assert_eq!(game.grid().encode(), "BBBBB/...../...../...../WWWWW");
    }

    #[test]
    fn test_invalid_move_leaves_state_untouched() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        let before = game.grid().encode();
        let bogus = Move::Simple {
            from: Position::new(2, 2),
            to: Position::new(2, 3),
            direction: Direction::Right,
        };
        assert!(matches!(game.play(&bogus), Err(Error::InvalidMove { .. })));
        assert_eq!(game.grid().encode(), before);
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.revision(), 0);
        assert!(!game.can_undo());
    }

    #[test]
    fn test_play_alternates_turns() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        let mv = game.legal_moves()[0].clone();
        game.play(&mv).unwrap();
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.revision(), 1);
        assert!(game.can_undo());
    }

    #[test]
    fn test_capturing_last_token_wins() {
        let mut game = game_from("BW.B./.B.../...../...../.....", Color::Black);
        let mv = Move::Simple {
            from: Position::new(0, 3),
            to: Position::new(0, 2),
            direction: Direction::Left,
        };
        let outcome = game.play(&mv).unwrap();
        assert_eq!(outcome.captured.len(), 1);
        assert_eq!(
            game.status(),
            GameStatus::Over {
                winner: Color::Black,
                reason: WinReason::AllTokensCaptured,
            }
        );
        assert!(matches!(game.play(&mv), Err(Error::GameOver)));
    }

    #[test]
    fn test_opponent_without_moves_loses() {
        let mut game = game_from("B..../...../...../...../....w", Color::Black);
        let mv = Move::Simple {
            from: Position::new(0, 0),
            to: Position::new(1, 0),
            direction: Direction::Down,
        };
        game.play(&mv).unwrap();
        assert_eq!(
            game.status(),
            GameStatus::Over {
                winner: Color::Black,
                reason: WinReason::NoMovesLeft,
            }
        );
    }

    #[test]
    fn test_undo_restores_prior_state() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        let before = game.grid().encode();
        let mv = game.legal_moves()[0].clone();
        game.play(&mv).unwrap();

        assert!(game.undo().unwrap());
        assert_eq!(game.grid().encode(), before);
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.status(), GameStatus::InProgress);

        assert!(game.redo().unwrap());
        assert_eq!(game.current_player(), Color::White);
        assert!(!game.redo().unwrap());
    }
}
