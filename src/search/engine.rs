//! Minimax search engine
//!
//! Levels map onto search depth: level 0 picks uniformly among the legal
//! moves with a seeded generator, levels 1 and above run an alpha-beta
//! minimax of that depth. Tie-break policy: strict improvement only, so
//! among equally scored moves the first one in deterministic generation
//! order (pushes ordered before simple moves) wins. Given the same grid,
//! level, and seed the engine always selects the same move.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    Error, Result,
    board::Grid,
    events::{EventBus, ExecutionContext, GameEvent},
    game::Game,
    rules::{Move, MoveEngine},
    search::{
        control::SearchControl,
        eval::{WIN_SCORE, evaluate},
    },
    types::{Color, MAX_AI_LEVEL},
};

/// Seed used when neither the app nor the config supplies one, keeping
/// default behavior reproducible.
pub const DEFAULT_SEED: u64 = 42;

/// Pushes first, stable within each class.
fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|m| !m.is_push());
}

/// One AI player.
pub struct SearchEngine {
    level: u8,
    rng: StdRng,
    control: SearchControl,
}

impl SearchEngine {
    /// Create an engine with the default seed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAiLevel`] for levels above
    /// [`MAX_AI_LEVEL`].
    pub fn new(level: u8) -> Result<Self> {
        Self::with_seed(level, DEFAULT_SEED)
    }

    /// Create an engine with an explicit seed.
    pub fn with_seed(level: u8, seed: u64) -> Result<Self> {
        if level > MAX_AI_LEVEL {
            return Err(Error::InvalidAiLevel {
                level,
                max: MAX_AI_LEVEL,
            });
        }
        Ok(SearchEngine {
            level,
            rng: StdRng::seed_from_u64(seed),
            control: SearchControl::new(),
        })
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Handle for aborting an in-flight search between root evaluations.
    pub fn control(&self) -> SearchControl {
        self.control.clone()
    }

    /// Run one full AI turn against `game`.
    ///
    /// Protocol: emit `ai:thinking`, search on private grid clones with the
    /// simulation context, emit `ai:moveSelected`, re-execute the chosen
    /// move against the live game through the committed-AI path, emit
    /// `ai:moveExecuted`. Returns `None` without touching the game when the
    /// side to move has no legal move, the search was cancelled, or the
    /// game state changed under the search (stale result).
    pub fn take_turn(&mut self, game: &mut Game) -> Result<Option<Move>> {
        if game.is_over() {
            return Ok(None);
        }
        self.control.reset();

        let player = game.current_player();
        let revision = game.revision();
        game.bus_mut()
            .emit(GameEvent::AiThinking { player }, &ExecutionContext::real())?;

        let Some(chosen) = self.select_move(game)? else {
            return Ok(None);
        };

        // A selected move is only applied to the state it was computed for.
        if game.revision() != revision || game.is_over() || game.current_player() != player {
            return Ok(None);
        }

        game.bus_mut()
            .emit(GameEvent::AiMoveSelected { player }, &ExecutionContext::real())?;
        game.play_committed_ai(&chosen)?;
        game.bus_mut()
            .emit(GameEvent::AiMoveExecuted, &ExecutionContext::real())?;
        Ok(Some(chosen))
    }

    /// Pick a move for the side to move without applying it.
    pub fn select_move(&mut self, game: &mut Game) -> Result<Option<Move>> {
        let player = game.current_player();
        let engine = game.engine();
        let mut root_moves = engine.generate_moves(game.grid(), player);
        if root_moves.is_empty() {
            return Ok(None);
        }

        if self.level == 0 {
            let idx = self.rng.random_range(0..root_moves.len());
            return Ok(Some(root_moves.swap_remove(idx)));
        }

        order_moves(&mut root_moves);
        let depth = self.level;
        let total = root_moves.len();
        let mut best: Option<Move> = None;
        let mut best_score = i32::MIN;
        let mut alpha = i32::MIN;

        for (i, mv) in root_moves.iter().enumerate() {
            if self.control.is_cancelled() {
                return Ok(None);
            }
            let mut child = game.grid().clone();
            engine.execute_move(
                &mut child,
                mv,
                player,
                &ExecutionContext::simulation(),
                game.bus_mut(),
            )?;
            let score = self.minimax(
                &engine,
                &child,
                player.opponent(),
                player,
                depth - 1,
                alpha,
                i32::MAX,
                game.bus_mut(),
            )?;
            game.bus_mut().emit(
                GameEvent::AiProgress {
                    depth,
                    considered: i + 1,
                    total,
                },
                &ExecutionContext::real(),
            )?;
            if score > best_score {
                best_score = score;
                best = Some(mv.clone());
            }
            alpha = alpha.max(best_score);
        }

        Ok(best)
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &self,
        engine: &MoveEngine,
        grid: &Grid,
        to_move: Color,
        me: Color,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        bus: &mut EventBus,
    ) -> Result<i32> {
        if grid.alive_count(me) == 0 {
            return Ok(-(WIN_SCORE + depth as i32));
        }
        if grid.alive_count(me.opponent()) == 0 {
            return Ok(WIN_SCORE + depth as i32);
        }
        if depth == 0 {
            return Ok(evaluate(engine, grid, me));
        }

        let mut moves = engine.generate_moves(grid, to_move);
        if moves.is_empty() {
            // The stuck side loses.
            let score = WIN_SCORE + depth as i32;
            return Ok(if to_move == me { -score } else { score });
        }
        order_moves(&mut moves);

        if to_move == me {
            let mut best = i32::MIN;
            for mv in &moves {
                let mut child = grid.clone();
                engine.execute_move(&mut child, mv, to_move, &ExecutionContext::simulation(), bus)?;
                let score =
                    self.minimax(engine, &child, to_move.opponent(), me, depth - 1, alpha, beta, bus)?;
                best = best.max(score);
                alpha = alpha.max(best);
                if alpha >= beta {
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = i32::MAX;
            for mv in &moves {
                let mut child = grid.clone();
                engine.execute_move(&mut child, mv, to_move, &ExecutionContext::simulation(), bus)?;
                let score =
                    self.minimax(engine, &child, to_move.opponent(), me, depth - 1, alpha, beta, bus)?;
                best = best.min(score);
                beta = beta.min(best);
                if alpha >= beta {
                    break;
                }
            }
            Ok(best)
        }
    }
}
