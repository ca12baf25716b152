//! Move generation, push validation, and move execution
//!
//! The engine is stateless; it operates on a grid handed in by the caller
//! and reports side effects through the event bus. The same execution path
//! serves committed play and AI look-ahead, distinguished only by the
//! execution context tags, so the search can never apply different push or
//! capture rules than the player experiences.

use crate::{
    Result,
    board::Grid,
    events::{EventBus, ExecutionContext, GameEvent},
    rules::{
        capture::{Capture, check_and_capture},
        moves::Move,
    },
    types::{Color, Direction, Position},
};

/// Side effects of one executed move.
#[derive(Debug, Clone, Default)]
pub struct MoveOutcome {
    /// Tokens captured during this move, in detection order.
    pub captured: Vec<Capture>,
    /// Post-move positions of tokens deactivated by a push.
    pub deactivated: Vec<Position>,
}

/// Enumerates, validates, and executes moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveEngine;

impl MoveEngine {
    pub fn new() -> Self {
        MoveEngine
    }

    /// Every legal move for `color`.
    ///
    /// Iteration order is fixed: rows, then columns, then the
    /// [`Direction::ALL`] order. The order has no rules meaning but keeps
    /// search and tests reproducible. Only active, non-captured tokens of
    /// `color` may move; inactive tokens sit the turn out.
    pub fn generate_moves(&self, grid: &Grid, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for pos in grid.positions() {
            let Some(token) = grid.token_at(pos) else {
                continue;
            };
            if token.color != color || !token.is_active || token.is_captured {
                continue;
            }
            for &direction in Direction::ALL.iter() {
                let Some(dest) = grid.neighbor(pos, direction) else {
                    continue;
                };
                if !grid.occupied(dest) {
                    moves.push(Move::Simple {
                        from: pos,
                        to: dest,
                        direction,
                    });
                } else if let Some(pushed_line) = self.validate_push(grid, pos, direction) {
                    moves.push(Move::Push {
                        from: pos,
                        to: dest,
                        direction,
                        pushed_line,
                    });
                }
            }
        }
        moves
    }

    /// Validate a push from `from` in `direction`.
    ///
    /// Walks the maximal contiguous run of occupied cells starting at the
    /// destination. The push is legal iff the cell immediately past the run
    /// is on the board and empty; a line can never be pushed off the edge.
    /// Returns the pushed line ordered from the destination outward, or
    /// `None` when the push is illegal or the destination is empty.
    pub fn validate_push(
        &self,
        grid: &Grid,
        from: Position,
        direction: Direction,
    ) -> Option<Vec<Position>> {
        let dest = grid.neighbor(from, direction)?;
        if !grid.occupied(dest) {
            return None;
        }
        let mut line = vec![dest];
        let mut cursor = dest;
        loop {
            match grid.neighbor(cursor, direction) {
                // The run extends to the board edge; nothing can give way.
                None => return None,
                Some(next) if grid.occupied(next) => {
                    line.push(next);
                    cursor = next;
                }
                Some(_) => return Some(line),
            }
        }
    }

    /// Execute a move produced by [`MoveEngine::generate_moves`].
    ///
    /// Executing a move the generator did not produce is a programming
    /// error; the engine does not re-validate here so the search hot path
    /// stays cheap. Callers that accept untrusted moves check membership
    /// first (see [`crate::game::Game::play`]).
    ///
    /// Event order per move: `move:executing`, then capture events after
    /// each individual relocation, then deactivation events, then
    /// `move:simple`/`move:push`, then the `move:executed` alias. All
    /// emissions carry `ctx` unchanged.
    pub fn execute_move(
        &self,
        grid: &mut Grid,
        mv: &Move,
        color: Color,
        ctx: &ExecutionContext,
        bus: &mut EventBus,
    ) -> Result<MoveOutcome> {
        debug_assert!(
            grid.token_at(mv.from())
                .is_some_and(|t| t.color == color && t.is_active && !t.is_captured),
            "executed move does not belong to an active {color} token"
        );

        bus.emit(
            GameEvent::MoveExecuting {
                mv: mv.clone(),
                player: color,
            },
            ctx,
        )?;

        let mut captured = Vec::new();
        let mut deactivated = Vec::new();

        match mv {
            Move::Simple { from, to, .. } => {
                grid.move_token(*from, *to);
                captured.extend(check_and_capture(grid, ctx, bus)?);
            }
            Move::Push {
                from,
                to,
                direction,
                pushed_line,
            } => {
                // Shift from the far end so no token overwrites its neighbor.
                // A capture sweep follows every single relocation; a token
                // can become surrounded mid-push.
                for &pos in pushed_line.iter().rev() {
                    let target = pos
                        .offset(*direction)
                        .expect("validated push line stays on the board");
                    grid.move_token(pos, target);
                    captured.extend(check_and_capture(grid, ctx, bus)?);
                }
                grid.move_token(*from, *to);
                captured.extend(check_and_capture(grid, ctx, bus)?);

                // Surviving enemy tokens that were shoved sit out their
                // owner's next turn. The pusher's own tokens stay active.
                for &pos in pushed_line.iter() {
                    let target = pos
                        .offset(*direction)
                        .expect("validated push line stays on the board");
                    let Some(token) = grid.token_at_mut(target) else {
                        continue;
                    };
                    if token.color == color || token.is_captured {
                        continue;
                    }
                    token.is_active = false;
                    let token_color = token.color;
                    deactivated.push(target);
                    bus.emit(
                        GameEvent::TokenDeactivated {
                            position: target,
                            color: token_color,
                        },
                        ctx,
                    )?;
                }
            }
        }

        // The mover's side finished its turn: tokens it had sitting out
        // come back. Running this here keeps simulated rollouts on the
        // exact turn cycle of live play.
        for pos in grid.positions().collect::<Vec<_>>() {
            if let Some(token) = grid.token_at_mut(pos) {
                if token.color == color && !token.is_captured && !token.is_active {
                    token.is_active = true;
                }
            }
        }

        match mv {
            Move::Simple {
                from,
                to,
                direction,
            } => {
                bus.emit(
                    GameEvent::MoveSimple {
                        from: *from,
                        to: *to,
                        direction: *direction,
                        player: color,
                        captured: captured.clone(),
                    },
                    ctx,
                )?;
            }
            Move::Push {
                from,
                to,
                direction,
                pushed_line,
            } => {
                bus.emit(
                    GameEvent::MovePush {
                        from: *from,
                        to: *to,
                        direction: *direction,
                        player: color,
                        pushed_line: pushed_line.clone(),
                        captured: captured.clone(),
                    },
                    ctx,
                )?;
            }
        }

        bus.emit(
            GameEvent::MoveExecuted {
                mv: mv.clone(),
                player: color,
                captured: captured.clone(),
            },
            ctx,
        )?;

        Ok(MoveOutcome {
            captured,
            deactivated,
        })
    }
}
