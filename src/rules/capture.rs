//! Surround capture detection
//!
//! A token is captured when all four orthogonal sides are blocked. A side
//! blocks when it is off the board or occupied by any token regardless of
//! color or state, so edges and corners amplify captures: an edge token
//! needs three occupied neighbors, a corner token two. Detection runs after
//! every individual token relocation because intermediate positions during
//! a push can create surround conditions that the final position alone
//! would miss.

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    board::Grid,
    events::{EventBus, ExecutionContext, GameEvent},
    types::{Color, Direction, Position},
};

/// A capture produced by one detection sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    pub position: Position,
    pub color: Color,
}

/// Whether every orthogonal side of `pos` is off-board or occupied.
fn is_surrounded(grid: &Grid, pos: Position) -> bool {
    Direction::ALL.iter().all(|&dir| match grid.neighbor(pos, dir) {
        Some(neighbor) => grid.occupied(neighbor),
        None => true,
    })
}

/// Mark every newly surrounded token captured and report the transitions.
///
/// Already-captured tokens never re-trigger, so running the sweep twice with
/// no intervening mutation yields an empty list the second time. Inactive
/// tokens are still capturable. Captured tokens stay on the board as
/// blockers.
///
/// Emits `token:captured` and `token:captureNotified` per transition, tagged
/// with the caller's execution context.
pub fn check_and_capture(
    grid: &mut Grid,
    ctx: &ExecutionContext,
    bus: &mut EventBus,
) -> Result<Vec<Capture>> {
    // Occupancy never shrinks during a sweep, so a single row-major pass is
    // complete even when adjacent tokens capture each other.
    let mut captures = Vec::new();
    for pos in grid.positions().collect::<Vec<_>>() {
        let Some(token) = grid.token_at(pos) else {
            continue;
        };
        if token.is_captured || !is_surrounded(grid, pos) {
            continue;
        }
        let color = token.color;
        if let Some(token) = grid.token_at_mut(pos) {
            token.capture();
        }
        captures.push(Capture {
            position: pos,
            color,
        });
    }

    for capture in &captures {
        bus.emit(
            GameEvent::TokenCaptured {
                position: capture.position,
                color: capture.color,
            },
            ctx,
        )?;
        bus.emit(
            GameEvent::TokenCaptureNotified {
                position: capture.position,
                color: capture.color,
            },
            ctx,
        )?;
    }

    Ok(captures)
}
