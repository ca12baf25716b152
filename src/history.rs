//! Reversible move history
//!
//! Committed moves are recorded as snapshots and replayed wholesale on undo
//! and redo; nothing is re-derived. Only real executions may be recorded:
//! the manager rejects entries carrying a simulation context, which is the
//! structural guarantee that search rollouts never touch history.

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    board::Grid,
    events::ExecutionContext,
    rules::{Capture, Move},
    types::{Color, GameStatus, Position},
};

/// Full game state at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub current_player: Color,
    pub status: GameStatus,
}

/// Everything needed to exactly invert one committed move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub mv: Move,
    pub captured: Vec<Capture>,
    pub deactivated: Vec<Position>,
    pub prior: GameSnapshot,
}

/// Linear undo/redo stacks over committed moves.
#[derive(Debug, Default)]
pub struct HistoryManager {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
}

impl HistoryManager {
    pub fn new() -> Self {
        HistoryManager {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Record a committed move and invalidate any redo branch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SimulatedHistoryEntry`] when `ctx` carries the
    /// simulation tag.
    pub fn record(&mut self, entry: HistoryEntry, ctx: &ExecutionContext) -> Result<()> {
        if ctx.is_simulation {
            return Err(Error::SimulatedHistoryEntry);
        }
        self.undo_stack.push(entry);
        self.redo_stack.clear();
        Ok(())
    }

    /// Step back one move.
    ///
    /// `current` is the state being left; it is parked on the redo stack.
    /// Returns the snapshot to restore, or `None` when there is nothing to
    /// undo.
    pub fn undo(&mut self, current: GameSnapshot) -> Option<GameSnapshot> {
        let entry = self.undo_stack.pop()?;
        let prior = entry.prior.clone();
        self.redo_stack.push(HistoryEntry {
            prior: current,
            ..entry
        });
        Some(prior)
    }

    /// Step forward one undone move. Inverse of [`HistoryManager::undo`].
    pub fn redo(&mut self, current: GameSnapshot) -> Option<GameSnapshot> {
        let entry = self.redo_stack.pop()?;
        let next = entry.prior.clone();
        self.undo_stack.push(HistoryEntry {
            prior: current,
            ..entry
        });
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of committed moves available to undo.
    pub fn depth(&self) -> usize {
        self.undo_stack.len()
    }
}
