//! Event catalog and execution context tags

use serde::Serialize;

use crate::{
    rules::{Capture, Move},
    types::{Color, Direction, PlayerKind, Position, WinReason},
};

/// Tags threaded through every mutating call.
///
/// `is_simulation` marks AI look-ahead execution; `is_committed_ai_move`
/// marks the one real re-execution of the move an AI selected. The tags are
/// carried unchanged from the caller into every event the call emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExecutionContext {
    pub is_simulation: bool,
    pub is_committed_ai_move: bool,
}

impl ExecutionContext {
    /// A committed move made by a human caller.
    pub fn real() -> Self {
        ExecutionContext {
            is_simulation: false,
            is_committed_ai_move: false,
        }
    }

    /// A look-ahead rollout. Side-effecting consumers suppress themselves.
    pub fn simulation() -> Self {
        ExecutionContext {
            is_simulation: true,
            is_committed_ai_move: false,
        }
    }

    /// The committed re-execution of a move the search selected.
    pub fn committed_ai() -> Self {
        ExecutionContext {
            is_simulation: false,
            is_committed_ai_move: true,
        }
    }
}

/// Everything the core publishes.
///
/// Payload shapes are part of the external contract; `name()` yields the
/// wire name consumers key their subscriptions on in logs and UIs.
#[derive(Debug, Clone, Serialize)]
pub enum GameEvent {
    GameInitialized {
        current_player: Color,
        black_player: PlayerKind,
        white_player: PlayerKind,
    },
    MoveExecuting {
        mv: Move,
        player: Color,
    },
    MoveSimple {
        from: Position,
        to: Position,
        direction: Direction,
        player: Color,
        captured: Vec<Capture>,
    },
    MovePush {
        from: Position,
        to: Position,
        direction: Direction,
        player: Color,
        pushed_line: Vec<Position>,
        captured: Vec<Capture>,
    },
    /// Post-commit alias emitted after `MoveSimple`/`MovePush`.
    MoveExecuted {
        mv: Move,
        player: Color,
        captured: Vec<Capture>,
    },
    TokenCaptured {
        position: Position,
        color: Color,
    },
    /// Follow-up notification kept for consumers that animate captures
    /// separately from the capture itself.
    TokenCaptureNotified {
        position: Position,
        color: Color,
    },
    TokenDeactivated {
        position: Position,
        color: Color,
    },
    AiThinking {
        player: Color,
    },
    AiProgress {
        depth: u8,
        considered: usize,
        total: usize,
    },
    AiMoveSelected {
        player: Color,
    },
    AiMoveExecuted,
    GameOver {
        winner: Color,
        reason: WinReason,
    },
    UndoCompleted,
    RedoCompleted,
}

impl GameEvent {
    /// Wire name of this event.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::GameInitialized { .. } => "game:initialized",
            GameEvent::MoveExecuting { .. } => "move:executing",
            GameEvent::MoveSimple { .. } => "move:simple",
            GameEvent::MovePush { .. } => "move:push",
            GameEvent::MoveExecuted { .. } => "move:executed",
            GameEvent::TokenCaptured { .. } => "token:captured",
            GameEvent::TokenCaptureNotified { .. } => "token:captureNotified",
            GameEvent::TokenDeactivated { .. } => "token:deactivated",
            GameEvent::AiThinking { .. } => "ai:thinking",
            GameEvent::AiProgress { .. } => "ai:progress",
            GameEvent::AiMoveSelected { .. } => "ai:moveSelected",
            GameEvent::AiMoveExecuted => "ai:moveExecuted",
            GameEvent::GameOver { .. } => "game:over",
            GameEvent::UndoCompleted => "undo:completed",
            GameEvent::RedoCompleted => "redo:completed",
        }
    }
}
