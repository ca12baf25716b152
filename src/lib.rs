//! Corral: a push-and-surround board game engine
//!
//! This crate provides:
//! - The authoritative grid and token model with a text codec
//! - Move generation and the push/capture execution engine
//! - Surround capture detection with edge-as-wall semantics
//! - Undo/redo history over whole-state snapshots
//! - An adversarial minimax AI sharing the exact execution path of live
//!   play, isolated behind a simulation context
//! - A typed event bus with a real-only subscription mode for UI, sound,
//!   and animation consumers
//!
//! The AI explores moves through the same engine the player uses; the only
//! difference is the execution context tag on every call and emission.
//! Real-only subscribers and the history manager reject simulated work
//! structurally, so look-ahead can never leak visible side effects.
//!
//! # Examples
//!
//! ```
//! use corral::app::{App, GameConfig};
//! use corral::types::PlayerKind;
//!
//! let app = App::for_testing().with_default_seed(42).build();
//! let config = GameConfig::default()
//!     .with_black_player(PlayerKind::Ai)
//!     .with_white_player(PlayerKind::Ai)
//!     .with_black_ai_level(1)
//!     .with_white_ai_level(1);
//! let mut session = app.create_session(config)?;
//! session.start()?;
//! session.advance()?;
//! assert_eq!(session.game().move_count(), 1);
//! # Ok::<(), corral::Error>(())
//! ```

pub mod app;
pub mod board;
pub mod cli;
pub mod error;
pub mod events;
pub mod game;
pub mod history;
pub mod rules;
pub mod search;
pub mod types;

pub use app::{App, AppBuilder, GameConfig, GameSession};
pub use board::{Grid, Token};
pub use error::{Error, Result};
pub use events::{EventBus, EventHandler, ExecutionContext, GameEvent};
pub use game::Game;
pub use history::{GameSnapshot, HistoryEntry, HistoryManager};
pub use rules::{Capture, Move, MoveEngine, MoveOutcome};
pub use search::{SearchControl, SearchEngine};
pub use types::{Color, Direction, GameStatus, PlayerKind, Position, WinReason};
