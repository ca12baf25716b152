//! Typed event channel between the rules core and its consumers.
//!
//! The core never calls into rendering, sound, or persistence directly; it
//! only publishes [`GameEvent`]s through the [`EventBus`]. Every emission
//! carries an [`ExecutionContext`] so consumers can tell committed gameplay
//! apart from AI look-ahead rollouts, and the bus offers a real-only
//! subscription mode that filters the rollouts out structurally.

pub mod bus;
pub mod event;
pub mod handlers;

pub use bus::{EventBus, EventHandler};
pub use event::{ExecutionContext, GameEvent};
pub use handlers::{ConsoleHandler, JsonlEventWriter, RecordedEvent, RecordingHandler};
