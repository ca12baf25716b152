//! Adversarial look-ahead search over the move engine.
//!
//! The search explores moves by calling the exact same
//! [`crate::rules::MoveEngine::execute_move`] path as live play, on private
//! grid clones tagged with the simulation context. Events produced during
//! rollouts still flow through the live bus so all-mode subscribers can
//! observe the search, while real-only subscribers never see them.

pub mod control;
pub mod engine;
pub mod eval;

pub use control::SearchControl;
pub use engine::{DEFAULT_SEED, SearchEngine};
pub use eval::evaluate;
