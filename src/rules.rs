//! Rules layer: move generation, push validation, move execution, and
//! surround capture detection.

pub mod capture;
pub mod engine;
pub mod moves;

pub use capture::{Capture, check_and_capture};
pub use engine::{MoveEngine, MoveOutcome};
pub use moves::Move;
