//! Application layer: configuration, composition root, and sessions.
//!
//! Everything the core needs is constructed once here and passed by
//! reference; there are no ambient globals. The [`App`] container owns the
//! cross-cutting defaults (random seed) and wires games, search engines,
//! and sessions together, mirroring how embedding hosts are expected to
//! compose the crate.

pub mod config;
pub mod container;
pub mod session;

pub use config::GameConfig;
pub use container::{App, AppBuilder};
pub use session::GameSession;
