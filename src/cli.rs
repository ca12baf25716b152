//! CLI infrastructure for the corral binary
//!
//! Commands consume the core exclusively through the app layer and the
//! event bus; no rules logic lives here.

pub mod commands;
