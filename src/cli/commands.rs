//! CLI subcommands

pub mod play;
pub mod series;

use anyhow::{Result, anyhow};

use crate::types::PlayerKind;

pub(crate) fn parse_player_kind(value: &str, flag: &str) -> Result<PlayerKind> {
    match value.trim().to_ascii_lowercase().as_str() {
        "human" | "h" => Ok(PlayerKind::Human),
        "ai" | "a" => Ok(PlayerKind::Ai),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'human' or 'ai')"
        )),
    }
}
