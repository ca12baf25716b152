//! Position evaluation
//!
//! Deterministic integer heuristic. Material dominates, mobility and board
//! center control break material ties. Center distance is measured in
//! doubled coordinates so boards with an even edge length have an exact
//! integer center.

use crate::{board::Grid, rules::MoveEngine, types::Color};

/// Score per alive token.
pub const MATERIAL_WEIGHT: i32 = 100;

/// Score per legal move.
pub const MOBILITY_WEIGHT: i32 = 2;

/// Score per doubled-coordinate step toward the board center.
pub const CENTER_WEIGHT: i32 = 3;

/// Score of a decided position, adjusted by remaining depth so faster wins
/// rank higher.
pub const WIN_SCORE: i32 = 1_000_000;

/// Evaluate `grid` from the perspective of `color`. Antisymmetric:
/// `evaluate(g, c) == -evaluate(g, c.opponent())`.
pub fn evaluate(engine: &MoveEngine, grid: &Grid, color: Color) -> i32 {
    side_score(engine, grid, color) - side_score(engine, grid, color.opponent())
}

fn side_score(engine: &MoveEngine, grid: &Grid, color: Color) -> i32 {
    let material = grid.alive_count(color) as i32 * MATERIAL_WEIGHT;
    let mobility = engine.generate_moves(grid, color).len() as i32 * MOBILITY_WEIGHT;

    let center = (grid.size() - 1) as i32;
    let span = 2 * center;
    let mut positional = 0;
    for (pos, token) in grid.tokens() {
        if token.color != color || token.is_captured {
            continue;
        }
        let dist = (2 * pos.row as i32 - center).abs() + (2 * pos.col as i32 - center).abs();
        positional += (span - dist) * CENTER_WEIGHT;
    }

    material + mobility + positional
}
