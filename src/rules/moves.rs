//! Move representation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Direction, Position};

/// A legal move for one token.
///
/// Moves are produced by [`crate::rules::MoveEngine::generate_moves`] and
/// executed verbatim; the variants carry everything execution needs so the
/// hot search path never re-derives the push line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// The destination cell is empty.
    Simple {
        from: Position,
        to: Position,
        direction: Direction,
    },
    /// The destination cell is occupied and the whole contiguous line of
    /// tokens starting there shifts one cell in `direction`.
    ///
    /// `pushed_line` holds the pre-move positions of the shifted tokens,
    /// ordered from the destination outward.
    Push {
        from: Position,
        to: Position,
        direction: Direction,
        pushed_line: Vec<Position>,
    },
}

impl Move {
    pub fn from(&self) -> Position {
        match self {
            Move::Simple { from, .. } | Move::Push { from, .. } => *from,
        }
    }

    pub fn to(&self) -> Position {
        match self {
            Move::Simple { to, .. } | Move::Push { to, .. } => *to,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Move::Simple { direction, .. } | Move::Push { direction, .. } => *direction,
        }
    }

    /// Whether this move shifts a line of tokens.
    pub fn is_push(&self) -> bool {
        matches!(self, Move::Push { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Simple { from, to, .. } => write!(f, "{from} -> {to}"),
            Move::Push {
                from,
                to,
                pushed_line,
                ..
            } => write!(f, "{from} -> {to} pushing {} token(s)", pushed_line.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let mv = Move::Push {
            from: Position::new(2, 1),
            to: Position::new(2, 2),
            direction: Direction::Right,
            pushed_line: vec![Position::new(2, 2)],
        };
        assert_eq!(mv.from(), Position::new(2, 1));
        assert_eq!(mv.to(), Position::new(2, 2));
        assert_eq!(mv.direction(), Direction::Right);
        assert!(mv.is_push());
    }
}
