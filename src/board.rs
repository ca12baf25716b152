//! Grid model: cell occupancy and token attributes, with no rules knowledge.
//!
//! The grid is a pure data container. Legality of moves, pushes, and captures
//! lives in [`crate::rules`]; the grid only answers occupancy and adjacency
//! queries. Out-of-bounds access returns empty rather than panicking because
//! board edges are semantically meaningful to the callers (an off-board
//! neighbor counts as a blocked side during surround detection).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    types::{Color, Direction, Position},
};

/// A token on the board.
///
/// Invariants: the color never changes after creation, and a captured token
/// is never active. Captured tokens stay on the board and keep blocking
/// their cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub color: Color,
    pub is_active: bool,
    pub is_captured: bool,
}

impl Token {
    /// Create a fresh active token.
    pub fn new(color: Color) -> Self {
        Token {
            color,
            is_active: true,
            is_captured: false,
        }
    }

    /// Mark this token captured. Captured tokens are never active.
    pub fn capture(&mut self) {
        self.is_captured = true;
        self.is_active = false;
    }

    pub fn to_char(self) -> char {
        match (self.color, self.is_captured, self.is_active) {
            (Color::Black, true, _) => 'x',
            (Color::White, true, _) => 'o',
            (Color::Black, false, true) => 'B',
            (Color::Black, false, false) => 'b',
            (Color::White, false, true) => 'W',
            (Color::White, false, false) => 'w',
        }
    }

    pub fn from_char(c: char) -> Option<Option<Token>> {
        match c {
            '.' | ' ' => Some(None),
            'B' => Some(Some(Token::new(Color::Black))),
            'W' => Some(Some(Token::new(Color::White))),
            'b' => Some(Some(Token {
                color: Color::Black,
                is_active: false,
                is_captured: false,
            })),
            'w' => Some(Some(Token {
                color: Color::White,
                is_active: false,
                is_captured: false,
            })),
            'x' => Some(Some(Token {
                color: Color::Black,
                is_active: false,
                is_captured: true,
            })),
            'o' => Some(Some(Token {
                color: Color::White,
                is_active: false,
                is_captured: true,
            })),
            _ => None,
        }
    }
}

/// An N×N board of optionally occupied cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Token>>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBoardSize`] for boards smaller than
    /// [`crate::types::MIN_BOARD_SIZE`].
    pub fn new(size: usize) -> Result<Self> {
        if size < crate::types::MIN_BOARD_SIZE {
            return Err(Error::InvalidBoardSize {
                size,
                min: crate::types::MIN_BOARD_SIZE,
            });
        }
        Ok(Grid {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Board edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` addresses a cell on this board.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    /// Token at `pos`, or `None` for an empty cell or an off-board query.
    pub fn token_at(&self, pos: Position) -> Option<&Token> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.cells[self.index(pos)].as_ref()
    }

    /// Mutable token access. `None` for empty cells and off-board queries.
    pub fn token_at_mut(&mut self, pos: Position) -> Option<&mut Token> {
        if !self.in_bounds(pos) {
            return None;
        }
        let idx = self.index(pos);
        self.cells[idx].as_mut()
    }

    /// Whether `pos` is an occupied on-board cell.
    pub fn occupied(&self, pos: Position) -> bool {
        self.token_at(pos).is_some()
    }

    /// Place or clear a cell. Off-board writes are ignored; bounds are the
    /// caller's responsibility.
    pub fn set_token(&mut self, pos: Position, token: Option<Token>) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.cells[idx] = token;
    }

    /// Relocate the token at `from` to `to`, clearing `from`.
    ///
    /// The grid performs no rules validation; callers guarantee `from` is
    /// occupied and `to` is an empty on-board cell.
    pub fn move_token(&mut self, from: Position, to: Position) {
        debug_assert!(self.occupied(from), "move_token from empty cell {from}");
        debug_assert!(!self.occupied(to), "move_token onto occupied cell {to}");
        if !self.in_bounds(from) || !self.in_bounds(to) {
            return;
        }
        let from_idx = self.index(from);
        let token = self.cells[from_idx].take();
        let to_idx = self.index(to);
        self.cells[to_idx] = token;
    }

    /// Neighbor of `pos` in `direction`, or `None` when it falls off the board.
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        let next = pos.offset(direction)?;
        self.in_bounds(next).then_some(next)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Position::new(row, col)))
    }

    /// All occupied cells in row-major order.
    pub fn tokens(&self) -> impl Iterator<Item = (Position, &Token)> {
        self.positions()
            .filter_map(move |pos| self.token_at(pos).map(|token| (pos, token)))
    }

    /// Count of non-captured tokens of `color`.
    pub fn alive_count(&self, color: Color) -> usize {
        self.tokens()
            .filter(|(_, t)| t.color == color && !t.is_captured)
            .count()
    }

    /// Count of active tokens of `color`.
    pub fn active_count(&self, color: Color) -> usize {
        self.tokens()
            .filter(|(_, t)| t.color == color && t.is_active)
            .count()
    }

    /// Parse a grid from row strings.
    ///
    /// Rows are separated by `/` or newlines. Cell characters: `.` empty,
    /// `B`/`b` active/inactive Black, `W`/`w` active/inactive White, `x`/`o`
    /// captured Black/White.
    ///
    /// # Errors
    ///
    /// Returns an error if the row count, a row length, or a cell character
    /// is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use corral::board::Grid;
    ///
    /// let grid = Grid::parse("BBBBB/...../...../...../WWWWW").unwrap();
    /// assert_eq!(grid.size(), 5);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .split(|c| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        let size = rows.len();
        let mut grid = Grid::new(size)?;
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != size {
                return Err(Error::InvalidRowLength {
                    row,
                    expected: size,
                    got: chars.len(),
                });
            }
            for (col, &c) in chars.iter().enumerate() {
                let cell = Token::from_char(c).ok_or(Error::InvalidCellCharacter {
                    character: c,
                    row,
                    col,
                })?;
                grid.set_token(Position::new(row, col), cell);
            }
        }
        Ok(grid)
    }

    /// Encode the grid as `/`-separated row strings, inverse of [`Grid::parse`].
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in 0..self.size {
            if row > 0 {
                out.push('/');
            }
            for col in 0..self.size {
                match self.token_at(Position::new(row, col)) {
                    Some(token) => out.push(token.to_char()),
                    None => out.push('.'),
                }
            }
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                match self.token_at(Position::new(row, col)) {
                    Some(token) => write!(f, "{}", token.to_char())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
