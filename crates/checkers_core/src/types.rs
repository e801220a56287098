use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }
    /// Reaching this row promotes a man of this color.
    pub fn crown_row(self) -> u8 {
        match self {
            Color::Red => 7,
            Color::Black => 0,
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    pub fn on_board(self) -> bool {
        self.row < 8 && self.col < 8
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Bounds-checked square constructor for possibly off-board coordinates.
pub fn sq(row: i8, col: i8) -> Option<Square> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some(Square {
            row: row as u8,
            col: col as u8,
        })
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub king: bool,
    pub pos: Square,
}

/// Legal destinations of one piece, each mapped to the squares the move
/// would capture. An empty list is a simple move; entries within one set are
/// always homogeneous (all captures or all simple moves).
pub type MoveSet = BTreeMap<Square, Vec<Square>>;
