use crate::error::MoveError;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// What `Board::apply` did beyond relocating the piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
    pub promoted: bool,
}

/// The 8x8 grid plus per-color piece and king counters.
///
/// Counters are maintained incrementally on every capture and promotion and
/// always agree with a fresh scan of the grid (`count_pieces`, `count_kings`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    remaining: [u8; 2],
    kings: [u8; 2],
}

impl Board {
    /// Standard starting position: 12 men per side on the dark squares,
    /// Red on rows 0-2, Black on rows 5-7.
    pub fn new() -> Self {
        let mut b = Board::empty();
        for row in 0..8u8 {
            for col in 0..8u8 {
                if col % 2 != (row + 1) % 2 {
                    continue;
                }
                if row < 3 {
                    b.place(Square::new(row, col), Color::Red, false);
                } else if row > 4 {
                    b.place(Square::new(row, col), Color::Black, false);
                }
            }
        }
        b
    }

    /// Board with no pieces; build arbitrary positions with `place`.
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            remaining: [0; 2],
            kings: [0; 2],
        }
    }

    /// Parse a position from an 8-row text diagram used by tests and
    /// scenario setup. `.` is an empty square, `r`/`b` are men and `R`/`B`
    /// kings of the respective color; whitespace is ignored. Row 0 is the
    /// first row of the diagram.
    pub fn from_diagram(diagram: &str) -> Self {
        let cells: Vec<char> = diagram.chars().filter(|c| !c.is_whitespace()).collect();
        assert!(
            cells.len() == 64,
            "diagram must describe exactly 64 squares, got {}",
            cells.len()
        );

        let mut b = Board::empty();
        for (i, &ch) in cells.iter().enumerate() {
            let at = Square::new((i / 8) as u8, (i % 8) as u8);
            match ch {
                '.' => {}
                'r' => b.place(at, Color::Red, false),
                'R' => b.place(at, Color::Red, true),
                'b' => b.place(at, Color::Black, false),
                'B' => b.place(at, Color::Black, true),
                _ => panic!("invalid square char in diagram: {}", ch),
            }
        }
        b
    }

    /// Put a piece on an empty square, keeping the counters in step.
    pub fn place(&mut self, at: Square, color: Color, king: bool) {
        assert!(at.on_board(), "square off the board: {at}");
        assert!(
            self.grid[at.row as usize][at.col as usize].is_none(),
            "square already occupied: {at}"
        );
        self.grid[at.row as usize][at.col as usize] = Some(Piece {
            color,
            king,
            pos: at,
        });
        self.remaining[color.idx()] += 1;
        if king {
            self.kings[color.idx()] += 1;
        }
    }

    pub fn piece_at(&self, at: Square) -> Option<Piece> {
        *self.grid.get(at.row as usize)?.get(at.col as usize)?
    }

    /// All pieces of one color, in row-major order.
    pub fn pieces(&self, color: Color) -> Vec<Piece> {
        let mut out = Vec::new();
        for row in &self.grid {
            for cell in row {
                if let Some(p) = cell
                    && p.color == color
                {
                    out.push(*p);
                }
            }
        }
        out
    }

    pub fn pieces_remaining(&self, color: Color) -> u8 {
        self.remaining[color.idx()]
    }

    pub fn kings(&self, color: Color) -> u8 {
        self.kings[color.idx()]
    }

    /// Recount pieces from the grid. The incremental counter must always
    /// agree with this; tests verify the invariant after every move.
    pub fn count_pieces(&self, color: Color) -> u8 {
        self.pieces(color).len() as u8
    }

    pub fn count_kings(&self, color: Color) -> u8 {
        self.pieces(color).iter().filter(|p| p.king).count() as u8
    }

    fn set(&mut self, at: Square, cell: Option<Piece>) {
        self.grid[at.row as usize][at.col as usize] = cell;
    }

    /// Execute a move: vacate `from`, occupy `to`, remove every captured
    /// piece, then check promotion once for the landed piece.
    ///
    /// All checks run before any mutation, so a rejected move leaves the
    /// board untouched. Membership of `to` in the piece's legal move set is
    /// the caller's responsibility (the match controller only passes
    /// destinations drawn from a freshly computed `MoveSet`).
    pub fn apply(
        &mut self,
        from: Square,
        to: Square,
        captured: &[Square],
    ) -> Result<Applied, MoveError> {
        if !from.on_board() || !to.on_board() || captured.iter().any(|s| !s.on_board()) {
            return Err(MoveError::OutOfBounds);
        }
        let piece = self.piece_at(from).ok_or(MoveError::NoPieceSelected)?;
        if self.piece_at(to).is_some() {
            return Err(MoveError::IllegalMove);
        }
        for &at in captured {
            match self.piece_at(at) {
                Some(victim) if victim.color != piece.color => {}
                _ => return Err(MoveError::IllegalMove),
            }
        }

        let mut moved = piece;
        moved.pos = to;
        self.set(from, None);
        self.set(to, Some(moved));

        for &at in captured {
            if let Some(victim) = self.piece_at(at) {
                self.set(at, None);
                self.remaining[victim.color.idx()] -= 1;
                if victim.king {
                    self.kings[victim.color.idx()] -= 1;
                }
            }
        }

        // Promotion is evaluated once per move, after relocation. A king
        // landing on the crown row again stays a single king.
        let mut promoted = false;
        if !moved.king && to.row == moved.color.crown_row() {
            moved.king = true;
            self.set(to, Some(moved));
            self.kings[moved.color.idx()] += 1;
            promoted = true;
        }

        Ok(Applied { promoted })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
