use crate::board::Board;
use crate::types::*;

/// Diagonal directions a piece may move or jump in: the two forward
/// diagonals for a man, all four for a king.
fn directions(piece: &Piece) -> &'static [(i8, i8)] {
    if piece.king {
        &[(1, -1), (1, 1), (-1, -1), (-1, 1)]
    } else {
        match piece.color {
            Color::Red => &[(1, -1), (1, 1)],
            Color::Black => &[(-1, -1), (-1, 1)],
        }
    }
}

/// All capture jumps available to one piece from its current square.
///
/// A jump toward a direction exists iff the adjacent square holds an opposing
/// piece and the square beyond it is on the board and empty. Distance-2 jumps
/// only; there are no flying kings.
pub fn captures_for(board: &Board, piece: &Piece) -> MoveSet {
    let mut out = MoveSet::new();
    let r = piece.pos.row as i8;
    let c = piece.pos.col as i8;
    for &(dr, dc) in directions(piece) {
        let Some(over) = sq(r + dr, c + dc) else {
            continue;
        };
        let Some(landing) = sq(r + 2 * dr, c + 2 * dc) else {
            continue;
        };
        if let Some(victim) = board.piece_at(over)
            && victim.color != piece.color
            && board.piece_at(landing).is_none()
        {
            out.insert(landing, vec![over]);
        }
    }
    out
}

/// Legal moves of one piece under the mandatory-capture rule.
///
/// Mid-chain (`forced_jump`) only the piece's own captures count, even when
/// there are none (an empty set signals the chain has ended). Otherwise, if
/// any piece of this color can capture, only this piece's captures are legal
/// (possibly none: the piece is simply not a legal choice this turn). Only
/// when the whole side has no capture do simple diagonal advances apply.
///
/// Recomputed fresh on every query; never cached across moves.
pub fn moves_for(board: &Board, piece: &Piece, forced_jump: bool) -> MoveSet {
    let jumps = captures_for(board, piece);
    if forced_jump || !jumps.is_empty() || side_has_capture(board, piece.color) {
        return jumps;
    }

    let mut out = MoveSet::new();
    let r = piece.pos.row as i8;
    let c = piece.pos.col as i8;
    for &(dr, dc) in directions(piece) {
        if let Some(to) = sq(r + dr, c + dc)
            && board.piece_at(to).is_none()
        {
            out.insert(to, Vec::new());
        }
    }
    out
}

/// Whether any piece of this color has a capture available.
pub fn side_has_capture(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .iter()
        .any(|p| !captures_for(board, p).is_empty())
}

/// Whether any piece of this color has any legal move at all.
pub fn side_has_any_move(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .iter()
        .any(|p| !moves_for(board, p, false).is_empty())
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
