use super::*;

#[test]
fn test_startpos_layout() {
    let board = Board::new();
    assert_eq!(board.pieces_remaining(Color::Red), 12);
    assert_eq!(board.pieces_remaining(Color::Black), 12);
    assert_eq!(board.kings(Color::Red), 0);
    assert_eq!(board.kings(Color::Black), 0);

    // Pieces sit on dark squares only, Red on top rows, Black on bottom.
    for piece in board.pieces(Color::Red) {
        assert!(piece.pos.row < 3);
        assert_eq!(piece.pos.col % 2, (piece.pos.row + 1) % 2);
        assert!(!piece.king);
    }
    for piece in board.pieces(Color::Black) {
        assert!(piece.pos.row > 4);
        assert_eq!(piece.pos.col % 2, (piece.pos.row + 1) % 2);
    }

    assert!(board.piece_at(Square::new(3, 0)).is_none());
    assert!(board.piece_at(Square::new(4, 5)).is_none());
}

#[test]
fn test_from_diagram_round_trip() {
    let board = Board::from_diagram(
        "
        . . . . . . . .
        . . . r . . . .
        . . . . . . . .
        . . . . b . . .
        . . . . . B . .
        . . . . . . . .
        . . . . . . . .
        . R . . . . . .
        ",
    );
    assert_eq!(board.pieces_remaining(Color::Red), 2);
    assert_eq!(board.pieces_remaining(Color::Black), 2);
    assert_eq!(board.kings(Color::Red), 1);
    assert_eq!(board.kings(Color::Black), 1);

    let red_man = board.piece_at(Square::new(1, 3)).unwrap();
    assert_eq!(red_man.color, Color::Red);
    assert!(!red_man.king);
    let black_king = board.piece_at(Square::new(4, 5)).unwrap();
    assert_eq!(black_king.color, Color::Black);
    assert!(black_king.king);
}

#[test]
fn test_apply_simple_move_relocates() {
    let mut board = Board::new();
    let from = Square::new(2, 1);
    let to = Square::new(3, 2);

    board.apply(from, to, &[]).unwrap();

    assert!(board.piece_at(from).is_none());
    let moved = board.piece_at(to).unwrap();
    assert_eq!(moved.pos, to);
    assert_eq!(moved.color, Color::Red);
    assert_eq!(board.pieces_remaining(Color::Red), 12);
}

#[test]
fn test_apply_capture_updates_counters() {
    let mut board = Board::empty();
    board.place(Square::new(2, 3), Color::Red, false);
    board.place(Square::new(3, 4), Color::Black, false);

    board
        .apply(Square::new(2, 3), Square::new(4, 5), &[Square::new(3, 4)])
        .unwrap();

    assert!(board.piece_at(Square::new(3, 4)).is_none());
    assert_eq!(board.pieces_remaining(Color::Black), 0);
    assert_eq!(board.pieces_remaining(Color::Red), 1);
}

#[test]
fn test_captured_king_decrements_king_counter() {
    let mut board = Board::empty();
    board.place(Square::new(2, 3), Color::Red, false);
    board.place(Square::new(3, 4), Color::Black, true);

    board
        .apply(Square::new(2, 3), Square::new(4, 5), &[Square::new(3, 4)])
        .unwrap();

    assert_eq!(board.kings(Color::Black), 0);
    assert_eq!(board.pieces_remaining(Color::Black), 0);
}

#[test]
fn test_promotion_on_crown_row() {
    let mut board = Board::empty();
    board.place(Square::new(6, 1), Color::Red, false);

    let applied = board.apply(Square::new(6, 1), Square::new(7, 2), &[]).unwrap();

    assert!(applied.promoted);
    assert!(board.piece_at(Square::new(7, 2)).unwrap().king);
    assert_eq!(board.kings(Color::Red), 1);
}

#[test]
fn test_black_promotes_on_row_zero() {
    let mut board = Board::empty();
    board.place(Square::new(1, 2), Color::Black, false);

    let applied = board.apply(Square::new(1, 2), Square::new(0, 3), &[]).unwrap();

    assert!(applied.promoted);
    assert_eq!(board.kings(Color::Black), 1);
}

#[test]
fn test_promotion_is_idempotent_for_kings() {
    let mut board = Board::empty();
    board.place(Square::new(6, 1), Color::Red, true);

    // A king landing on the crown row again is not promoted a second time.
    let applied = board.apply(Square::new(6, 1), Square::new(7, 2), &[]).unwrap();

    assert!(!applied.promoted);
    assert_eq!(board.kings(Color::Red), 1);
}

#[test]
fn test_apply_rejects_occupied_destination() {
    let mut board = Board::new();
    let err = board
        .apply(Square::new(2, 1), Square::new(1, 2), &[])
        .unwrap_err();
    assert_eq!(err, MoveError::IllegalMove);
}

#[test]
fn test_apply_rejects_empty_source() {
    let mut board = Board::new();
    let err = board
        .apply(Square::new(4, 1), Square::new(5, 2), &[])
        .unwrap_err();
    assert_eq!(err, MoveError::NoPieceSelected);
}

#[test]
fn test_apply_rejects_empty_captured_square() {
    let mut board = Board::empty();
    board.place(Square::new(2, 3), Color::Red, false);

    let err = board
        .apply(Square::new(2, 3), Square::new(4, 5), &[Square::new(3, 4)])
        .unwrap_err();

    assert_eq!(err, MoveError::IllegalMove);
    // Rejected moves leave the board untouched.
    assert!(board.piece_at(Square::new(2, 3)).is_some());
    assert!(board.piece_at(Square::new(4, 5)).is_none());
    assert_eq!(board.pieces_remaining(Color::Red), 1);
}

#[test]
fn test_apply_rejects_own_piece_as_capture() {
    let mut board = Board::empty();
    board.place(Square::new(2, 3), Color::Red, false);
    board.place(Square::new(3, 4), Color::Red, false);

    let err = board
        .apply(Square::new(2, 3), Square::new(4, 5), &[Square::new(3, 4)])
        .unwrap_err();
    assert_eq!(err, MoveError::IllegalMove);
}

#[test]
fn test_snapshot_serializes_for_external_tooling() {
    let mut board = Board::new();
    board
        .apply(Square::new(2, 3), Square::new(3, 4), &[])
        .unwrap();

    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();

    assert_eq!(back.pieces_remaining(Color::Red), 12);
    assert_eq!(back.piece_at(Square::new(3, 4)), board.piece_at(Square::new(3, 4)));
    assert!(back.piece_at(Square::new(2, 3)).is_none());
}

#[test]
fn test_counters_match_grid_scan() {
    let mut board = Board::new();
    board
        .apply(Square::new(2, 3), Square::new(3, 4), &[])
        .unwrap();
    board
        .apply(Square::new(5, 6), Square::new(4, 5), &[])
        .unwrap();
    board
        .apply(Square::new(3, 4), Square::new(5, 6), &[Square::new(4, 5)])
        .unwrap();

    for color in [Color::Red, Color::Black] {
        assert_eq!(board.pieces_remaining(color), board.count_pieces(color));
        assert_eq!(board.kings(color), board.count_kings(color));
    }
}
