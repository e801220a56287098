//! Match controller: turn state, the selection/jump-chain state machine, and
//! the translation of coordinate picks into committed board moves.

use crate::board::{Applied, Board};
use crate::error::MoveError;
use crate::events::{EventSink, GameEvent};
use crate::movegen::{captures_for, moves_for, side_has_any_move};
use crate::types::{Color, MoveSet, Square, sq};

/// Selection state of the controller.
///
/// `Jumping` is the mandatory multi-jump continuation: the chain piece is the
/// selection, and no other piece may be chosen until its captures run out.
/// A chain without a selection is unrepresentable.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Selected { piece: Square, moves: MoveSet },
    Jumping { piece: Square, moves: MoveSet },
}

/// A complete two-player match: board, side to move, and selection state.
///
/// Single-threaded and synchronous; every command completes before the next
/// is accepted. External callers interact only through the query and command
/// API and never mutate the board directly.
pub struct Game {
    board: Board,
    turn: Color,
    phase: Phase,
    sink: Option<Box<dyn EventSink>>,
}

impl Game {
    /// New match on the standard starting position, Red to move.
    pub fn new() -> Self {
        Game::with_board(Board::new(), Color::Red)
    }

    /// Start from an arbitrary position, e.g. a composed scenario.
    pub fn with_board(board: Board, turn: Color) -> Self {
        Game {
            board,
            turn,
            phase: Phase::Idle,
            sink: None,
        }
    }

    /// Restore the initial position and state. Keeps any registered sink.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Color::Red;
        self.phase = Phase::Idle;
    }

    /// Register the observer for the structured event stream.
    pub fn set_event_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sink = Some(sink);
    }

    /// Read-only snapshot of the grid and counters, for rendering or for
    /// feeding an external move-selection policy.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The currently selected piece, chain piece included.
    pub fn selected(&self) -> Option<Square> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Selected { piece, .. } | Phase::Jumping { piece, .. } => Some(*piece),
        }
    }

    /// The piece whose multi-jump chain is in progress, if any.
    pub fn chain_piece(&self) -> Option<Square> {
        match &self.phase {
            Phase::Jumping { piece, .. } => Some(*piece),
            _ => None,
        }
    }

    /// Legal destinations of the current selection, for move highlighting.
    /// Empty when nothing is selected.
    pub fn legal_destinations(&self) -> MoveSet {
        match &self.phase {
            Phase::Idle => MoveSet::new(),
            Phase::Selected { moves, .. } | Phase::Jumping { moves, .. } => moves.clone(),
        }
    }

    /// A color with no pieces left loses, as does the side to move with
    /// pieces but no legal move anywhere. Mid-chain this cannot trigger: the
    /// jumping phase only exists while the chain piece has a capture.
    pub fn winner(&self) -> Option<Color> {
        for color in [Color::Red, Color::Black] {
            if self.board.pieces_remaining(color) == 0 {
                return Some(color.other());
            }
        }
        if !side_has_any_move(&self.board, self.turn) {
            return Some(self.turn.other());
        }
        None
    }

    /// Click-driven entry point: one cell pick per call, reporting whether
    /// the pick was accepted. See `apply_action` for the error taxonomy.
    pub fn pick(&mut self, row: i8, col: i8) -> bool {
        self.try_pick(row, col).is_ok()
    }

    fn try_pick(&mut self, row: i8, col: i8) -> Result<(), MoveError> {
        let at = sq(row, col).ok_or(MoveError::OutOfBounds)?;
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => self.try_select(at),
            Phase::Selected { piece, moves } => {
                if let Some(captured) = moves.get(&at).cloned() {
                    self.finish_move(piece, at, captured)
                } else {
                    // Not a destination: treat as a fresh selection attempt.
                    // Failure leaves the controller back in idle.
                    self.try_select(at)
                }
            }
            Phase::Jumping { piece, moves } => {
                if let Some(captured) = moves.get(&at).cloned() {
                    self.finish_move(piece, at, captured)
                } else if at == piece {
                    // Acknowledged no-op: the chain piece is already selected.
                    self.phase = Phase::Jumping { piece, moves };
                    Ok(())
                } else {
                    self.phase = Phase::Jumping { piece, moves };
                    Err(MoveError::ChainInProgress)
                }
            }
        }
    }

    /// Programmatic entry point for an external move-selection policy.
    ///
    /// Runs the same legality checks and state transitions as the two-click
    /// path: `from` is selected as a first click would be, `to` applied as
    /// the second. A rejected action mutates nothing.
    pub fn apply_action(&mut self, from: (i8, i8), to: (i8, i8)) -> Result<(), MoveError> {
        let from = sq(from.0, from.1).ok_or(MoveError::OutOfBounds)?;
        let to = sq(to.0, to.1).ok_or(MoveError::OutOfBounds)?;

        match self.phase.clone() {
            Phase::Jumping { piece, moves } => {
                if piece != from {
                    return Err(MoveError::ChainInProgress);
                }
                let captured = moves.get(&to).cloned().ok_or(MoveError::IllegalMove)?;
                self.finish_move(from, to, captured)
            }
            _ => {
                let moves = self.legal_selection(from)?;
                let captured = moves.get(&to).cloned().ok_or(MoveError::IllegalMove)?;
                // Commit the selection only once the whole action is known
                // legal, so a failed action leaves the state untouched.
                self.phase = Phase::Selected { piece: from, moves };
                self.emit(GameEvent::Selected { piece: from });
                self.finish_move(from, to, captured)
            }
        }
    }

    /// The move set a first click on `at` would select, or why it may not.
    fn legal_selection(&self, at: Square) -> Result<MoveSet, MoveError> {
        let piece = self.board.piece_at(at).ok_or(MoveError::NoPieceSelected)?;
        if piece.color != self.turn {
            return Err(MoveError::NotYourTurn);
        }
        Ok(moves_for(&self.board, &piece, false))
    }

    fn try_select(&mut self, at: Square) -> Result<(), MoveError> {
        let moves = self.legal_selection(at)?;
        self.phase = Phase::Selected { piece: at, moves };
        self.emit(GameEvent::Selected { piece: at });
        Ok(())
    }

    /// Execute a committed move, then either continue the jump chain with the
    /// same piece or pass the turn.
    fn finish_move(
        &mut self,
        from: Square,
        to: Square,
        captured: Vec<Square>,
    ) -> Result<(), MoveError> {
        let was_capture = !captured.is_empty();
        let Applied { promoted } = self.board.apply(from, to, &captured)?;
        self.emit(GameEvent::MoveApplied {
            from,
            to,
            captured,
            promoted,
        });

        // A capture may open a further jump for the same piece; the
        // continuation uses the piece as it now stands, so a freshly crowned
        // king keeps jumping with its full reach.
        if was_capture
            && let Some(piece) = self.board.piece_at(to)
        {
            let continuation = captures_for(&self.board, &piece);
            if !continuation.is_empty() {
                self.phase = Phase::Jumping {
                    piece: to,
                    moves: continuation,
                };
                self.emit(GameEvent::ChainContinued { piece: to });
                return Ok(());
            }
        }

        self.end_turn();
        Ok(())
    }

    /// The only place the turn changes hands.
    fn end_turn(&mut self) {
        self.phase = Phase::Idle;
        self.turn = self.turn.other();
        self.emit(GameEvent::TurnChanged { turn: self.turn });
        if let Some(winner) = self.winner() {
            self.emit(GameEvent::GameOver { winner });
        }
    }

    fn emit(&mut self, event: GameEvent) {
        tracing::debug!(?event, "game event");
        if let Some(sink) = self.sink.as_mut() {
            sink.on_event(&event);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
