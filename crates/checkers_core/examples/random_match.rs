//! Plays a full match with a uniformly random move-selection policy.
//!
//! This is the consumer side of the engine API: the policy only reads the
//! board snapshot and legal-move queries, and submits actions through
//! `apply_action` — the same entry point a trained model would use.
//!
//! Usage:
//!   cargo run --example random_match -p checkers_core

use checkers_core::{Color, Game, GameEvent, moves_for};
use rand::seq::SliceRandom;

const MAX_PLIES: usize = 300;

fn legal_actions(game: &Game) -> Vec<((i8, i8), (i8, i8))> {
    if let Some(chain) = game.chain_piece() {
        return game
            .legal_destinations()
            .keys()
            .map(|to| {
                (
                    (chain.row as i8, chain.col as i8),
                    (to.row as i8, to.col as i8),
                )
            })
            .collect();
    }

    let board = game.board();
    let mut actions = Vec::new();
    for piece in board.pieces(game.turn()) {
        for to in moves_for(board, &piece, false).keys() {
            actions.push((
                (piece.pos.row as i8, piece.pos.col as i8),
                (to.row as i8, to.col as i8),
            ));
        }
    }
    actions
}

fn main() {
    let mut rng = rand::thread_rng();
    let mut game = Game::new();
    game.set_event_sink(Box::new(|event: &GameEvent| match event {
        GameEvent::MoveApplied {
            from,
            to,
            captured,
            promoted,
        } => {
            let jump = if captured.is_empty() { "-" } else { "x" };
            let crown = if *promoted { " (crowned)" } else { "" };
            println!("  {from}{jump}{to}{crown}");
        }
        GameEvent::GameOver { winner } => println!("game over: {winner:?} wins"),
        _ => {}
    }));

    for ply in 0..MAX_PLIES {
        if game.winner().is_some() {
            break;
        }
        let actions = legal_actions(&game);
        let &(from, to) = actions
            .choose(&mut rng)
            .expect("side to move has no actions but no winner");

        if let Err(err) = game.apply_action(from, to) {
            eprintln!("rejected action at ply {ply}: {err}");
            return;
        }
    }

    let board = game.board();
    println!(
        "final material: red {} ({} kings), black {} ({} kings)",
        board.pieces_remaining(Color::Red),
        board.kings(Color::Red),
        board.pieces_remaining(Color::Black),
        board.kings(Color::Black),
    );
    match game.winner() {
        Some(winner) => println!("winner: {winner:?}"),
        None => println!("no winner after {MAX_PLIES} plies"),
    }
}
