//! Move enumeration benchmark for profiling with cargo-flamegraph.
//!
//! Runs many iterations of `moves_for` over every piece of the side to move,
//! on positions covering different game phases.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p checkers_core

use checkers_core::{Board, Color, moves_for};
use std::time::Instant;

/// Positions covering different game phases
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Midgame",
        "
        . . . . . r . .
        r . r . . . . .
        . . . r . r . .
        . . b . . . . .
        . r . . . b . .
        b . . . b . . .
        . . b . . . b .
        . . . . . . . .
        ",
    ),
    (
        "Kings endgame",
        "
        . . . . . . . .
        . . R . . . . .
        . . . . . . . .
        . . . . B . . .
        . . . . . . . .
        . R . . . . . .
        . . . . . . B .
        . . . . . . . .
        ",
    ),
    (
        "Forced jumps",
        "
        . . . . . . . .
        . . r . r . . .
        . . . b . . . .
        . . . . . . . .
        . . . b . b . .
        . . r . . . . .
        . . . . . . . .
        . . . . . . . .
        ",
    ),
];

const ITERATIONS: usize = 100_000;

fn main() {
    println!("=== Move Enumeration Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut total_moves = 0usize;
    let mut total_time = std::time::Duration::ZERO;

    let start_board = Board::new();
    let mut positions = vec![("Start", start_board)];
    for &(name, diagram) in TEST_POSITIONS {
        positions.push((name, Board::from_diagram(diagram)));
    }

    for (name, board) in &positions {
        print!("{name:.<20}");

        let start = Instant::now();
        let mut moves_generated = 0usize;

        for _ in 0..ITERATIONS {
            for piece in board.pieces(Color::Red) {
                moves_generated += moves_for(board, &piece, false).len();
            }
        }

        let elapsed = start.elapsed();
        total_moves += moves_generated;
        total_time += elapsed;

        let moves_per_pos = moves_generated as f64 / ITERATIONS as f64;
        let pps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {moves_per_pos:>5.1} moves/pos, {pps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    println!("TOTAL: {total_moves} moves in {total_time:.3?}");
}
