//! Rule engine for two-player checkers: board representation, legal-move
//! generation under mandatory-capture rules, multi-jump chains, king
//! promotion, and the turn/selection state machine.
//!
//! Rendering, input handling, and move-selection policies are external
//! collaborators: they query the engine and submit discrete `(row, col)`
//! commands, and never touch the grid directly.

pub mod board;
pub mod error;
pub mod events;
pub mod game;
pub mod movegen;
pub mod types;

pub use board::*;
pub use error::*;
pub use events::*;
pub use game::*;
pub use movegen::*;
pub use types::*;
