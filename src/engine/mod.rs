//! Core game engine: the bit-packed board and the game loop.
//!
//! # Overview
//!
//! The engine owns all mutable game state and the rules for advancing it:
//!
//! 1. [`Board`] packs each side's occupancy into a 9-bit mask and supports
//!    reversible mutation (make/unmake) for allocation-free lookahead.
//! 2. [`Agent`] is the capability every strategy implements: produce a move
//!    given a board.
//! 3. [`play_until_win`] alternates two agents on one board until a win,
//!    draw, or forfeit.
//!
//! A game always terminates within nine moves. Running many games in
//! parallel is safe because each game owns its board exclusively and the
//! winning-line table is read-only process-wide data.

pub mod board;
pub mod game;

// Re-export main types for convenient access
pub use board::{Board, CELLS, WIN_LINES};
pub use game::{play_until_win, Agent, Outcome};
