//! Tiered heuristic agent.
//!
//! Not a full minimax: a bounded, multi-tier heuristic that resolves each
//! move with the first tier that produces an answer:
//!
//! 1. **Opening book** - corner first, center second.
//! 2. **Immediate win** - take any cell that completes a line right now.
//! 3. **Block** - occupy any cell that would let the opponent win next turn.
//! 4. **Fallback** - play the cell whose aftermath contains the most
//!    follow-up winning placements.
//!
//! The block tier looks exactly one ply into the opponent's replies and
//! assumes blocking is always correct; the fallback tier counts completed
//! lines after a second tentative placement without distinguishing which
//! side the turn flag would really give it to. Both quirks are part of the
//! agent's defined behavior - strengthening them would change every
//! comparison made against this agent.
//!
//! All probing runs on the live board through make/unmake pairs and leaves
//! masks, move counter and turn flag exactly as found.

use crate::engine::board::{Board, CELLS};
use crate::engine::game::Agent;

/// Deterministic heuristic agent. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAgent;

impl HeuristicAgent {
    /// Create a new heuristic agent.
    pub fn new() -> Self {
        Self
    }

    /// Tier 2 and 3 probe: the first cell, in ascending order, that
    /// completes a line for the side currently to move.
    fn winning_cell(board: &mut Board) -> Option<u8> {
        for pos in 0..CELLS as u8 {
            if !board.is_valid(pos) {
                continue;
            }
            board.make_move(pos);
            let wins = board.has_x_won() || board.has_o_won();
            board.unmake_move(pos);
            if wins {
                return Some(pos);
            }
        }
        None
    }

    /// Tier 4: score each candidate by how many of its follow-up placements
    /// complete a line, strict `>` update, ties to the lowest index.
    fn most_threatening_cell(board: &mut Board) -> u8 {
        let mut best_pos = 0;
        let mut best_count = -1i32;

        for pos in 0..CELLS as u8 {
            if !board.is_valid(pos) {
                continue;
            }
            board.make_move(pos);

            let mut count = 0;
            for reply in 0..CELLS as u8 {
                if !board.is_valid(reply) {
                    continue;
                }
                board.make_move(reply);
                if board.has_x_won() || board.has_o_won() {
                    count += 1;
                }
                board.unmake_move(reply);
            }

            board.unmake_move(pos);

            if count > best_count {
                best_count = count;
                best_pos = pos;
            }
        }

        best_pos
    }
}

impl Agent for HeuristicAgent {
    fn get_move(&mut self, board: &mut Board) -> u8 {
        // Tier 1: opening book.
        if board.moves_remaining() == 9 {
            return 0;
        }
        if board.moves_remaining() == 8 {
            return if board.is_valid(4) { 4 } else { 0 };
        }

        // Tier 2: take an immediate win.
        if let Some(pos) = Self::winning_cell(board) {
            return pos;
        }

        // Tier 3: block the opponent's immediate win. The turn flag is
        // flipped so the probe places stones for the opponent, then restored.
        board.toggle_turn();
        let threat = Self::winning_cell(board);
        board.toggle_turn();
        if let Some(pos) = threat {
            return pos;
        }

        // Tier 4: fall back to the most threatening aftermath.
        Self::most_threatening_cell(board)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
