//! Uniformly random agent.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::board::{Board, CELLS};
use crate::engine::game::Agent;

/// Agent that plays a uniformly random valid cell.
///
/// Draws a random starting offset and scans forward (wrapping modulo 9)
/// for the first empty cell, which distributes uniformly over valid cells.
/// Each instance owns its RNG, so reusing one agent across concurrent games
/// requires one instance per thread.
#[derive(Debug)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    /// Create an agent seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an agent with a fixed seed for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn get_move(&mut self, board: &mut Board) -> u8 {
        let start: u8 = self.rng.gen_range(0..CELLS as u8);
        let mut offset = 0;
        loop {
            let pos = (start + offset) % CELLS as u8;
            if board.is_valid(pos) {
                return pos;
            }
            // At least one cell is valid whenever the loop asks for a move,
            // so the scan terminates within nine steps.
            offset += 1;
        }
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_returns_valid_cells() {
        let mut agent = RandomAgent::seeded(42);

        for _ in 0..100 {
            let mut board = Board::new();
            while board.moves_remaining() > 1 {
                let pos = agent.get_move(&mut board);
                assert!(board.is_valid(pos), "agent returned occupied cell {}", pos);
                board.make_move(pos);
                board.toggle_turn();
            }
        }
    }

    #[test]
    fn test_covers_all_cells_on_empty_board() {
        let mut agent = RandomAgent::seeded(7);
        let mut seen = [false; CELLS];

        for _ in 0..500 {
            let mut board = Board::new();
            seen[agent.get_move(&mut board) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every cell should be reachable");
    }

    #[test]
    fn test_finds_last_remaining_cell() {
        let mut agent = RandomAgent::seeded(9);
        let mut board = Board::new();
        for pos in 0..8 {
            board.make_move(pos);
            board.toggle_turn();
        }
        assert_eq!(agent.get_move(&mut board), 8);
    }

    #[test]
    fn test_seeded_agents_reproduce_moves() {
        let mut a = RandomAgent::seeded(123);
        let mut b = RandomAgent::seeded(123);
        let mut board = Board::new();
        for _ in 0..9 {
            assert_eq!(a.get_move(&mut board), b.get_move(&mut board));
        }
    }
}
