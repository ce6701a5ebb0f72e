//! Bit-packed tic-tac-toe board with reversible mutation.
//!
//! The board stores each side's occupancy as a 9-bit mask inside a `u16`,
//! one bit per cell in row-major order:
//!
//! ```text
//!     0  1  2
//!     3  4  5
//!     6  7  8
//! ```
//!
//! Moves are applied with [`Board::make_move`] and exactly reversed with
//! [`Board::unmake_move`], which lets lookahead agents explore hypothetical
//! continuations on the live board without allocating copies. Turn toggling
//! is a separate, explicit operation so the same probing machinery can
//! simulate either side's next move.

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// The eight winning-line masks: three columns, three rows, two diagonals.
///
/// Column 0 = 0b001_001_001 = 73, column 1 = 146, column 2 = 292,
/// row 0 = 0b000_000_111 = 7, row 1 = 56, row 2 = 448,
/// diagonals = 273 and 84.
pub const WIN_LINES: [u16; 8] = [73, 146, 292, 7, 56, 448, 273, 84];

/// Bit-packed mutable game state for a single game of tic-tac-toe.
///
/// A `Board` is created fresh for each game, mutated in place while the
/// game runs, and discarded once the outcome has been read. It is never
/// shared between concurrent games.
///
/// # Caller contract
///
/// `make_move`, `unmake_move` and `square_value` take an unchecked cell
/// index in `0..9`. Playing an occupied cell, unmaking a move that was not
/// the most recent one, or passing an out-of-range index corrupts the state
/// silently. Callers (agents, the game loop) must check [`Board::is_valid`]
/// first; the board does not pay for per-call validation in a routine that
/// runs millions of times during batch scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells occupied by X, one bit per cell.
    x_mask: u16,
    /// Cells occupied by O, one bit per cell. Always disjoint from `x_mask`.
    o_mask: u16,
    /// Empty cells left, always `9 - popcount(x_mask | o_mask)`.
    moves_remaining: u16,
    /// Whether X is the side to move next.
    turn_is_x: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with X to move.
    pub fn new() -> Self {
        Self {
            x_mask: 0,
            o_mask: 0,
            moves_remaining: CELLS as u16,
            turn_is_x: true,
        }
    }

    /// Place a stone for the side to move on cell `pos`.
    ///
    /// Does not flip the turn flag; call [`Board::toggle_turn`] separately.
    /// The caller must have verified `is_valid(pos)`.
    pub fn make_move(&mut self, pos: u8) {
        if self.turn_is_x {
            self.x_mask |= 1 << pos;
        } else {
            self.o_mask |= 1 << pos;
        }
        self.moves_remaining -= 1;
    }

    /// Exact inverse of the most recent [`Board::make_move`] for the same
    /// `pos`: clears the side-to-move's bit and restores the move counter.
    ///
    /// Because `make_move` does not flip the turn flag, a make/unmake pair
    /// with no toggle in between restores the board bit-for-bit.
    pub fn unmake_move(&mut self, pos: u8) {
        if self.turn_is_x {
            self.x_mask &= !(1 << pos);
        } else {
            self.o_mask &= !(1 << pos);
        }
        self.moves_remaining += 1;
    }

    /// Whether cell `pos` is empty.
    pub fn is_valid(&self, pos: u8) -> bool {
        (self.x_mask | self.o_mask) & (1 << pos) == 0
    }

    /// Occupancy of cell `pos` from one side's perspective: +1 if held by
    /// the perspective side, -1 if held by the opponent, 0 if empty.
    ///
    /// Used to render the board into a numeric feature vector for oracle
    /// agents.
    pub fn square_value(&self, pos: u8, perspective_is_x: bool) -> i8 {
        if self.x_mask & (1 << pos) != 0 {
            if perspective_is_x {
                1
            } else {
                -1
            }
        } else if self.o_mask & (1 << pos) != 0 {
            if perspective_is_x {
                -1
            } else {
                1
            }
        } else {
            0
        }
    }

    /// Whether X holds a complete winning line.
    ///
    /// A win is impossible before the fourth move, so the check short-circuits
    /// on the move counter before scanning the line table.
    pub fn has_x_won(&self) -> bool {
        self.moves_remaining <= 6 && WIN_LINES.iter().any(|&line| self.x_mask & line == line)
    }

    /// Whether O holds a complete winning line.
    pub fn has_o_won(&self) -> bool {
        self.moves_remaining <= 6 && WIN_LINES.iter().any(|&line| self.o_mask & line == line)
    }

    /// Whether the board is full. The game loop checks wins first, so a
    /// `true` here with neither side winning is a drawn game.
    pub fn is_draw(&self) -> bool {
        self.moves_remaining == 0
    }

    /// Flip which side moves next.
    ///
    /// Used by the game loop after every accepted move, and by lookahead
    /// agents to simulate the opponent's turn without changing the masks.
    pub fn toggle_turn(&mut self) {
        self.turn_is_x = !self.turn_is_x;
    }

    /// Whether X is the side to move.
    pub fn turn_is_x(&self) -> bool {
        self.turn_is_x
    }

    /// Number of empty cells left.
    pub fn moves_remaining(&self) -> u16 {
        self.moves_remaining
    }

    /// X's occupancy mask (for analysis and tests).
    pub fn x_mask(&self) -> u16 {
        self.x_mask
    }

    /// O's occupancy mask (for analysis and tests).
    pub fn o_mask(&self) -> u16 {
        self.o_mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_consistent(board: &Board) {
        assert_eq!(
            board.x_mask() & board.o_mask(),
            0,
            "masks must stay disjoint"
        );
        assert_eq!(
            board.moves_remaining(),
            9 - (board.x_mask() | board.o_mask()).count_ones() as u16,
            "move counter must match mask population"
        );
    }

    #[test]
    fn test_fresh_board() {
        let board = Board::new();
        assert!(board.turn_is_x());
        assert_eq!(board.moves_remaining(), 9);
        assert!(!board.has_x_won());
        assert!(!board.has_o_won());
        assert!(!board.is_draw());
        for pos in 0..9 {
            assert!(board.is_valid(pos));
        }
        assert_consistent(&board);
    }

    #[test]
    fn test_invariants_over_random_games() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let mut board = Board::new();
            while board.moves_remaining() > 0 {
                let pos = loop {
                    let p: u8 = rng.gen_range(0..9);
                    if board.is_valid(p) {
                        break p;
                    }
                };
                board.make_move(pos);
                assert_consistent(&board);
                if board.has_x_won() || board.has_o_won() {
                    break;
                }
                board.toggle_turn();
            }
        }
    }

    #[test]
    fn test_make_unmake_restores_state() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let mut board = Board::new();
            // Walk to a random depth, probing every legal move along the way.
            for _ in 0..rng.gen_range(0..9) {
                for pos in 0..9 {
                    if !board.is_valid(pos) {
                        continue;
                    }
                    let before = board.clone();
                    board.make_move(pos);
                    board.unmake_move(pos);
                    assert_eq!(board, before);
                }
                let pos = loop {
                    let p: u8 = rng.gen_range(0..9);
                    if board.is_valid(p) {
                        break p;
                    }
                };
                board.make_move(pos);
                board.toggle_turn();
            }
        }
    }

    #[test]
    fn test_win_detection_rows_columns_diagonals() {
        // X takes the top row (cells 0, 1, 2).
        let mut board = Board::new();
        for (x, o) in [(0u8, 3u8), (1, 4)] {
            board.make_move(x);
            board.toggle_turn();
            board.make_move(o);
            board.toggle_turn();
        }
        board.make_move(2);
        assert!(board.has_x_won());
        assert!(!board.has_o_won());

        // O takes the main diagonal (cells 0, 4, 8).
        let mut board = Board::new();
        for (x, o) in [(1u8, 0u8), (2, 4)] {
            board.make_move(x);
            board.toggle_turn();
            board.make_move(o);
            board.toggle_turn();
        }
        board.make_move(5);
        board.toggle_turn();
        board.make_move(8);
        assert!(board.has_o_won());
        assert!(!board.has_x_won());
    }

    #[test]
    fn test_no_win_before_fourth_move() {
        let mut board = Board::new();
        board.make_move(0);
        board.toggle_turn();
        board.make_move(4);
        // Only two stones down: the counter gate is still closed and the
        // win checks short-circuit without scanning the line table.
        assert!(board.moves_remaining() > 6);
        assert!(!board.has_x_won());
        assert!(!board.has_o_won());
    }

    #[test]
    fn test_full_board_without_win_is_draw() {
        // X: 0 1 5 6 7, O: 2 3 4 8 - no line for either side.
        let mut board = Board::new();
        let moves: [(u8, bool); 9] = [
            (0, true),
            (2, false),
            (1, true),
            (3, false),
            (5, true),
            (4, false),
            (6, true),
            (8, false),
            (7, true),
        ];
        for (pos, is_x) in moves {
            while board.turn_is_x() != is_x {
                board.toggle_turn();
            }
            board.make_move(pos);
        }
        assert_eq!(board.moves_remaining(), 0);
        assert!(!board.has_x_won());
        assert!(!board.has_o_won());
        assert!(board.is_draw());
    }

    #[test]
    fn test_square_value_perspectives() {
        let mut board = Board::new();
        board.make_move(0); // X on 0
        board.toggle_turn();
        board.make_move(4); // O on 4
        board.toggle_turn();

        assert_eq!(board.square_value(0, true), 1);
        assert_eq!(board.square_value(0, false), -1);
        assert_eq!(board.square_value(4, true), -1);
        assert_eq!(board.square_value(4, false), 1);
        assert_eq!(board.square_value(8, true), 0);
        assert_eq!(board.square_value(8, false), 0);
    }
}
