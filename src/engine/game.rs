//! Agent contract and the game loop state machine.
//!
//! A game alternates two [`Agent`]s on one [`Board`] until a terminal
//! condition is reached. Illegal moves are not errors: the loop converts
//! them directly into a forfeit outcome for the offending side, which is
//! the only caller-observable anomaly in the engine.

use serde::{Deserialize, Serialize};

use crate::engine::board::{Board, CELLS};

/// A decision-making strategy: produce a move given a board.
///
/// The board is passed by exclusive borrow so lookahead agents can probe
/// continuations with make/unmake pairs; every implementation must leave
/// the board exactly as it found it. Agents hold no board reference between
/// calls and must be callable repeatedly across a full game without external
/// reset.
pub trait Agent: Send {
    /// Choose a cell index in `0..9` for the side currently to move.
    ///
    /// Returning an occupied or out-of-range cell forfeits the game to the
    /// opponent. At least one valid cell exists whenever the loop calls this.
    fn get_move(&mut self, board: &mut Board) -> u8;

    /// Short name for reporting.
    fn name(&self) -> &'static str {
        "agent"
    }
}

/// Terminal result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Board filled with no winning line.
    Draw,
    /// X completed a line, or O forfeited with an illegal move.
    XWins,
    /// O completed a line, or X forfeited with an illegal move.
    OWins,
}

/// Play one game between two agents on a fresh board, X moving first.
///
/// Each turn the current side's agent is asked for a move. An occupied or
/// out-of-range reply is an immediate forfeit: the other side wins and the
/// board is left untouched by the illegal move. Otherwise the move is
/// applied and the terminal checks run in fixed order (O win, X win, draw)
/// before the turn flips. The fixed order is an implementation contract;
/// both wins can never hold simultaneously under the alternating single-move
/// protocol, but determinism matters for replicating results.
///
/// The loop is deterministic given deterministic agents and always
/// terminates within nine moves.
pub fn play_until_win(player_x: &mut dyn Agent, player_o: &mut dyn Agent) -> Outcome {
    let mut board = Board::new();

    loop {
        let mover_is_x = board.turn_is_x();
        let pos = if mover_is_x {
            player_x.get_move(&mut board)
        } else {
            player_o.get_move(&mut board)
        };

        if pos as usize >= CELLS || !board.is_valid(pos) {
            // Forfeit: the mover supplied an illegal move.
            return if mover_is_x {
                Outcome::OWins
            } else {
                Outcome::XWins
            };
        }

        board.make_move(pos);

        if board.has_o_won() {
            return Outcome::OWins;
        }
        if board.has_x_won() {
            return Outcome::XWins;
        }
        if board.is_draw() {
            return Outcome::Draw;
        }

        board.toggle_turn();
    }
}
