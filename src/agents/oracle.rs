//! Oracle-backed agent and the oracle contract.
//!
//! An oracle is an external scoring function: given a 9-element feature
//! vector describing the board, it produces a 9-element vector of per-cell
//! desirability scores. The trained policies produced by an external search
//! loop plug in here; [`WeightsOracle`] is a simple linear stand-in used for
//! validation and as an example implementation.

use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::engine::board::{Board, CELLS};
use crate::engine::game::Agent;

/// An external scoring function for board positions.
///
/// The contract is a single evaluation pass with no side effects outside
/// the call: the adapter resets the oracle, feeds it the feature vector,
/// and reads the per-cell scores. Stateful oracles (e.g. recurrent
/// networks) use [`Oracle::reset`] to clear activation between moves.
pub trait Oracle: Send {
    /// Clear any internal evaluation state from previous calls.
    fn reset(&mut self);

    /// Run one forward evaluation: per-cell occupancy features in, per-cell
    /// desirability scores out.
    fn activate(&mut self, input: &[f64; CELLS]) -> [f64; CELLS];
}

impl<O: Oracle + ?Sized> Oracle for &mut O {
    fn reset(&mut self) {
        (**self).reset()
    }

    fn activate(&mut self, input: &[f64; CELLS]) -> [f64; CELLS] {
        (**self).activate(input)
    }
}

/// Adapter that turns any [`Oracle`] into an [`Agent`].
///
/// Each move: reset the oracle, render the board into features from this
/// agent's own perspective (+1 own cells, -1 opponent cells, 0 empty), run
/// the scoring pass, and play the valid cell with the highest score. Ties
/// keep the first (lowest-index) maximum because only a strictly greater
/// score displaces the current best.
#[derive(Debug)]
pub struct OracleAgent<O: Oracle> {
    oracle: O,
    plays_x: bool,
}

impl<O: Oracle> OracleAgent<O> {
    /// Wrap an oracle playing the given side.
    pub fn new(oracle: O, plays_x: bool) -> Self {
        Self { oracle, plays_x }
    }

    /// Change which side this agent plays (features are perspective-based).
    ///
    /// Lets a harness reuse one adapter for games as X and as O instead of
    /// rebuilding it per side.
    pub fn set_plays_x(&mut self, plays_x: bool) {
        self.plays_x = plays_x;
    }
}

impl<O: Oracle> Agent for OracleAgent<O> {
    fn get_move(&mut self, board: &mut Board) -> u8 {
        self.oracle.reset();

        let mut features = [0.0; CELLS];
        for pos in 0..CELLS as u8 {
            features[pos as usize] = board.square_value(pos, self.plays_x) as f64;
        }

        let scores = self.oracle.activate(&features);

        // Scan all cells, keeping the first strictly-greater maximum among
        // valid ones. On a full board this falls through to the sentinel 9,
        // which the game loop converts to a forfeit; normal play never gets
        // there because the loop halts on the terminal state first.
        let mut best_pos = CELLS as u8;
        let mut best_score = f64::MIN;
        for pos in 0..CELLS as u8 {
            if !board.is_valid(pos) {
                continue;
            }
            let score = scores[pos as usize];
            if best_pos == CELLS as u8 || score > best_score {
                best_pos = pos;
                best_score = score;
            }
        }
        best_pos
    }

    fn name(&self) -> &'static str {
        "oracle"
    }
}

/// A stateless linear policy: `score = features x weights + bias`.
///
/// Serves as a concrete oracle for tests, benchmarks and the evaluation
/// binary, and as the serialization format for externally-searched policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsOracle {
    /// `weights[i][j]` is the contribution of input cell `i` to the score
    /// of output cell `j`.
    weights: [[f64; CELLS]; CELLS],
    /// Per-cell score offset.
    bias: [f64; CELLS],
}

impl WeightsOracle {
    /// All-zero policy (every cell scores equally).
    pub fn zeros() -> Self {
        Self {
            weights: [[0.0; CELLS]; CELLS],
            bias: [0.0; CELLS],
        }
    }

    /// Policy with weights and biases drawn uniformly from [-1, 1).
    pub fn random(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut oracle = Self::zeros();
        for row in oracle.weights.iter_mut() {
            for w in row.iter_mut() {
                *w = rng.gen_range(-1.0..1.0);
            }
        }
        for b in oracle.bias.iter_mut() {
            *b = rng.gen_range(-1.0..1.0);
        }
        oracle
    }

    /// Policy that always prefers a fixed per-cell score vector, ignoring
    /// the board features. Useful for testing tie-break behavior.
    pub fn from_bias(bias: [f64; CELLS]) -> Self {
        Self {
            weights: [[0.0; CELLS]; CELLS],
            bias,
        }
    }

    /// Load a policy from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, OracleLoadError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| OracleLoadError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| OracleLoadError::Parse(e.to_string()))
    }

    /// Save the policy to a JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())
    }
}

impl Oracle for WeightsOracle {
    fn reset(&mut self) {
        // Linear policies carry no activation state between calls.
    }

    fn activate(&mut self, input: &[f64; CELLS]) -> [f64; CELLS] {
        let mut output = self.bias;
        for (i, &x) in input.iter().enumerate() {
            if x == 0.0 {
                continue;
            }
            for (j, out) in output.iter_mut().enumerate() {
                *out += x * self.weights[i][j];
            }
        }
        output
    }
}

/// Errors when loading an oracle policy from disk.
#[derive(Debug, Clone)]
pub enum OracleLoadError {
    /// The file could not be read.
    Io(String),
    /// The file content is not a valid policy.
    Parse(String),
}

impl std::fmt::Display for OracleLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleLoadError::Io(msg) => write!(f, "failed to read oracle file: {}", msg),
            OracleLoadError::Parse(msg) => write!(f, "failed to parse oracle file: {}", msg),
        }
    }
}

impl std::error::Error for OracleLoadError {}
