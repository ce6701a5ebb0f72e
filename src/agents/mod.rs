//! Agent implementations.
//!
//! Every agent implements the engine's [`Agent`](crate::engine::Agent)
//! capability and shares nothing else: no common state, no common behavior
//! beyond the signature.
//!
//! ## Available agents
//!
//! - [`random`]: uniformly random valid moves, the baseline opponent
//! - [`heuristic`]: deterministic tiered lookahead, the strong opponent
//! - [`oracle`]: adapter deferring move choice to an external scoring
//!   function, the slot a trained policy plugs into
//!
//! ## Adding new agents
//!
//! 1. Create a new module under `src/agents/`
//! 2. Implement the `Agent` trait
//! 3. Add tests that pin down the agent's concrete move choices
//!
//! See the [`heuristic`] module for a complete example.

pub mod heuristic;
pub mod oracle;
pub mod random;

// Re-export main types for convenient access
pub use heuristic::HeuristicAgent;
pub use oracle::{Oracle, OracleAgent, OracleLoadError, WeightsOracle};
pub use random::RandomAgent;
