//! # Tic-Tac-Toe Arena
//!
//! A simulation arena that plays games of tic-tac-toe between pluggable
//! decision-making agents and scores agents by aggregating outcomes over
//! many simulated games.
//!
//! ## Features
//!
//! - **Bit-Packed Board**: 9-bit occupancy masks with reversible
//!   make/unmake mutation for allocation-free lookahead
//! - **Pluggable Agents**: random, tiered heuristic, and oracle-backed
//!   strategies behind one `Agent` trait
//! - **Forfeit Semantics**: illegal moves become terminal outcomes, never
//!   errors
//! - **Fitness Harness**: batch scoring of external policies with a
//!   documented stop-searching threshold
//!
//! ## Quick Start
//!
//! ```
//! use tictactoe_arena::agents::{HeuristicAgent, RandomAgent};
//! use tictactoe_arena::engine::play_until_win;
//!
//! let mut challenger = RandomAgent::seeded(42);
//! let mut champion = HeuristicAgent::new();
//!
//! let outcome = play_until_win(&mut challenger, &mut champion);
//! println!("Result: {:?}", outcome);
//! ```
//!
//! ## Modules
//!
//! - [`engine`]: Board, game loop, and the `Agent` capability
//! - [`agents`]: Built-in agent implementations
//! - [`harness`]: Batch fitness scoring for external policies
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Fitness Harness (batch scoring)              │
//! │  - N games per side        - Scalar fitness aggregation         │
//! │  - Solved threshold        - Reproducible seeded runs           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ play_until_win(x, o)
//!                               ▼
//!         ┌─────────────────────┼─────────────────────┐
//!         │                     │                     │
//!         ▼                     ▼                     ▼
//!    ┌─────────┐         ┌───────────┐         ┌───────────┐
//!    │ Random  │         │ Heuristic │         │  Oracle   │
//!    │  Agent  │         │   Agent   │         │   Agent   │
//!    └─────────┘         └───────────┘         └───────────┘
//!                               │
//!                               │ make/unmake probing
//!                               ▼
//!                      ┌─────────────────┐
//!                      │ Bit-Packed Board│
//!                      └─────────────────┘
//! ```

#![warn(missing_docs)]

/// Core engine module: board representation and the game loop.
pub mod engine;

/// Agent implementations module.
pub mod agents;

/// Fitness harness module for batch scoring.
pub mod harness;

// Re-export commonly used types at crate root for convenience
pub use agents::{HeuristicAgent, Oracle, OracleAgent, RandomAgent, WeightsOracle};
pub use engine::{play_until_win, Agent, Board, Outcome};
pub use harness::{FitnessHarness, FitnessReport, HarnessConfig};
