//! Scoring harness: aggregate many game outcomes into one fitness number.
//!
//! The harness is the contract an external policy-search loop consumes: it
//! takes an [`Oracle`], plays a configured number of games as each side
//! against each built-in opponent, and folds the outcomes into a single
//! scalar where higher is better. A documented threshold
//! ([`HarnessConfig::target_fitness`]) signals "good enough, stop
//! searching" to the external loop.
//!
//! ## Scoring scheme
//!
//! - each win against [`RandomAgent`] earns `win_reward`
//! - each win against [`HeuristicAgent`] earns `win_reward`
//! - each draw against [`HeuristicAgent`] earns `draw_reward` (the
//!   heuristic blocks every one-move threat, so consistent draws against it
//!   already indicate competent play)
//!
//! Losses and draws against the random opponent earn nothing.

use serde::{Deserialize, Serialize};

use crate::agents::heuristic::HeuristicAgent;
use crate::agents::oracle::{Oracle, OracleAgent};
use crate::agents::random::RandomAgent;
use crate::engine::game::{play_until_win, Outcome};

/// Configuration for the fitness harness.
///
/// # Example
/// ```
/// use tictactoe_arena::harness::HarnessConfig;
///
/// let config = HarnessConfig::default().with_seed(42);
/// assert_eq!(config.games_per_side, 50);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Games played as each side against each opponent.
    ///
    /// With two opponents this means `4 * games_per_side` games total.
    pub games_per_side: u32,

    /// Fitness earned per win.
    pub win_reward: f64,

    /// Fitness earned per draw against the heuristic opponent.
    pub draw_reward: f64,

    /// Fitness at which the policy counts as good enough.
    ///
    /// The report's `solved` flag is set when fitness reaches this value,
    /// telling an external search loop it can stop.
    pub target_fitness: f64,

    /// Random seed for the random opponents' move choices.
    ///
    /// If set, two evaluations of the same oracle produce identical
    /// reports. If `None`, opponents are seeded from entropy.
    pub seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            games_per_side: 50,
            win_reward: 10.0,
            draw_reward: 1.0,
            target_fitness: 100.0,
            seed: None,
        }
    }
}

impl HarnessConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set games per side.
    pub fn with_games_per_side(mut self, games: u32) -> Self {
        self.games_per_side = games;
        self
    }

    /// Builder method: set the per-win reward.
    pub fn with_win_reward(mut self, reward: f64) -> Self {
        self.win_reward = reward;
        self
    }

    /// Builder method: set the per-draw reward against the heuristic.
    pub fn with_draw_reward(mut self, reward: f64) -> Self {
        self.draw_reward = reward;
        self
    }

    /// Builder method: set the stop-searching threshold.
    pub fn with_target_fitness(mut self, target: f64) -> Self {
        self.target_fitness = target;
        self
    }

    /// Builder method: set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.games_per_side == 0 {
            return Err(HarnessError::NoGames);
        }
        if !self.win_reward.is_finite() || self.win_reward < 0.0 {
            return Err(HarnessError::InvalidReward("win", self.win_reward));
        }
        if !self.draw_reward.is_finite() || self.draw_reward < 0.0 {
            return Err(HarnessError::InvalidReward("draw", self.draw_reward));
        }
        if !self.target_fitness.is_finite() {
            return Err(HarnessError::InvalidTarget(self.target_fitness));
        }
        Ok(())
    }
}

/// Errors that can occur when validating harness configuration.
#[derive(Debug, Clone)]
pub enum HarnessError {
    /// `games_per_side` is zero.
    NoGames,
    /// A reward is negative or not finite.
    InvalidReward(&'static str, f64),
    /// The target fitness is not finite.
    InvalidTarget(f64),
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HarnessError::NoGames => write!(f, "games_per_side must be at least 1"),
            HarnessError::InvalidReward(name, val) => {
                write!(f, "{} reward {} must be finite and non-negative", name, val)
            }
            HarnessError::InvalidTarget(val) => {
                write!(f, "target fitness {} must be finite", val)
            }
        }
    }
}

impl std::error::Error for HarnessError {}

/// Aggregated result of one fitness evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessReport {
    /// Scalar fitness; higher is better.
    pub fitness: f64,
    /// Total games played.
    pub games_played: u32,
    /// Wins against the random opponent (both sides combined).
    pub wins_vs_random: u32,
    /// Draws against the random opponent.
    pub draws_vs_random: u32,
    /// Losses (including forfeits) against the random opponent.
    pub losses_vs_random: u32,
    /// Wins against the heuristic opponent.
    pub wins_vs_heuristic: u32,
    /// Draws against the heuristic opponent.
    pub draws_vs_heuristic: u32,
    /// Losses (including forfeits) against the heuristic opponent.
    pub losses_vs_heuristic: u32,
    /// Whether fitness reached the configured target.
    pub solved: bool,
}

/// Per-opponent tally used while games run.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    wins: u32,
    draws: u32,
    losses: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome, oracle_is_x: bool) {
        match outcome {
            Outcome::Draw => self.draws += 1,
            Outcome::XWins if oracle_is_x => self.wins += 1,
            Outcome::OWins if !oracle_is_x => self.wins += 1,
            _ => self.losses += 1,
        }
    }
}

/// Runs batches of games for an oracle and aggregates a fitness number.
#[derive(Debug, Clone)]
pub struct FitnessHarness {
    config: HarnessConfig,
}

impl FitnessHarness {
    /// Create a harness with a validated configuration.
    pub fn new(config: HarnessConfig) -> Result<Self, HarnessError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Score an oracle: `games_per_side` games as each side against the
    /// random and heuristic opponents, folded into one fitness value.
    ///
    /// With a seeded configuration the report is a pure function of the
    /// oracle. Games inside one evaluation run sequentially; batch scoring
    /// of many oracles parallelizes across evaluations, each owning its
    /// boards and opponents.
    pub fn evaluate<O: Oracle>(&self, oracle: &mut O) -> FitnessReport {
        let games = self.config.games_per_side;

        let mut vs_random = Tally::default();
        let mut agent = OracleAgent::new(&mut *oracle, true);
        for (side_idx, oracle_is_x) in [true, false].into_iter().enumerate() {
            agent.set_plays_x(oracle_is_x);
            let mut opponent = match self.config.seed {
                Some(seed) => RandomAgent::seeded(seed.wrapping_add(side_idx as u64)),
                None => RandomAgent::new(),
            };
            for _ in 0..games {
                let outcome = if oracle_is_x {
                    play_until_win(&mut agent, &mut opponent)
                } else {
                    play_until_win(&mut opponent, &mut agent)
                };
                vs_random.record(outcome, oracle_is_x);
            }
        }

        let mut vs_heuristic = Tally::default();
        let mut agent = OracleAgent::new(&mut *oracle, true);
        let mut opponent = HeuristicAgent::new();
        for oracle_is_x in [true, false] {
            agent.set_plays_x(oracle_is_x);
            for _ in 0..games {
                let outcome = if oracle_is_x {
                    play_until_win(&mut agent, &mut opponent)
                } else {
                    play_until_win(&mut opponent, &mut agent)
                };
                vs_heuristic.record(outcome, oracle_is_x);
            }
        }

        let fitness = self.config.win_reward * (vs_random.wins + vs_heuristic.wins) as f64
            + self.config.draw_reward * vs_heuristic.draws as f64;

        FitnessReport {
            fitness,
            games_played: 4 * games,
            wins_vs_random: vs_random.wins,
            draws_vs_random: vs_random.draws,
            losses_vs_random: vs_random.losses,
            wins_vs_heuristic: vs_heuristic.wins,
            draws_vs_heuristic: vs_heuristic.draws,
            losses_vs_heuristic: vs_heuristic.losses,
            solved: fitness >= self.config.target_fitness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::oracle::WeightsOracle;
    use crate::engine::board::WIN_LINES;

    /// Rebuilds the position from the feature vector and scores winning
    /// cells above blocking cells above center/corner/edge preferences.
    struct LineOracle;

    impl Oracle for LineOracle {
        fn reset(&mut self) {}

        fn activate(&mut self, input: &[f64; 9]) -> [f64; 9] {
            let mut own: u16 = 0;
            let mut opp: u16 = 0;
            for (i, &x) in input.iter().enumerate() {
                if x > 0.0 {
                    own |= 1 << i;
                } else if x < 0.0 {
                    opp |= 1 << i;
                }
            }
            let mut scores = [0.0; 9];
            for (pos, score) in scores.iter_mut().enumerate() {
                let bit = 1u16 << pos;
                if (own | opp) & bit != 0 {
                    continue;
                }
                *score = if WIN_LINES.iter().any(|&line| (own | bit) & line == line) {
                    100.0
                } else if WIN_LINES.iter().any(|&line| (opp | bit) & line == line) {
                    50.0
                } else if pos == 4 {
                    5.0
                } else if pos % 2 == 0 {
                    2.0
                } else {
                    1.0
                };
            }
            scores
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(HarnessConfig::default().validate().is_ok());

        let no_games = HarnessConfig::default().with_games_per_side(0);
        assert!(matches!(no_games.validate(), Err(HarnessError::NoGames)));

        let bad_reward = HarnessConfig::default().with_win_reward(-1.0);
        assert!(matches!(
            bad_reward.validate(),
            Err(HarnessError::InvalidReward("win", _))
        ));

        let bad_target = HarnessConfig::default().with_target_fitness(f64::NAN);
        assert!(matches!(
            bad_target.validate(),
            Err(HarnessError::InvalidTarget(_))
        ));

        assert!(FitnessHarness::new(no_games).is_err());
    }

    #[test]
    fn test_report_counts_add_up() {
        let config = HarnessConfig::default()
            .with_games_per_side(20)
            .with_seed(42);
        let harness = FitnessHarness::new(config).unwrap();

        let mut oracle = WeightsOracle::random(7);
        let report = harness.evaluate(&mut oracle);

        assert_eq!(report.games_played, 80);
        assert_eq!(
            report.wins_vs_random + report.draws_vs_random + report.losses_vs_random,
            40
        );
        assert_eq!(
            report.wins_vs_heuristic + report.draws_vs_heuristic + report.losses_vs_heuristic,
            40
        );

        let expected = 10.0 * (report.wins_vs_random + report.wins_vs_heuristic) as f64
            + 1.0 * report.draws_vs_heuristic as f64;
        assert_eq!(report.fitness, expected);
    }

    #[test]
    fn test_seeded_evaluation_is_reproducible() {
        let config = HarnessConfig::default()
            .with_games_per_side(10)
            .with_seed(123);
        let harness = FitnessHarness::new(config).unwrap();

        let mut oracle = WeightsOracle::random(5);
        let first = harness.evaluate(&mut oracle);
        let second = harness.evaluate(&mut oracle);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_target_is_always_solved() {
        let config = HarnessConfig::default()
            .with_games_per_side(5)
            .with_target_fitness(0.0)
            .with_seed(1);
        let harness = FitnessHarness::new(config).unwrap();

        let mut oracle = WeightsOracle::zeros();
        let report = harness.evaluate(&mut oracle);
        assert!(report.solved);
    }

    #[test]
    fn test_strong_oracle_reaches_target() {
        // A win/block policy dominates the random opponent, so under the
        // default rewards its fitness clears the default target.
        let config = HarnessConfig::default().with_seed(42);
        let harness = FitnessHarness::new(config).unwrap();

        let mut oracle = LineOracle;
        let report = harness.evaluate(&mut oracle);

        assert!(report.wins_vs_random > report.losses_vs_random);
        assert!(
            report.fitness >= 100.0,
            "fitness {} below target",
            report.fitness
        );
        assert!(report.solved);
    }

    #[test]
    fn test_report_json_round_trip() {
        let config = HarnessConfig::default().with_games_per_side(5).with_seed(9);
        let harness = FitnessHarness::new(config).unwrap();

        let mut oracle = WeightsOracle::random(3);
        let report = harness.evaluate(&mut oracle);

        let json = serde_json::to_string(&report).unwrap();
        let parsed: FitnessReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, parsed);
    }
}
