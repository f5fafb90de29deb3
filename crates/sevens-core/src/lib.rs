//! Frequency-governed two-dice roller for Sevens.
//!
//! Rolls a pair of six-sided dice while limiting how often the sum seven is
//! accepted, either within a sliding window of recent rolls or as a share of
//! all rolls. Tracks the per-sum distribution, prevented sevens, and derives
//! the statistics a front-end needs to compare observed frequencies against
//! the theoretical two-dice curve.

pub mod chart;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod history;
pub mod outcome;
pub mod session;
pub mod stats;

pub use chart::{ComparisonChart, ComparisonPoint};
pub use config::SuppressionConfig;
pub use dice::{DiceSource, RandomDice, ScriptedDice};
pub use engine::{MAX_ATTEMPTS, RollEngine, SevenVeto, evaluate_seven, should_allow_seven};
pub use error::{SevensError, SevensResult};
pub use history::RollHistory;
pub use outcome::RollOutcome;
pub use session::DiceSession;
pub use stats::{Stats, StatsAggregator, theoretical_distribution};

/// The sum that the suppression policy governs.
pub const SEVEN: u8 = 7;

/// Every sum two six-sided dice can produce, in ascending order.
pub const SUMS: std::ops::RangeInclusive<u8> = 2..=12;
