//! Running roll statistics.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::history::RollHistory;
use crate::outcome::RollOutcome;
use crate::{SEVEN, SUMS};

/// Number of distinct sums two dice can produce.
const SUM_COUNT: usize = 11;

fn slot(sum: u8) -> usize {
    usize::from(sum - 2)
}

/// The theoretical probability of each sum for two fair six-sided dice:
/// `(6 - |7 - s|) / 36`.
pub fn theoretical_distribution() -> BTreeMap<u8, f64> {
    SUMS.map(|s| {
        let ways = 6 - (i32::from(SEVEN) - i32::from(s)).abs();
        (s, f64::from(ways) / 36.0)
    })
    .collect()
}

/// A snapshot of the statistics derived from the roll history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Accepted rolls so far.
    pub total_rolls: u64,
    /// Accepted rolls that summed to seven.
    pub sevens_count: u64,
    /// Sevens as a percentage of all rolls, rounded to two decimals.
    pub seven_frequency_percent: f64,
    /// Rolls where at least one seven was rejected before acceptance.
    pub prevented_count: u64,
    /// Occurrences of every sum 2-12.
    pub distribution_counts: BTreeMap<u8, u64>,
    /// Share of every sum 2-12 as a fraction of all rolls.
    pub distribution_percentages: BTreeMap<u8, f64>,
}

/// Owns the roll history and the aggregates derived from it.
#[derive(Debug, Clone, Default)]
pub struct StatsAggregator {
    history: RollHistory,
    distribution: [u64; SUM_COUNT],
    prevented: u64,
}

impl StatsAggregator {
    /// Create an aggregator with no rolls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted outcome.
    pub fn record(&mut self, outcome: RollOutcome) {
        self.distribution[slot(outcome.sum())] += 1;
        if outcome.was_prevented() {
            self.prevented += 1;
        }
        self.history.push(outcome);
    }

    /// The roll history, oldest first.
    pub fn history(&self) -> &RollHistory {
        &self.history
    }

    /// Number of accepted rolls.
    pub fn total_rolls(&self) -> u64 {
        self.history.len() as u64
    }

    /// Number of rolls with a prevented seven.
    pub fn prevented_count(&self) -> u64 {
        self.prevented
    }

    /// How many times the given sum was rolled. Zero for impossible sums.
    pub fn count(&self, sum: u8) -> u64 {
        if SUMS.contains(&sum) {
            self.distribution[slot(sum)]
        } else {
            0
        }
    }

    /// Derive the current statistics.
    pub fn current_stats(&self) -> Stats {
        let total_rolls = self.total_rolls();
        let sevens_count = self.count(SEVEN);

        let seven_frequency_percent = if total_rolls == 0 {
            0.0
        } else {
            let pct = sevens_count as f64 / total_rolls as f64 * 100.0;
            (pct * 100.0).round() / 100.0
        };

        let distribution_counts: BTreeMap<u8, u64> = SUMS.map(|s| (s, self.count(s))).collect();
        let distribution_percentages = distribution_counts
            .iter()
            .map(|(&s, &c)| {
                let share = if total_rolls == 0 {
                    0.0
                } else {
                    c as f64 / total_rolls as f64
                };
                (s, share)
            })
            .collect();

        Stats {
            total_rolls,
            sevens_count,
            seven_frequency_percent,
            prevented_count: self.prevented,
            distribution_counts,
            distribution_percentages,
        }
    }

    /// The theoretical two-dice distribution, for comparison.
    pub fn theoretical_distribution(&self) -> BTreeMap<u8, f64> {
        theoretical_distribution()
    }

    /// Forget every roll and zero all counters.
    pub fn reset(&mut self) {
        debug!("resetting statistics after {} roll(s)", self.history.len());
        self.history.clear();
        self.distribution = [0; SUM_COUNT];
        self.prevented = 0;
    }
}
