//! Chronological record of accepted rolls.

use serde::Serialize;

use crate::SEVEN;
use crate::outcome::RollOutcome;

/// Accepted rolls in the order they were made.
///
/// Only grows, except for [`RollHistory::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RollHistory {
    outcomes: Vec<RollOutcome>,
}

impl RollHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome.
    pub fn push(&mut self, outcome: RollOutcome) {
        self.outcomes.push(outcome);
    }

    /// Remove every outcome.
    pub fn clear(&mut self) {
        self.outcomes.clear();
    }

    /// All outcomes, oldest first.
    pub fn outcomes(&self) -> &[RollOutcome] {
        &self.outcomes
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// The last `n` outcomes, oldest first. Shorter if the history is.
    pub fn trailing(&self, n: usize) -> &[RollOutcome] {
        let start = self.outcomes.len().saturating_sub(n);
        &self.outcomes[start..]
    }

    /// The last `n` outcomes, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &RollOutcome> {
        self.outcomes.iter().rev().take(n)
    }

    /// How many outcomes rolled the given sum.
    pub fn count_sum(&self, sum: u8) -> usize {
        self.outcomes.iter().filter(|o| o.sum() == sum).count()
    }

    /// How many outcomes rolled seven.
    pub fn sevens(&self) -> usize {
        self.count_sum(SEVEN)
    }
}

impl<'a> IntoIterator for &'a RollHistory {
    type Item = &'a RollOutcome;
    type IntoIter = std::slice::Iter<'a, RollOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
