//! The accepted result of a single two-dice roll.

use serde::Serialize;

use crate::SEVEN;
use crate::dice::FACES;
use crate::error::{SevensError, SevensResult};

/// One accepted roll of two dice.
///
/// Outcomes are immutable once created. The engine builds them; callers that
/// need to replay known faces go through [`RollOutcome::new`], which checks
/// that both faces are real die faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RollOutcome {
    die1: u8,
    die2: u8,
    was_prevented: bool,
    attempts: u32,
}

impl RollOutcome {
    /// Build an outcome from two faces.
    ///
    /// A seven can never be marked as prevented. A prevented outcome reports
    /// two attempts, the fewest that can produce one; otherwise one.
    pub fn new(die1: u8, die2: u8, was_prevented: bool) -> SevensResult<Self> {
        for face in [die1, die2] {
            if !(1..=FACES).contains(&face) {
                return Err(SevensError::InvalidDie(face));
            }
        }
        if was_prevented && die1 + die2 == SEVEN {
            return Err(SevensError::InvalidArgument(
                "a seven cannot be marked as prevented".to_string(),
            ));
        }
        Ok(Self {
            die1,
            die2,
            was_prevented,
            attempts: if was_prevented { 2 } else { 1 },
        })
    }

    /// Engine-side constructor; faces come from a `DiceSource`.
    pub(crate) fn from_attempts(die1: u8, die2: u8, was_prevented: bool, attempts: u32) -> Self {
        Self {
            die1,
            die2,
            was_prevented,
            attempts,
        }
    }

    /// The first die face.
    pub fn die1(&self) -> u8 {
        self.die1
    }

    /// The second die face.
    pub fn die2(&self) -> u8 {
        self.die2
    }

    /// The sum of both faces (2-12).
    pub fn sum(&self) -> u8 {
        self.die1 + self.die2
    }

    /// Whether the sum is seven.
    pub fn is_seven(&self) -> bool {
        self.sum() == SEVEN
    }

    /// Whether a candidate seven was rejected before this outcome was accepted.
    pub fn was_prevented(&self) -> bool {
        self.was_prevented
    }

    /// How many draws the engine made to produce this outcome.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}] = {}", self.die1, self.die2, self.sum())?;
        if self.was_prevented {
            write!(f, " (seven prevented)")?;
        }
        Ok(())
    }
}
