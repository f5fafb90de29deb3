//! Seven-suppressing roll engine.
//!
//! Each call to [`RollEngine::roll`] draws pairs of dice until it gets a
//! non-seven, a seven the policy allows, or it runs out of attempts. At the
//! attempt cap the last draw is accepted whatever it is, so a roll always
//! completes.
//!
//! The engine never mutates history. It reads the history it is given and
//! returns an outcome; recording it is the caller's job.

use log::{debug, trace};

use crate::SEVEN;
use crate::config::SuppressionConfig;
use crate::dice::DiceSource;
use crate::error::SevensResult;
use crate::history::RollHistory;
use crate::outcome::RollOutcome;

/// Hard cap on draws per roll.
pub const MAX_ATTEMPTS: u32 = 100;

/// Why a candidate seven was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SevenVeto {
    /// The trailing window already holds the maximum number of sevens.
    Window {
        /// Sevens found in the window.
        sevens: usize,
        /// Rolls actually inspected (the window, or less if history is shorter).
        window: usize,
    },
    /// Accepting the seven would push the lifetime share above the ceiling.
    Percentage {
        /// The share of sevens, in percent, if this seven were accepted.
        projected: f64,
    },
}

impl std::fmt::Display for SevenVeto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Window { sevens, window } => {
                write!(f, "{sevens} seven(s) in the last {window} roll(s)")
            }
            Self::Percentage { projected } => {
                write!(f, "sevens would reach {projected:.2}%")
            }
        }
    }
}

/// Decide whether a seven may be accepted next, and if not, which rule
/// rejected it. The window rule is checked first.
pub fn evaluate_seven(history: &RollHistory, config: &SuppressionConfig) -> Option<SevenVeto> {
    if config.window_enabled {
        let window = history.trailing(config.window_size);
        let sevens = window.iter().filter(|o| o.is_seven()).count();
        if sevens >= config.window_max_sevens {
            return Some(SevenVeto::Window {
                sevens,
                window: window.len(),
            });
        }
    }

    if config.percentage_enabled {
        let projected = (history.sevens() + 1) as f64 / (history.len() + 1) as f64 * 100.0;
        // Reaching the ceiling exactly is allowed.
        if projected > config.max_percentage {
            return Some(SevenVeto::Percentage { projected });
        }
    }

    None
}

/// Whether a seven may be accepted given the history so far.
pub fn should_allow_seven(history: &RollHistory, config: &SuppressionConfig) -> bool {
    evaluate_seven(history, config).is_none()
}

/// Rolls two dice under a seven-suppression policy.
#[derive(Debug, Clone)]
pub struct RollEngine<D> {
    dice: D,
    config: SuppressionConfig,
}

impl<D: DiceSource> RollEngine<D> {
    /// Create an engine with the given dice and a validated configuration.
    pub fn new(dice: D, config: SuppressionConfig) -> SevensResult<Self> {
        config.validate()?;
        Ok(Self { dice, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SuppressionConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next roll.
    pub fn configure(&mut self, config: SuppressionConfig) -> SevensResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Access the underlying dice source.
    pub fn dice(&self) -> &D {
        &self.dice
    }

    /// Produce one accepted outcome for the given history.
    pub fn roll(&mut self, history: &RollHistory) -> RollOutcome {
        let mut prevented = false;
        let mut last = (0, 0);

        for attempt in 1..=MAX_ATTEMPTS {
            let (die1, die2) = self.dice.roll_pair();
            last = (die1, die2);

            if die1 + die2 != SEVEN {
                return RollOutcome::from_attempts(die1, die2, prevented, attempt);
            }

            match evaluate_seven(history, &self.config) {
                None => return RollOutcome::from_attempts(die1, die2, false, attempt),
                Some(veto) => {
                    trace!("seven rejected on attempt {attempt}: {veto}");
                    prevented = true;
                }
            }
        }

        // Only a seven reaches the cap, and it is never flagged as prevented.
        debug!("attempt cap of {MAX_ATTEMPTS} reached, accepting {}+{}", last.0, last.1);
        RollOutcome::from_attempts(last.0, last.1, false, MAX_ATTEMPTS)
    }
}
