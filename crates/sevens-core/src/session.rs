//! Dice session management.
//!
//! `DiceSession` owns one [`RollEngine`] and one [`StatsAggregator`] for the
//! lifetime of a session. Rolling and recording happen together under
//! `&mut self`, so the window and percentage checks always see the history
//! the new outcome is appended to.
//!
//! The session also interprets the line-based command language used by the
//! interactive prompt.

use std::collections::BTreeMap;

use log::debug;

use crate::chart::ComparisonChart;
use crate::config::SuppressionConfig;
use crate::dice::{DiceSource, RandomDice};
use crate::engine::RollEngine;
use crate::error::{SevensError, SevensResult};
use crate::outcome::RollOutcome;
use crate::stats::{Stats, StatsAggregator};

/// How many rolls `history` shows when no count is given.
pub const DEFAULT_HISTORY_LEN: usize = 20;

/// Upper bound for a single `roll <n>` command.
pub const MAX_BATCH: usize = 100_000;

/// Batches up to this size list every roll; larger ones are summarised.
const LIST_LIMIT: usize = 20;

/// Width of the text bars drawn by the `chart` command.
const BAR_WIDTH: f64 = 30.0;

/// One dice-rolling session: engine, configuration and statistics.
#[derive(Debug, Clone)]
pub struct DiceSession<D = RandomDice> {
    engine: RollEngine<D>,
    stats: StatsAggregator,
    finished: bool,
}

impl DiceSession<RandomDice> {
    /// Create a session with seeded random dice.
    pub fn seeded(seed: u64, config: SuppressionConfig) -> SevensResult<Self> {
        Self::new(RandomDice::seeded(seed), config)
    }
}

impl<D: DiceSource> DiceSession<D> {
    /// Create a session with the given dice source and configuration.
    pub fn new(dice: D, config: SuppressionConfig) -> SevensResult<Self> {
        Ok(Self {
            engine: RollEngine::new(dice, config)?,
            stats: StatsAggregator::new(),
            finished: false,
        })
    }

    /// The active suppression configuration.
    pub fn config(&self) -> &SuppressionConfig {
        self.engine.config()
    }

    /// Replace the suppression configuration. Invalid settings are rejected
    /// and the previous configuration stays active.
    pub fn configure(&mut self, config: SuppressionConfig) -> SevensResult<()> {
        self.engine.configure(config)?;
        debug!("configured: {}", self.engine.config());
        Ok(())
    }

    /// Roll once and record the outcome.
    pub fn roll(&mut self) -> RollOutcome {
        let outcome = self.engine.roll(self.stats.history());
        self.stats.record(outcome);
        outcome
    }

    /// Roll `count` times, recording each outcome.
    pub fn roll_many(&mut self, count: usize) -> Vec<RollOutcome> {
        (0..count).map(|_| self.roll()).collect()
    }

    /// Record an outcome produced elsewhere.
    pub fn record(&mut self, outcome: RollOutcome) {
        self.stats.record(outcome);
    }

    /// The statistics aggregator.
    pub fn stats(&self) -> &StatsAggregator {
        &self.stats
    }

    /// Current statistics.
    pub fn current_stats(&self) -> Stats {
        self.stats.current_stats()
    }

    /// The theoretical two-dice distribution.
    pub fn theoretical_distribution(&self) -> BTreeMap<u8, f64> {
        self.stats.theoretical_distribution()
    }

    /// The last `n` outcomes, newest first.
    pub fn recent(&self, n: usize) -> Vec<RollOutcome> {
        self.stats.history().recent(n).copied().collect()
    }

    /// Observed-versus-theoretical chart data.
    pub fn chart(&self) -> ComparisonChart {
        ComparisonChart::from_stats(&self.current_stats())
    }

    /// Clear all history and counters. The configuration is kept.
    pub fn reset(&mut self) {
        self.stats.reset();
    }

    /// Whether a `quit` command has ended the session.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SevensResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();
        let args = &parts[1..];

        match cmd.as_str() {
            "roll" | "r" => self.do_roll(args),
            "stats" => Ok(self.do_stats()),
            "history" => self.do_history(args),
            "chart" => Ok(self.do_chart()),
            "config" => Ok(format!("Suppression: {}", self.config())),
            "set" => self.do_set(args),
            "reset" => {
                self.reset();
                Ok("Statistics reset.".to_string())
            }
            "help" => Ok(help_text()),
            "quit" | "q" => {
                self.finished = true;
                Ok("Goodbye!".to_string())
            }
            _ => Err(SevensError::UnknownCommand(cmd)),
        }
    }

    fn do_roll(&mut self, args: &[&str]) -> SevensResult<String> {
        let count = match args.first() {
            Some(arg) => parse_count(arg)?,
            None => 1,
        };

        let before = self.stats.prevented_count();
        let outcomes = self.roll_many(count);

        if count <= LIST_LIMIT {
            let lines: Vec<String> = outcomes.iter().map(describe_roll).collect();
            return Ok(lines.join("\n"));
        }

        let sevens = outcomes.iter().filter(|o| o.is_seven()).count();
        Ok(format!(
            "Rolled {count} times: {sevens} seven(s), {} seven(s) prevented.",
            self.stats.prevented_count() - before
        ))
    }

    fn do_stats(&self) -> String {
        let stats = self.current_stats();
        let mut out = format!(
            "Rolls: {} | Sevens: {} ({:.2}%) | Prevented: {}",
            stats.total_rolls,
            stats.sevens_count,
            stats.seven_frequency_percent,
            stats.prevented_count
        );
        for (sum, count) in &stats.distribution_counts {
            let share = stats.distribution_percentages[sum] * 100.0;
            out.push_str(&format!("\n  {sum:>2}: {count:>6} ({share:>6.2}%)"));
        }
        out
    }

    fn do_history(&self, args: &[&str]) -> SevensResult<String> {
        let n = match args.first() {
            Some(arg) => parse_count(arg)?,
            None => DEFAULT_HISTORY_LEN,
        };
        if self.stats.history().is_empty() {
            return Ok("No rolls yet.".to_string());
        }
        let items: Vec<String> = self
            .stats
            .history()
            .recent(n)
            .map(|o| {
                if o.was_prevented() {
                    format!("{}*", o.sum())
                } else {
                    o.sum().to_string()
                }
            })
            .collect();
        Ok(format!(
            "Recent (newest first, * = seven prevented): {}",
            items.join(" ")
        ))
    }

    fn do_chart(&self) -> String {
        let chart = self.chart();
        let lines: Vec<String> = chart
            .points
            .iter()
            .map(|p| {
                let filled = (chart.normalized(p.observed) * BAR_WIDTH).round() as usize;
                let marker = (chart.normalized(p.expected) * BAR_WIDTH).round() as usize;
                let bar: String = (0..BAR_WIDTH as usize)
                    .map(|i| match (i < filled, i + 1 == marker) {
                        (_, true) => '|',
                        (true, false) => '#',
                        (false, false) => ' ',
                    })
                    .collect();
                format!(
                    "{:>2} [{bar}] {:>6.2}% (expected {:>5.2}%)",
                    p.sum,
                    p.observed * 100.0,
                    p.expected * 100.0
                )
            })
            .collect();
        lines.join("\n")
    }

    fn do_set(&mut self, args: &[&str]) -> SevensResult<String> {
        let [key, value] = args else {
            return Err(SevensError::InvalidArgument(
                "usage: set <key> <value>".to_string(),
            ));
        };

        let mut config = self.config().clone();
        match key.to_lowercase().as_str() {
            "window" => config.window_enabled = parse_switch(value)?,
            "window-size" => config.window_size = parse_number(key, value)?,
            "max-sevens" => config.window_max_sevens = parse_number(key, value)?,
            "percentage" => config.percentage_enabled = parse_switch(value)?,
            "max-percentage" => config.max_percentage = parse_number(key, value)?,
            other => {
                return Err(SevensError::InvalidArgument(format!(
                    "unknown setting '{other}'"
                )));
            }
        }

        self.configure(config)?;
        Ok(format!("Suppression: {}", self.config()))
    }
}

fn describe_roll(outcome: &RollOutcome) -> String {
    let mut line = format!("Rolled {outcome}");
    if outcome.is_seven() {
        line.push_str(" - seven!");
    }
    line
}

fn parse_count(arg: &str) -> SevensResult<usize> {
    match arg.parse::<usize>() {
        Ok(n) if (1..=MAX_BATCH).contains(&n) => Ok(n),
        _ => Err(SevensError::InvalidArgument(format!(
            "expected a count between 1 and {MAX_BATCH}, got '{arg}'"
        ))),
    }
}

fn parse_switch(value: &str) -> SevensResult<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(SevensError::InvalidArgument(format!(
            "expected on/off, got '{other}'"
        ))),
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> SevensResult<T> {
    value
        .parse()
        .map_err(|_| SevensError::InvalidArgument(format!("{key}: '{value}' is not a number")))
}

fn help_text() -> String {
    [
        "Commands:",
        "  roll [n]             Roll the dice n times (default 1)",
        "  stats                Show totals and the per-sum distribution",
        "  history [n]          Show the last n sums, newest first (default 20)",
        "  chart                Compare observed and theoretical distributions",
        "  config               Show the suppression settings",
        "  set <key> <value>    Change a setting: window, window-size, max-sevens,",
        "                       percentage, max-percentage",
        "  reset                Clear all statistics",
        "  quit                 Leave the session",
    ]
    .join("\n")
}
