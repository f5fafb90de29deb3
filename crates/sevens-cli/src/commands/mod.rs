pub mod play;
pub mod roll;
pub mod theory;

use std::path::PathBuf;

use clap::Args;
use log::debug;

use sevens_core::{DiceSession, RandomDice, SuppressionConfig};

/// Seven-suppression flags shared by every rolling command.
#[derive(Args, Debug, Clone)]
pub struct SuppressionArgs {
    /// Load suppression settings from a JSON file (flags below override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable the sliding-window rule
    #[arg(long)]
    no_window: bool,

    /// Number of recent rolls the window covers
    #[arg(long)]
    window: Option<usize>,

    /// Sevens allowed inside the window
    #[arg(long)]
    max_sevens: Option<usize>,

    /// Disable the overall percentage rule
    #[arg(long)]
    no_percentage: bool,

    /// Highest share of sevens, in percent
    #[arg(long)]
    max_percentage: Option<f64>,
}

impl SuppressionArgs {
    /// Build the suppression config: file (or defaults), then flags.
    pub fn to_config(&self) -> Result<SuppressionConfig, String> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
                SuppressionConfig::from_json(&json).map_err(|e| e.to_string())?
            }
            None => SuppressionConfig::default(),
        };

        if let Some(size) = self.window {
            config.window_size = size;
        }
        if let Some(max) = self.max_sevens {
            config.window_max_sevens = max;
        }
        if let Some(pct) = self.max_percentage {
            config.max_percentage = pct;
        }
        if self.no_window {
            config.window_enabled = false;
        }
        if self.no_percentage {
            config.percentage_enabled = false;
        }

        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

/// Start a session with seeded or entropy-backed dice.
fn start_session(seed: Option<u64>, args: &SuppressionArgs) -> Result<DiceSession, String> {
    let config = args.to_config()?;
    debug!("starting session with {config}");
    let dice = match seed {
        Some(seed) => RandomDice::seeded(seed),
        None => RandomDice::from_entropy(),
    };
    DiceSession::new(dice, config).map_err(|e| format!("failed to start session: {e}"))
}
