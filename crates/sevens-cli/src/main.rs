//! CLI frontend for the Sevens dice roller.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

use commands::SuppressionArgs;

#[derive(Parser)]
#[command(
    name = "sevens",
    about = "Sevens: a two-dice roller that keeps sevens in check",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll the dice a number of times and report statistics
    Roll {
        /// Number of rolls
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// RNG seed for reproducible rolls (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// List every roll, not just the summary
        #[arg(short, long)]
        verbose: bool,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        suppression: SuppressionArgs,
    },

    /// Start an interactive rolling session
    Play {
        /// RNG seed for reproducible rolls (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        #[command(flatten)]
        suppression: SuppressionArgs,
    },

    /// Show the theoretical distribution of two six-sided dice
    Theory,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            count,
            seed,
            verbose,
            json,
            suppression,
        } => commands::roll::run(count, seed, verbose, json, &suppression),
        Commands::Play { seed, suppression } => commands::play::run(seed, &suppression),
        Commands::Theory => commands::theory::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
