use std::io::{self, BufRead, Write};

use colored::Colorize;

use super::SuppressionArgs;

pub fn run(seed: Option<u64>, args: &SuppressionArgs) -> Result<(), String> {
    let mut session = super::start_session(seed, args)?;

    println!("  {} Sevens session", "Starting".bold());
    println!("  Suppression: {}", session.config());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    prompt()?;
    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| e.to_string())?;

        match session.process(&line) {
            Ok(output) if output.is_empty() => {}
            Ok(output) => println!("{output}\n"),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }

        if session.is_finished() {
            break;
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> Result<(), String> {
    print!("> ");
    io::stdout().flush().map_err(|e| e.to_string())
}
