use colored::Colorize;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use sevens_core::session::MAX_BATCH;
use sevens_core::{ComparisonChart, SEVEN};

use super::SuppressionArgs;

pub fn run(
    count: usize,
    seed: Option<u64>,
    verbose: bool,
    json: bool,
    args: &SuppressionArgs,
) -> Result<(), String> {
    if !(1..=MAX_BATCH).contains(&count) {
        return Err(format!("roll count must be between 1 and {MAX_BATCH}, got {count}"));
    }

    let mut session = super::start_session(seed, args)?;
    let outcomes = session.roll_many(count);
    let stats = session.current_stats();

    if json {
        let out = serde_json::to_string_pretty(&stats).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let seed_label = seed.map_or_else(|| "random".to_string(), |s| s.to_string());
    println!(
        "  {} {count} rolls {}",
        "Rolled".bold(),
        format!("(seed={seed_label})").dimmed()
    );
    println!("  Suppression: {}", session.config());
    println!();

    if verbose {
        println!("  {}", "Rolls".bold().underline());
        for (i, outcome) in outcomes.iter().enumerate() {
            let label = format!("[{:>4}]", i + 1).dimmed();
            let line = outcome.to_string();
            let line = if outcome.is_seven() {
                line.green().bold()
            } else if outcome.was_prevented() {
                line.yellow()
            } else {
                line.normal()
            };
            println!("  {label} {line}");
        }
        println!();
    }

    println!("  {}", "Summary".bold().underline());
    println!("  Total rolls:      {}", stats.total_rolls);
    println!(
        "  Sevens:           {} ({:.2}%)",
        stats.sevens_count, stats.seven_frequency_percent
    );
    println!("  Sevens prevented: {}", stats.prevented_count);
    println!();

    println!("  {}", "Distribution".bold().underline());
    println!();

    let chart = ComparisonChart::from_stats(&stats);
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Sum", "Count", "Observed", "Expected", "Deviation", ""]);

    for point in &chart.points {
        let count = stats.distribution_counts.get(&point.sum).copied().unwrap_or(0);
        let sum_label = if point.sum == SEVEN {
            point.sum.to_string().green().bold().to_string()
        } else {
            point.sum.to_string()
        };
        table.add_row(vec![
            sum_label,
            count.to_string(),
            format!("{:.2}%", point.observed * 100.0),
            format!("{:.2}%", point.expected * 100.0),
            format_deviation(point.deviation()),
            format_bar(chart.normalized(point.observed)),
        ]);
    }
    for column in 1..=4 {
        if let Some(col) = table.column_mut(column) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("{table}");
    Ok(())
}

fn format_deviation(deviation: f64) -> String {
    let text = format!("{:+.2}", deviation * 100.0);
    if deviation.abs() < 0.005 {
        text.normal().to_string()
    } else if deviation > 0.0 {
        text.red().to_string()
    } else {
        text.blue().to_string()
    }
}

fn format_bar(fraction: f64) -> String {
    let filled = (fraction * 20.0).round() as usize;
    "#".repeat(filled)
}
