//! Integration tests for the `sevens` binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sevens() -> Command {
    let mut cmd = Command::cargo_bin("sevens").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_prints_summary_and_distribution() {
    sevens()
        .args(["roll", "-n", "50", "--seed", "42"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total rolls:      50")
                .and(predicate::str::contains("Sevens prevented"))
                .and(predicate::str::contains("Expected"))
                .and(predicate::str::contains("16.67%")),
        );
}

#[test]
fn roll_is_reproducible_with_seed() {
    let run = || {
        sevens()
            .args(["roll", "-n", "200", "--seed", "7", "--json"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn roll_json_output() {
    let output = sevens()
        .args(["roll", "-n", "120", "--seed", "3", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["totalRolls"], 120);
    let counted: u64 = stats["distributionCounts"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(counted, 120);
    assert!(stats["sevenFrequencyPercent"].as_f64().unwrap() <= 16.67);
}

#[test]
fn roll_unrestricted_never_prevents() {
    let output = sevens()
        .args([
            "roll",
            "-n",
            "300",
            "--seed",
            "11",
            "--json",
            "--no-window",
            "--no-percentage",
        ])
        .output()
        .unwrap();
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["preventedCount"], 0);
}

#[test]
fn roll_verbose_lists_rolls() {
    sevens()
        .args(["roll", "-n", "5", "--seed", "1", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[   5]"));
}

#[test]
fn roll_rejects_zero_count() {
    sevens()
        .args(["roll", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and"));
}

#[test]
fn roll_rejects_huge_count() {
    sevens()
        .args([
            "roll",
            "-n",
            "18446744073709551615",
            "--no-window",
            "--no-percentage",
        ])
        .assert()
        .code(1)
        .stderr(
            predicate::str::starts_with("error:")
                .and(predicate::str::contains("between 1 and")),
        );
}

#[test]
fn roll_rejects_count_above_batch_limit() {
    sevens()
        .args(["roll", "-n", "100001"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("100000"));
}

#[test]
fn roll_rejects_invalid_window() {
    sevens()
        .args(["roll", "--window", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("window size must be at least 1"));
}

#[test]
fn roll_rejects_invalid_percentage() {
    sevens()
        .args(["roll", "--max-percentage", "120"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max percentage"));
}

#[test]
fn roll_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sevens.json");
    fs::write(
        &path,
        r#"{"windowEnabled": false, "percentageEnabled": false}"#,
    )
    .unwrap();

    let output = sevens()
        .args(["roll", "-n", "200", "--seed", "5", "--json", "-c"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["preventedCount"], 0);
}

#[test]
fn roll_missing_config_file_fails() {
    sevens()
        .args(["roll", "-c", "/nonexistent/sevens.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_processes_commands_until_quit() {
    sevens()
        .args(["play", "--seed", "42"])
        .write_stdin("roll 3\nstats\nhistory\nquit\nroll\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rolls: 3")
                .and(predicate::str::contains("Recent (newest first"))
                .and(predicate::str::contains("Goodbye!"))
                .and(predicate::str::contains("Rolls: 4").not()),
        );
}

#[test]
fn play_reports_errors_and_continues() {
    sevens()
        .args(["play", "--seed", "1"])
        .write_stdin("dance\nset window-size 0\nconfig\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("unknown command: dance")
                .and(predicate::str::contains("window size must be at least 1"))
                .and(predicate::str::contains("in the last 3 roll(s)")),
        );
}

#[test]
fn play_quit_with_trailing_words_stops() {
    sevens()
        .args(["play", "--seed", "2"])
        .write_stdin("quit now\nroll\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Goodbye!").and(predicate::str::contains("Rolled").not()),
        );
}

#[test]
fn play_ends_on_eof() {
    sevens()
        .args(["play", "--no-window"])
        .write_stdin("set max-percentage 50\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("at most 50%"));
}

// ---------------------------------------------------------------------------
// theory
// ---------------------------------------------------------------------------

#[test]
fn theory_prints_distribution() {
    sevens()
        .arg("theory")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("6/36")
                .and(predicate::str::contains("16.67%"))
                .and(predicate::str::contains("2.78%")),
        );
}

#[test]
fn help_lists_subcommands() {
    sevens()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("roll")
                .and(predicate::str::contains("play"))
                .and(predicate::str::contains("theory")),
        );
}
