use std::fs;

use clap::Parser;
use serde::Serialize;

use classcode::{CodeValidator, Outcome, WordGroups};

mod cli;
use cli::display;
use cli::{Cli, Commands};

/// Per-code entry in the `--json` report
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport {
    code: String,
    valid: bool,
    outcome: Outcome,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            codes,
            words,
            existing,
            json,
        } => match run_check(&codes, words.as_deref(), existing.as_deref(), json) {
            Ok(all_valid) => {
                if !all_valid {
                    std::process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        Commands::Groups { words, json } => {
            if let Err(e) = run_groups(&words, json) {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Validate codes in order against one registry; returns whether all passed.
fn run_check(
    codes: &[String],
    words: Option<&str>,
    existing: Option<&str>,
    json: bool,
) -> Result<bool, String> {
    let word_list = match words {
        Some(path) => load_list(path)?,
        None => Vec::new(),
    };
    let seed = match existing {
        Some(path) => load_list(path)?,
        None => Vec::new(),
    };

    let mut validator = CodeValidator::with_existing_codes(&word_list, &seed);

    let reports: Vec<CheckReport> = codes
        .iter()
        .map(|code| {
            let outcome = validator.evaluate(code);
            CheckReport {
                code: code.clone(),
                valid: outcome.is_valid(),
                outcome,
            }
        })
        .collect();

    if json {
        let payload = serde_json::to_string_pretty(&reports)
            .map_err(|e| format!("Failed to serialize report: {}", e))?;
        println!("{}", payload);
    } else {
        for report in &reports {
            println!("{}", display::verdict_line(&report.code, report.outcome));
        }
        let accepted = reports.iter().filter(|report| report.valid).count();
        println!("{}", display::summary_line(accepted, reports.len()));
    }

    Ok(reports.iter().all(|report| report.valid))
}

/// Print the representative groups a word list partitions into.
fn run_groups(path: &str, json: bool) -> Result<(), String> {
    let groups = WordGroups::new(&load_list(path)?);

    if json {
        let payload = serde_json::to_string_pretty(&groups)
            .map_err(|e| format!("Failed to serialize groups: {}", e))?;
        println!("{}", payload);
        return Ok(());
    }

    if groups.is_empty() {
        println!("(no valid words)");
        return Ok(());
    }
    for (representative, members) in groups.iter() {
        let members: Vec<&str> = members.iter().map(String::as_str).collect();
        println!("{}", display::group_line(representative, &members));
    }
    Ok(())
}

/// Load a list of strings from a JSON array or newline-separated text file.
fn load_list(path: &str) -> Result<Vec<String>, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;

    if path.ends_with(".json") {
        serde_json::from_str(&content).map_err(|e| format!("Invalid JSON in {}: {}", path, e))
    } else {
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect())
    }
}
