//! intake-cli: command-line collaborator for the complaint intake core.
//!
//! Usage:
//!   intake-cli submit --name "Asha Rao" --batch "Batch A" --desc "No water in my hostel room"
//!   intake-cli submit --mode fixed_choice --name "R. Iyer" --batch "Batch B" \
//!       --category Food --severity Minor --desc "Mess food was cold again"
//!   intake-cli track --ticket 4F7A1C02
//!   intake-cli dashboard
//!
//! Global flags: --config FILE, --data-file FILE, --mode MODE, --json

use anyhow::Result;
use intake_core::config::{IntakeConfig, IntakeMode};
use intake_core::error::IntakeError;
use intake_core::record::{ComplaintRecord, DATE_FORMAT};
use intake_core::service::ComplaintService;
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

#[derive(serde::Serialize)]
struct DashboardSummary<'a> {
    records: &'a [ComplaintRecord],
    category_counts: BTreeMap<String, usize>,
    priority_counts: BTreeMap<String, usize>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("help");

    let mut config = match str_arg(&args, "--config") {
        Some(path) => IntakeConfig::load(&path)?,
        None => IntakeConfig::default(),
    };
    if let Some(mode) = str_arg(&args, "--mode") {
        config.mode = match mode.as_str() {
            "fixed_choice" | "fixed" => IntakeMode::FixedChoice,
            "inferred" => IntakeMode::Inferred,
            other => anyhow::bail!("Unknown --mode: {other} (expected fixed_choice or inferred)"),
        };
    }
    if let Some(file) = str_arg(&args, "--data-file") {
        config.data_file = PathBuf::from(file);
    } else if str_arg(&args, "--config").is_none() {
        // No explicit file anywhere: follow the selected variant's default.
        config.data_file = PathBuf::from(config.mode.default_data_file());
    }
    let json = args.iter().any(|a| a == "--json");

    log::debug!(
        "mode={:?} data_file={}",
        config.mode,
        config.data_file.display()
    );

    match command {
        "submit" => cmd_submit(&args, &config, json),
        "track" => cmd_track(&args, &config, json),
        "dashboard" => cmd_dashboard(&config, json),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            std::process::exit(2);
        }
    }
}

fn cmd_submit(args: &[String], config: &IntakeConfig, json: bool) -> Result<()> {
    let name = str_arg(args, "--name").unwrap_or_default();
    let batch = str_arg(args, "--batch").unwrap_or_else(|| "Batch A".to_string());
    let desc = str_arg(args, "--desc").unwrap_or_default();
    let category = str_arg(args, "--category");
    let severity = str_arg(args, "--severity");

    let mut service = ComplaintService::from_config(config)?;
    match service.submit(
        &name,
        &batch,
        category.as_deref(),
        severity.as_deref(),
        &desc,
    ) {
        Ok(record) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("Complaint submitted! Ticket ID: {}", record.id);
                println!("  Category: {}", record.category);
                println!("  Priority: {}", record.priority);
            }
            Ok(())
        }
        Err(e @ (IntakeError::EmptyField { .. } | IntakeError::InvalidEnumValue { .. })) => {
            // Recoverable input problem: warn and re-prompt, never fatal.
            eprintln!("warning: {e}");
            std::process::exit(2);
        }
        Err(e) => Err(e.into()),
    }
}

fn cmd_track(args: &[String], config: &IntakeConfig, json: bool) -> Result<()> {
    let ticket = str_arg(args, "--ticket").unwrap_or_default();
    let service = ComplaintService::from_config(config)?;
    match service.lookup(&ticket) {
        Some(record) => {
            if json {
                println!("{}", serde_json::to_string_pretty(record)?);
            } else {
                println!(
                    "Ticket: {} | Status: {} | Priority: {}",
                    record.id, record.status, record.priority
                );
                println!("  Category: {}", record.category);
                println!("  Description: {}", record.description);
            }
            Ok(())
        }
        None => {
            eprintln!("Ticket not found");
            std::process::exit(1);
        }
    }
}

fn cmd_dashboard(config: &IntakeConfig, json: bool) -> Result<()> {
    let service = ComplaintService::from_config(config)?;
    let records = service.all_records();
    if records.is_empty() {
        println!("No complaints yet.");
        return Ok(());
    }

    // Display aggregation happens here, on the presentation side; the
    // core hands over the raw record set only.
    let category_counts = count_by(records, |r| r.category.to_string());
    let priority_counts = count_by(records, |r| r.priority.to_string());

    if json {
        let summary = DashboardSummary {
            records,
            category_counts,
            priority_counts,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Complaints ({}):", records.len());
    for r in records {
        println!(
            "  {}  {}  {}/{}  {}  {}",
            r.id,
            r.created_at.format(DATE_FORMAT),
            r.category,
            r.priority,
            r.status,
            r.name
        );
    }
    print_counts("By category", &category_counts);
    print_counts("By priority", &priority_counts);
    Ok(())
}

fn count_by(
    records: &[ComplaintRecord],
    key: impl Fn(&ComplaintRecord) -> String,
) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for r in records {
        *counts.entry(key(r)).or_insert(0) += 1;
    }
    counts
}

fn print_counts(title: &str, counts: &BTreeMap<String, usize>) {
    println!("{title}:");
    for (label, n) in counts {
        println!("  {label:<10} {n}");
    }
}

fn str_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].clone())
}

fn print_usage() {
    println!("intake-cli: complaint intake front end");
    println!();
    println!("Commands:");
    println!("  submit     --name NAME --batch BATCH --desc TEXT [--category C --severity S]");
    println!("  track      --ticket ID");
    println!("  dashboard");
    println!();
    println!("Flags: --config FILE | --data-file FILE | --mode fixed_choice|inferred | --json");
}
