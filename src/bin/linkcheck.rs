//! Command-line front end for link verification.
//!
//! Runs the same fetch, extract and probe pipeline as `POST /check-urls`
//! without starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Print a coloured report
//! cargo run --bin linkcheck -- https://example.gov.br
//!
//! # Print JSON (same shape as the API response)
//! cargo run --bin linkcheck -- https://example.gov.br --json
//!
//! # Also write the spreadsheet export
//! cargo run --bin linkcheck -- https://example.gov.br --output url_status.xlsx
//! ```
//!
//! # Environment Variables
//!
//! Uses the same variables as the server (`PROBE_TIMEOUT_SECONDS`,
//! `CONTAINER_SELECTOR`, `FILE_EXTENSIONS`, `LINK_RESOLUTION`, ...).

use link_verifier::config;
use link_verifier::domain::entities::{LinkRecord, LinkStatus};
use link_verifier::state::build_report_service;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;

/// Verify the file links of a web page.
#[derive(Parser)]
#[command(name = "linkcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Page to verify; relative links are resolved against it
    base_url: String,

    /// Write the report as an XLSX file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the records as JSON instead of the coloured report
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let service = build_report_service(&config)?;

    if !cli.json {
        println!("{} {}", "Checking".bright_blue().bold(), cli.base_url.cyan());
        println!();
    }

    let records = service
        .verify(&cli.base_url)
        .await
        .with_context(|| format!("Verification of {} failed", cli.base_url))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print_report(&records);
    }

    if let Some(path) = cli.output {
        if records.is_empty() {
            eprintln!("{}", "No links found, spreadsheet not written".yellow());
        } else {
            let bytes = service.export_to_spreadsheet(&records)?;
            std::fs::write(&path, bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            if !cli.json {
                println!();
                println!("{} {}", "Saved".green().bold(), path.display());
            }
        }
    }

    Ok(())
}

/// Prints one line per record plus a summary.
fn print_report(records: &[LinkRecord]) {
    if records.is_empty() {
        println!("{}", "No matching links found".yellow());
        return;
    }

    let ok_label = LinkStatus::Ok.to_string();
    let not_found_label = LinkStatus::NotFound.to_string();

    let mut ok = 0;
    for record in records {
        let status = if record.status == ok_label {
            ok += 1;
            record.status.green()
        } else if record.status == not_found_label {
            record.status.red()
        } else {
            record.status.yellow()
        };
        println!("  {:<24} {}", status, record.url);
    }

    println!();
    println!(
        "{} {} links, {} ok, {} failing",
        "Summary:".bright_white().bold(),
        records.len(),
        ok.to_string().green(),
        (records.len() - ok).to_string().red()
    );
}
