//! Handinger API command-line client
//!
//! This application translates command-line parameters into authenticated
//! GET requests against the Handinger scraping API and prints one result
//! record per job.

mod cli;
mod conversion;
mod core;
mod models;

use crate::cli::Cli;
use crate::core::client::HandingerClient;
use crate::core::config::Config;
use crate::core::dispatcher::process_jobs;
use crate::core::logging::init_logging;
use clap::Parser;
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration Error: {e:#}");
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config.log_level);
    debug!(base_url = %config.base_url, "configuration loaded");

    // Validate API key
    if !config.validate_api_key() {
        error!(
            "No API key configured; set {} or api.key in config.toml",
            crate::core::config::API_KEY_ENV
        );
        std::process::exit(1);
    }

    // Assemble the job list from the subcommand
    let jobs = match cli.command.into_jobs() {
        Ok(jobs) => jobs,
        Err(e) => {
            error!("Failed to assemble jobs: {e:#}");
            std::process::exit(1);
        }
    };
    debug!(count = jobs.len(), "processing jobs");

    let client = HandingerClient::new(config.api_key, config.base_url);

    match process_jobs(&client, &jobs, cli.continue_on_fail).await {
        Ok(records) => {
            let any_failed = records.iter().any(|record| !record.success);
            if let Err(e) = cli::print_records(&records, cli.pretty) {
                error!("Failed to print records: {e:#}");
                std::process::exit(1);
            }
            // Scripted callers detect partial failure without parsing output
            if any_failed {
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!("Batch failed: {e:#}");
            std::process::exit(1);
        }
    }
}
