//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `quake_watch` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Ctrl-C handling and user-facing output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tokio_util::sync::CancellationToken;

use quake_watch::initialization::init_logger_with;
use quake_watch::{run_watch, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // HOME_LATITUDE / HOME_LONGITUDE are usually kept in .env
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Interrupt received, stopping after the current update");
            ctrl_c.cancel();
        }
    });

    let once = config.once;
    match run_watch(config, cancel).await {
        Ok(report) => {
            if once {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report.final_snapshot)
                        .context("Failed to format sensor state")?
                );
            } else {
                println!(
                    "Stopped after {} update{} ({} failed) in {:.1}s",
                    report.cycles,
                    if report.cycles == 1 { "" } else { "s" },
                    report.failed_cycles,
                    report.elapsed_seconds
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("quake_watch error: {:#}", e);
            process::exit(1);
        }
    }
}
