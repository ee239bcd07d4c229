// ABOUTME: Running Tracker CLI - interactive weekly running workout summary
// ABOUTME: Collects a goal and seven daily durations, then prints aggregates and insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Interactive session
//! running-tracker
//!
//! # Same session with debug logging on stderr
//! running-tracker --verbose
//!
//! # Scripted input
//! printf 'Run 150 minutes\n30 0 45 20 0 60 15\n' | running-tracker
//! ```

use anyhow::Result;
use clap::Parser;
use running_tracker::{app::run_session, logging, InsightGenerator, TrackerError};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "running-tracker",
    version,
    about = "Running Workout Time Tracker",
    long_about = "Interactive tool that collects a week of running workout minutes and prints a summary with personalized insights."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_from_env(cli.verbose)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match run_session(stdin.lock(), &mut stdout, &InsightGenerator::new()) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(TrackerError::InputClosed { waiting_for }) => {
            error!(%waiting_for, "Input ended early");
            writeln!(stdout)?;
            stdout.flush()?;
            eprintln!("Input ended before {waiting_for} was entered.");
            Ok(ExitCode::FAILURE)
        }
        Err(other) => Err(other.into()),
    }
}
