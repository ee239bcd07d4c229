// ABOUTME: Interactive session orchestration for the running tracker
// ABOUTME: Welcomes the runner, collects goal and week, then prints the summary and insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! One complete run of the tracker, from welcome banner to closing banner.

use crate::collector::DataCollector;
use crate::formatters::{write_collection_instructions, write_report, write_welcome};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};
use tracker_core::{TrackerResult, WeekData};
use tracker_intelligence::{Insight, InsightGenerator};

/// What a finished session collected and reported
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// The runner's goal, verbatim
    pub goal: String,
    /// Seven days of workout minutes
    pub week: WeekData,
    /// Insights printed in the report
    pub insights: Vec<Insight>,
}

/// Run one session reading from `input` and printing to `out`
///
/// # Errors
///
/// Returns `InputClosed` if input ends before the goal and all seven days
/// are entered, or `Io` if the console cannot be read or written.
#[instrument(skip_all)]
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    generator: &InsightGenerator,
) -> TrackerResult<SessionOutcome> {
    let mut collector = DataCollector::new(input);

    write_welcome(out)?;
    let goal = collector.read_goal()?;

    write_collection_instructions(out)?;
    let week = collector.collect_week(out)?;

    let summary = week.summary();
    match serde_json::to_string(&summary) {
        Ok(json) => info!(summary = %json, "Week collected"),
        Err(error) => warn!(%error, "Could not serialize weekly summary"),
    }

    let insights = generator.generate_for_summary(&summary, &goal);
    match serde_json::to_string(&insights) {
        Ok(json) => debug!(insights = %json, "Insights selected"),
        Err(error) => warn!(%error, "Could not serialize insights"),
    }
    write_report(out, &week, &insights)?;

    info!(insights = insights.len(), "Report printed");
    Ok(SessionOutcome {
        goal,
        week,
        insights,
    })
}
