// ABOUTME: Section writers for the weekly running report
// ABOUTME: Renders banners, aggregate summary, daily breakdown, insights, and closing text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, Write};
use tracker_core::constants::report::{
    CLOSING_TITLE_INDENT, PROGRAM_NAME, RULE_WIDTH, SUMMARY_LABEL_WIDTH,
};
use tracker_core::{WeekData, WeeklySummary};
use tracker_intelligence::{Insight, InsightType};

/// Left-pad `title` so it sits in the middle of a report rule
#[must_use]
pub fn centered(title: &str) -> String {
    let padding = RULE_WIDTH.saturating_sub(title.chars().count()) / 2;
    format!("{}{title}", " ".repeat(padding))
}

fn write_rule<W: Write>(out: &mut W, ch: char) -> io::Result<()> {
    writeln!(out, "{}", ch.to_string().repeat(RULE_WIDTH))
}

/// Title framed by `=` rules
///
/// # Errors
///
/// Returns any error from the underlying writer
pub fn write_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    write_framed(out, &centered(title))
}

fn write_framed<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    write_rule(out, '=')?;
    writeln!(out, "{line}")?;
    write_rule(out, '=')
}

/// Welcome banner, program description, and the goal prompt
///
/// The prompt is left without a newline and flushed so the cursor waits
/// after it.
///
/// # Errors
///
/// Returns any error from the underlying writer
pub fn write_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    write_banner(out, "Welcome to the Running Workout Time Tracker!")?;
    writeln!(out)?;
    writeln!(out, "This program will help you analyze your running")?;
    writeln!(out, "workout times for a week of training.")?;
    writeln!(out)?;
    writeln!(out, "What is your running goal for the week?")?;
    writeln!(out, "(Examples: 40 minutes average, 5K pace, etc.)")?;
    writeln!(out)?;
    write!(out, "Your goal: ")?;
    out.flush()
}

/// Instructions printed before the daily prompts
///
/// # Errors
///
/// Returns any error from the underlying writer
pub fn write_collection_instructions<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Enter your running workout time (in minutes) for each day.")?;
    writeln!(out, "(Enter 0 if you didn't run that day)")?;
    writeln!(out)
}

fn write_summary_line<W: Write>(out: &mut W, label: &str, minutes: f64) -> io::Result<()> {
    writeln!(out, "{label:<SUMMARY_LABEL_WIDTH$}{minutes:.2} minutes")
}

/// Summary banner and the four aggregates
///
/// # Errors
///
/// Returns any error from the underlying writer
pub fn write_summary<W: Write>(out: &mut W, summary: &WeeklySummary) -> io::Result<()> {
    write_banner(out, "Weekly Running Analysis Summary")?;
    writeln!(out)?;
    write_summary_line(out, "Total Minutes Run This Week:", summary.total)?;
    write_summary_line(out, "Average Minutes Per Day:", summary.average)?;
    write_summary_line(out, "Longest Workout:", summary.max)?;
    write_summary_line(out, "Shortest Workout:", summary.min)?;
    writeln!(out)
}

/// One line per weekday between `-` rules
///
/// # Errors
///
/// Returns any error from the underlying writer
pub fn write_daily_breakdown<W: Write>(out: &mut W, week: &WeekData) -> io::Result<()> {
    write_rule(out, '-')?;
    writeln!(out, "Daily Breakdown:")?;
    write_rule(out, '-')?;
    for entry in week.daily_breakdown() {
        writeln!(out, "{entry}")?;
    }
    writeln!(out)
}

/// Insights banner followed by each insight's lines
///
/// The goal reminder is set apart by a blank line.
///
/// # Errors
///
/// Returns any error from the underlying writer
pub fn write_insights<W: Write>(out: &mut W, insights: &[Insight]) -> io::Result<()> {
    write_banner(out, "Personalized Insights")?;
    writeln!(out)?;
    for insight in insights {
        if insight.insight_type == InsightType::Goal {
            writeln!(out)?;
        }
        for line in &insight.lines {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Closing banner
///
/// # Errors
///
/// Returns any error from the underlying writer
pub fn write_closing<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    let title = format!("Thanks for using {PROGRAM_NAME}!");
    write_framed(out, &format!("{:CLOSING_TITLE_INDENT$}{title}", ""))?;
    writeln!(out)
}

/// Everything printed after collection: summary, breakdown, insights, closing
///
/// # Errors
///
/// Returns any error from the underlying writer
pub fn write_report<W: Write>(
    out: &mut W,
    week: &WeekData,
    insights: &[Insight],
) -> io::Result<()> {
    writeln!(out)?;
    write_summary(out, &week.summary())?;
    write_daily_breakdown(out, week)?;
    write_insights(out, insights)?;
    write_closing(out)?;
    out.flush()
}
