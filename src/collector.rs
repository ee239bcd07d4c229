// ABOUTME: Interactive collection of the weekly goal and seven daily workout durations
// ABOUTME: Reads whitespace-separated tokens and re-prompts on invalid or negative input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Collector
//!
//! Reads from any `BufRead` and prompts on any `Write`, so the same code
//! drives the real console and in-memory test buffers.
//!
//! Values are consumed token by token. Several numbers typed on one line fill
//! consecutive days. An unparseable token throws away the rest of its line;
//! a negative value is rejected on its own and later tokens still count.
//! Bytes that are not valid UTF-8 are decoded lossily, so they end up in a
//! token that fails to parse rather than aborting the run.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::{debug, warn};
use tracker_core::constants::week::{day_name, DAYS_PER_WEEK, WEEKDAYS};
use tracker_core::{TrackerError, TrackerResult, WeekData};

/// Parse one token as workout minutes
///
/// # Errors
///
/// Returns `InvalidNumber` for text that is not a number, `NonFiniteValue`
/// for NaN or infinity, and `NegativeValue` for values below zero.
pub fn parse_minutes(token: &str) -> TrackerResult<f64> {
    let value: f64 = token.parse().map_err(|_| TrackerError::invalid_number(token))?;

    if !value.is_finite() {
        return Err(TrackerError::NonFiniteValue { value });
    }
    if value < 0.0 {
        return Err(TrackerError::NegativeValue { value });
    }
    // "-0" passes the sign check; store it as plain zero
    Ok(value.abs())
}

/// Token-oriented reader for the goal line and daily values
#[derive(Debug)]
pub struct DataCollector<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> DataCollector<R> {
    /// Wrap an input source
    #[must_use]
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Read the free-text goal as one whole line
    ///
    /// Only the line terminator is removed; everything else is kept verbatim,
    /// except invalid UTF-8 which becomes U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns `InputClosed` at end of input, or `Io` if reading fails.
    pub fn read_goal(&mut self) -> TrackerResult<String> {
        let Some(line) = self.read_raw_line()? else {
            return Err(TrackerError::input_closed("running goal"));
        };

        let goal = line.trim_end_matches(['\r', '\n']).to_owned();
        debug!(goal.len = goal.len(), "Goal received");
        Ok(goal)
    }

    /// Prompt for each weekday until a valid value is entered
    ///
    /// # Errors
    ///
    /// Returns `InputClosed` if input ends before all seven days are filled,
    /// or `Io` if reading or writing fails. Invalid values are never errors
    /// here: they are reported on `out` and the day is asked again.
    pub fn collect_week<W: Write>(&mut self, out: &mut W) -> TrackerResult<WeekData> {
        let mut values = [0.0; DAYS_PER_WEEK];

        for (slot, &day) in values.iter_mut().zip(WEEKDAYS.iter()) {
            *slot = self.collect_day(day_name(day), out)?;
        }

        // Rest of the last line belongs to nobody
        self.pending.clear();
        WeekData::new(values)
    }

    fn collect_day<W: Write>(&mut self, day: &str, out: &mut W) -> TrackerResult<f64> {
        loop {
            write!(out, "{day}: ")?;
            out.flush()?;

            let token = self.next_token(day)?;
            match parse_minutes(&token) {
                Ok(minutes) => {
                    debug!(day, minutes, "Recorded workout");
                    return Ok(minutes);
                }
                Err(error) if error.is_recoverable() => {
                    debug!(day, input = %token, %error, "Rejected workout value");
                    writeln!(out, "{}", error.prompt_message())?;
                    if !matches!(error, TrackerError::NegativeValue { .. }) {
                        self.pending.clear();
                    }
                }
                Err(error) => return Err(error),
            }
        }
    }

    fn next_token(&mut self, waiting_for: &str) -> TrackerResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let Some(line) = self.read_raw_line()? else {
                warn!(waiting_for, "Input closed before the week was complete");
                return Err(TrackerError::input_closed(format!("{waiting_for} minutes")));
            };
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Next input line including its terminator, or `None` at end of input
    fn read_raw_line(&mut self) -> TrackerResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
