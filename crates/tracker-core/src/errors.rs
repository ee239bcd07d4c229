// ABOUTME: Error types for workout input validation and console I/O
// ABOUTME: Separates recoverable per-value rejections from fatal input failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tracker Error Types
//!
//! `TrackerError` covers everything that can go wrong while building a week
//! of workout data. The value-level variants are recoverable: the collector
//! reports them and asks again. `InputClosed` and `Io` end the run.

use std::io;
use thiserror::Error;

/// Errors raised while collecting or validating weekly workout data
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Input token could not be parsed as a number
    #[error("Invalid number: {input}")]
    InvalidNumber {
        /// The rejected token, as typed
        input: String,
    },

    /// Workout minutes cannot be negative
    #[error("Negative value not allowed: {value}")]
    NegativeValue {
        /// The rejected value
        value: f64,
    },

    /// NaN and infinities are not workout durations
    #[error("Value must be a finite number: {value}")]
    NonFiniteValue {
        /// The rejected value
        value: f64,
    },

    /// A week holds exactly one value per weekday
    #[error("Expected {expected} daily values, got {actual}")]
    WrongLength {
        /// Required number of values
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// Standard input reached end-of-file before collection finished
    #[error("Input closed while waiting for {waiting_for}")]
    InputClosed {
        /// What the program was prompting for
        waiting_for: String,
    },

    /// Underlying console I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid threshold or logging configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TrackerError {
    /// Create an "invalid number" error
    #[must_use]
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
        }
    }

    /// Create an "input closed" error
    #[must_use]
    pub fn input_closed(waiting_for: impl Into<String>) -> Self {
        Self::InputClosed {
            waiting_for: waiting_for.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the collector should re-prompt instead of aborting
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumber { .. } | Self::NegativeValue { .. } | Self::NonFiniteValue { .. }
        )
    }

    /// Message shown to the user at the prompt for a rejected value
    ///
    /// Non-finite values are reported the same way as unparseable tokens.
    #[must_use]
    pub fn prompt_message(&self) -> String {
        match self {
            Self::InvalidNumber { .. } | Self::NonFiniteValue { .. } => {
                "Error: Please enter a valid number.".to_owned()
            }
            Self::NegativeValue { .. } => "Error: Please enter a non-negative value.".to_owned(),
            other => format!("Error: {other}"),
        }
    }
}

/// Result type alias for convenience
pub type TrackerResult<T> = Result<T, TrackerError>;
