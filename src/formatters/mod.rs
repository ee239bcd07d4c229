// ABOUTME: Console output formatting for the running tracker
// ABOUTME: Re-exports report section writers used by the interactive session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Console Output Formatting
//!
//! Every writer takes `&mut impl Write`, so the same layout is printed to the
//! terminal and captured in tests.

/// Banners, summary, daily breakdown, and insight sections
pub mod report;

pub use report::{
    centered, write_banner, write_closing, write_collection_instructions, write_daily_breakdown,
    write_insights, write_report, write_summary, write_welcome,
};
