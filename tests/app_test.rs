// ABOUTME: End-to-end tests for an interactive tracker session over in-memory buffers
// ABOUTME: Drives the full welcome, collection, summary, and insight flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use running_tracker::app::{run_session, SessionOutcome};
use running_tracker::{InsightGenerator, TrackerError, TrackerResult};
use tracker_intelligence::InsightType;

fn session(input: &str) -> (TrackerResult<SessionOutcome>, String) {
    let mut out = Vec::new();
    let result = run_session(input.as_bytes(), &mut out, &InsightGenerator::new());
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_sample_week_session() {
    let (result, out) = session("Run 150 minutes this week\n30\n0\n45\n20\n0\n60\n15\n");
    let outcome = result.unwrap();

    assert_eq!(outcome.goal, "Run 150 minutes this week");
    assert!((outcome.week.total() - 170.0).abs() < 1e-9);
    assert!(!outcome
        .insights
        .iter()
        .any(|i| i.insight_type == InsightType::Consistency));

    assert!(out.contains("Total Minutes Run This Week:   170.00 minutes"));
    assert!(out.contains("Average Minutes Per Day:       24.29 minutes"));
    assert!(out.contains("Longest Workout:               60.00 minutes"));
    assert!(out.contains("Shortest Workout:              0.00 minutes"));
    assert!(out.contains("Excellent work! You logged 170.00 minutes this week."));
    assert!(out.contains("Your goal was: Run 150 minutes this week"));
    assert!(!out.contains("quite a range"));
}

#[test]
fn test_all_zero_session() {
    let (result, out) = session("Just start\n0 0 0 0 0 0 0\n");

    assert!(result.is_ok());
    assert!(out.contains("It looks like you didn't run this week."));
    assert!(!out.contains("consistent"));
    assert!(!out.contains("variety"));
    assert!(!out.contains("quite a range"));
}

#[test]
fn test_session_with_rejected_input() {
    let (result, out) = session("goal\nten\n-10\n10\n10 11\n12\n13\n14\n12\n");
    let outcome = result.unwrap();

    assert_eq!(
        outcome.week.values(),
        &[10.0, 10.0, 11.0, 12.0, 13.0, 14.0, 12.0]
    );
    assert!(out.contains("Error: Please enter a valid number."));
    assert!(out.contains("Error: Please enter a non-negative value."));
    assert!(out.contains("Your workouts were very consistent this week - great!"));
}

#[test]
fn test_session_layout_order() {
    let (result, out) = session("goal\n1 2 3 4 5 6 7\n");
    assert!(result.is_ok());

    let goal_prompt = out.find("Your goal: ").unwrap();
    let instructions = out
        .find("Enter your running workout time (in minutes) for each day.")
        .unwrap();
    let monday = out.find("Monday: ").unwrap();
    let summary = out.find("Weekly Running Analysis Summary").unwrap();

    assert!(goal_prompt < instructions);
    assert!(instructions < monday);
    assert!(monday < summary);
    assert!(out.trim_end().ends_with(&"=".repeat(49)));
}

#[test]
fn test_session_ends_early_without_report() {
    let (result, out) = session("goal\n10\n20\n");

    assert!(matches!(result, Err(TrackerError::InputClosed { .. })));
    assert!(!out.contains("Weekly Running Analysis Summary"));
}

#[test]
fn test_session_survives_invalid_utf8_input() {
    let mut out = Vec::new();
    let outcome = run_session(
        &b"goal\n\xff\xfe\n1 2 3 4 5 6 7\n"[..],
        &mut out,
        &InsightGenerator::new(),
    )
    .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!((outcome.week.total() - 28.0).abs() < f64::EPSILON);
    assert!(out.contains("Error: Please enter a valid number."));
    assert!(out.contains("Thanks for using Running Tracker!"));
}
