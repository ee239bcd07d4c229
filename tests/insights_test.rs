// ABOUTME: Unit tests for weekly insight generation
// ABOUTME: Covers volume band boundaries, consistency remarks, goal echo, and threshold validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use tracker_core::{TrackerError, WeekData};
use tracker_intelligence::config::{ConsistencyThresholds, VolumeThresholds};
use tracker_intelligence::{
    insight_lines, ConfigError, ConsistencyBand, InsightConfig, InsightGenerator, InsightType,
    VolumeBand,
};

#[test]
fn test_volume_band_boundaries() {
    let thresholds = VolumeThresholds::default();

    let cases = [
        (0.0, VolumeBand::NoActivity),
        (0.5, VolumeBand::GreatStart),
        (59.99, VolumeBand::GreatStart),
        (60.0, VolumeBand::GoodPace),
        (149.99, VolumeBand::GoodPace),
        (150.0, VolumeBand::Excellent),
        (299.99, VolumeBand::Excellent),
        (300.0, VolumeBand::Outstanding),
        (1000.0, VolumeBand::Outstanding),
    ];

    for (total, expected) in cases {
        assert_eq!(
            VolumeBand::from_total(total, &thresholds),
            expected,
            "total {total}"
        );
    }
}

#[test]
fn test_consistency_requires_positive_min_and_max() {
    let thresholds = ConsistencyThresholds::default();

    assert_eq!(ConsistencyBand::from_range(60.0, 0.0, &thresholds), None);
    assert_eq!(ConsistencyBand::from_range(0.0, 0.0, &thresholds), None);
}

#[test]
fn test_consistency_band_boundaries() {
    let thresholds = ConsistencyThresholds::default();

    let cases = [
        (34.0, 30.0, ConsistencyBand::VeryConsistent),
        (35.0, 30.0, ConsistencyBand::SomeVariety),
        (44.0, 30.0, ConsistencyBand::SomeVariety),
        (45.0, 30.0, ConsistencyBand::WideRange),
    ];

    for (max, min, expected) in cases {
        assert_eq!(
            ConsistencyBand::from_range(max, min, &thresholds),
            Some(expected),
            "max {max} min {min}"
        );
    }
}

#[test]
fn test_sample_week_gets_excellent_band_without_consistency_remark() {
    let lines = insight_lines(170.0, 60.0, 0.0, "Run 150 minutes");

    assert_eq!(
        lines,
        vec![
            "Excellent work! You logged 170.00 minutes this week.",
            "You're maintaining great fitness levels.",
            "Consider varying your training intensity next week.",
            "Your goal was: Run 150 minutes",
            "Keep pushing toward that goal next week!",
        ]
    );
}

#[test]
fn test_all_zero_week() {
    let lines = insight_lines(0.0, 0.0, 0.0, "Start running");

    assert_eq!(lines[0], "It looks like you didn't run this week.");
    assert_eq!(
        lines[1],
        "Next week, try to get moving! Even short runs count!"
    );
    assert_eq!(lines[2], "Your goal was: Start running");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_very_consistent_week() {
    let week = WeekData::new([30.0, 30.0, 32.0, 31.0, 30.0, 33.0, 34.0]).unwrap();
    let insights = InsightGenerator::new().generate_for_summary(&week.summary(), "Stay steady");

    let types: Vec<InsightType> = insights.iter().map(|i| i.insight_type).collect();
    assert_eq!(
        types,
        vec![
            InsightType::Volume,
            InsightType::Consistency,
            InsightType::Goal
        ]
    );
    assert_eq!(
        insights[0].lines[0],
        "Excellent work! You logged 220.00 minutes this week."
    );
    assert_eq!(
        insights[1].lines,
        vec!["Your workouts were very consistent this week - great!"]
    );
}

#[test]
fn test_wide_range_remark_spans_two_lines() {
    let lines = insight_lines(100.0, 40.0, 5.0, "goal");

    assert!(lines.contains(&"Nice effort! You got in 100.00 minutes of running.".to_owned()));
    assert!(lines.contains(&"You had quite a range in workout times. Consider".to_owned()));
    assert!(lines.contains(&"building a more structured training plan.".to_owned()));
}

#[test]
fn test_great_start_and_outstanding_messages() {
    let short = insight_lines(45.5, 20.0, 2.0, "g");
    assert_eq!(short[0], "You ran a total of 45.50 minutes this week.");
    assert_eq!(short[1], "That's a great start! Try to increase your volume");
    assert_eq!(short[2], "by 10% next week for better fitness gains.");

    let long = insight_lines(420.0, 70.0, 50.0, "g");
    assert_eq!(
        long[0],
        "Outstanding dedication! You ran 420.00 minutes this week."
    );
    assert_eq!(
        long[1],
        "Make sure to balance hard workouts with proper recovery!"
    );
    assert_eq!(
        long[2],
        "You had quite a range in workout times. Consider"
    );
}

#[test]
fn test_goal_echoed_verbatim() {
    let goal = "  5K under 25:00 — with 100% effort!  ";
    let lines = insight_lines(10.0, 10.0, 0.0, goal);

    assert_eq!(lines[lines.len() - 2], format!("Your goal was: {goal}"));
}

#[test]
fn test_default_config_is_valid() {
    assert!(InsightConfig::default().validate().is_ok());
}

#[test]
fn test_config_rejects_unordered_thresholds() {
    let mut config = InsightConfig::default();
    config.volume.good_pace_max = 50.0;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
    assert!(matches!(
        InsightGenerator::with_config(config),
        Err(TrackerError::Config(message)) if message.contains("volume thresholds")
    ));
}

#[test]
fn test_config_rejects_non_positive_thresholds() {
    let mut config = InsightConfig::default();
    config.consistency.very_consistent_max = 0.0;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_custom_thresholds_shift_bands() {
    let config = InsightConfig {
        volume: VolumeThresholds {
            great_start_max: 30.0,
            good_pace_max: 90.0,
            excellent_max: 120.0,
        },
        consistency: ConsistencyThresholds::default(),
    };
    let generator = InsightGenerator::with_config(config).unwrap();

    let insights = generator.generate(130.0, 20.0, 10.0, "goal");
    assert!(insights[0].lines[0].starts_with("Outstanding dedication!"));
}

#[test]
fn test_insights_serialize_with_snake_case_types() {
    let insights = InsightGenerator::new().generate(170.0, 60.0, 0.0, "goal");
    let json = serde_json::to_value(&insights).unwrap();

    assert_eq!(json[0]["insight_type"], "volume");
    assert_eq!(json[1]["insight_type"], "goal");
    assert_eq!(json[1]["lines"][0], "Your goal was: goal");
}
