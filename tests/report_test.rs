//! Tests for the week grid and summary rendering

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use life_weeks::{
    ContextStats, compute_from_str, generate_summary, render_week_grid, week_annotation,
};

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_time(NaiveTime::MIN)
}

#[test]
fn test_grid_shape() {
    let stats = compute_from_str("2000-01-01", midnight(2024, 1, 1)).unwrap();
    let grid = render_week_grid(&stats);

    let rows: Vec<&str> = grid
        .lines()
        .filter(|line| line.chars().all(|c| matches!(c, '█' | '◆' | '·')) && !line.is_empty())
        .collect();
    assert_eq!(rows.len(), 80);
    assert!(rows.iter().all(|row| row.chars().count() == 52));
}

#[test]
fn test_grid_cell_counts() {
    let stats = compute_from_str("2000-01-01", midnight(2024, 1, 1)).unwrap();
    let grid = render_week_grid(&stats);

    // Legend contributes one glyph of each kind
    let past = grid.chars().filter(|&c| c == '█').count();
    let current = grid.chars().filter(|&c| c == '◆').count();
    let future = grid.chars().filter(|&c| c == '·').count();

    assert_eq!(past, 1252 + 1);
    assert_eq!(current, 1 + 1);
    assert_eq!(future, (4160 - 1252 - 1) + 1);
}

#[test]
fn test_grid_legend() {
    let stats = compute_from_str("2000-01-01", midnight(2024, 1, 1)).unwrap();
    let grid = render_week_grid(&stats);
    assert!(grid.contains("Past"));
    assert!(grid.contains("Present"));
    assert!(grid.contains("Future"));
}

#[test]
fn test_week_annotations() {
    let stats = compute_from_str("2000-01-01", midnight(2024, 1, 1)).unwrap();

    assert_eq!(week_annotation(&stats, 0), "Week 1: A week from your past");
    assert_eq!(week_annotation(&stats, 1252), "Week 1253: Your current week");
    assert_eq!(
        week_annotation(&stats, 4000),
        "Week 4001: A week in your potential future"
    );
}

#[test]
fn test_summary_contents() {
    let stats = compute_from_str("2000-01-01", midnight(2024, 1, 1)).unwrap();
    let context = ContextStats::derive(&stats);
    let summary = generate_summary(&stats, &context);

    assert!(summary.contains("Life highlights:"));
    assert!(summary.contains("Societal context:"));
    assert!(summary.contains("Cosmic perspective:"));
    assert!(summary.contains("Natural world:"));

    assert!(summary.contains("You've lived 1,252 weeks, which is 30% of a full life."));
    assert!(summary.contains("Your heart has beaten approximately 883,612,800 times."));
    assert!(summary.contains("grown from 6,100,000,000 to over 8 billion people"));
    assert!(summary.contains("0.0000005797% of the universe's age"));
    assert!(summary.contains("297 lunar cycles and 24 trips around the Sun"));
    assert!(summary.contains("0.80% of its potential lifespan"));
}
