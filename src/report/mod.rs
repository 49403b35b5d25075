//! Plain-text rendering of the week grid and the summary report
//!
//! This module turns computed statistics into a terminal-friendly week
//! grid (one row per year of the assumed lifespan) and a multi-section
//! narrative summary.

use itertools::Itertools;

use crate::context::{ContextStats, LIFETIME_ACQUAINTANCES};
use crate::models::{LifeStats, WeekStatus};
use crate::utils::format_number;

/// Weeks rendered per grid row
pub const WEEKS_PER_ROW: usize = 52;

/// Cell glyph for a week already lived
const PAST_CELL: char = '█';
/// Cell glyph for the current week
const CURRENT_CELL: char = '◆';
/// Cell glyph for a week in the potential future
const FUTURE_CELL: char = '·';

/// Render the life-in-weeks grid
///
/// One glyph per week of the assumed lifespan, 52 weeks per row, followed
/// by a legend line.
#[must_use]
pub fn render_week_grid(stats: &LifeStats) -> String {
    let mut grid = String::new();
    let rows = (0..stats.total_weeks).chunks(WEEKS_PER_ROW);
    for row in &rows {
        for week_index in row {
            grid.push(match stats.week_status(week_index) {
                WeekStatus::Past => PAST_CELL,
                WeekStatus::Current => CURRENT_CELL,
                WeekStatus::Future => FUTURE_CELL,
            });
        }
        grid.push('\n');
    }
    grid.push('\n');
    grid.push_str(&format!(
        "{PAST_CELL} Past   {CURRENT_CELL} Present   {FUTURE_CELL} Future"
    ));
    grid
}

/// Describe a single week cell
///
/// Week indices are zero-based; the annotation numbers them from one.
#[must_use]
pub fn week_annotation(stats: &LifeStats, week_index: i64) -> String {
    let label = match stats.week_status(week_index) {
        WeekStatus::Past => "A week from your past",
        WeekStatus::Current => "Your current week",
        WeekStatus::Future => "A week in your potential future",
    };
    format!("Week {}: {}", week_index + 1, label)
}

/// Generate the narrative summary report
///
/// Four sections: life highlights, societal context, cosmic perspective,
/// and the natural world.
#[must_use]
pub fn generate_summary(stats: &LifeStats, context: &ContextStats) -> String {
    let mut summary = String::new();

    summary.push_str("Life highlights:\n");
    summary.push_str(&format!(
        "  You've lived {} weeks, which is {}% of a full life.\n",
        format_number(stats.weeks_lived),
        stats.percentage_lived
    ));
    summary.push_str(&format!(
        "  That's {} days of experience and approximately {} seasons observed.\n",
        format_number(stats.days_lived),
        format_number(stats.seasons)
    ));
    summary.push_str(&format!(
        "  Your heart has beaten approximately {} times.\n",
        format_number(stats.heartbeats)
    ));
    summary.push_str(&format!(
        "  You've taken around {} breaths and slept about {} hours.\n",
        format_number(stats.breaths),
        format_number(stats.hours_slept)
    ));

    summary.push_str("\nSocietal context:\n");
    summary.push_str(&format!(
        "  During your lifetime, humanity's population has grown from {} to over 8 billion people.\n",
        format_number(context.population_at_birth)
    ));
    summary.push_str(&format!(
        "  The average person will meet around {} people in their lifetime. You've likely already met approximately {} individuals.\n",
        format_number(LIFETIME_ACQUAINTANCES),
        format_number(context.people_met)
    ));
    summary.push_str(&format!(
        "  Since your birth, humanity has collectively experienced approximately {} births and {} deaths.\n",
        format_number(context.births_witnessed),
        format_number(context.deaths_witnessed)
    ));

    summary.push_str("\nCosmic perspective:\n");
    summary.push_str(&format!(
        "  Since your birth, Earth has traveled approximately {} kilometers around the Sun.\n",
        format_number(context.solar_distance_km)
    ));
    summary.push_str(&format!(
        "  Your entire lifespan is just {:.10}% of the universe's age.\n",
        context.universe_age_fraction_pct
    ));
    summary.push_str(&format!(
        "  During your lifetime, the solar system has moved about {} kilometers through the Milky Way galaxy.\n",
        format_number(context.galactic_distance_km)
    ));

    summary.push_str("\nNatural world:\n");
    summary.push_str(&format!(
        "  You've experienced approximately {} lunar cycles and {} trips around the Sun.\n",
        format_number(context.lunar_cycles),
        format_number(context.solar_orbits)
    ));
    summary.push_str(&format!(
        "  A giant sequoia can live over 3,000 years. Your current age is {:.2}% of its potential lifespan.\n",
        context.sequoia_fraction_pct
    ));

    summary
}
