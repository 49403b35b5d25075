//! Result models for the life statistics calculation
//!
//! This module contains the `LifeStats` record produced by the calculator
//! and the `WeekStatus` classification used when laying out the week grid.

use serde::{Deserialize, Serialize};

/// Classification of a single week cell relative to the weeks already lived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekStatus {
    /// A week that has already been lived
    Past,
    /// The week currently being lived
    Current,
    /// A week in the potential future
    Future,
}

/// Derived statistics for a single birthdate at a fixed reference instant
///
/// Constructed fresh on every calculation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeStats {
    /// Whole weeks elapsed since birth
    pub weeks_lived: i64,
    /// Assumed lifespan in weeks
    pub total_weeks: i64,
    /// Weeks left of the assumed lifespan (negative once exceeded)
    pub weeks_remaining: i64,
    /// Share of the assumed lifespan already lived, as a rounded integer
    /// percentage (may exceed 100)
    pub percentage_lived: i64,
    /// Whole days elapsed since birth
    pub days_lived: i64,
    /// Estimated hours spent asleep
    pub hours_slept: i64,
    /// Estimated heartbeats so far
    pub heartbeats: i64,
    /// Estimated breaths taken so far
    pub breaths: i64,
    /// Estimated seasons experienced
    pub seasons: i64,
    /// Calendar year of the birthdate
    pub birth_year: i32,
}

impl LifeStats {
    /// Classify a zero-based week index against the weeks already lived
    #[must_use]
    pub const fn week_status(&self, week_index: i64) -> WeekStatus {
        if week_index < self.weeks_lived {
            WeekStatus::Past
        } else if week_index == self.weeks_lived {
            WeekStatus::Current
        } else {
            WeekStatus::Future
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_status_classification() {
        let stats = LifeStats {
            weeks_lived: 10,
            total_weeks: 4160,
            weeks_remaining: 4150,
            percentage_lived: 0,
            days_lived: 70,
            hours_slept: 560,
            heartbeats: 7_056_000,
            breaths: 1_612_800,
            seasons: 0,
            birth_year: 2025,
        };

        assert_eq!(stats.week_status(0), WeekStatus::Past);
        assert_eq!(stats.week_status(9), WeekStatus::Past);
        assert_eq!(stats.week_status(10), WeekStatus::Current);
        assert_eq!(stats.week_status(11), WeekStatus::Future);
        assert_eq!(stats.week_status(4159), WeekStatus::Future);
    }
}
