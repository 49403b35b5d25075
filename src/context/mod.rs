//! Contextual reference tables and derived figures
//!
//! This module holds the static reference data (world population by year,
//! global daily birth and death rates, astronomical constants) and the
//! `ContextStats` record derived from a `LifeStats`. The tables are
//! immutable configuration data with no dynamic update path.

use serde::{Deserialize, Serialize};

use crate::models::LifeStats;

/// World population estimates by year, in billions
///
/// Ordered oldest to newest; nearest-year lookups scan left to right and
/// keep the first-seen entry on a tie.
pub const POPULATION_BY_YEAR: [(i32, f64); 9] = [
    (1950, 2.5),
    (1960, 3.0),
    (1970, 3.7),
    (1980, 4.4),
    (1990, 5.3),
    (2000, 6.1),
    (2010, 6.9),
    (2020, 7.8),
    (2025, 8.1),
];

/// Current world population, in whole persons
pub const CURRENT_WORLD_POPULATION: i64 = 8_000_000_000;
/// Approximate global births per day (as of 2023)
pub const BIRTHS_PER_DAY: i64 = 385_000;
/// Approximate global deaths per day (as of 2023)
pub const DEATHS_PER_DAY: i64 = 166_000;
/// People the average person meets in a lifetime
pub const LIFETIME_ACQUAINTANCES: i64 = 80_000;
/// Distance Earth travels around the Sun per day, in kilometers
pub const SOLAR_ORBIT_KM_PER_DAY: i64 = 1_600_000;
/// Distance the solar system drifts through the galaxy per hour, in kilometers
pub const GALACTIC_DRIFT_KM_PER_HOUR: i64 = 828_000;
/// Length of a lunar cycle in days
pub const LUNAR_CYCLE_DAYS: f64 = 29.53;
/// Mean length of a year in days
pub const DAYS_PER_YEAR: f64 = 365.25;
/// Potential lifespan of a giant sequoia, in years
pub const SEQUOIA_LIFESPAN_YEARS: f64 = 3000.0;
/// Age of the universe, in years
pub const UNIVERSE_AGE_YEARS: f64 = 13_800_000_000.0;
/// Assumed human lifespan, in years
pub const ASSUMED_LIFESPAN_YEARS: f64 = 80.0;

/// Look up the world population nearest to a given year
///
/// Scans the table left to right and keeps the entry with the smallest
/// absolute distance; on a tie the first-seen entry wins. Returns whole
/// persons.
#[must_use]
pub fn population_at_year(year: i32) -> i64 {
    let mut closest = POPULATION_BY_YEAR[0];
    for entry in POPULATION_BY_YEAR.iter().copied().skip(1) {
        if (entry.0 - year).abs() < (closest.0 - year).abs() {
            closest = entry;
        }
    }
    (closest.1 * 1e9).round() as i64
}

/// Contextual figures derived purely from a `LifeStats` record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextStats {
    /// World population in the birth year, in whole persons
    pub population_at_birth: i64,
    /// Population growth between the birth year and today
    pub population_growth: i64,
    /// Estimated people already met
    pub people_met: i64,
    /// Global births since the birthdate
    pub births_witnessed: i64,
    /// Global deaths since the birthdate
    pub deaths_witnessed: i64,
    /// Kilometers traveled around the Sun since birth
    pub solar_distance_km: i64,
    /// The assumed lifespan as a percentage of the universe's age
    pub universe_age_fraction_pct: f64,
    /// Kilometers the solar system has drifted through the galaxy since birth
    pub galactic_distance_km: i64,
    /// Lunar cycles experienced
    pub lunar_cycles: i64,
    /// Complete orbits of the Sun
    pub solar_orbits: i64,
    /// Current age as a percentage of a giant sequoia's potential lifespan
    pub sequoia_fraction_pct: f64,
}

impl ContextStats {
    /// Derive the contextual figures from a computed `LifeStats`
    #[must_use]
    pub fn derive(stats: &LifeStats) -> Self {
        let days = stats.days_lived;
        let population_at_birth = population_at_year(stats.birth_year);
        let age_years = days as f64 / DAYS_PER_YEAR;

        Self {
            population_at_birth,
            population_growth: CURRENT_WORLD_POPULATION - population_at_birth,
            people_met: LIFETIME_ACQUAINTANCES * stats.percentage_lived / 100,
            births_witnessed: days * BIRTHS_PER_DAY,
            deaths_witnessed: days * DEATHS_PER_DAY,
            solar_distance_km: days * SOLAR_ORBIT_KM_PER_DAY,
            universe_age_fraction_pct: ASSUMED_LIFESPAN_YEARS / UNIVERSE_AGE_YEARS * 100.0,
            galactic_distance_km: days * 24 * GALACTIC_DRIFT_KM_PER_HOUR,
            lunar_cycles: (days as f64 / LUNAR_CYCLE_DAYS).round() as i64,
            solar_orbits: age_years.floor() as i64,
            sequoia_fraction_pct: age_years / SEQUOIA_LIFESPAN_YEARS * 100.0,
        }
    }
}
