//! The life statistics calculator
//!
//! This module contains the pure calculation mapping a birthdate and a
//! reference instant to a `LifeStats` record. The calculation is fully
//! deterministic given its two inputs and has no side effects.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::LifeStatsConfig;
use crate::error::{Error, Result};
use crate::models::LifeStats;

/// Milliseconds in a day
const MS_PER_DAY: i64 = 86_400_000;
/// Milliseconds in a week
const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;

/// Compute life statistics from an ISO-8601 birthdate string
///
/// # Arguments
/// * `birthdate` - Birthdate in `YYYY-MM-DD` form
/// * `reference` - The instant treated as "now"
///
/// # Errors
/// Returns `Error::InvalidDate` if the string does not parse to a valid
/// calendar date, or `Error::FutureBirthDate` if the birthdate lies after
/// the reference instant.
pub fn compute_from_str(birthdate: &str, reference: NaiveDateTime) -> Result<LifeStats> {
    let birth_date = NaiveDate::parse_from_str(birthdate, "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(birthdate.to_string()))?;
    compute(birth_date, reference)
}

/// Compute life statistics with the default configuration
///
/// # Errors
/// Returns `Error::FutureBirthDate` if the birthdate lies after the
/// reference instant.
pub fn compute(birth_date: NaiveDate, reference: NaiveDateTime) -> Result<LifeStats> {
    compute_with_config(birth_date, reference, &LifeStatsConfig::default())
}

/// Compute life statistics with an explicit configuration
///
/// Birth is anchored at midnight of the birthdate. `days_lived` and
/// `weeks_lived` are two independent floor divisions of the same elapsed
/// millisecond duration; neither is derived from the other.
///
/// # Errors
/// Returns `Error::FutureBirthDate` if the birthdate lies after the
/// reference instant.
pub fn compute_with_config(
    birth_date: NaiveDate,
    reference: NaiveDateTime,
    config: &LifeStatsConfig,
) -> Result<LifeStats> {
    let birth_instant = birth_date.and_time(NaiveTime::MIN);
    let elapsed_ms = (reference - birth_instant).num_milliseconds();
    if elapsed_ms < 0 {
        return Err(Error::FutureBirthDate {
            birth_date,
            reference,
        });
    }

    let days_lived = elapsed_ms / MS_PER_DAY;
    let weeks_lived = elapsed_ms / MS_PER_WEEK;

    let total_weeks = config.lifespan_weeks;
    let percentage_lived = (weeks_lived as f64 / total_weeks as f64 * 100.0).round() as i64;

    Ok(LifeStats {
        weeks_lived,
        total_weeks,
        weeks_remaining: total_weeks - weeks_lived,
        percentage_lived,
        days_lived,
        hours_slept: days_lived * i64::from(config.sleep_hours_per_day),
        heartbeats: days_lived * 24 * 60 * i64::from(config.resting_heart_rate_bpm),
        breaths: days_lived * 24 * 60 * i64::from(config.breaths_per_minute),
        seasons: (days_lived as f64 / config.days_per_season).floor() as i64,
        birth_year: birth_date.year(),
    })
}

/// Parse a reference instant from a string
///
/// Accepts an RFC 3339 timestamp (normalized to UTC), a naive
/// `YYYY-MM-DDTHH:MM:SS` timestamp, or a plain `YYYY-MM-DD` date anchored
/// at midnight.
///
/// # Errors
/// Returns `Error::InvalidReference` if none of the accepted forms parse.
pub fn parse_reference(raw: &str) -> Result<NaiveDateTime> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.naive_utc());
    }
    if let Ok(instant) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(instant);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| Error::InvalidReference(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_parse_reference_forms() {
        let expected = midnight(2024, 1, 1);
        assert_eq!(parse_reference("2024-01-01").unwrap(), expected);
        assert_eq!(parse_reference("2024-01-01T00:00:00").unwrap(), expected);
        assert_eq!(parse_reference("2024-01-01T00:00:00Z").unwrap(), expected);
        assert!(parse_reference("01/01/2024").is_err());
    }

    #[test]
    fn test_days_and_weeks_are_independent_divisions() {
        // 10 days elapsed: one full week plus three days
        let stats = compute(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            midnight(2024, 1, 11),
        )
        .unwrap();
        assert_eq!(stats.days_lived, 10);
        assert_eq!(stats.weeks_lived, 1);
    }

    #[test]
    fn test_partial_day_floors_to_zero() {
        let reference = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let stats = compute(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), reference).unwrap();
        assert_eq!(stats.days_lived, 0);
        assert_eq!(stats.weeks_lived, 0);
    }
}
