//! Configuration for the life statistics calculation.

/// Configuration for the life statistics calculation
///
/// The defaults reproduce the canonical assumptions: an 80-year lifespan
/// (4160 weeks), 8 hours of sleep per day, a 70 bpm resting heart rate,
/// 16 breaths per minute, and 91.25-day seasons.
#[derive(Debug, Clone)]
pub struct LifeStatsConfig {
    /// Assumed lifespan in weeks (80 years x 52)
    pub lifespan_weeks: i64,
    /// Average hours of sleep per day
    pub sleep_hours_per_day: u32,
    /// Average resting heart rate in beats per minute
    pub resting_heart_rate_bpm: u32,
    /// Average breaths per minute
    pub breaths_per_minute: u32,
    /// Average length of a season in days
    pub days_per_season: f64,
}

impl Default for LifeStatsConfig {
    fn default() -> Self {
        Self {
            lifespan_weeks: 4160,
            sleep_hours_per_day: 8,
            resting_heart_rate_bpm: 70,
            breaths_per_minute: 16,
            days_per_season: 91.25,
        }
    }
}
