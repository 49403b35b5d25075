//! A Rust library for computing life-in-weeks statistics from a birthdate,
//! with contextual demographic, astronomical, and ecological figures and
//! plain-text rendering of the week grid and summary report.

pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod report;
pub mod stats;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::LifeStatsConfig;
pub use error::{Error, Result};
pub use models::{LifeStats, WeekStatus};

// Calculation entry points
pub use stats::{compute, compute_from_str, compute_with_config, parse_reference};

// Contextual figures and reference tables
pub use context::{ContextStats, population_at_year};

// Text rendering
pub use report::{generate_summary, render_week_grid, week_annotation};

// Utility functions
pub use utils::format_number;
