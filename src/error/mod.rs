//! Error handling for the life statistics calculation.

use chrono::{NaiveDate, NaiveDateTime};

/// Errors that can occur when validating calculation input
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The supplied birthdate string is not a valid calendar date
    #[error("Invalid birthdate '{0}': expected an ISO-8601 date (YYYY-MM-DD)")]
    InvalidDate(String),

    /// The supplied reference instant string could not be parsed
    #[error("Invalid reference instant '{0}': expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidReference(String),

    /// The birthdate lies after the reference instant
    #[error("Birthdate {birth_date} is after the reference instant {reference}")]
    FutureBirthDate {
        /// The offending birthdate
        birth_date: NaiveDate,
        /// The reference instant the calculation was evaluated against
        reference: NaiveDateTime,
    },
}

/// Alias for Result with the crate's `Error`
pub type Result<T> = std::result::Result<T, Error>;
