//! Error types for ephemeris queries.

use chrono::{NaiveDate, NaiveDateTime};
use panchang_time::TimeError;

/// Errors from ephemeris and rise/set computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum EphemError {
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// A computed or supplied quantity was NaN or infinite.
    #[error("non-finite value: {0}")]
    NonFinite(&'static str),
    /// Iterative algorithm did not converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
    /// Local wall-clock time skipped by the timezone (DST gap).
    #[error("local time {time} does not exist in {timezone}")]
    NonexistentLocalTime {
        time: NaiveDateTime,
        timezone: &'static str,
    },
    /// Civil date at the edge of the supported calendar range.
    #[error("date out of supported range: {0}")]
    DateOutOfRange(NaiveDate),
    /// Error from Julian Date conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// An external ephemeris provider could not answer.
    #[error("ephemeris unavailable: {0}")]
    Unavailable(String),
}
