//! Error types for day assembly and persistence.

use std::path::PathBuf;

use panchang_ephem::EphemError;

/// Errors surfaced by the fallible (`try_*`) operations and file I/O.
///
/// The assembler and year generator never return these for a single day;
/// they substitute documented defaults instead.
#[derive(Debug, thiserror::Error)]
pub enum DailyError {
    /// The ephemeris could not answer a query.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemError),

    /// The local day has no sunrise or sunset crossing.
    #[error("no {0} event in the local day")]
    MissingSunEvent(&'static str),

    /// The year has no representable January 1 or December 31.
    #[error("year {0} is outside the supported calendar range")]
    InvalidYear(i32),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
