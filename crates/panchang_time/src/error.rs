//! Error types for time conversions.

/// Errors from Julian Date ↔ UTC conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The Julian Date was NaN or infinite.
    #[error("non-finite Julian Date")]
    NonFinite,
    /// The Julian Date cannot be represented as a UTC instant.
    #[error("Julian Date {jd} is outside the representable UTC range")]
    OutOfRange {
        /// The rejected Julian Date.
        jd: f64,
    },
}
