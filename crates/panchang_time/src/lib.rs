//! Time-scale helpers for the panchang generator.
//!
//! This crate provides:
//! - UTC instant ↔ Julian Date conversions
//! - A fixed TT − UTC offset for the low-precision solar/lunar theories
//! - Greenwich mean and local sidereal time
//! - General precession in ecliptic longitude

pub mod error;
pub mod julian;
pub mod precession;
pub mod sidereal;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, TT_MINUS_UTC_S, UNIX_EPOCH_JD,
    centuries_since_j2000, jd_from_utc, jd_utc_to_tt, utc_from_jd,
};
pub use precession::general_precession_deg;
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
