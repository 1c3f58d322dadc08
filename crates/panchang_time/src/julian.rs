//! Julian Date conversions for UTC instants.
//!
//! UT1 is taken equal to UTC and TT is UTC plus a fixed offset. Both
//! approximations are well below the whole-degree resolution the panchang
//! elements need (the Moon moves ~0.5″ per second).

use chrono::{DateTime, Utc};

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-Jan-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// TT − UTC in seconds: 32.184 s (TT − TAI) plus 37 leap seconds,
/// in force since 2017-Jan-01.
pub const TT_MINUS_UTC_S: f64 = 69.184;

/// Julian Date (UTC) of a UTC instant.
pub fn jd_from_utc(instant: &DateTime<Utc>) -> f64 {
    let seconds =
        instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) * 1.0e-9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// UTC instant for a Julian Date (UTC), rounded to the nearest nanosecond.
pub fn utc_from_jd(jd_utc: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd_utc.is_finite() {
        return Err(TimeError::NonFinite);
    }
    let seconds = (jd_utc - UNIX_EPOCH_JD) * SECONDS_PER_DAY;
    if seconds.abs() > 1.0e14 {
        return Err(TimeError::OutOfRange { jd: jd_utc });
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1.0e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos).ok_or(TimeError::OutOfRange { jd: jd_utc })
}

/// Shift a UTC Julian Date onto the TT scale.
pub fn jd_utc_to_tt(jd_utc: f64) -> f64 {
    jd_utc + TT_MINUS_UTC_S / SECONDS_PER_DAY
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
