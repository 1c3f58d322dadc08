//! Greenwich mean sidereal time and local sidereal time.
//!
//! Needed to turn the Sun's right ascension into an hour angle for the
//! sunrise/sunset search. Callers pass UT Julian Dates (UT1 ≈ UTC here).
//!
//! Source: IAU 1982 GMST expression in degrees (Meeus, _Astronomical
//! Algorithms_, eq. 12.4). Public domain.

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
///
/// θ₀ = 280.46061837 + 360.98564736629·d + 0.000387933·T² − T³/38710000
/// where d = JD − 2451545.0 and T = d / 36525.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = d / DAYS_PER_CENTURY;
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local sidereal time in degrees for an east-positive longitude, [0, 360).
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg + longitude_east_deg).rem_euclid(360.0)
}
