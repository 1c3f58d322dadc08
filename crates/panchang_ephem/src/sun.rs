//! Low-precision solar theory.
//!
//! Geometric longitude from the mean longitude plus the equation of centre,
//! good to ~0.01°. The apparent right ascension/declination used by the
//! rise/set search adds the aberration/nutation correction and the
//! obliquity of date.
//!
//! Source: Meeus, _Astronomical Algorithms_ (2nd ed.), ch. 22 and 25.

/// Geometric ecliptic longitude of the Sun, mean equinox of date, [0, 360).
///
/// `t` is Julian centuries of TT since J2000.0.
pub fn sun_longitude_of_date_deg(t: f64) -> f64 {
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    (l0 + c).rem_euclid(360.0)
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439_291_1 - 0.013_004_2 * t - 1.64e-7 * t * t + 5.04e-7 * t * t * t
}

/// Apparent geocentric right ascension and declination of the Sun, degrees.
///
/// Returns `(ra_deg, dec_deg)` with RA in [0, 360).
pub fn sun_apparent_ra_dec_deg(t: f64) -> (f64, f64) {
    let omega = (125.04 - 1934.136 * t).to_radians();
    let lambda = (sun_longitude_of_date_deg(t) - 0.005_69 - 0.004_78 * omega.sin()).to_radians();
    let eps = (mean_obliquity_deg(t) + 0.002_56 * omega.cos()).to_radians();
    let ra = (eps.cos() * lambda.sin()).atan2(lambda.cos());
    let dec = (eps.sin() * lambda.sin()).asin();
    (ra.to_degrees().rem_euclid(360.0), dec.to_degrees())
}
