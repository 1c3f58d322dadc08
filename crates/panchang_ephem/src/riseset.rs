//! Sunrise/sunset search.
//!
//! Iterative algorithm based on standard spherical astronomy formulas: start
//! from the local transit estimate, offset by the semi-diurnal arc, then
//! refine by recomputing the Sun's position at each estimate until the hour
//! angle correction drops below ~0.1 s.
//!
//! UT1 is taken equal to UTC; TT = UTC + 69.184 s for the solar theory.

use panchang_time::{centuries_since_j2000, gmst_deg, jd_utc_to_tt, local_sidereal_time_deg};

use crate::error::EphemError;
use crate::observer::GeoLocation;
use crate::sun::sun_apparent_ra_dec_deg;

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 8;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Sidereal rotation rate in degrees per solar day.
const SIDEREAL_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Mean Earth radius in meters (for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Which horizon crossing to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb appears above the horizon.
    Sunrise,
    /// Upper limb disappears below the horizon.
    Sunset,
}

impl RiseSetEvent {
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Configurable horizon parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Apply geometric dip for observer altitude. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Depression of the Sun's centre below the geometric horizon at the
    /// instant of sunrise/sunset, in degrees.
    ///
    /// `h0 = (refraction + semidiameter) / 60 + dip_deg`, with
    /// `dip = sqrt(2h / R)` radians.
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction && altitude_m > 0.0 {
            base + (2.0 * altitude_m / EARTH_RADIUS_M).sqrt().to_degrees()
        } else {
            base
        }
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given Julian Date (UTC).
    Event { jd_utc: f64, event: RiseSetEvent },
    /// Sun stays below the horizon (polar night).
    NeverRises,
    /// Sun stays above the horizon (midnight sun).
    NeverSets,
}

/// Approximate local solar noon (UTC JD) from the 0h UT JD of a date.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Wrap an angle into [-180, 180).
fn wrap_pm180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Sun's (hour angle, cos of target hour angle) at a UTC JD.
fn hour_angles(location: &GeoLocation, jd_utc: f64, h0_deg: f64) -> (f64, f64) {
    let t = centuries_since_j2000(jd_utc_to_tt(jd_utc));
    let (ra, dec) = sun_apparent_ra_dec_deg(t);
    let phi = location.latitude_deg.to_radians();
    let dec = dec.to_radians();
    let cos_h = (h0_deg.to_radians().sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    let lst = local_sidereal_time_deg(gmst_deg(jd_utc), location.longitude_deg);
    (wrap_pm180(lst - ra), cos_h)
}

/// Compute one sunrise or sunset near `jd_utc_noon`.
///
/// `jd_utc_noon` is the approximate local noon of the desired date, see
/// [`approximate_local_noon_jd`].
pub fn compute_rise_set(
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_utc_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, EphemError> {
    location.validate()?;
    if !jd_utc_noon.is_finite() {
        return Err(EphemError::NonFinite("noon Julian Date"));
    }
    let h0_deg = -config.horizon_depression_deg(location.altitude_m);

    let (ha_noon, cos_h0) = hour_angles(location, jd_utc_noon, h0_deg);
    if cos_h0 > 1.0 {
        return Ok(RiseSetResult::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(RiseSetResult::NeverSets);
    }

    let jd_transit = jd_utc_noon - ha_noon / SIDEREAL_RATE_DEG_PER_DAY;
    let semi_arc_days = cos_h0.acos().to_degrees() / SIDEREAL_RATE_DEG_PER_DAY;
    let mut jd_event = if event.is_rising() {
        jd_transit - semi_arc_days
    } else {
        jd_transit + semi_arc_days
    };

    for _ in 0..MAX_ITERATIONS {
        let (ha_actual, cos_h) = hour_angles(location, jd_event, h0_deg);
        if cos_h > 1.0 {
            return Ok(RiseSetResult::NeverRises);
        }
        if cos_h < -1.0 {
            return Ok(RiseSetResult::NeverSets);
        }
        let h_target = cos_h.acos().to_degrees();
        let ha_target = if event.is_rising() { -h_target } else { h_target };

        let correction = wrap_pm180(ha_target - ha_actual) / SIDEREAL_RATE_DEG_PER_DAY;
        jd_event += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            return Ok(RiseSetResult::Event {
                jd_utc: jd_event,
                event,
            });
        }
    }
    Err(EphemError::NoConvergence("sunrise/sunset refinement"))
}
