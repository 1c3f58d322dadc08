//! The ephemeris oracle contract.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::EphemError;
use crate::observer::ObserverConfig;

/// Geocentric ecliptic longitudes of the Sun and Moon, degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Longitudes {
    pub sun_deg: f64,
    pub moon_deg: f64,
}

impl Longitudes {
    /// Normalize both longitudes into [0, 360).
    pub fn new(sun_deg: f64, moon_deg: f64) -> Self {
        Self {
            sun_deg: normalize_deg(sun_deg),
            moon_deg: normalize_deg(moon_deg),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.sun_deg.is_finite() && self.moon_deg.is_finite()
    }
}

fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if r >= 360.0 { 0.0 } else { r }
}

/// A sunrise or sunset crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunEvent {
    pub instant: DateTime<Utc>,
    pub is_sunrise: bool,
}

/// Source of Sun/Moon positions and solar horizon crossings.
///
/// Implementations must be side-effect free: the same query always yields the
/// same answer, so days can be computed in any order or concurrently.
pub trait Ephemeris: Send + Sync {
    /// Sun and Moon ecliptic longitude at `instant`.
    fn longitudes(&self, instant: &DateTime<Utc>) -> Result<Longitudes, EphemError>;

    /// Sunrise/sunset crossings within the observer's local civil day
    /// `[00:00, 24:00)` of `date`, in chronological order.
    fn sun_events(
        &self,
        date: NaiveDate,
        observer: &ObserverConfig,
    ) -> Result<Vec<SunEvent>, EphemError>;
}

impl<T: Ephemeris + ?Sized> Ephemeris for &T {
    fn longitudes(&self, instant: &DateTime<Utc>) -> Result<Longitudes, EphemError> {
        (**self).longitudes(instant)
    }

    fn sun_events(
        &self,
        date: NaiveDate,
        observer: &ObserverConfig,
    ) -> Result<Vec<SunEvent>, EphemError> {
        (**self).sun_events(date, observer)
    }
}
