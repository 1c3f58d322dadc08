//! Observer location and civil timezone.
//!
//! The generator works for one fixed observer. The configuration is an
//! immutable value handed to the oracle and the calculators; nothing reads
//! it from global state.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::EphemError;

/// Latitude of Chennai, degrees north.
pub const DEFAULT_LATITUDE_DEG: f64 = 13.0827;

/// Longitude of Chennai, degrees east.
pub const DEFAULT_LONGITUDE_DEG: f64 = 80.2707;

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Kolkata;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    pub fn validate(&self) -> Result<(), EphemError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(EphemError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(EphemError::InvalidLocation(
                "longitude must be in [-180, 180]",
            ));
        }
        if !self.altitude_m.is_finite() {
            return Err(EphemError::InvalidLocation("altitude must be finite"));
        }
        Ok(())
    }
}

/// Fixed observer: where sunrise is seen and which wall clock formats it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    pub location: GeoLocation,
    pub timezone: Tz,
}

impl Default for ObserverConfig {
    /// Chennai, `Asia/Kolkata`.
    fn default() -> Self {
        Self {
            location: GeoLocation::new(DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG, 0.0),
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl ObserverConfig {
    pub fn new(location: GeoLocation, timezone: Tz) -> Self {
        Self { location, timezone }
    }

    /// IANA identifier of the timezone, e.g. `"Asia/Kolkata"`.
    pub fn timezone_name(&self) -> &'static str {
        self.timezone.name()
    }

    /// Resolve a local wall-clock time to UTC.
    ///
    /// Ambiguous times (DST fold) resolve to the earlier instant.
    pub fn local_to_utc(&self, local: NaiveDateTime) -> Result<DateTime<Utc>, EphemError> {
        match self.timezone.from_local_datetime(&local) {
            LocalResult::Single(t) => Ok(t.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
            LocalResult::None => Err(EphemError::NonexistentLocalTime {
                time: local,
                timezone: self.timezone_name(),
            }),
        }
    }

    /// UTC instant of `hour:minute` local time on `date`.
    pub fn local_time_utc(
        &self,
        date: NaiveDate,
        hour: u32,
        minute: u32,
    ) -> Result<DateTime<Utc>, EphemError> {
        let local = date
            .and_hms_opt(hour, minute, 0)
            .ok_or(EphemError::DateOutOfRange(date))?;
        self.local_to_utc(local)
    }

    /// The civil day `[00:00, 24:00)` of `date` as a half-open UTC window.
    pub fn day_window(
        &self,
        date: NaiveDate,
    ) -> Result<(DateTime<Utc>, DateTime<Utc>), EphemError> {
        let next = date.succ_opt().ok_or(EphemError::DateOutOfRange(date))?;
        Ok((
            self.local_time_utc(date, 0, 0)?,
            self.local_time_utc(next, 0, 0)?,
        ))
    }

    /// Convert a UTC instant to the observer's wall clock.
    pub fn to_local(&self, instant: &DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.timezone)
    }
}
