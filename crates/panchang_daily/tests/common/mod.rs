//! Deterministic oracles for assembler and generator tests.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use panchang_ephem::{EphemError, Ephemeris, Longitudes, ObserverConfig, SunEvent};

/// Moon 12.2° ahead of the Sun per day since 2000-01-01: a 30-day tithi
/// cycle with both events at fixed local times.
pub struct Stub;

impl Ephemeris for Stub {
    fn longitudes(&self, instant: &DateTime<Utc>) -> Result<Longitudes, EphemError> {
        let days = (instant.timestamp() - 946_684_800) as f64 / 86_400.0;
        let sun = days * 0.9856;
        let moon = sun + days * 12.2;
        Ok(Longitudes::new(sun, moon))
    }

    fn sun_events(
        &self,
        date: NaiveDate,
        observer: &ObserverConfig,
    ) -> Result<Vec<SunEvent>, EphemError> {
        let rise = observer.local_time_utc(date, 6, 15)? + TimeDelta::seconds(30);
        let set = observer.local_time_utc(date, 18, 5)?;
        Ok(vec![
            SunEvent {
                instant: rise,
                is_sunrise: true,
            },
            SunEvent {
                instant: set,
                is_sunrise: false,
            },
        ])
    }
}

/// Every query fails.
pub struct Failing;

impl Ephemeris for Failing {
    fn longitudes(&self, _: &DateTime<Utc>) -> Result<Longitudes, EphemError> {
        Err(EphemError::Unavailable("offline".into()))
    }

    fn sun_events(&self, _: NaiveDate, _: &ObserverConfig) -> Result<Vec<SunEvent>, EphemError> {
        Err(EphemError::Unavailable("offline".into()))
    }
}

/// Panics on the given date, behaves like [`Stub`] otherwise.
pub struct PanicsOn(pub NaiveDate);

impl Ephemeris for PanicsOn {
    fn longitudes(&self, instant: &DateTime<Utc>) -> Result<Longitudes, EphemError> {
        Stub.longitudes(instant)
    }

    fn sun_events(
        &self,
        date: NaiveDate,
        observer: &ObserverConfig,
    ) -> Result<Vec<SunEvent>, EphemError> {
        if date == self.0 {
            panic!("almanac blew up on {date}");
        }
        Stub.sun_events(date, observer)
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
