//! Tithi, paksha and nakshatra of a civil day.
//!
//! The elements are sampled once per day at local sunrise (06:00 local when
//! the day has no sunrise), so a tithi that ends mid-morning is still the
//! tithi of the day.

use chrono::{DateTime, NaiveDate, Utc};
use panchang_base::{
    Paksha, clamp_nakshatra, clamp_tithi, elongation_deg, nakshatra_from_longitude,
    tithi_from_elongation,
};
use panchang_ephem::{Ephemeris, Longitudes, ObserverConfig};
use tracing::{debug, warn};

use crate::error::DailyError;
use crate::outcome::Outcome;
use crate::sun_times::resolve_events;

/// Local hour used when no sunrise is available.
pub const FALLBACK_SAMPLE_HOUR: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TithiNakshatra {
    pub tithi: u8,
    pub paksha: Paksha,
    pub nakshatra: u8,
}

impl Default for TithiNakshatra {
    fn default() -> Self {
        Self {
            tithi: 1,
            paksha: Paksha::Shukla,
            nakshatra: 1,
        }
    }
}

impl TithiNakshatra {
    pub fn from_longitudes(lon: &Longitudes) -> Self {
        let tithi = tithi_from_elongation(elongation_deg(lon.moon_deg, lon.sun_deg));
        Self {
            tithi,
            paksha: Paksha::from_tithi(tithi),
            nakshatra: nakshatra_from_longitude(lon.moon_deg),
        }
    }

    /// Force both numbers into range and re-derive the paksha.
    pub fn clamped(self) -> Self {
        let tithi = clamp_tithi(i64::from(self.tithi));
        Self {
            tithi,
            paksha: Paksha::from_tithi(tithi),
            nakshatra: clamp_nakshatra(i64::from(self.nakshatra)),
        }
    }
}

/// The instant the day's elements are sampled at.
///
/// Uses the day's last sunrise; an oracle failure or a day without sunrise
/// falls back to 06:00 local.
pub fn sample_instant<E: Ephemeris>(
    oracle: &E,
    observer: &ObserverConfig,
    date: NaiveDate,
) -> Result<DateTime<Utc>, DailyError> {
    match oracle.sun_events(date, observer) {
        Ok(events) => {
            if let (Some(sunrise), _) = resolve_events(&events) {
                return Ok(sunrise);
            }
            debug!(%date, "no sunrise, sampling at 06:00 local");
        }
        Err(e) => debug!(%date, error = %e, "sun events unavailable, sampling at 06:00 local"),
    }
    Ok(observer.local_time_utc(date, FALLBACK_SAMPLE_HOUR, 0)?)
}

pub fn try_compute<E: Ephemeris>(
    oracle: &E,
    observer: &ObserverConfig,
    date: NaiveDate,
) -> Result<TithiNakshatra, DailyError> {
    let instant = sample_instant(oracle, observer, date)?;
    let lon = oracle.longitudes(&instant)?;
    Ok(TithiNakshatra::from_longitudes(&lon))
}

/// Elements for `date`, or tithi 1 / Shukla / nakshatra 1 on oracle failure.
pub fn compute<E: Ephemeris>(
    oracle: &E,
    observer: &ObserverConfig,
    date: NaiveDate,
) -> Outcome<TithiNakshatra> {
    let outcome = Outcome::from_result(
        try_compute(oracle, observer, date),
        TithiNakshatra::default,
    );
    if let Some(reason) = outcome.reason() {
        warn!(%date, reason, "using default tithi/nakshatra");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::TimeZone;
    use panchang_ephem::{EphemError, SunEvent};

    use super::*;

    /// Fixed longitudes; sun events as configured; records every query.
    struct Almanac {
        events: Result<Vec<SunEvent>, EphemError>,
        queried: Mutex<Vec<DateTime<Utc>>>,
    }

    impl Almanac {
        fn new(events: Result<Vec<SunEvent>, EphemError>) -> Self {
            Self {
                events,
                queried: Mutex::new(Vec::new()),
            }
        }

        fn queried(&self) -> Vec<DateTime<Utc>> {
            self.queried.lock().unwrap().clone()
        }
    }

    impl Ephemeris for Almanac {
        fn longitudes(&self, instant: &DateTime<Utc>) -> Result<Longitudes, EphemError> {
            self.queried.lock().unwrap().push(*instant);
            Ok(Longitudes::new(10.0, 100.5))
        }

        fn sun_events(
            &self,
            _: NaiveDate,
            _: &ObserverConfig,
        ) -> Result<Vec<SunEvent>, EphemError> {
            self.events.clone()
        }
    }

    fn utc(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, h, m, 0).unwrap()
    }

    fn new_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn no_sunrise_samples_at_six_local() {
        let obs = ObserverConfig::default();
        let empty = Almanac::new(Ok(Vec::new()));
        assert_eq!(sample_instant(&empty, &obs, new_year()).unwrap(), utc(0, 30));

        let sunset_only = Almanac::new(Ok(vec![SunEvent {
            instant: utc(12, 40),
            is_sunrise: false,
        }]));
        assert_eq!(sample_instant(&sunset_only, &obs, new_year()).unwrap(), utc(0, 30));
    }

    #[test]
    fn sun_events_error_samples_at_six_local() {
        let obs = ObserverConfig::default();
        let down = Almanac::new(Err(EphemError::Unavailable("offline".into())));
        assert_eq!(sample_instant(&down, &obs, new_year()).unwrap(), utc(0, 30));
    }

    #[test]
    fn later_of_two_sunrises() {
        let rise = |instant| SunEvent {
            instant,
            is_sunrise: true,
        };
        let oracle = Almanac::new(Ok(vec![rise(utc(0, 55)), rise(utc(1, 5))]));
        let obs = ObserverConfig::default();
        assert_eq!(sample_instant(&oracle, &obs, new_year()).unwrap(), utc(1, 5));
    }

    #[test]
    fn longitudes_queried_at_sample_instant() {
        let obs = ObserverConfig::default();
        let events = vec![SunEvent {
            instant: utc(1, 2),
            is_sunrise: true,
        }];

        let oracle = Almanac::new(Ok(events));
        let elements = try_compute(&oracle, &obs, new_year()).unwrap();
        assert_eq!(oracle.queried(), vec![utc(1, 2)]);
        assert_eq!(elements.tithi, 8);
        assert_eq!(elements.nakshatra, 8);

        let fallback = Almanac::new(Ok(Vec::new()));
        assert!(!compute(&fallback, &obs, new_year()).is_fallback());
        assert_eq!(fallback.queried(), vec![utc(0, 30)]);
    }

    #[test]
    fn full_moon_in_pushya() {
        let t = TithiNakshatra::from_longitudes(&Longitudes::new(280.0, 100.5));
        assert_eq!(t.tithi, 16);
        assert_eq!(t.paksha, Paksha::Krishna);
        assert_eq!(t.nakshatra, 8);
    }

    #[test]
    fn wrap_around_elongation() {
        let t = TithiNakshatra::from_longitudes(&Longitudes::new(355.0, 5.0));
        assert_eq!(t.tithi, 1);
        assert_eq!(t.paksha, Paksha::Shukla);
        assert_eq!(t.nakshatra, 1);
    }

    #[test]
    fn clamped_repairs_paksha() {
        let t = TithiNakshatra {
            tithi: 40,
            paksha: Paksha::Shukla,
            nakshatra: 0,
        }
        .clamped();
        assert_eq!(t.tithi, 30);
        assert_eq!(t.paksha, Paksha::Krishna);
        assert_eq!(t.nakshatra, 1);
    }

    #[test]
    fn default_is_first_tithi() {
        let d = TithiNakshatra::default();
        assert_eq!((d.tithi, d.paksha, d.nakshatra), (1, Paksha::Shukla, 1));
    }
}
