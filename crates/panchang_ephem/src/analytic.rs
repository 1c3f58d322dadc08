//! Offline ephemeris built on the analytic Sun/Moon theories.

use chrono::{DateTime, NaiveDate, Utc};
use panchang_time::{
    centuries_since_j2000, general_precession_deg, jd_from_utc, jd_utc_to_tt, utc_from_jd,
};
use tracing::debug;

use crate::error::EphemError;
use crate::moon::moon_longitude_of_date_deg;
use crate::observer::ObserverConfig;
use crate::oracle::{Ephemeris, Longitudes, SunEvent};
use crate::riseset::{
    RiseSetConfig, RiseSetEvent, RiseSetResult, approximate_local_noon_jd, compute_rise_set,
};
use crate::sun::sun_longitude_of_date_deg;

/// Analytic [`Ephemeris`]: no kernel files, no network.
///
/// Longitudes are referred to the J2000 ecliptic by removing general
/// precession from the of-date values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalyticEphemeris {
    riseset: RiseSetConfig,
}

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn longitudes(&self, instant: &DateTime<Utc>) -> Result<Longitudes, EphemError> {
        let t = centuries_since_j2000(jd_utc_to_tt(jd_from_utc(instant)));
        let precession = general_precession_deg(t);
        let sun = sun_longitude_of_date_deg(t) - precession;
        let moon = moon_longitude_of_date_deg(t) - precession;
        let lon = Longitudes::new(sun, moon);
        if !lon.is_finite() {
            return Err(EphemError::NonFinite("Sun/Moon longitude"));
        }
        Ok(lon)
    }

    fn sun_events(
        &self,
        date: NaiveDate,
        observer: &ObserverConfig,
    ) -> Result<Vec<SunEvent>, EphemError> {
        observer.location.validate()?;
        let (start, end) = observer.day_window(date)?;

        let midnight_ut = date
            .and_hms_opt(0, 0, 0)
            .ok_or(EphemError::DateOutOfRange(date))?
            .and_utc();
        let noon = approximate_local_noon_jd(
            jd_from_utc(&midnight_ut),
            observer.location.longitude_deg,
        );

        let mut events = Vec::with_capacity(2);
        for kind in [RiseSetEvent::Sunrise, RiseSetEvent::Sunset] {
            match compute_rise_set(&observer.location, kind, noon, &self.riseset)? {
                RiseSetResult::Event { jd_utc, event } => {
                    let instant = utc_from_jd(jd_utc)?;
                    if instant >= start && instant < end {
                        events.push(SunEvent {
                            instant,
                            is_sunrise: event.is_rising(),
                        });
                    } else {
                        debug!(%date, ?event, %instant, "sun event outside local day");
                    }
                }
                other => debug!(%date, ?kind, result = ?other, "no horizon crossing"),
            }
        }
        events.sort_by_key(|e| e.instant);
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::observer::GeoLocation;

    #[test]
    fn longitudes_in_range() {
        let eph = AnalyticEphemeris::new();
        let t = Utc.with_ymd_and_hms(2025, 1, 1, 0, 30, 0).unwrap();
        let lon = eph.longitudes(&t).unwrap();
        assert!((0.0..360.0).contains(&lon.sun_deg));
        assert!((0.0..360.0).contains(&lon.moon_deg));
    }

    #[test]
    fn sun_near_vernal_point_at_equinox() {
        // March equinox 2025: 2025-03-20 09:01 UTC
        let eph = AnalyticEphemeris::new();
        let t = Utc.with_ymd_and_hms(2025, 3, 20, 9, 1, 0).unwrap();
        let sun = eph.longitudes(&t).unwrap().sun_deg;
        // Of-date longitude is 0°; J2000 frame lags by ~0.35°.
        let off = if sun > 180.0 { sun - 360.0 } else { sun };
        assert!((off + 0.35).abs() < 0.05, "sun = {sun}");
    }

    #[test]
    fn chennai_has_sunrise_then_sunset() {
        let eph = AnalyticEphemeris::new();
        let date = NaiveDate::from_ymd_opt(2025, 4, 14).unwrap();
        let events = eph.sun_events(date, &ObserverConfig::default()).unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[0].is_sunrise);
        assert!(!events[1].is_sunrise);
        assert!(events[0].instant < events[1].instant);
    }

    #[test]
    fn polar_night_has_no_events() {
        let eph = AnalyticEphemeris::new();
        let obs = ObserverConfig::new(
            GeoLocation::new(78.2, 15.6, 0.0),
            chrono_tz::Arctic::Longyearbyen,
        );
        let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
        assert!(eph.sun_events(date, &obs).unwrap().is_empty());
    }

    #[test]
    fn invalid_location_propagates() {
        let eph = AnalyticEphemeris::new();
        let obs = ObserverConfig::new(GeoLocation::new(f64::NAN, 0.0, 0.0), chrono_tz::UTC);
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(matches!(
            eph.sun_events(date, &obs),
            Err(EphemError::InvalidLocation(_))
        ));
    }
}
