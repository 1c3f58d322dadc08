//! Sunrise and sunset as local clock strings.

use chrono::{DateTime, NaiveDate, Utc};
use panchang_ephem::{Ephemeris, ObserverConfig, SunEvent};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::DailyError;
use crate::outcome::Outcome;

pub const DEFAULT_SUNRISE: &str = "06:00 AM";
pub const DEFAULT_SUNSET: &str = "06:00 PM";

/// 12-hour local clock format, e.g. `"06:12 AM"`.
pub const CLOCK_FORMAT: &str = "%I:%M %p";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: String,
    pub sunset: String,
}

impl Default for SunTimes {
    fn default() -> Self {
        Self {
            sunrise: DEFAULT_SUNRISE.to_string(),
            sunset: DEFAULT_SUNSET.to_string(),
        }
    }
}

/// Last sunrise and last sunset among the day's events.
pub fn resolve_events(events: &[SunEvent]) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    let mut sunrise = None;
    let mut sunset = None;
    for e in events {
        if e.is_sunrise {
            sunrise = Some(e.instant);
        } else {
            sunset = Some(e.instant);
        }
    }
    (sunrise, sunset)
}

/// Format an instant on the observer's wall clock.
pub fn format_local(observer: &ObserverConfig, instant: &DateTime<Utc>) -> String {
    observer.to_local(instant).format(CLOCK_FORMAT).to_string()
}

pub fn try_sun_times<E: Ephemeris>(
    oracle: &E,
    observer: &ObserverConfig,
    date: NaiveDate,
) -> Result<SunTimes, DailyError> {
    let events = oracle.sun_events(date, observer)?;
    let (sunrise, sunset) = resolve_events(&events);
    let sunrise = sunrise.ok_or(DailyError::MissingSunEvent("sunrise"))?;
    let sunset = sunset.ok_or(DailyError::MissingSunEvent("sunset"))?;
    Ok(SunTimes {
        sunrise: format_local(observer, &sunrise),
        sunset: format_local(observer, &sunset),
    })
}

/// Sun times for `date`, or ("06:00 AM", "06:00 PM") when either event is
/// unavailable.
pub fn sun_times<E: Ephemeris>(
    oracle: &E,
    observer: &ObserverConfig,
    date: NaiveDate,
) -> Outcome<SunTimes> {
    let outcome = Outcome::from_result(try_sun_times(oracle, observer, date), SunTimes::default);
    if let Some(reason) = outcome.reason() {
        warn!(%date, reason, "using default sunrise/sunset");
    }
    outcome
}
