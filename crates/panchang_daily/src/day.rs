//! Day assembly: every panchang element of one civil day.
//!
//! The four steps (sun times, tithi/nakshatra, Tamil date, festivals) are
//! independent. An oracle failure in one step falls back to that step's
//! default without affecting the others, so [`DayAssembler::build`] always
//! returns a complete record.

use chrono::NaiveDate;
use panchang_base::{FestivalContext, FestivalEngine, TamilDate, tamil_date};
use panchang_ephem::{Ephemeris, ObserverConfig};
use tracing::debug;

use crate::calculator::{self, TithiNakshatra};
use crate::outcome::Outcome;
use crate::record::DayRecord;
use crate::sun_times::{self, SunTimes};

/// Per-step results of assembling one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayReport {
    pub date: NaiveDate,
    pub sun_times: Outcome<SunTimes>,
    pub elements: Outcome<TithiNakshatra>,
    pub tamil: Outcome<TamilDate>,
    pub festivals: Outcome<Vec<&'static str>>,
}

impl DayReport {
    /// Names and reasons of the steps that fell back to defaults.
    pub fn fallbacks(&self) -> Vec<(&'static str, &str)> {
        [
            ("sun_times", self.sun_times.reason()),
            ("tithi_nakshatra", self.elements.reason()),
            ("tamil_date", self.tamil.reason()),
            ("festivals", self.festivals.reason()),
        ]
        .into_iter()
        .filter_map(|(step, reason)| reason.map(|r| (step, r)))
        .collect()
    }

    pub fn into_record(self) -> DayRecord {
        let sun = self.sun_times.into_value();
        let elements = self.elements.into_value().clamped();
        DayRecord {
            date: self.date,
            tithi: elements.tithi,
            paksha: elements.paksha,
            nakshatra: elements.nakshatra,
            sunrise: sun.sunrise,
            sunset: sun.sunset,
            tamil: self.tamil.into_value().into(),
            festivals: self
                .festivals
                .into_value()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Builds [`DayRecord`]s from an ephemeris and a fixed observer.
#[derive(Debug, Clone)]
pub struct DayAssembler<E> {
    oracle: E,
    observer: ObserverConfig,
    festivals: FestivalEngine<'static>,
}

impl<E: Ephemeris> DayAssembler<E> {
    pub fn new(oracle: E, observer: ObserverConfig) -> Self {
        Self {
            oracle,
            observer,
            festivals: FestivalEngine::builtin(),
        }
    }

    pub fn with_festival_engine(mut self, festivals: FestivalEngine<'static>) -> Self {
        self.festivals = festivals;
        self
    }

    /// Run every step and keep the per-step outcomes.
    pub fn build_detailed(&self, date: NaiveDate) -> DayReport {
        let sun_times = sun_times::sun_times(&self.oracle, &self.observer, date);
        let elements = calculator::compute(&self.oracle, &self.observer, date);
        let tamil = tamil_date(date);

        let tn = elements.value().clamped();
        let ctx =
            FestivalContext::new(date, tn.tithi, tn.nakshatra, tn.paksha, Some(tamil.month));
        let festivals = self.festivals.evaluate(&ctx);

        DayReport {
            date,
            sun_times,
            elements,
            tamil: Outcome::Computed(tamil),
            festivals: Outcome::Computed(festivals),
        }
    }

    /// The day's record; never fails.
    pub fn build(&self, date: NaiveDate) -> DayRecord {
        let report = self.build_detailed(date);
        let record = report.into_record();
        debug!(
            %date,
            tithi = record.tithi,
            nakshatra = record.nakshatra,
            festivals = record.festivals.len(),
            "assembled day"
        );
        record
    }
}
