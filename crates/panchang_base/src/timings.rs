//! Inauspicious and auspicious periods of the day.
//!
//! Fixed clock-time tables keyed by weekday; they do not follow the actual
//! sunrise.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const RAHU_KALAM: [&str; 7] = [
    "07:30–09:00",
    "15:00–16:30",
    "12:00–13:30",
    "13:30–15:00",
    "10:30–12:00",
    "09:00–10:30",
    "16:30–18:00",
];

const YAMA_GANDAM: [&str; 7] = [
    "06:00–07:30",
    "10:30–12:00",
    "09:00–10:30",
    "06:00–07:30",
    "15:00–16:30",
    "12:00–13:30",
    "13:30–15:00",
];

const KULIGAI: [&str; 7] = [
    "15:00–16:30",
    "12:00–13:30",
    "07:30–09:00",
    "10:30–12:00",
    "09:00–10:30",
    "06:00–07:30",
    "07:30–09:00",
];

pub const NALLA_NERAM_MORNING: &str = "07:15–08:15";
pub const NALLA_NERAM_EVENING: &str = "16:45–17:45";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NallaNeram {
    pub morning: &'static str,
    pub evening: &'static str,
}

/// Rahu kalam, yama gandam, kuligai and nalla neram for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecialTimings {
    pub rahu_kalam: &'static str,
    pub yama_gandam: &'static str,
    pub kuligai: &'static str,
    pub nalla_neram: NallaNeram,
}

pub fn special_timings(date: NaiveDate) -> SpecialTimings {
    let w = date.weekday().num_days_from_monday() as usize;
    SpecialTimings {
        rahu_kalam: RAHU_KALAM[w],
        yama_gandam: YAMA_GANDAM[w],
        kuligai: KULIGAI[w],
        nalla_neram: NallaNeram {
            morning: NALLA_NERAM_MORNING,
            evening: NALLA_NERAM_EVENING,
        },
    }
}
