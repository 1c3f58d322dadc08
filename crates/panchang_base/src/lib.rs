//! Pure calendar math for the Tamil panchang.
//!
//! This crate provides:
//! - Tithi and paksha from the Moon-Sun elongation
//! - Nakshatra from the Moon's longitude
//! - Tamil month/day/weekday from a Gregorian date
//! - The festival rule engine with per-year overrides
//! - Weekday-based rahu kalam, yama gandam, kuligai and nalla neram
//!
//! Nothing here touches an ephemeris: every function is a pure map from
//! angles or dates.

pub mod festival;
pub mod nakshatra;
pub mod tamil;
pub mod timings;
pub mod tithi;
pub mod util;

pub use festival::{
    FESTIVAL_OVERRIDES, FESTIVAL_RULES, FestivalContext, FestivalEngine, FestivalOverride,
    FestivalPredicate, FestivalRule,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_27, Nakshatra, clamp_nakshatra, nakshatra_from_longitude,
};
pub use tamil::{
    TAMIL_MONTH_BOUNDARIES, TAMIL_MONTHS, TAMIL_WEEKDAYS, TamilDate, TamilMonthBoundary,
    month_start, tamil_date, tamil_weekday,
};
pub use timings::{
    NALLA_NERAM_EVENING, NALLA_NERAM_MORNING, NallaNeram, SpecialTimings, special_timings,
};
pub use tithi::{
    Paksha, TITHI_COUNT, TITHI_SEGMENT_DEG, clamp_tithi, elongation_deg, tithi_from_elongation,
};
pub use util::normalize_360;
