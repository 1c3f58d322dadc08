//! Day-by-day panchang generation.
//!
//! This crate provides:
//! - The tithi/nakshatra calculator sampled at local sunrise
//! - The sunrise/sunset resolver with clock-string formatting
//! - [`DayAssembler`]: one complete [`DayRecord`] per civil day, with
//!   per-step fallbacks
//! - Year generation, sequential or on the rayon pool
//! - Mobile and month-grouped views and their JSON files

pub mod calculator;
pub mod day;
pub mod error;
pub mod io;
pub mod outcome;
pub mod record;
pub mod sun_times;
pub mod views;
pub mod year;

pub use calculator::{TithiNakshatra, compute, sample_instant, try_compute};
pub use day::{DayAssembler, DayReport};
pub use error::DailyError;
pub use io::{
    ViewsOutcome, ViewsWritten, YearInput, mobile_file_name, monthly_file_name,
    read_year_json, rebuild_views, to_json_string, write_json, write_views, write_year,
    year_file_name,
};
pub use outcome::Outcome;
pub use record::{DayRecord, TamilFields};
pub use sun_times::{
    DEFAULT_SUNRISE, DEFAULT_SUNSET, SunTimes, format_local, resolve_events, sun_times,
    try_sun_times,
};
pub use views::{
    MobileEntry, MonthGroup, MonthKeyed, MonthViews, UNKNOWN_KEY, mobile_entry, mobile_view,
    month_views,
};
pub use year::{days_of_year, generate_year, generate_year_parallel};
