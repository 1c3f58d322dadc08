//! Whole-year generation.

use std::panic::{self, AssertUnwindSafe};

use chrono::NaiveDate;
use panchang_ephem::Ephemeris;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::day::DayAssembler;
use crate::error::DailyError;
use crate::record::DayRecord;

/// Every civil date of `year`, January 1 through December 31.
pub fn days_of_year(year: i32) -> Result<Vec<NaiveDate>, DailyError> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(DailyError::InvalidYear(year))?;
    let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(DailyError::InvalidYear(year))?;
    Ok(first.iter_days().take_while(|d| *d <= last).collect())
}

/// Build one day, replacing a panic anywhere in assembly with the
/// all-defaults record.
fn build_guarded<E: Ephemeris>(assembler: &DayAssembler<E>, date: NaiveDate) -> DayRecord {
    match panic::catch_unwind(AssertUnwindSafe(|| assembler.build(date))) {
        Ok(record) => record,
        Err(_) => {
            warn!(%date, "day assembly panicked, using default record");
            DayRecord::fallback(date)
        }
    }
}

/// One record per day of `year`, in date order.
pub fn generate_year<E: Ephemeris>(
    assembler: &DayAssembler<E>,
    year: i32,
) -> Result<Vec<DayRecord>, DailyError> {
    let days = days_of_year(year)?;
    info!(year, days = days.len(), "generating year");
    Ok(days
        .into_iter()
        .map(|date| build_guarded(assembler, date))
        .collect())
}

/// Same output as [`generate_year`], days computed on the rayon pool.
pub fn generate_year_parallel<E: Ephemeris>(
    assembler: &DayAssembler<E>,
    year: i32,
) -> Result<Vec<DayRecord>, DailyError> {
    let days = days_of_year(year)?;
    info!(year, days = days.len(), "generating year in parallel");
    Ok(days
        .into_par_iter()
        .map(|date| build_guarded(assembler, date))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_and_common_years() {
        assert_eq!(days_of_year(2024).unwrap().len(), 366);
        assert_eq!(days_of_year(2025).unwrap().len(), 365);
        assert_eq!(days_of_year(1900).unwrap().len(), 365);
        assert_eq!(days_of_year(2000).unwrap().len(), 366);
    }

    #[test]
    fn first_and_last() {
        let days = days_of_year(2026).unwrap();
        assert_eq!(days[0].to_string(), "2026-01-01");
        assert_eq!(days[days.len() - 1].to_string(), "2026-12-31");
    }

    #[test]
    fn out_of_range_year() {
        assert!(matches!(
            days_of_year(i32::MAX),
            Err(DailyError::InvalidYear(_))
        ));
    }
}
