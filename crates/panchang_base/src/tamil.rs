//! Tamil solar-month calendar.
//!
//! Each Tamil month starts on a fixed Gregorian date (an approximation of
//! the Sun's ingress into the next sign). The Tamil date of a day is the
//! latest month start on or before it, drawn from this year's and last
//! year's boundaries so that January dates land in மார்கழி or தை.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Tamil months in order, சித்திரை first.
pub const TAMIL_MONTHS: [&str; 12] = [
    "சித்திரை",
    "வைகாசி",
    "ஆனி",
    "ஆடி",
    "ஆவணி",
    "புரட்டாசி",
    "ஐப்பசி",
    "கார்த்திகை",
    "மார்கழி",
    "தை",
    "மாசி",
    "பங்குனி",
];

/// Tamil weekday names indexed Monday = 0.
pub const TAMIL_WEEKDAYS: [&str; 7] = [
    "திங்கள்",
    "செவ்வாய்",
    "புதன்",
    "வியாழன்",
    "வெள்ளி",
    "சனி",
    "ஞாயிறு",
];

/// Gregorian start date of a Tamil month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TamilMonthBoundary {
    pub month: &'static str,
    pub gregorian_month: u32,
    pub gregorian_day: u32,
}

impl TamilMonthBoundary {
    const fn new(month: &'static str, gregorian_month: u32, gregorian_day: u32) -> Self {
        Self {
            month,
            gregorian_month,
            gregorian_day,
        }
    }

    /// The boundary's start date in a Gregorian year.
    pub fn start_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.gregorian_month, self.gregorian_day)
    }
}

/// Approximate Gregorian start dates of the Tamil months.
pub const TAMIL_MONTH_BOUNDARIES: [TamilMonthBoundary; 12] = [
    TamilMonthBoundary::new("சித்திரை", 4, 14),
    TamilMonthBoundary::new("வைகாசி", 5, 15),
    TamilMonthBoundary::new("ஆனி", 6, 15),
    TamilMonthBoundary::new("ஆடி", 7, 16),
    TamilMonthBoundary::new("ஆவணி", 8, 16),
    TamilMonthBoundary::new("புரட்டாசி", 9, 16),
    TamilMonthBoundary::new("ஐப்பசி", 10, 17),
    TamilMonthBoundary::new("கார்த்திகை", 11, 16),
    TamilMonthBoundary::new("மார்கழி", 12, 16),
    TamilMonthBoundary::new("தை", 1, 14),
    TamilMonthBoundary::new("மாசி", 2, 13),
    TamilMonthBoundary::new("பங்குனி", 3, 14),
];

/// Tamil calendar position of a Gregorian day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TamilDate {
    /// 1-based day within the Tamil month.
    pub day: u32,
    pub month: &'static str,
    pub weekday: &'static str,
}

/// Tamil weekday name of a date.
pub fn tamil_weekday(date: NaiveDate) -> &'static str {
    TAMIL_WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

/// Tamil month containing `date` and the Gregorian date it started on.
///
/// Falls back to சித்திரை starting April 14 of `date`'s year when no
/// boundary precedes the date.
pub fn month_start(date: NaiveDate) -> (&'static str, NaiveDate) {
    let year = date.year();
    let latest = [year - 1, year]
        .into_iter()
        .flat_map(|y| {
            TAMIL_MONTH_BOUNDARIES
                .iter()
                .filter_map(move |b| b.start_in(y).map(|start| (b.month, start)))
        })
        .filter(|&(_, start)| start <= date)
        .max_by_key(|&(_, start)| start);

    latest.unwrap_or_else(|| {
        let april_14 = NaiveDate::from_ymd_opt(year, 4, 14).unwrap_or(date);
        (TAMIL_MONTHS[0], april_14)
    })
}

/// Map a Gregorian date into the Tamil month system.
pub fn tamil_date(date: NaiveDate) -> TamilDate {
    let (month, start) = month_start(date);
    let day = ((date - start).num_days() + 1).max(1);
    TamilDate {
        day: u32::try_from(day).unwrap_or(1),
        month,
        weekday: tamil_weekday(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn tables_agree() {
        for (b, name) in TAMIL_MONTH_BOUNDARIES.iter().zip(TAMIL_MONTHS) {
            assert_eq!(b.month, name);
        }
    }

    #[test]
    fn chithirai_first_day() {
        let t = tamil_date(d(2025, 4, 14));
        assert_eq!(t.month, "சித்திரை");
        assert_eq!(t.day, 1);
        assert_eq!(t.weekday, "திங்கள்");
    }

    #[test]
    fn day_before_chithirai_is_panguni() {
        let t = tamil_date(d(2025, 4, 13));
        assert_eq!(t.month, "பங்குனி");
        assert_eq!(t.day, 31);
        assert_eq!(t.weekday, "ஞாயிறு");
    }

    #[test]
    fn early_january_is_margazhi() {
        let (month, start) = month_start(d(2026, 1, 1));
        assert_eq!(month, "மார்கழி");
        assert_eq!(start, d(2025, 12, 16));
        assert_eq!(tamil_date(d(2026, 1, 1)).day, 17);
    }

    #[test]
    fn thai_starts_on_pongal() {
        let t = tamil_date(d(2026, 1, 14));
        assert_eq!(t.month, "தை");
        assert_eq!(t.day, 1);
    }

    #[test]
    fn leap_day_in_maasi() {
        let t = tamil_date(d(2024, 2, 29));
        assert_eq!(t.month, "மாசி");
        assert_eq!(t.day, 17);
    }

    #[test]
    fn weekday_table_monday_first() {
        // 2025-01-05 is a Sunday
        assert_eq!(tamil_weekday(d(2025, 1, 5)), "ஞாயிறு");
        assert_eq!(tamil_weekday(d(2025, 1, 6)), "திங்கள்");
    }
}
