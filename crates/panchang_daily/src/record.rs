//! The persisted per-day record.

use chrono::NaiveDate;
use panchang_base::{Paksha, TAMIL_MONTHS, TamilDate};
use serde::{Deserialize, Serialize};

use crate::sun_times::{DEFAULT_SUNRISE, DEFAULT_SUNSET};

/// Tamil calendar position as stored in the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TamilFields {
    pub day: u32,
    pub month: String,
    pub weekday: String,
}

impl From<TamilDate> for TamilFields {
    fn from(t: TamilDate) -> Self {
        Self {
            day: t.day,
            month: t.month.to_string(),
            weekday: t.weekday.to_string(),
        }
    }
}

/// One day of the panchang. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// ISO date, `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub tithi: u8,
    pub paksha: Paksha,
    pub nakshatra: u8,
    pub sunrise: String,
    pub sunset: String,
    pub tamil: TamilFields,
    pub festivals: Vec<String>,
}

impl DayRecord {
    /// The all-defaults record for a day whose assembly failed outright.
    pub fn fallback(date: NaiveDate) -> Self {
        Self {
            date,
            tithi: 1,
            paksha: Paksha::Shukla,
            nakshatra: 1,
            sunrise: DEFAULT_SUNRISE.to_string(),
            sunset: DEFAULT_SUNSET.to_string(),
            tamil: TamilFields {
                day: 1,
                month: TAMIL_MONTHS[0].to_string(),
                weekday: String::new(),
            },
            festivals: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_shape() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let json = serde_json::to_string(&DayRecord::fallback(date)).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2025-03-01","tithi":1,"paksha":"Shukla","nakshatra":1,"sunrise":"06:00 AM","sunset":"06:00 PM","tamil":{"day":1,"month":"சித்திரை","weekday":""},"festivals":[]}"#
        );
    }

    #[test]
    fn parses_back() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let rec = DayRecord::fallback(date);
        let back: DayRecord = serde_json::from_str(&serde_json::to_string(&rec).unwrap()).unwrap();
        assert_eq!(back, rec);
    }
}
