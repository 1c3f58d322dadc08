//! Derived views over a year of records: the flat mobile shape and the
//! month groupings.
//!
//! Views read the primary JSON back as [`serde_json::Value`]s, so field
//! access is tolerant: a missing field takes its default, a present field is
//! passed through as-is. Month groups borrow the entries; nothing is copied.

use std::borrow::Cow;
use std::collections::HashMap;

use chrono::NaiveDate;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use serde_json::{Value, json};

use crate::record::DayRecord;

/// Group key for entries without a usable date or Tamil month.
pub const UNKNOWN_KEY: &str = "unknown";

/// One day in the flat mobile shape. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MobileEntry<'a> {
    pub date: Cow<'a, Value>,
    pub tithi: Cow<'a, Value>,
    pub paksha: Cow<'a, Value>,
    pub nakshatra: Cow<'a, Value>,
    pub sunrise: Cow<'a, Value>,
    pub sunset: Cow<'a, Value>,
    pub tamil_day: Cow<'a, Value>,
    pub tamil_month: Cow<'a, Value>,
    pub weekday_ta: Cow<'a, Value>,
    pub festivals: Cow<'a, Value>,
}

fn field_or<'a>(value: Option<&'a Value>, default: impl FnOnce() -> Value) -> Cow<'a, Value> {
    value.map_or_else(|| Cow::Owned(default()), Cow::Borrowed)
}

/// Flatten one primary-JSON entry. Non-object entries yield all defaults.
pub fn mobile_entry(entry: &Value) -> MobileEntry<'_> {
    let tamil = entry.get("tamil");
    let tamil_field = |key: &str| tamil.and_then(|t| t.get(key));
    MobileEntry {
        date: field_or(entry.get("date"), || json!("")),
        tithi: field_or(entry.get("tithi"), || json!(1)),
        paksha: field_or(entry.get("paksha"), || json!("Shukla")),
        nakshatra: field_or(entry.get("nakshatra"), || json!(1)),
        sunrise: field_or(entry.get("sunrise"), || json!("06:00 AM")),
        sunset: field_or(entry.get("sunset"), || json!("06:00 PM")),
        tamil_day: field_or(tamil_field("day"), || json!(1)),
        tamil_month: field_or(tamil_field("month"), || json!("")),
        weekday_ta: field_or(tamil_field("weekday"), || json!("")),
        festivals: field_or(entry.get("festivals"), || json!([])),
    }
}

pub fn mobile_view(entries: &[Value]) -> Vec<MobileEntry<'_>> {
    entries.iter().map(mobile_entry).collect()
}

/// Something that can be grouped by English and Tamil month.
pub trait MonthKeyed {
    /// `YYYY-MM`: the first seven characters of the date, or `"unknown"`.
    fn english_month_key(&self) -> Cow<'_, str>;

    /// Tamil month name, or `"unknown"` when absent or empty.
    fn tamil_month_key(&self) -> Cow<'_, str>;
}

impl MonthKeyed for Value {
    fn english_month_key(&self) -> Cow<'_, str> {
        match self.get("date").and_then(Value::as_str) {
            Some(date) => match date.char_indices().nth(7) {
                Some((end, _)) => Cow::Borrowed(&date[..end]),
                None if date.chars().count() == 7 => Cow::Borrowed(date),
                None => Cow::Borrowed(UNKNOWN_KEY),
            },
            None => Cow::Borrowed(UNKNOWN_KEY),
        }
    }

    fn tamil_month_key(&self) -> Cow<'_, str> {
        let month = self
            .get("tamil")
            .and_then(|t| t.get("month"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty());
        Cow::Borrowed(month.unwrap_or(UNKNOWN_KEY))
    }
}

impl MonthKeyed for DayRecord {
    fn english_month_key(&self) -> Cow<'_, str> {
        Cow::Owned(self.date.format("%Y-%m").to_string())
    }

    fn tamil_month_key(&self) -> Cow<'_, str> {
        if self.tamil.month.is_empty() {
            Cow::Borrowed(UNKNOWN_KEY)
        } else {
            Cow::Borrowed(&self.tamil.month)
        }
    }
}

/// Entries sharing one month key, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup<'a, T> {
    pub key: Cow<'a, str>,
    pub entries: Vec<&'a T>,
}

/// English-month and Tamil-month groupings of the same entries.
///
/// Serializes as `{"english_months": {key: [...]}, "tamil_months": {...}}`
/// with groups in their list order.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthViews<'a, T> {
    pub english_months: Vec<MonthGroup<'a, T>>,
    pub tamil_months: Vec<MonthGroup<'a, T>>,
}

struct GroupMap<'g, 'a, T>(&'g [MonthGroup<'a, T>]);

impl<T: Serialize> Serialize for GroupMap<'_, '_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for group in self.0 {
            map.serialize_entry(group.key.as_ref(), &group.entries)?;
        }
        map.end()
    }
}

impl<T: Serialize> Serialize for MonthViews<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("MonthViews", 2)?;
        s.serialize_field("english_months", &GroupMap(&self.english_months))?;
        s.serialize_field("tamil_months", &GroupMap(&self.tamil_months))?;
        s.end()
    }
}

/// Group entries by key, groups in first-appearance order.
fn group_by<'a, T>(
    entries: &'a [T],
    key: impl Fn(&'a T) -> Cow<'a, str>,
) -> Vec<MonthGroup<'a, T>> {
    let mut index: HashMap<Cow<'a, str>, usize> = HashMap::new();
    let mut groups: Vec<MonthGroup<'a, T>> = Vec::new();
    for entry in entries {
        let k = key(entry);
        match index.get(&k) {
            Some(&i) => groups[i].entries.push(entry),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push(MonthGroup {
                    key: k,
                    entries: vec![entry],
                });
            }
        }
    }
    groups
}

/// Chronological sort position of an English month key; keys that are not
/// a `YYYY-MM` month sort as 1900-01.
fn english_sort_key(key: &str) -> NaiveDate {
    let epoch = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN);
    if key == UNKNOWN_KEY {
        return epoch;
    }
    NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d").unwrap_or(epoch)
}

pub fn month_views<T: MonthKeyed>(entries: &[T]) -> MonthViews<'_, T> {
    let mut english_months = group_by(entries, |e| e.english_month_key());
    english_months.sort_by_key(|g| english_sort_key(&g.key));
    let tamil_months = group_by(entries, |e| e.tamil_month_key());
    MonthViews {
        english_months,
        tamil_months,
    }
}
