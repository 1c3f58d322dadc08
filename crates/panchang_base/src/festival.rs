//! Festival rule engine.
//!
//! A day's festivals come from two static tables: rules that match on the
//! lunar/solar elements of the day, then per-year date overrides that pin a
//! festival to one exact date (adding it there and removing it everywhere
//! else in that year).

use chrono::{Datelike, NaiveDate};

use crate::tithi::Paksha;

/// Everything a festival rule may look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FestivalContext<'a> {
    pub date: NaiveDate,
    pub tithi: u8,
    pub nakshatra: u8,
    pub paksha: Paksha,
    /// Tamil month name, if known.
    pub tamil_month: Option<&'a str>,
    /// Weekday, Monday = 0.
    pub weekday: u32,
}

impl<'a> FestivalContext<'a> {
    pub fn new(
        date: NaiveDate,
        tithi: u8,
        nakshatra: u8,
        paksha: Paksha,
        tamil_month: Option<&'a str>,
    ) -> Self {
        Self {
            date,
            tithi,
            nakshatra,
            paksha,
            tamil_month,
            weekday: date.weekday().num_days_from_monday(),
        }
    }

    fn in_month(&self, month: &str) -> Option<bool> {
        self.tamil_month.map(|m| m == month)
    }
}

/// Predicate result: `None` when the rule cannot be evaluated for the day.
pub type FestivalPredicate = fn(&FestivalContext<'_>) -> Option<bool>;

/// A named festival and the condition under which it falls on a day.
#[derive(Debug, Clone, Copy)]
pub struct FestivalRule {
    pub name: &'static str,
    pub predicate: FestivalPredicate,
}

impl FestivalRule {
    pub const fn new(name: &'static str, predicate: FestivalPredicate) -> Self {
        Self { name, predicate }
    }

    pub fn matches(&self, ctx: &FestivalContext<'_>) -> bool {
        (self.predicate)(ctx).unwrap_or(false)
    }
}

fn shashti(ctx: &FestivalContext<'_>) -> Option<bool> {
    Some(ctx.tithi == 6)
}

fn thaipusam(ctx: &FestivalContext<'_>) -> Option<bool> {
    Some(ctx.in_month("தை")? && ctx.nakshatra == 8)
}

fn pradosham(ctx: &FestivalContext<'_>) -> Option<bool> {
    Some(matches!(ctx.tithi, 13 | 28))
}

fn pournami(ctx: &FestivalContext<'_>) -> Option<bool> {
    Some(ctx.tithi == 15)
}

fn amavasai(ctx: &FestivalContext<'_>) -> Option<bool> {
    Some(ctx.tithi == 30)
}

fn karthigai(ctx: &FestivalContext<'_>) -> Option<bool> {
    Some(ctx.nakshatra == 3)
}

fn panguni_uthiram(ctx: &FestivalContext<'_>) -> Option<bool> {
    Some(ctx.in_month("பங்குனி")? && ctx.nakshatra == 12)
}

fn vaikasi_visakam(ctx: &FestivalContext<'_>) -> Option<bool> {
    Some(ctx.in_month("வைகாசி")? && ctx.nakshatra == 16)
}

/// Built-in festival rules, in evaluation order.
pub static FESTIVAL_RULES: [FestivalRule; 8] = [
    FestivalRule::new("சஷ்டி", shashti),
    FestivalRule::new("தைப்பூசம்", thaipusam),
    FestivalRule::new("பிரதோஷம்", pradosham),
    FestivalRule::new("பௌர்ணமி", pournami),
    FestivalRule::new("அமாவாசை", amavasai),
    FestivalRule::new("கார்த்திகை", karthigai),
    FestivalRule::new("பங்குனி உத்திரம்", panguni_uthiram),
    FestivalRule::new("வைகாசி விசாகம்", vaikasi_visakam),
];

/// Pins a festival to one exact date within a Gregorian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FestivalOverride {
    pub year: i32,
    pub name: &'static str,
    pub month: u32,
    pub day: u32,
}

impl FestivalOverride {
    pub const fn new(year: i32, name: &'static str, month: u32, day: u32) -> Self {
        Self {
            year,
            name,
            month,
            day,
        }
    }

    /// The pinned date, `None` if the entry is not a valid calendar date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Built-in per-year festival dates.
pub static FESTIVAL_OVERRIDES: [FestivalOverride; 3] = [
    FestivalOverride::new(2026, "தைப்பூசம்", 2, 1),
    FestivalOverride::new(2026, "பங்குனி உத்திரம்", 3, 31),
    FestivalOverride::new(2026, "வைகாசி விசாகம்", 5, 31),
];

/// Evaluates festival rules and overrides for a day.
#[derive(Debug, Clone, Copy)]
pub struct FestivalEngine<'t> {
    rules: &'t [FestivalRule],
    overrides: &'t [FestivalOverride],
}

impl Default for FestivalEngine<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FestivalEngine<'static> {
    /// Engine over the built-in rule and override tables.
    pub fn builtin() -> Self {
        Self::new(&FESTIVAL_RULES, &FESTIVAL_OVERRIDES)
    }
}

impl<'t> FestivalEngine<'t> {
    pub fn new(rules: &'t [FestivalRule], overrides: &'t [FestivalOverride]) -> Self {
        Self { rules, overrides }
    }

    /// Same rules, different override table.
    pub fn with_overrides(self, overrides: &'t [FestivalOverride]) -> Self {
        Self { overrides, ..self }
    }

    /// Festival names for the day in rule order, without duplicates.
    ///
    /// Overrides for the day's year are applied last: an override on this
    /// date adds its festival, an override on another date removes it.
    pub fn evaluate(&self, ctx: &FestivalContext<'_>) -> Vec<&'static str> {
        let mut found: Vec<&'static str> = Vec::new();
        for rule in self.rules {
            if rule.matches(ctx) && !found.contains(&rule.name) {
                found.push(rule.name);
            }
        }

        let year = ctx.date.year();
        for ov in self.overrides.iter().filter(|o| o.year == year) {
            let Some(pinned) = ov.date() else {
                continue;
            };
            if pinned == ctx.date {
                if !found.contains(&ov.name) {
                    found.push(ov.name);
                }
            } else {
                found.retain(|&n| n != ov.name);
            }
        }
        found
    }
}
