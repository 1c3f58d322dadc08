use std::io::Write;

use anyhow::Result;
use panchang_base::{Nakshatra, SpecialTimings, special_timings};
use panchang_daily::{DayAssembler, DayRecord, to_json_string};
use panchang_ephem::{AnalyticEphemeris, ObserverConfig};
use serde::Serialize;
use tracing::warn;

use crate::cli::DayArgs;

/// A day's record with the nakshatra's Tamil name and the weekday timings
/// appended.
#[derive(Serialize)]
struct DayOutput<'a> {
    #[serde(flatten)]
    record: &'a DayRecord,
    nakshatra_name: &'static str,
    special_timings: SpecialTimings,
}

pub fn run(args: &DayArgs) -> Result<()> {
    run_in(args, &mut std::io::stdout().lock())
}

pub fn run_in(args: &DayArgs, out: &mut impl Write) -> Result<()> {
    let assembler = DayAssembler::new(AnalyticEphemeris::new(), ObserverConfig::default());
    let report = assembler.build_detailed(args.date);
    for (step, reason) in report.fallbacks() {
        warn!(date = %args.date, step, reason, "default used");
    }
    let record = report.into_record();
    let output = DayOutput {
        record: &record,
        nakshatra_name: Nakshatra::from_number(record.nakshatra).map_or("", Nakshatra::tamil_name),
        special_timings: special_timings(args.date),
    };
    writeln!(out, "{}", to_json_string(&output)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn thaipusam_2026() {
        let args = DayArgs {
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        };
        let mut out = Vec::new();
        run_in(&args, &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(v["date"], "2026-02-01");
        assert_eq!(v["tamil"]["month"], "தை");
        assert_eq!(v["tamil"]["weekday"], "ஞாயிறு");
        assert!(
            v["festivals"]
                .as_array()
                .unwrap()
                .iter()
                .any(|f| f == "தைப்பூசம்")
        );
        let number = v["nakshatra"].as_u64().unwrap();
        let nakshatra = Nakshatra::from_number(u8::try_from(number).unwrap()).unwrap();
        assert_eq!(v["nakshatra_name"], nakshatra.tamil_name());
        assert_eq!(v["special_timings"]["rahu_kalam"], "16:30–18:00");
        assert_eq!(v["special_timings"]["nalla_neram"]["morning"], "07:15–08:15");

        let keys: Vec<&String> = v.as_object().unwrap().keys().collect();
        assert_eq!(keys.first().map(|k| k.as_str()), Some("date"));
        assert_eq!(keys.last().map(|k| k.as_str()), Some("special_timings"));
    }
}
