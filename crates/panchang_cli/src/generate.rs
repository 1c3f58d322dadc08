use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use panchang_daily::{DayAssembler, generate_year, generate_year_parallel, write_year};
use panchang_ephem::{AnalyticEphemeris, ObserverConfig};
use tracing::info;

use crate::cli::GenerateArgs;

pub fn run(args: &GenerateArgs) -> Result<()> {
    run_in(args, &mut std::io::stdout().lock())
}

/// Generate the year and report to `out`.
pub fn run_in(args: &GenerateArgs, out: &mut impl Write) -> Result<()> {
    let year = args.year.unwrap_or_else(|| Local::now().year());
    let observer = ObserverConfig::default();
    info!(
        year,
        latitude = observer.location.latitude_deg,
        longitude = observer.location.longitude_deg,
        timezone = observer.timezone_name(),
        parallel = args.parallel,
        "generating panchang"
    );

    let assembler = DayAssembler::new(AnalyticEphemeris::new(), observer);
    let records = if args.parallel {
        generate_year_parallel(&assembler, year)
    } else {
        generate_year(&assembler, year)
    }
    .with_context(|| format!("cannot generate year {year}"))?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("cannot create {}", args.out_dir.display()))?;
    let path = write_year(&args.out_dir, year, &records)?;

    let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    writeln!(out, "Saved: {name} (days: {})", records.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_year_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            year: Some(2024),
            out_dir: dir.path().join("out"),
            parallel: true,
        };
        let mut out = Vec::new();
        run_in(&args, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Saved: panchang_2024.json (days: 366)\n"
        );

        let text = std::fs::read_to_string(dir.path().join("out/panchang_2024.json")).unwrap();
        let days: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
        assert_eq!(days.len(), 366);
        assert_eq!(days[0]["date"], "2024-01-01");
    }

    #[test]
    fn invalid_year_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            year: Some(400_000),
            out_dir: dir.path().to_path_buf(),
            parallel: false,
        };
        let err = run_in(&args, &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("400000"));
    }
}
