use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Tamil panchang generator.
#[derive(Parser)]
#[command(
    name = "panchang",
    version,
    about = "Tamil panchang generator for Chennai (Asia/Kolkata)"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute every day of a year and write panchang_<year>.json.
    Generate(GenerateArgs),
    /// Build the mobile and monthly views from panchang_<year>.json.
    Views(ViewsArgs),
    /// Print one day's record and its special timings.
    Day(DayArgs),
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Gregorian year (default: current year).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Directory for the output file.
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Compute days on all cores.
    #[arg(long)]
    pub parallel: bool,
}

#[derive(clap::Args)]
pub struct ViewsArgs {
    /// Gregorian year of the primary file.
    #[arg(short, long)]
    pub year: i32,

    /// Directory holding panchang_<year>.json; views are written next to it.
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(clap::Args)]
pub struct DayArgs {
    /// Civil date, YYYY-MM-DD.
    #[arg(short, long)]
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate() {
        let cli = Cli::parse_from(["panchang", "-vv", "generate", "--year", "2026", "--parallel"]);
        assert_eq!(cli.verbose, 2);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.year, Some(2026));
        assert!(args.parallel);
        assert_eq!(args.out_dir, PathBuf::from("."));
    }

    #[test]
    fn views_requires_year() {
        assert!(Cli::try_parse_from(["panchang", "views"]).is_err());
    }

    #[test]
    fn day_parses_date() {
        let cli = Cli::parse_from(["panchang", "day", "--date", "2026-02-01"]);
        let Command::Day(args) = cli.command else {
            panic!("expected day");
        };
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert!(Cli::try_parse_from(["panchang", "day", "--date", "01/02/2026"]).is_err());
    }
}
