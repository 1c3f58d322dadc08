use std::io::Write;

use anyhow::{Context, Result};
use panchang_daily::{ViewsOutcome, rebuild_views, year_file_name};

use crate::cli::ViewsArgs;

pub fn run(args: &ViewsArgs) -> Result<()> {
    run_in(args, &mut std::io::stdout().lock())
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Rebuild the views of a year; a missing or unusable input is reported
/// on `out` and is not an error.
pub fn run_in(args: &ViewsArgs, out: &mut impl Write) -> Result<()> {
    let outcome = rebuild_views(&args.out_dir, args.year)
        .with_context(|| format!("cannot build views for {}", year_file_name(args.year)))?;
    match outcome {
        ViewsOutcome::Missing(path) => writeln!(out, "Missing: {}", file_name(&path))?,
        ViewsOutcome::NotArray => writeln!(out, "Input is not a list; aborting")?,
        ViewsOutcome::Malformed(reason) => {
            writeln!(out, "Input is not valid JSON; aborting ({reason})")?
        }
        ViewsOutcome::Written(w) => {
            writeln!(out, "Saved: {} (days: {})", file_name(&w.mobile), w.days)?;
            writeln!(out, "Saved: {}", file_name(&w.monthly))?;
        }
    }
    Ok(())
}
