//! JSON files of the generator.
//!
//! All files are UTF-8 with non-ASCII text unescaped, two-space indentation
//! and no trailing newline.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::DailyError;
use crate::record::DayRecord;
use crate::views::{mobile_view, month_views};

pub fn year_file_name(year: i32) -> String {
    format!("panchang_{year}.json")
}

pub fn mobile_file_name(year: i32) -> String {
    format!("panchang_mobile_{year}.json")
}

pub fn monthly_file_name(year: i32) -> String {
    format!("panchang_monthly_{year}.json")
}

pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String, DailyError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), DailyError> {
    let text = to_json_string(value)?;
    fs::write(path, text).map_err(|source| DailyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote file");
    Ok(())
}

/// Write `panchang_<year>.json` into `dir`; returns the file path.
pub fn write_year(dir: &Path, year: i32, records: &[DayRecord]) -> Result<PathBuf, DailyError> {
    let path = dir.join(year_file_name(year));
    write_json(&path, records)?;
    Ok(path)
}

/// What was found where the primary JSON of a year should be.
#[derive(Debug, Clone, PartialEq)]
pub enum YearInput {
    /// No such file.
    Missing(PathBuf),
    /// The file is not valid UTF-8 JSON.
    Malformed(String),
    /// Valid JSON, but not an array.
    NotArray,
    Days(Vec<Value>),
}

pub fn read_year_json(dir: &Path, year: i32) -> Result<YearInput, DailyError> {
    let path = dir.join(year_file_name(year));
    if !path.exists() {
        return Ok(YearInput::Missing(path));
    }
    let bytes = fs::read(&path).map_err(|source| DailyError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Array(days)) => YearInput::Days(days),
        Ok(_) => YearInput::NotArray,
        Err(e) => YearInput::Malformed(e.to_string()),
    })
}

/// Paths and size of a successful view rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewsWritten {
    pub mobile: PathBuf,
    pub monthly: PathBuf,
    pub days: usize,
}

/// Write the mobile and monthly views of `days` into `dir`.
pub fn write_views(dir: &Path, year: i32, days: &[Value]) -> Result<ViewsWritten, DailyError> {
    let mobile = dir.join(mobile_file_name(year));
    write_json(&mobile, &mobile_view(days))?;
    let monthly = dir.join(monthly_file_name(year));
    write_json(&monthly, &month_views(days))?;
    Ok(ViewsWritten {
        mobile,
        monthly,
        days: days.len(),
    })
}

/// Result of rebuilding the views of a year from its primary JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewsOutcome {
    Missing(PathBuf),
    Malformed(String),
    NotArray,
    Written(ViewsWritten),
}

/// Read `panchang_<year>.json` from `dir` and write both derived views next
/// to it. Nothing is written unless the input is a JSON array.
pub fn rebuild_views(dir: &Path, year: i32) -> Result<ViewsOutcome, DailyError> {
    Ok(match read_year_json(dir, year)? {
        YearInput::Missing(path) => ViewsOutcome::Missing(path),
        YearInput::Malformed(reason) => ViewsOutcome::Malformed(reason),
        YearInput::NotArray => ViewsOutcome::NotArray,
        YearInput::Days(days) => ViewsOutcome::Written(write_views(dir, year, &days)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names() {
        assert_eq!(year_file_name(2026), "panchang_2026.json");
        assert_eq!(mobile_file_name(2026), "panchang_mobile_2026.json");
        assert_eq!(monthly_file_name(2026), "panchang_monthly_2026.json");
    }

    #[test]
    fn pretty_format() {
        let v = serde_json::json!([{"month": "தை", "days": []}]);
        let text = to_json_string(&v).unwrap();
        assert_eq!(text, "[\n  {\n    \"month\": \"தை\",\n    \"days\": []\n  }\n]");
    }

    #[test]
    fn empty_array() {
        let v: Vec<Value> = Vec::new();
        assert_eq!(to_json_string(&v).unwrap(), "[]");
    }
}
