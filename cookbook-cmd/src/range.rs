//! Range listing, counting and membership commands.

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use cookbook_dates::DateRange;
use cookbook_utils::dates::{format_date, format_date_compact, parse_date_any};
use log::debug;
use std::io::Write;

/// Arguments describing an inclusive date range.
#[derive(Args, Debug, Clone)]
pub struct RangeArgs {
    /// First date of the range (YYYY-MM-DD or YYYYMMDD)
    #[arg(short, long, value_parser = parse_date_any)]
    pub start: NaiveDate,

    /// Last date of the range, inclusive (YYYY-MM-DD or YYYYMMDD)
    #[arg(short, long, value_parser = parse_date_any)]
    pub end: NaiveDate,

    /// Number of days between consecutive dates
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub step: i64,
}

impl RangeArgs {
    pub fn to_range(&self) -> anyhow::Result<DateRange> {
        let range = DateRange::try_new(self.start, self.end, self.step)
            .with_context(|| format!("Cannot build range {}..={}", self.start, self.end))?;
        debug!("Built date range {} ({} dates)", range, range.len());
        Ok(range)
    }
}

/// Output format for `range`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One YYYY-MM-DD date per line
    Text,
    /// One YYYYMMDD date per line
    Compact,
    /// A single JSON array of date strings
    Json,
}

/// Write every date in the range to `out`.
pub fn run_range<W: Write>(args: &RangeArgs, format: OutputFormat, out: &mut W) -> anyhow::Result<()> {
    let range = args.to_range()?;
    match format {
        OutputFormat::Text => {
            for date in &range {
                writeln!(out, "{}", format_date(&date))?;
            }
        }
        OutputFormat::Compact => {
            for date in &range {
                writeln!(out, "{}", format_date_compact(&date))?;
            }
        }
        OutputFormat::Json => {
            let dates: Vec<NaiveDate> = range.iter().collect();
            serde_json::to_writer(&mut *out, &dates)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Write the number of dates the range yields.
pub fn run_count<W: Write>(args: &RangeArgs, out: &mut W) -> anyhow::Result<()> {
    let range = args.to_range()?;
    writeln!(out, "{}", range.len())?;
    Ok(())
}

/// Write `true` if the range yields `date`, `false` otherwise.
pub fn run_contains<W: Write>(args: &RangeArgs, date: NaiveDate, out: &mut W) -> anyhow::Result<()> {
    let range = args.to_range()?;
    writeln!(out, "{}", range.contains(&date))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(start: &str, end: &str, step: i64) -> RangeArgs {
        RangeArgs {
            start: parse_date_any(start).unwrap(),
            end: parse_date_any(end).unwrap(),
            step,
        }
    }

    #[test]
    fn test_compact_output() {
        let mut out = Vec::new();
        run_range(&args("2023-12-30", "2024-01-02", 1), OutputFormat::Compact, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "20231230\n20231231\n20240101\n20240102\n"
        );
    }

    #[test]
    fn test_empty_json_output() {
        let mut out = Vec::new();
        run_range(&args("2024-01-05", "2024-01-01", 1), OutputFormat::Json, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }

    #[test]
    fn test_zero_step_writes_nothing() {
        let mut out = Vec::new();
        assert!(run_count(&args("2024-01-01", "2024-01-05", 0), &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_count_with_step() {
        let mut out = Vec::new();
        run_count(&args("2024-01-01", "2024-01-10", 3), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "4\n");
    }
}
