//! Shared utility functions for cookbook crates.

/// Date utility functions
pub mod dates {
    use anyhow::Context;
    use chrono::NaiveDate;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Format a NaiveDate as "YYYYMMDD"
    pub fn format_date_compact(date: &NaiveDate) -> String {
        date.format("%Y%m%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Parse a date string in "YYYYMMDD" format
    pub fn parse_date_compact(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y%m%d")?)
    }

    /// Parse a date in either "YYYY-MM-DD" or "YYYYMMDD" format.
    /// Leading and trailing whitespace is ignored.
    pub fn parse_date_any(s: &str) -> anyhow::Result<NaiveDate> {
        let trimmed = s.trim();
        let parsed = if trimmed.contains('-') {
            parse_date(trimmed)
        } else {
            parse_date_compact(trimmed)
        };
        parsed.with_context(|| format!("expected YYYY-MM-DD or YYYYMMDD, got {trimmed:?}"))
    }

}
