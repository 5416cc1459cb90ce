use crate::error::{RangeError, Result};
use chrono::{Days, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;
use std::mem::replace;

/// Day step used when none is given.
pub const DEFAULT_STEP: i64 = 1;

/// An inclusive range of calendar dates walked forward in steps of
/// `step` days.
///
/// The range itself holds no cursor. [`DateRange::iter`] creates a new
/// [`DateRangeIter`] on every call, so two traversals never share state.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
    step: i64,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
    #[serde(default = "default_step")]
    step: i64,
}

fn default_step() -> i64 {
    DEFAULT_STEP
}

fn validate_step(step: i64) -> Result<i64> {
    if step <= 0 {
        warn!("Rejecting non-positive date range step {}", step);
        return Err(RangeError::InvalidArgument { step });
    }
    Ok(step)
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = RangeError;

    fn try_from(raw: RawDateRange) -> Result<Self> {
        DateRange::try_new(raw.start, raw.end, raw.step)
    }
}

impl DateRange {
    /// Create a range from `start` through `end` (inclusive) with a one-day step.
    pub fn new(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange {
            start,
            end,
            step: DEFAULT_STEP,
        }
    }

    /// Create a range with an explicit day step.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidArgument`] if `step` is zero or negative.
    pub fn try_new(start: NaiveDate, end: NaiveDate, step: i64) -> Result<DateRange> {
        let step = validate_step(step)?;
        Ok(DateRange { start, end, step })
    }

    /// Returns a copy of this range that advances `step` days at a time.
    /// `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidArgument`] if `step` is zero or negative.
    pub fn with_step(&self, step: i64) -> Result<DateRange> {
        DateRange::try_new(self.start, self.end, step)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Start a fresh traversal at `start`.
    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            cursor: Some(self.start),
            end: self.end,
            step: self.step,
        }
    }

    /// Number of dates a traversal yields.
    pub fn len(&self) -> usize {
        remaining(self.start, self.end, self.step)
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Returns true if a traversal would yield `date`.
    pub fn contains(&self, date: &NaiveDate) -> bool {
        if *date < self.start || *date > self.end {
            return false;
        }
        (*date - self.start).num_days() % self.step == 0
    }

    /// The final date a traversal yields: the largest `start + i * step`
    /// that does not pass `end`.
    pub fn last_date(&self) -> Option<NaiveDate> {
        if self.is_empty() {
            return None;
        }
        let span = (self.end - self.start).num_days();
        let offset = span - span % self.step;
        self.start.checked_add_days(Days::new(offset as u64))
    }
}

fn remaining(cursor: NaiveDate, end: NaiveDate, step: i64) -> usize {
    if cursor > end {
        return 0;
    }
    ((end - cursor).num_days() / step) as usize + 1
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.step == DEFAULT_STEP {
            write!(f, "{}..={}", self.start, self.end)
        } else {
            write!(f, "{}..={} step {}", self.start, self.end, self.step)
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Traversal cursor over a [`DateRange`].
///
/// Yields the current date and only then advances it. Once the cursor
/// passes `end`, or stepping would leave the representable calendar, it is
/// exhausted for good.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DateRangeIter {
    cursor: Option<NaiveDate>,
    end: NaiveDate,
    step: i64,
}

impl Iterator for DateRangeIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;
        if current > self.end {
            self.cursor = None;
            return None;
        }
        let next = current.checked_add_days(Days::new(self.step as u64));
        replace(&mut self.cursor, next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match self.cursor {
            Some(cursor) => remaining(cursor, self.end, self.step),
            None => 0,
        };
        (len, Some(len))
    }
}

impl ExactSizeIterator for DateRangeIter {}

impl FusedIterator for DateRangeIter {}

/// Named stand-in for `start..=end` on calendar dates.
pub trait DateRangeExt {
    /// Range from `self` through `end` (inclusive) with a one-day step.
    fn range_to(self, end: NaiveDate) -> DateRange;
}

impl DateRangeExt for NaiveDate {
    fn range_to(self, end: NaiveDate) -> DateRange {
        DateRange::new(self, end)
    }
}
