//! Inclusive calendar date ranges with a configurable day step.
//!
//! A [`DateRange`](date_range::DateRange) is an immutable value; every call
//! to `iter()` hands out a fresh cursor, so a range can be walked any
//! number of times.

pub mod date_range;
pub mod error;

pub use date_range::{DateRange, DateRangeExt, DateRangeIter};
pub use error::{RangeError, Result};
