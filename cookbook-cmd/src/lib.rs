//! Command implementations for the cookbook CLI.
//!
//! Every command writes to a caller-supplied sink, so output can go to
//! stdout, a file or an in-memory buffer.

use clap::Subcommand;
use std::io::Write;

pub mod range;

pub use range::{OutputFormat, RangeArgs};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every date in an inclusive range
    Range {
        #[command(flatten)]
        range: RangeArgs,

        /// How each date is written
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print how many dates an inclusive range yields
    Count {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Print whether a date is one of the dates a range yields
    Contains {
        #[command(flatten)]
        range: RangeArgs,

        /// Date to look for (YYYY-MM-DD or YYYYMMDD)
        #[arg(short, long, value_parser = cookbook_utils::dates::parse_date_any)]
        date: chrono::NaiveDate,
    },
}

pub fn run<W: Write>(command: Command, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Range { range, format } => range::run_range(&range, format, out),
        Command::Count { range } => range::run_count(&range, out),
        Command::Contains { range, date } => range::run_contains(&range, date, out),
    }
}
