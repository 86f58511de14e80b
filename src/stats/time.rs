use anyhow::Result;
use arrow::record_batch::RecordBatch;
use std::io::Write;

use super::aggregate::{int_column, mode, string_column};
use super::{or_na, timed};
use crate::data::{DAY_OF_WEEK, MONTH, START_HOUR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// Calendar month number.
    pub month: Option<i32>,
    pub weekday: Option<String>,
    pub start_hour: Option<i32>,
}

pub fn time_stats(batch: &RecordBatch) -> Result<TimeStats> {
    Ok(TimeStats {
        month: mode(int_column(batch, MONTH)?.iter().flatten()),
        weekday: mode(string_column(batch, DAY_OF_WEEK)?.iter().flatten()).map(str::to_string),
        start_hour: mode(int_column(batch, START_HOUR)?.iter().flatten()),
    })
}

pub fn report<W: Write>(out: &mut W, batch: &RecordBatch) -> Result<()> {
    timed(
        out,
        "Calculating The Most Frequent Times of Travel...",
        |out| {
            let stats = time_stats(batch)?;
            writeln!(out, "The most common month is: {}", or_na(stats.month))?;
            writeln!(out, "The most common day of week is: {}", or_na(stats.weekday))?;
            writeln!(out, "The most common start hour is: {}", or_na(stats.start_hour))?;
            Ok(())
        },
    )
}
