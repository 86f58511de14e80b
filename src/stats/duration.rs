use anyhow::Result;
use arrow::{array::Array, compute::sum, record_batch::RecordBatch};
use std::io::Write;

use super::aggregate::float_column;
use super::timed;
use crate::data::TRIP_DURATION;

/// Totals over `Trip Duration`, taken as minutes without conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total: Option<f64>,
    pub mean: Option<f64>,
}

pub fn trip_duration_stats(batch: &RecordBatch) -> Result<DurationStats> {
    let durations = float_column(batch, TRIP_DURATION)?;
    let present = durations.len() - durations.null_count();
    let total = sum(durations);
    let mean = total.filter(|_| present > 0).map(|t| t / present as f64);
    Ok(DurationStats { total, mean })
}

fn minutes(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2} minutes."),
        None => "n/a".to_string(),
    }
}

pub fn report<W: Write>(out: &mut W, batch: &RecordBatch) -> Result<()> {
    timed(out, "Calculating Trip Duration...", |out| {
        let stats = trip_duration_stats(batch)?;
        writeln!(out, "The total travel time is: {}", minutes(stats.total))?;
        writeln!(out, "The mean travel time is: {}", minutes(stats.mean))?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{DayFilter, MonthFilter};
    use crate::stats::tests::chicago;
    use crate::test_fixtures;
    use arrow::{
        array::{ArrayRef, Float64Array},
        datatypes::{DataType, Field, Schema},
    };
    use std::sync::Arc;

    #[test]
    fn sums_and_averages_durations() -> Result<()> {
        let (_dir, reg) = test_fixtures::registry()?;
        let batch = chicago(&reg, MonthFilter::All, DayFilter::All)?;
        let stats = trip_duration_stats(&batch)?;
        assert_eq!(stats.total, Some(4500.0));
        let mean = stats.mean.expect("mean");
        assert!((mean - 4500.0 / 7.0).abs() < 1e-9);

        let mut out = Vec::new();
        report(&mut out, &batch)?;
        let text = String::from_utf8(out)?;
        assert!(text.contains("The total travel time is: 4500.00 minutes."));
        assert!(text.contains("The mean travel time is: 642.86 minutes."));
        Ok(())
    }

    #[test]
    fn missing_durations_are_skipped_in_the_mean() -> Result<()> {
        let schema = Schema::new(vec![Field::new(TRIP_DURATION, DataType::Float64, true)]);
        let col: ArrayRef = Arc::new(Float64Array::from(vec![Some(10.0), None, Some(20.0)]));
        let batch = RecordBatch::try_new(Arc::new(schema), vec![col])?;
        let stats = trip_duration_stats(&batch)?;
        assert_eq!(stats.total, Some(30.0));
        assert_eq!(stats.mean, Some(15.0));
        Ok(())
    }
}
