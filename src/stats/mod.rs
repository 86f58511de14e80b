// src/stats/mod.rs
use anyhow::Result;
use arrow::record_batch::RecordBatch;
use std::{fmt::Display, io::Write, time::Instant};
use tracing::debug;

pub mod aggregate;
pub mod duration;
pub mod station;
pub mod time;
pub mod user;

pub use duration::{trip_duration_stats, DurationStats};
pub use station::{station_stats, StationStats};
pub use time::{time_stats, TimeStats};
pub use user::{user_stats, Demographics, UserStats};

/// Print `heading`, run `body`, then report how long it took.
fn timed<W: Write>(
    out: &mut W,
    heading: &str,
    body: impl FnOnce(&mut W) -> Result<()>,
) -> Result<()> {
    writeln!(out, "\n{heading}\n")?;
    let start = Instant::now();
    body(out)?;
    let elapsed = start.elapsed();
    debug!(section = heading, ?elapsed, "stats computed");
    writeln!(out, "This took {:.2} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", "-".repeat(40))?;
    Ok(())
}

/// `n/a` stands in for an aggregate over no rows.
fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

/// Time, station, duration and user reports, in that order.
pub fn report_all<W: Write>(out: &mut W, batch: &RecordBatch) -> Result<()> {
    time::report(out, batch)?;
    station::report(out, batch)?;
    duration::report(out, batch)?;
    user::report(out, batch)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{load_data, CityRegistry};
    use crate::filter::{City, DayFilter, FilterSelection, MonthFilter};
    use crate::test_fixtures;
    use anyhow::Result;

    pub(crate) fn chicago(
        reg: &CityRegistry,
        month: MonthFilter,
        day: DayFilter,
    ) -> Result<RecordBatch> {
        Ok(load_data(reg, &FilterSelection::new(City::Chicago, month, day))?)
    }

    #[test]
    fn report_all_prints_every_section_in_order() -> Result<()> {
        let (_dir, reg) = test_fixtures::registry()?;
        let batch = chicago(&reg, MonthFilter::All, DayFilter::All)?;
        let mut out = Vec::new();
        report_all(&mut out, &batch)?;
        let text = String::from_utf8(out)?;

        let order = [
            "Calculating The Most Frequent Times of Travel...",
            "Calculating The Most Popular Stations and Trip...",
            "Calculating Trip Duration...",
            "Calculating User Stats...",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|h| text.find(h).expect("section heading"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(text.matches("This took ").count(), 4);
        Ok(())
    }

    #[test]
    fn empty_selection_prints_na_instead_of_failing() -> Result<()> {
        let (_dir, reg) = test_fixtures::registry()?;
        let batch = chicago(
            &reg,
            MonthFilter::Only(crate::filter::Month::April),
            DayFilter::All,
        )?;
        assert_eq!(batch.num_rows(), 0);
        let mut out = Vec::new();
        report_all(&mut out, &batch)?;
        let text = String::from_utf8(out)?;
        assert!(text.contains("The most common month is: n/a"));
        assert!(text.contains("The total travel time is: n/a"));
        assert!(text.contains("Sorry, there's no such data to analyze."));
        Ok(())
    }
}
