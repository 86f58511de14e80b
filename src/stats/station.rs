use anyhow::Result;
use arrow::record_batch::RecordBatch;
use std::io::Write;

use super::aggregate::{mode, string_column};
use super::{or_na, timed};
use crate::data::{utils::non_blank, END_STATION, START_STATION};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start: Option<String>,
    pub end: Option<String>,
    /// Most frequent (start, end) trip.
    pub trip: Option<(String, String)>,
}

pub fn station_stats(batch: &RecordBatch) -> Result<StationStats> {
    let starts = string_column(batch, START_STATION)?;
    let ends = string_column(batch, END_STATION)?;

    let trip = mode(
        starts
            .iter()
            .zip(ends.iter())
            .filter_map(|(s, e)| Some((non_blank(s)?, non_blank(e)?))),
    );

    Ok(StationStats {
        start: mode(starts.iter().filter_map(non_blank)).map(str::to_string),
        end: mode(ends.iter().filter_map(non_blank)).map(str::to_string),
        trip: trip.map(|(s, e)| (s.to_string(), e.to_string())),
    })
}

pub fn report<W: Write>(out: &mut W, batch: &RecordBatch) -> Result<()> {
    timed(
        out,
        "Calculating The Most Popular Stations and Trip...",
        |out| {
            let stats = station_stats(batch)?;
            writeln!(out, "The most common start station is: {}", or_na(stats.start))?;
            writeln!(out, "The most common end station is: {}", or_na(stats.end))?;
            match stats.trip {
                Some((from, to)) => writeln!(
                    out,
                    "The most frequent combination of start station and end station trip is '{from}' to '{to}'"
                )?,
                None => writeln!(
                    out,
                    "The most frequent combination of start station and end station trip is n/a"
                )?,
            }
            Ok(())
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{DayFilter, Month, MonthFilter};
    use crate::stats::tests::chicago;
    use crate::data::read_trip_csv;
    use crate::test_fixtures;
    use chrono::Weekday;
    use std::fs;

    #[test]
    fn most_popular_stations_and_trip() -> Result<()> {
        let (_dir, reg) = test_fixtures::registry()?;
        let batch = chicago(&reg, MonthFilter::All, DayFilter::All)?;
        let stats = station_stats(&batch)?;
        assert_eq!(stats.start.as_deref(), Some("Canal St & Adams St"));
        assert_eq!(stats.end.as_deref(), Some("Clinton St & Madison St"));
        assert_eq!(
            stats.trip,
            Some((
                "Canal St & Adams St".to_string(),
                "Clinton St & Madison St".to_string()
            ))
        );
        Ok(())
    }

    #[test]
    fn ties_resolve_alphabetically() -> Result<()> {
        let (_dir, reg) = test_fixtures::registry()?;
        // One trip each from Canal St and Streeter Dr.
        let batch = chicago(
            &reg,
            MonthFilter::Only(Month::January),
            DayFilter::Only(Weekday::Mon),
        )?;
        let stats = station_stats(&batch)?;
        assert_eq!(stats.start.as_deref(), Some("Canal St & Adams St"));
        assert_eq!(stats.end.as_deref(), Some("Canal St & Adams St"));

        let mut out = Vec::new();
        report(&mut out, &batch)?;
        let text = String::from_utf8(out)?;
        assert!(text.contains(
            "trip is 'Canal St & Adams St' to 'Clinton St & Madison St'"
        ));
        Ok(())
    }

    #[test]
    fn quotes_inside_a_station_name_are_kept() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("quoted.csv");
        fs::write(
            &path,
            "Start Time,Start Station,End Station,Trip Duration,User Type\n\
             2017-01-01 08:00:00,\"\"\"The Loop\"\"\",Canal St,60,Subscriber\n",
        )?;
        let batch = read_trip_csv(&path)?;
        let stats = station_stats(&batch)?;
        assert_eq!(stats.start.as_deref(), Some("\"The Loop\""));
        assert_eq!(stats.end.as_deref(), Some("Canal St"));
        Ok(())
    }
}
