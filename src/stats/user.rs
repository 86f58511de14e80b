use anyhow::Result;
use arrow::record_batch::RecordBatch;
use std::io::Write;

use super::aggregate::{float_column, has_column, mode, string_column, value_counts};
use super::timed;
use crate::data::{utils::non_blank, BIRTH_YEAR, GENDER, USER_TYPE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    /// `None` when the city has no gender / birth year data.
    pub demographics: Option<Demographics>,
}

/// Computed only over rows where both gender and birth year are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub genders: Vec<(String, usize)>,
    pub earliest_birth_year: i64,
    pub most_recent_birth_year: i64,
    pub most_common_birth_year: i64,
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts.into_iter().map(|(k, n)| (k.to_string(), n)).collect()
}

fn demographics(batch: &RecordBatch) -> Result<Option<Demographics>> {
    if !has_column(batch, GENDER) || !has_column(batch, BIRTH_YEAR) {
        return Ok(None);
    }
    let genders = string_column(batch, GENDER)?;
    let years = float_column(batch, BIRTH_YEAR)?;

    let rows: Vec<(&str, i64)> = genders
        .iter()
        .zip(years.iter())
        .filter_map(|(g, y)| Some((non_blank(g)?, y.filter(|v| v.is_finite())? as i64)))
        .collect();

    let (Some(earliest), Some(recent), Some(common)) = (
        rows.iter().map(|(_, y)| *y).min(),
        rows.iter().map(|(_, y)| *y).max(),
        mode(rows.iter().map(|(_, y)| *y)),
    ) else {
        return Ok(None);
    };

    Ok(Some(Demographics {
        genders: owned(value_counts(rows.iter().map(|(g, _)| *g))),
        earliest_birth_year: earliest,
        most_recent_birth_year: recent,
        most_common_birth_year: common,
    }))
}

pub fn user_stats(batch: &RecordBatch) -> Result<UserStats> {
    let types = string_column(batch, USER_TYPE)?;
    Ok(UserStats {
        user_types: owned(value_counts(types.iter().filter_map(non_blank))),
        demographics: demographics(batch)?,
    })
}

pub fn report<W: Write>(out: &mut W, batch: &RecordBatch) -> Result<()> {
    timed(out, "Calculating User Stats...", |out| {
        let stats = user_stats(batch)?;
        writeln!(out, "The counts of user types is:")?;
        for (kind, n) in &stats.user_types {
            writeln!(out, "{kind}: {n}")?;
        }
        match stats.demographics {
            Some(d) => {
                writeln!(out, "\nThe counts of gender is:")?;
                for (gender, n) in &d.genders {
                    writeln!(out, "{gender}: {n}")?;
                }
                writeln!(out, "\nThe earliest year of birth is: {}", d.earliest_birth_year)?;
                writeln!(out, "The most recent year of birth is: {}", d.most_recent_birth_year)?;
                writeln!(out, "The most common year of birth is: {}", d.most_common_birth_year)?;
            }
            None => writeln!(out, "\nSorry, there's no such data to analyze.")?,
        }
        Ok(())
    })
}
