use arrow::{
    array::{ArrayRef, BooleanArray, Int32Array, StringArray},
    compute::{
        filter_record_batch,
        kernels::{boolean::and, cmp},
    },
    record_batch::RecordBatch,
};
use tracing::debug;

use super::error::LoadError;
use super::{DAY_OF_WEEK, MONTH};
use crate::filter::{weekday_name, DayFilter, MonthFilter};

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef, LoadError> {
    batch
        .column_by_name(name)
        .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
}

/// Keep only rows in the selected month and weekday. `All` leaves that
/// dimension unconstrained; rows with a null derived value never match a
/// specific month or day.
pub fn apply_filters(
    batch: &RecordBatch,
    month: MonthFilter,
    day: DayFilter,
) -> Result<RecordBatch, LoadError> {
    let mut mask: Option<BooleanArray> = None;

    if let MonthFilter::Only(m) = month {
        let hit = cmp::eq(column(batch, MONTH)?, &Int32Array::new_scalar(m.number() as i32))?;
        mask = Some(hit);
    }

    if let DayFilter::Only(d) = day {
        let hit = cmp::eq(
            column(batch, DAY_OF_WEEK)?,
            &StringArray::new_scalar(weekday_name(d)),
        )?;
        mask = Some(match mask {
            Some(prev) => and(&prev, &hit)?,
            None => hit,
        });
    }

    let Some(mask) = mask else {
        return Ok(batch.clone());
    };
    let out = filter_record_batch(batch, &mask)?;
    debug!(before = batch.num_rows(), after = out.num_rows(), "filtered trips");
    Ok(out)
}
