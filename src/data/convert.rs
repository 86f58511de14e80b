use arrow::{
    array::{
        ArrayRef, Int32Builder, StringArray, StringBuilder, TimestampSecondBuilder,
    },
    datatypes::{DataType, Field, FieldRef, Schema, TimeUnit},
    record_batch::RecordBatch,
};
use chrono::{Datelike, Timelike};
use std::sync::Arc;

use super::error::LoadError;
use super::{date_parser, utils, DAY_OF_WEEK, MONTH, START_HOUR, START_TIME};
use crate::filter::weekday_name;

/// Parse `Start Time` into a timestamp column and append the derived
/// `month`, `day_of_week` and `start_hour` columns.
///
/// Blank start times stay null in every derived column; anything else that
/// fails to parse is an error naming its 1-based data row.
pub fn with_derived_columns(batch: &RecordBatch) -> Result<RecordBatch, LoadError> {
    let schema = batch.schema();
    let idx = schema
        .index_of(START_TIME)
        .map_err(|_| LoadError::MissingColumn(START_TIME.into()))?;
    let raw = batch
        .column(idx)
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| LoadError::MissingColumn(START_TIME.into()))?;

    let n = batch.num_rows();
    let mut stamps = TimestampSecondBuilder::with_capacity(n);
    let mut months = Int32Builder::with_capacity(n);
    let mut days = StringBuilder::with_capacity(n, n * 8);
    let mut hours = Int32Builder::with_capacity(n);

    for (row, cell) in raw.iter().enumerate() {
        let Some(text) = utils::non_blank(cell) else {
            stamps.append_null();
            months.append_null();
            days.append_null();
            hours.append_null();
            continue;
        };
        let ts = date_parser::parse_start_time(text).ok_or_else(|| LoadError::BadTimestamp {
            row: row + 1,
            value: text.to_string(),
        })?;
        stamps.append_value(ts.and_utc().timestamp());
        months.append_value(ts.month() as i32);
        days.append_value(weekday_name(ts.weekday()));
        hours.append_value(ts.hour() as i32);
    }

    let mut fields: Vec<FieldRef> = schema.fields().iter().cloned().collect();
    let mut columns: Vec<ArrayRef> = batch.columns().to_vec();

    fields[idx] = Arc::new(Field::new(
        START_TIME,
        DataType::Timestamp(TimeUnit::Second, None),
        true,
    ));
    columns[idx] = Arc::new(stamps.finish());

    fields.push(Arc::new(Field::new(MONTH, DataType::Int32, true)));
    columns.push(Arc::new(months.finish()));
    fields.push(Arc::new(Field::new(DAY_OF_WEEK, DataType::Utf8, true)));
    columns.push(Arc::new(days.finish()));
    fields.push(Arc::new(Field::new(START_HOUR, DataType::Int32, true)));
    columns.push(Arc::new(hours.finish()));

    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).map_err(Into::into)
}
