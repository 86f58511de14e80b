// src/data/mod.rs
use arrow::{
    compute::concat_batches,
    csv::{reader::Format, ReaderBuilder},
    datatypes::{DataType, Field, Schema, SchemaRef},
    record_batch::RecordBatch,
};
use std::{
    fs::File,
    io::{Seek, SeekFrom},
    path::Path,
    sync::Arc,
};
use tracing::{debug, error};

pub mod convert;
pub mod date_parser;
pub mod error;
pub mod filter;
pub mod registry;
pub mod utils;

pub use error::LoadError;
pub use filter::apply_filters;
pub use registry::CityRegistry;

use crate::filter::FilterSelection;

// ─── source columns ─────────────────────────────────────────────────
pub const START_TIME: &str = "Start Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const USER_TYPE: &str = "User Type";
/// Absent from the Washington export.
pub const GENDER: &str = "Gender";
/// Absent from the Washington export.
pub const BIRTH_YEAR: &str = "Birth Year";

// ─── derived at load time ───────────────────────────────────────────
pub const MONTH: &str = "month";
pub const DAY_OF_WEEK: &str = "day_of_week";
pub const START_HOUR: &str = "start_hour";

pub const REQUIRED_COLUMNS: [&str; 5] =
    [START_TIME, START_STATION, END_STATION, TRIP_DURATION, USER_TYPE];

/// Numeric columns; everything else is read as text.
fn column_type(name: &str) -> DataType {
    match name {
        TRIP_DURATION | BIRTH_YEAR => DataType::Float64,
        _ => DataType::Utf8,
    }
}

/// Header-driven schema: names come from the file, types from `column_type`.
fn trip_schema(file: &mut File) -> Result<SchemaRef, LoadError> {
    let (inferred, _) = Format::default()
        .with_header(true)
        .infer_schema(&mut *file, Some(1))?;
    let fields: Vec<Field> = inferred
        .fields()
        .iter()
        .map(|f| Field::new(f.name(), column_type(f.name()), true))
        .collect();
    Ok(Arc::new(Schema::new(fields)))
}

/// Read one city's CSV into a single batch, with no derived columns.
pub fn read_trip_csv(path: &Path) -> Result<RecordBatch, LoadError> {
    let unreadable = |source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(unreadable)?;

    let schema = trip_schema(&mut file)?;
    for required in REQUIRED_COLUMNS {
        if schema.index_of(required).is_err() {
            return Err(LoadError::MissingColumn(required.to_string()));
        }
    }
    file.seek(SeekFrom::Start(0)).map_err(unreadable)?;

    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .build(file)?;
    let batches = reader.collect::<Result<Vec<_>, _>>()?;
    let batch = concat_batches(&schema, &batches)?;
    debug!(path = %path.display(), rows = batch.num_rows(), "read trips");
    Ok(batch)
}

/// Load the selected city, add `month` / `day_of_week` / `start_hour`, then
/// keep only rows matching the month and day filters.
#[tracing::instrument(
    level = "info",
    skip_all,
    fields(city = %selection.city, month = selection.month.title(), day = selection.day.title())
)]
pub fn load_data(
    registry: &CityRegistry,
    selection: &FilterSelection,
) -> Result<RecordBatch, LoadError> {
    let path = registry.path_for(selection.city);
    let result = read_trip_csv(&path)
        .and_then(|raw| convert::with_derived_columns(&raw))
        .and_then(|table| apply_filters(&table, selection.month, selection.day));
    if let Err(e) = &result {
        error!(path = %path.display(), error = %e, "load failed");
    }
    result
}
