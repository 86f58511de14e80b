use arrow::error::ArrowError;
use std::path::PathBuf;

/// Why a city's trips could not be turned into a table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("unknown city {0:?}")]
    UnknownCity(String),

    #[error("cannot read {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("required column {0:?} is missing")]
    MissingColumn(String),

    #[error("row {row}: cannot parse start time {value:?}")]
    BadTimestamp { row: usize, value: String },

    #[error(transparent)]
    Arrow(#[from] ArrowError),
}
