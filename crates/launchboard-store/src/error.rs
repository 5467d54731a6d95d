//! Store construction errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Fatal at startup: the launch data source could not be turned into at
/// least one usable record. Individual malformed rows are not errors; they
/// are skipped and counted during construction.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("no usable launch records in source ({skipped} malformed rows skipped)")]
    NoUsableRows { skipped: usize },
}
