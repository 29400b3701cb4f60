use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing CSV files: {}", .files.join(", "))]
    MissingInputs { files: Vec<String> },

    #[error("start_days_ago ({start_days_ago}) must be >= end_days_ago ({end_days_ago})")]
    InvalidDateRange {
        start_days_ago: i64,
        end_days_ago: i64,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DatasetResult<T> = Result<T, DatasetError>;
