use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unknown report '{name}'. Available reports: {available}")]
    UnknownReportError { name: String, available: String },

    #[error("No valid input files to process")]
    NoValidFilesError,

    #[error("Data error in record {row}, field '{field}': {message}")]
    DataError {
        row: usize,
        field: String,
        message: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, ReportError>;
