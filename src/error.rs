use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadabilityError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Writing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File Watch Error: {0}")]
    Watch(#[from] notify::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Malformed Tree at {path}: {reason}")]
    MalformedTree { path: String, reason: String },
}

pub type ReadResult<T> = Result<T, ReadabilityError>;
