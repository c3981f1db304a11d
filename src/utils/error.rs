use thiserror::Error;

#[derive(Error, Debug)]
pub enum TradeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Not authenticated")]
    Unauthorized,
}

pub type Result<T> = std::result::Result<T, TradeError>;

/// Failure taxonomy of the remote trade source. The resolver absorbs every
/// variant into the sample fallback, but logs which one it was.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("response has no 'data' collection")]
    MissingData,
}
