// crates/demodash-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading the dataset or interpreting widget input.
#[derive(Debug, Error)]
pub enum DemoError {
    /// The dataset file could not be opened.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be parsed; carries the csv crate's position info.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed, but the content violates a data rule (negative population, empty file...).
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A widget value that does not map onto any known option.
    #[error("Unknown {kind}: {value}")]
    UnknownOption { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, DemoError>;
