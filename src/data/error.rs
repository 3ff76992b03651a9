use thiserror::Error;

/// Failure while building a store from its input. No partial dataset is kept.
#[derive(Debug, Error)]
pub enum DatasetLoadError {
    #[error("could not read dataset")]
    Io(#[from] std::io::Error),

    #[error("could not read dataset at line {line}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("line {line}: expected 6 fields, found {found}")]
    FieldCount { line: u64, found: usize },

    #[error("line {line}: invalid {field} '{value}': {reason}")]
    InvalidField {
        line: u64,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("could not parse JSON dataset")]
    Json(#[from] serde_json::Error),

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

/// Failure of a single query against a loaded store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),
}
