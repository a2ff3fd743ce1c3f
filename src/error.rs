use std::io;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to replace '{}': {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },

    #[error("Transaction with ID {0} not found")]
    NotFound(Uuid),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid number of details provided. Expected {expected} but got {got}")]
    FieldCount { expected: usize, got: usize },

    #[error("{0} must be filled out")]
    MissingField(&'static str),

    #[error("Invalid date '{0}'. Please use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid amount '{0}'. Amount must be a valid number")]
    InvalidAmount(String),

    #[error("Invalid transaction type '{0}'. Use 'income' or 'expense'")]
    InvalidType(String),

    #[error("{field} too long (max {max} characters)")]
    TooLong { field: &'static str, max: usize },

    #[error("Invalid transaction ID '{0}'. Please provide a valid UUID")]
    InvalidId(String),

    #[error("Could not read input: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
