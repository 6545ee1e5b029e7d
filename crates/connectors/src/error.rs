use crate::sql::base::error::DbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// Unsupported driver error.
    #[error("Unsupported driver: {0}")]
    UnsupportedDriver(String),

    /// Missing required property error.
    #[error("Missing required property: {0}")]
    MissingProperty(String),

    /// The driver configuration could not be deserialized.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// Database-related error.
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}
