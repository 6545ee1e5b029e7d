use thiserror::Error;

/// All errors coming from the database/query layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DbError {
    /// A link to the requested schema could not be acquired.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The database rejected or failed to run a statement.
    #[error("SQL error: {0}")]
    Sql(String),

    /// The call context was cancelled while the query was in flight.
    #[error("Query cancelled")]
    Cancelled,

    #[error("Unknown error: {0}")]
    Unknown(String),
}
