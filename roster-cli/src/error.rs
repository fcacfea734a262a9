use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Opening or creating the database failed
    #[error("Database error: {0}")]
    Schema(#[from] roster_db::SchemaError),

    /// Roster operation failed
    #[error("Database error: {0}")]
    Operation(#[from] roster_db::OperationError),
}
