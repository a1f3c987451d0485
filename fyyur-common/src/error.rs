//! Common error types for Fyyur

use thiserror::Error;

/// Common result type for Fyyur operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the library and the web service
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid form input or stored value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// True when the error came from a violated foreign key constraint
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            Error::Database(sqlx::Error::Database(db_err)) => {
                db_err.message().contains("FOREIGN KEY constraint failed")
            }
            _ => false,
        }
    }
}
