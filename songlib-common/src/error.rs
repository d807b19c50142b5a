//! Common error types for the song library

use thiserror::Error;

/// Common result type for song library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the song library crates
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

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Release date not in `DD.MM.YYYY` form
    #[error("Invalid release date '{0}', expected DD.MM.YYYY")]
    InvalidDate(String),

    /// Update request carried no link, release date or text
    #[error("Can't replace any fields with no info")]
    NoFieldsToUpdate,

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
