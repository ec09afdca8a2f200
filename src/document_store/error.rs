use std::fmt;

/// Result type for document store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for document store operations
#[derive(Debug)]
pub enum Error {
    /// Validation error - invalid connection string or input data
    Validation(String),

    /// Connection error - pool construction or configuration failure
    Connection(String),

    /// Storage error - database unreachable, SQL failure, or write failure
    Storage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
            Error::Connection(msg) => write!(f, "Connection error: {}", msg),
            Error::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Convert tokio-postgres errors to store errors
impl From<tokio_postgres::Error> for Error {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_error) = err.as_db_error() {
            // Surface the SQLSTATE code alongside the message
            return Error::Storage(format!(
                "{}: {}",
                db_error.code().code(),
                db_error.message()
            ));
        }

        Error::Storage(err.to_string())
    }
}

/// Convert pool checkout errors to store errors
impl From<deadpool_postgres::PoolError> for Error {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Error::Storage(format!("connection pool: {}", err))
    }
}

/// Convert pool build errors to store errors
impl From<deadpool_postgres::BuildError> for Error {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        Error::Connection(err.to_string())
    }
}
