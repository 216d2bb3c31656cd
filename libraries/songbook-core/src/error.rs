/// Core error types for Songbook
use thiserror::Error;

/// Result type alias using `SongbookError`
pub type Result<T> = std::result::Result<T, SongbookError>;

/// Core error type for Songbook
#[derive(Error, Debug)]
pub enum SongbookError {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl SongbookError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for SongbookError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
