use thiserror::Error;

/// Error for TagId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for TagName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagNameError {
    #[error("Tag name must not be empty")]
    Empty,

    #[error("Tag name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for tag operations
#[derive(Debug, Clone, Error)]
pub enum TagError {
    #[error("Invalid tag ID: {0}")]
    InvalidTagId(#[from] TagIdError),

    #[error("Invalid tag name: {0}")]
    InvalidName(#[from] TagNameError),

    #[error("Tag not found: {0}")]
    NotFound(String),

    #[error("Tag name already exists: {0}")]
    NameAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
