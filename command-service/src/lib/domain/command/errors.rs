use thiserror::Error;

/// Error for CommandId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for CommandText validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandTextError {
    #[error("Command text must not be empty")]
    Empty,
}

/// Top-level error for command operations
#[derive(Debug, Clone, Error)]
pub enum CommandError {
    #[error("Invalid command ID: {0}")]
    InvalidCommandId(#[from] CommandIdError),

    #[error("Invalid command text: {0}")]
    InvalidText(#[from] CommandTextError),

    #[error("Command not found: {0}")]
    NotFound(String),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
